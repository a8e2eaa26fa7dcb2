// ============================================================================
// ERRORS - Everything a controller can run into, grouped by how it is shown
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("username or password is empty")]
    MissingCredentials,

    #[error("server rejected the credentials")]
    InvalidCredentials,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Auth,
    Transport,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::MissingCredentials => ErrorKind::Validation,
            ClientError::InvalidCredentials => ErrorKind::Auth,
            ClientError::Network(_) | ClientError::Http { .. } | ClientError::Parse(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// Text shown in the login error banner
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => "Please enter both username and password",
            ErrorKind::Auth => "Invalid username or password",
            ErrorKind::Transport => "Login failed. Please try again.",
        }
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_variants_share_one_message() {
        let errors = [
            ClientError::Network("offline".into()),
            ClientError::Http { status: 502, status_text: "Bad Gateway".into() },
            ClientError::Parse("expected value".into()),
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::Transport);
            assert_eq!(err.user_message(), "Login failed. Please try again.");
        }
    }

    #[test]
    fn validation_and_auth_messages() {
        assert_eq!(
            ClientError::MissingCredentials.user_message(),
            "Please enter both username and password"
        );
        assert_eq!(
            ClientError::InvalidCredentials.user_message(),
            "Invalid username or password"
        );
    }

    #[test]
    fn parse_errors_convert_from_serde() {
        let err: ClientError = serde_json::from_str::<Vec<u8>>("<html>").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
