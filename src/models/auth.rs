use std::fmt;

use crate::error::ClientError;

/// Username/password pair read from the login form at submit time.
/// Dropped once the request has been built; never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    /// Trim both fields; either one empty is a validation error
    pub fn from_inputs(username: &str, password: &str) -> Result<Self, ClientError> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(ClientError::MissingCredentials);
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Form post sent to the login page itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub credentials: Credentials,
    /// Value of the anti-forgery cookie, empty when the cookie is missing
    pub csrf_token: String,
}

impl LoginRequest {
    pub fn new(credentials: Credentials, csrf_token: Option<String>) -> Self {
        Self {
            credentials,
            csrf_token: csrf_token.unwrap_or_default(),
        }
    }

    /// `application/x-www-form-urlencoded` body
    pub fn form_body(&self) -> String {
        [
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
            ("csrfmiddlewaretoken", self.csrf_token.as_str()),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// What the controller kept from the HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: u16,
    /// The browser followed a redirect issued by the server
    pub redirected: bool,
    /// Final URL after redirects
    pub url: String,
    /// Only read when the response was not redirected
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Navigate(String),
    ShowError(ClientError),
    /// Non-redirected response with an empty body
    NoChange,
}
