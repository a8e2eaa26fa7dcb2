// ============================================================================
// LOGIN VIEWMODEL - Validation, request building, response classification
// ============================================================================

use crate::error::ClientError;
use crate::models::{Credentials, LoginOutcome, LoginRequest, LoginResponse};
use crate::viewmodels::error_banner::{DismissToken, ErrorBanner};

/// Substrings whose presence in a non-redirected body means the login failed.
///
/// FIXME: fragile. Any page text containing these words (a restaurant called
/// "Error Bistro") is read as a failure. Replace once the login endpoint
/// returns a structured status.
const FAILURE_SENTINELS: [&str; 2] = ["error", "invalid"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginViewModel {
    banner: ErrorBanner,
    landing_path: String,
}

impl LoginViewModel {
    pub fn new(landing_path: impl Into<String>) -> Self {
        Self {
            banner: ErrorBanner::new(),
            landing_path: landing_path.into(),
        }
    }

    /// Validate the raw form values and build the request to send
    pub fn prepare(
        &self,
        username: &str,
        password: &str,
        csrf_token: Option<String>,
    ) -> Result<LoginRequest, ClientError> {
        let credentials = Credentials::from_inputs(username, password)?;
        Ok(LoginRequest::new(credentials, csrf_token))
    }

    /// Turn the result of the POST into what the page should do next
    pub fn resolve(&self, result: Result<LoginResponse, ClientError>) -> LoginOutcome {
        match result {
            Ok(response) => classify_login_response(&response, &self.landing_path),
            Err(err) => LoginOutcome::ShowError(err),
        }
    }

    pub fn show_error(&mut self, error: &ClientError) -> DismissToken {
        self.banner.show(error.user_message())
    }

    pub fn dismiss_error(&mut self, token: DismissToken) -> bool {
        self.banner.dismiss(token)
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }
}

pub fn classify_login_response(response: &LoginResponse, landing_path: &str) -> LoginOutcome {
    if response.redirected {
        return LoginOutcome::Navigate(response.url.clone());
    }

    match response.body.as_deref() {
        None | Some("") => LoginOutcome::NoChange,
        Some(body) if FAILURE_SENTINELS.iter().any(|s| body.contains(s)) => {
            LoginOutcome::ShowError(ClientError::InvalidCredentials)
        }
        Some(_) => LoginOutcome::Navigate(landing_path.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm() -> LoginViewModel {
        LoginViewModel::new("/restaurants/")
    }

    fn page(body: &str) -> LoginResponse {
        LoginResponse {
            status: 200,
            redirected: false,
            url: "http://shop.test/login/".into(),
            body: Some(body.into()),
        }
    }

    #[test]
    fn empty_field_never_builds_a_request() {
        assert_eq!(
            vm().prepare("", "pw", Some("tok".into())),
            Err(ClientError::MissingCredentials)
        );
        assert_eq!(
            vm().prepare("alice", "  ", None),
            Err(ClientError::MissingCredentials)
        );
    }

    #[test]
    fn validation_error_shows_message() {
        let mut vm = vm();
        let err = vm.prepare(" ", "pw", None).unwrap_err();
        vm.show_error(&err);
        assert_eq!(
            vm.banner().message(),
            Some("Please enter both username and password")
        );
    }

    #[test]
    fn valid_input_carries_csrf_token() {
        let request = vm().prepare(" alice ", "pw", Some("tok".into())).unwrap();
        assert_eq!(request.credentials.username, "alice");
        assert_eq!(request.csrf_token, "tok");
    }

    #[test]
    fn redirect_navigates_to_exact_target() {
        let response = LoginResponse {
            status: 200,
            redirected: true,
            url: "http://shop.test/owner/3/dashboard/".into(),
            body: None,
        };
        assert_eq!(
            vm().resolve(Ok(response)),
            LoginOutcome::Navigate("http://shop.test/owner/3/dashboard/".into())
        );
    }

    #[test]
    fn invalid_in_body_shows_auth_error_without_navigating() {
        let outcome = vm().resolve(Ok(page("<p>invalid login</p>")));
        assert_eq!(outcome, LoginOutcome::ShowError(ClientError::InvalidCredentials));
    }

    #[test]
    fn error_in_body_shows_auth_error() {
        let outcome = vm().resolve(Ok(page(r#"<div class="alert error">nope</div>"#)));
        assert_eq!(outcome, LoginOutcome::ShowError(ClientError::InvalidCredentials));
    }

    #[test]
    fn sentinels_are_case_sensitive() {
        let outcome = vm().resolve(Ok(page("Invalid ERROR")));
        assert_eq!(outcome, LoginOutcome::Navigate("/restaurants/".into()));
    }

    #[test]
    fn clean_body_goes_to_landing_page() {
        let outcome = vm().resolve(Ok(page("<html>welcome</html>")));
        assert_eq!(outcome, LoginOutcome::Navigate("/restaurants/".into()));
    }

    #[test]
    fn empty_body_changes_nothing() {
        assert_eq!(vm().resolve(Ok(page(""))), LoginOutcome::NoChange);
    }

    #[test]
    fn transport_failure_shows_retry_message() {
        let mut vm = vm();
        let outcome = vm.resolve(Err(ClientError::Network("offline".into())));
        let LoginOutcome::ShowError(err) = outcome else {
            panic!("expected an error outcome");
        };
        vm.show_error(&err);
        assert_eq!(vm.banner().message(), Some("Login failed. Please try again."));
    }

    #[test]
    fn second_error_restarts_dismissal() {
        let mut vm = vm();
        let first = vm.show_error(&ClientError::MissingCredentials);
        let second = vm.show_error(&ClientError::InvalidCredentials);

        assert!(!vm.dismiss_error(first));
        assert_eq!(vm.banner().message(), Some("Invalid username or password"));
        assert!(vm.dismiss_error(second));
        assert_eq!(vm.banner().message(), None);
    }
}
