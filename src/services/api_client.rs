// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No UI logic here: requests go out, typed results come back
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};

use crate::config::{AppConfig, CONFIG};
use crate::error::ClientError;
use crate::models::{LoginRequest, LoginResponse, Restaurant, SearchFilters};
use crate::utils::REQUESTED_WITH_HEADER;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Listing GETs stay simple requests: no custom headers
const LISTING_HEADERS: &[(&str, &str)] = &[];

const LOGIN_HEADERS: &[(&str, &str)] = &[
    REQUESTED_WITH_HEADER,
    ("Content-Type", FORM_CONTENT_TYPE),
];

fn with_headers(builder: RequestBuilder, headers: &[(&str, &str)]) -> RequestBuilder {
    headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name, value))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    restaurants_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            restaurants_url: config.restaurants_url(),
        }
    }

    /// Listing URL with the present filters as query parameters
    pub fn restaurants_url(&self, filters: &SearchFilters) -> String {
        filters.apply_to(&self.restaurants_url)
    }

    /// GET the listing endpoint
    pub async fn list_restaurants(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<Restaurant>, ClientError> {
        let url = self.restaurants_url(filters);
        log::debug!("🌐 [API] GET {}", url);

        let response = with_headers(Request::get(&url), LISTING_HEADERS)
            .send()
            .await?;

        if !response.ok() {
            return Err(ClientError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response.text().await?;
        let restaurants: Vec<Restaurant> = serde_json::from_str(&body)?;
        log::debug!("✅ [API] {} restaurants received", restaurants.len());
        Ok(restaurants)
    }

    /// POST the login form to `page_url` (the login page itself).
    ///
    /// The HTTP status is not treated as an error: the server answers a failed
    /// login by re-rendering the page, which the view-model classifies.
    pub async fn submit_login(
        &self,
        page_url: &str,
        request: &LoginRequest,
    ) -> Result<LoginResponse, ClientError> {
        log::info!("🔐 [API] Login attempt for user: {}", request.credentials.username);

        let response = with_headers(Request::post(page_url), LOGIN_HEADERS)
            .body(request.form_body())?
            .send()
            .await?;

        let redirected = response.redirected();
        let body = if redirected {
            None
        } else {
            Some(response.text().await?)
        };

        Ok(LoginResponse {
            status: response.status(),
            redirected,
            url: response.url(),
            body,
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
