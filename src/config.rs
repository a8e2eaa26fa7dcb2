// ============================================================================
// CONFIG - Build-time configuration (option_env!, see build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_RESTAURANTS_ENDPOINT: &str = "/api/restaurants/";
const DEFAULT_LOGIN_LANDING_PATH: &str = "/restaurants/";
const DEFAULT_MENU_PATH_TEMPLATE: &str = "/restaurant/{id}/menu/";
const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
const DEFAULT_ERROR_DISPLAY_MS: u32 = 5_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Prefix for API calls. Empty means "same origin as the page".
    pub api_base_url: String,
    pub restaurants_endpoint: String,
    pub login_landing_path: String,
    pub menu_path_template: String,
    pub csrf_cookie_name: String,
    pub error_display_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            restaurants_endpoint: DEFAULT_RESTAURANTS_ENDPOINT.to_string(),
            login_landing_path: DEFAULT_LOGIN_LANDING_PATH.to_string(),
            menu_path_template: DEFAULT_MENU_PATH_TEMPLATE.to_string(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_string(),
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Reads the values baked in at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("RESTAURANTS_ENDPOINT"),
            option_env!("LOGIN_LANDING_PATH"),
            option_env!("MENU_PATH_TEMPLATE"),
            option_env!("CSRF_COOKIE_NAME"),
            option_env!("ERROR_DISPLAY_MS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        restaurants_endpoint: Option<&str>,
        login_landing_path: Option<&str>,
        menu_path_template: Option<&str>,
        csrf_cookie_name: Option<&str>,
        error_display_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let non_empty = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            api_base_url: api_base_url
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            restaurants_endpoint: non_empty(restaurants_endpoint, defaults.restaurants_endpoint),
            login_landing_path: non_empty(login_landing_path, defaults.login_landing_path),
            menu_path_template: non_empty(menu_path_template, defaults.menu_path_template),
            csrf_cookie_name: non_empty(csrf_cookie_name, defaults.csrf_cookie_name),
            error_display_ms: error_display_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.error_display_ms),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Full URL of the restaurant listing endpoint, without query string
    pub fn restaurants_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.restaurants_endpoint)
    }

    /// Menu page for one restaurant
    pub fn menu_path(&self, restaurant_id: i64) -> String {
        self.menu_path_template.replace("{id}", &restaurant_id.to_string())
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.restaurants_url(), "/api/restaurants/");
        assert_eq!(config.error_display_ms, 5_000);
    }

    #[test]
    fn unparseable_numbers_and_flags_fall_back() {
        let config = AppConfig::from_values(
            None,
            Some("   "),
            None,
            None,
            None,
            Some("soon"),
            Some("maybe"),
        );
        assert_eq!(config.restaurants_endpoint, "/api/restaurants/");
        assert_eq!(config.error_display_ms, 5_000);
        assert!(config.enable_logging);
    }

    #[test]
    fn base_url_is_joined_without_double_slash() {
        let config = AppConfig::from_values(
            Some("http://localhost:8000/"),
            None,
            None,
            None,
            None,
            Some("2500"),
            Some("false"),
        );
        assert_eq!(config.restaurants_url(), "http://localhost:8000/api/restaurants/");
        assert_eq!(config.error_display_ms, 2_500);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn menu_path_substitutes_id() {
        let config = AppConfig::default();
        assert_eq!(config.menu_path(42), "/restaurant/42/menu/");
    }
}
