// Element ids rendered by the server templates

pub const LOGIN_FORM_ID: &str = "loginForm";
pub const USERNAME_INPUT_ID: &str = "emailInput";
pub const PASSWORD_INPUT_ID: &str = "passwordInput";
pub const ERROR_MESSAGE_ID: &str = "error-message";

pub const SEARCH_FORM_ID: &str = "searchForm";
pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const LOCATION_INPUT_ID: &str = "locationInput";
pub const CUISINE_SELECT_ID: &str = "cuisineSelect";
pub const RESTAURANT_GRID_ID: &str = "restaurant-grid";
pub const LOADING_ID: &str = "loading";
pub const NO_RESULTS_ID: &str = "no-results";

/// Old standalone listing page
pub const LEGACY_LIST_ID: &str = "restaurant-list";

/// Attribute carried by every favorite button in the grid
pub const FAVORITE_ID_ATTR: &str = "data-favorite-id";

/// Header that tells the server the request did not come from a page navigation
pub const REQUESTED_WITH_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");
