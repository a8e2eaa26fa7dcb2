// ============================================================================
// CONTROLLERS - One per page; each owns its own elements
// ============================================================================

pub mod legacy;
pub mod login;
pub mod search;

pub use login::LoginController;
pub use search::SearchController;
