pub mod auth;
pub mod restaurant;
pub mod search;

pub use auth::{Credentials, LoginOutcome, LoginRequest, LoginResponse};
pub use restaurant::Restaurant;
pub use search::SearchFilters;
