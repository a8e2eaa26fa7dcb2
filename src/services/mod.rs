pub mod api_client;
pub mod favorites;

pub use api_client::ApiClient;
pub use favorites::{parse_favorite_id, FavoriteHandler, LoggingFavorites};
