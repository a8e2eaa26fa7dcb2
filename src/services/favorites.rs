// ============================================================================
// FAVORITES - Capability invoked by the grid's Favorite buttons
// ============================================================================

/// Receives favorite toggles from the search grid
pub trait FavoriteHandler {
    fn toggle_favorite(&self, restaurant_id: i64);
}

/// Records the target id in the console; nothing is persisted yet
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingFavorites;

impl FavoriteHandler for LoggingFavorites {
    fn toggle_favorite(&self, restaurant_id: i64) {
        log::info!("❤️ [FAVORITE] Toggle favorite for restaurant: {}", restaurant_id);
    }
}

/// Restaurant id from a button's `data-favorite-id` value
pub fn parse_favorite_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}
