// ============================================================================
// VIEWS - Markup from data (pure) and application of display state (DOM)
// ============================================================================

pub mod legacy_list;
pub mod login_view;
pub mod markup;
pub mod restaurant_card;
pub mod search_view;

pub use legacy_list::render_legacy_items;
pub use login_view::render_error_banner;
pub use markup::escape_html;
pub use restaurant_card::{render_restaurant_card, render_restaurant_cards};
pub use search_view::{render_search, SearchElements};
