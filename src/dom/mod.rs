// ============================================================================
// DOM MODULE - web-sys helpers
// ============================================================================

pub mod browser;
pub mod element;
pub mod events;

pub use browser::*;
pub use element::*;
pub use events::*;
