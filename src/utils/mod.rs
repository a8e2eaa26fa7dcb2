// Shared helpers: element ids, cookie lookup

pub mod constants;
pub mod cookies;

pub use constants::*;
pub use cookies::*;
