// ============================================================================
// STATE MODULE - Rc<RefCell> cells with change notification
// ============================================================================

pub mod reactivity;
pub mod request_sequence;
pub mod ui_state;

pub use reactivity::*;
pub use request_sequence::*;
pub use ui_state::*;
