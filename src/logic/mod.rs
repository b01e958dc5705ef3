//! Pure state transitions for text edits and language selection.

pub mod input;
pub mod selection;

pub use input::apply_text_change;
pub use selection::{set_source, set_target, swap};
