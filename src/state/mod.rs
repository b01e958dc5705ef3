//! Session state: value types plus the mutable session record.

pub mod session;
pub mod types;

pub use session::{MAX_TEXT_CHARS, SessionState, truncate_to_limit};
pub use types::{
    Detection, Phase, SessionEvent, TextUpdate, TranslationRequest, TranslationResult,
};
