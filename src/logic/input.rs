//! Applying text edits to the session.

use crate::state::{MAX_TEXT_CHARS, SessionState, TextUpdate, truncate_to_limit};

/// What: Store an edited text, enforcing the character limit.
///
/// Inputs:
/// - `state`: Session state to update
/// - `text`: Full text as edited by the user
///
/// Output:
/// - `TextUpdate::Applied`, or `TextUpdate::Truncated` when the text was cut
///   to [`MAX_TEXT_CHARS`] characters.
///
/// Details:
/// - The truncated text is always stored; truncation is never an error that
///   rejects the edit.
pub fn apply_text_change(state: &mut SessionState, text: String) -> TextUpdate {
    let (text, cut_from) = truncate_to_limit(text);
    state.set_text(text);
    match cut_from {
        Some(length) => {
            tracing::info!(length, limit = MAX_TEXT_CHARS, "[Input] Text truncated");
            TextUpdate::Truncated {
                length,
                limit: MAX_TEXT_CHARS,
            }
        }
        None => TextUpdate::Applied,
    }
}
