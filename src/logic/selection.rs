//! Language selection: explicit source/target choice and swapping.
//!
//! These functions only validate and mutate the language fields; the caller
//! asks the scheduler to reconsider afterwards.

use crate::error::SessionError;
use crate::languages;
use crate::state::SessionState;

/// What: Select a new source language.
///
/// Inputs:
/// - `state`: Session state to update
/// - `code`: Catalog code; the auto-detect sentinel is allowed
///
/// Output:
/// - `Ok(())` after replacing the source.
///
/// # Errors
/// - `UnknownLanguage` when `code` is not in the catalog; state untouched.
pub fn set_source(state: &mut SessionState, code: &str) -> Result<(), SessionError> {
    let entry = languages::by_code(code)?;
    state.set_source(entry.code);
    Ok(())
}

/// What: Select a new target language.
///
/// Inputs:
/// - `state`: Session state to update
/// - `code`: Catalog code other than the auto-detect sentinel
///
/// Output:
/// - `Ok(())` after replacing the target.
///
/// # Errors
/// - `UnknownLanguage` when `code` is not in the catalog.
/// - `InvalidTarget` when `code` is the auto-detect sentinel.
///
/// Details:
/// - On error the state is left unchanged.
pub fn set_target(state: &mut SessionState, code: &str) -> Result<(), SessionError> {
    let entry = languages::by_code(code)?;
    if entry.code.is_auto() {
        return Err(SessionError::InvalidTarget);
    }
    state.set_target(entry.code);
    Ok(())
}

/// What: Exchange source and target languages.
///
/// Inputs:
/// - `state`: Session state to update
/// - `current_generation`: Token of the scheduler's most recent cycle
///
/// Output:
/// - `Ok(())` after swapping.
///
/// # Errors
/// - `NoDetectionYet` when the source is auto-detect and the most recent
///   cycle has not produced a detection (never ran, still pending or in
///   flight, or failed). State is left unchanged.
///
/// Details:
/// - With an explicit source the two codes are exchanged.
/// - With auto-detect the detected language becomes the target, so the
///   sentinel never lands in the target slot.
pub fn swap(state: &mut SessionState, current_generation: u64) -> Result<(), SessionError> {
    let new_target = if state.source().is_auto() {
        match state.detected() {
            Some(detection) if detection.generation == current_generation => detection.code,
            _ => return Err(SessionError::NoDetectionYet),
        }
    } else {
        state.source()
    };
    let new_source = state.target();
    state.set_source(new_source);
    state.set_target(new_target);
    Ok(())
}
