//! Core value types used by session state.

use serde::Serialize;

use crate::error::SessionError;
use crate::languages::LanguageCode;

/// One translation cycle handed to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Monotonic identifier used to correlate the response with its cycle.
    pub generation: u64,
    /// Text to translate; never empty.
    pub text: String,
    /// Requested source language, possibly the auto-detect sentinel.
    pub source: LanguageCode,
    /// Requested target language; never the auto-detect sentinel.
    pub target: LanguageCode,
}

/// Backend answer for a [`TranslationRequest`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    /// Translated text.
    pub translated_text: String,
    /// Language the backend translated from. Equals the requested source
    /// unless that was auto-detect.
    pub resolved_source: LanguageCode,
}

/// Source language detected by a cycle that ran with auto-detect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detection {
    /// Cycle that produced the detection.
    pub generation: u64,
    /// Detected language; never the sentinel.
    pub code: LanguageCode,
}

/// Scheduler lifecycle for the current cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No text, nothing scheduled.
    Idle,
    /// Debounce timer running.
    Pending,
    /// Backend call issued for the current generation.
    InFlight,
    /// Current generation produced a result.
    Resolved,
    /// Current generation's backend call failed.
    Failed,
}

/// Outcome of applying a text edit.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextUpdate {
    /// Text stored as given.
    Applied,
    /// Text exceeded the limit and was cut down before being stored.
    Truncated {
        /// Character count as submitted.
        length: usize,
        /// Limit the text was cut to.
        limit: usize,
    },
}

/// Notification sent to the presentation layer.
#[derive(Debug)]
pub enum SessionEvent {
    /// Debounce elapsed and a backend call was issued.
    Loading {
        /// Generation of the issued call.
        generation: u64,
    },
    /// A current result was applied.
    Translated {
        /// Generation whose result was applied.
        generation: u64,
    },
    /// Text became empty; result and detection were dropped.
    Cleared,
    /// Non-fatal problem scoped to one edit or cycle
    /// (`InputTooLong` or `Backend`).
    Notice(SessionError),
}
