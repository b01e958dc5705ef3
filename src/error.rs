//! Error taxonomy for translation sessions.
//!
//! Validation errors are returned synchronously and leave the session
//! untouched. Backend failures and input truncation never propagate out of
//! the edit path; they reach the caller as [`crate::state::SessionEvent`]s.

use std::fmt;

/// What: Failure reported by a [`crate::sources::TranslateClient`].
///
/// Inputs: Produced by backend implementations and by the scheduler when a
/// call task dies.
///
/// Output: Implements `Display`/`Error`; the session only distinguishes
/// "failed" from "succeeded".
#[derive(Debug)]
pub enum BackendError {
    /// Transport-level failure while talking to the backend.
    Request(reqwest::Error),
    /// Backend answered with a non-success HTTP status.
    Status {
        /// HTTP status code.
        code: u16,
    },
    /// Backend answered, but the body did not have the expected shape.
    Malformed(String),
    /// The call task panicked or was cancelled before producing a result.
    Aborted,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "request failed: {err}"),
            Self::Status { code } => write!(f, "backend returned HTTP {code}"),
            Self::Malformed(detail) => write!(f, "unexpected backend response: {detail}"),
            Self::Aborted => write!(f, "translation call aborted"),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Status { .. } | Self::Malformed(_) | Self::Aborted => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value)
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}

/// What: Every failure a translation session can report.
///
/// Details:
/// - `UnknownLanguage`, `InvalidTarget` and `NoDetectionYet` are validation
///   errors returned from the selection operations.
/// - `InputTooLong` and `Backend` are notifications; the session keeps running.
#[derive(Debug)]
pub enum SessionError {
    /// Input exceeded the character limit and was truncated to it.
    InputTooLong {
        /// Character count of the text as submitted.
        length: usize,
        /// Character limit the text was cut down to.
        limit: usize,
    },
    /// Code is not part of the language catalog.
    UnknownLanguage {
        /// The rejected code as given by the caller.
        code: String,
    },
    /// The auto-detect sentinel cannot be used as a target language.
    InvalidTarget,
    /// Swap needs a detected source language, and none is available yet.
    NoDetectionYet,
    /// The translation backend failed for the current request cycle.
    Backend(BackendError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooLong { length, limit } => write!(
                f,
                "max length ({limit} chars) for a single translation exceeded ({length} given)"
            ),
            Self::UnknownLanguage { code } => write!(f, "unknown language code \"{code}\""),
            Self::InvalidTarget => write!(f, "auto-detect cannot be used as the target language"),
            Self::NoDetectionYet => {
                write!(f, "source language has not been detected yet")
            }
            Self::Backend(err) => write!(f, "translation failed: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::InputTooLong { .. }
            | Self::UnknownLanguage { .. }
            | Self::InvalidTarget
            | Self::NoDetectionYet => None,
        }
    }
}

impl From<BackendError> for SessionError {
    fn from(value: BackendError) -> Self {
        Self::Backend(value)
    }
}
