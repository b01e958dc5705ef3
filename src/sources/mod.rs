//! Translation backends.
//!
//! The session treats a backend as an opaque async function; implementations
//! own their own timeouts.

use futures::future::BoxFuture;

use crate::error::BackendError;
use crate::languages::LanguageCode;
use crate::state::TranslationResult;

mod google;

pub use google::{DEFAULT_ENDPOINT, GoogleTranslateClient, parse_response, web_url};

/// What: Async translation capability used by the request scheduler.
///
/// Inputs:
/// - `text`: Non-empty text to translate
/// - `source`: Requested source language, possibly auto-detect
/// - `target`: Target language (never auto-detect)
///
/// Output:
/// - `TranslationResult` whose `resolved_source` is the detected language for
///   auto-detect requests and the requested source otherwise.
///
/// Details:
/// - Calls may overlap; the scheduler decides which result is kept.
pub trait TranslateClient: Send + Sync {
    /// Translate `text` from `source` to `target`.
    fn translate(
        &self,
        text: String,
        source: LanguageCode,
        target: LanguageCode,
    ) -> BoxFuture<'_, Result<TranslationResult, BackendError>>;
}
