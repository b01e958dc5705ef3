//! The mutable record behind one translation session.

use crate::languages::{self, AUTO_DETECT, LanguageCode};
use crate::state::types::{Detection, TranslationResult};

/// Maximum number of characters accepted for a single translation.
pub const MAX_TEXT_CHARS: usize = 5000;

/// What: Current text, language selection, and accepted result of a session.
///
/// Details:
/// - `target` is never the auto-detect sentinel.
/// - `text` never exceeds [`MAX_TEXT_CHARS`] characters.
/// - `is_loading`, `result` and `detected` are written only by the request
///   scheduler; everyone else reads them through the accessors.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Input text.
    text: String,
    /// Selected source language (may be auto-detect).
    source: LanguageCode,
    /// Selected target language.
    target: LanguageCode,
    /// A backend call for the current cycle is outstanding.
    is_loading: bool,
    /// Last accepted result.
    result: Option<TranslationResult>,
    /// Language detected by the last accepted result; `None` when that result
    /// came from an explicit source or an unrecognized detection.
    detected: Option<Detection>,
}

impl SessionState {
    /// What: Create the state for a new session.
    ///
    /// Inputs:
    /// - `source`: Initial source language (auto-detect allowed)
    /// - `target`: Initial target language (must not be auto-detect)
    ///
    /// Output:
    /// - Empty-text state with no result.
    #[must_use]
    pub const fn new(source: LanguageCode, target: LanguageCode) -> Self {
        Self {
            text: String::new(),
            source,
            target,
            is_loading: false,
            result: None,
            detected: None,
        }
    }

    /// Current input text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selected source language, possibly the sentinel.
    #[must_use]
    pub const fn source(&self) -> LanguageCode {
        self.source
    }

    /// Selected target language.
    #[must_use]
    pub const fn target(&self) -> LanguageCode {
        self.target
    }

    /// Whether a backend call for the current cycle is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Last accepted result.
    #[must_use]
    pub const fn result(&self) -> Option<&TranslationResult> {
        self.result.as_ref()
    }

    /// Translated text of the last accepted result, empty when there is none.
    #[must_use]
    pub fn translated_text(&self) -> &str {
        self.result
            .as_ref()
            .map_or("", |r| r.translated_text.as_str())
    }

    /// Last auto-detection, if the source is auto-detect.
    #[must_use]
    pub fn detected(&self) -> Option<Detection> {
        if self.source.is_auto() {
            self.detected
        } else {
            None
        }
    }

    /// What: Source language to display.
    ///
    /// Output:
    /// - The detected language while auto-detect is selected and a detection
    ///   exists, otherwise the selected source.
    ///
    /// Details:
    /// - Display-only; the sentinel stays selected so later edits keep
    ///   re-detecting.
    #[must_use]
    pub fn effective_source(&self) -> LanguageCode {
        self.detected().map_or(self.source, |d| d.code)
    }

    /// Label for the source selector, e.g. `"French (Auto-detect)"`.
    #[must_use]
    pub fn source_label(&self) -> String {
        match self.detected() {
            Some(d) => format!("{} (Auto-detect)", languages::entry(d.code).name),
            None => languages::entry(self.source).name.to_string(),
        }
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Select a source; any detection belongs to the previous selection.
    pub(crate) const fn set_source(&mut self, code: LanguageCode) {
        self.source = code;
        self.detected = None;
    }

    /// Callers guarantee `code` is not the sentinel.
    pub(crate) fn set_target(&mut self, code: LanguageCode) {
        debug_assert!(!code.is_auto(), "target must not be auto-detect");
        self.target = code;
    }

    pub(crate) const fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Accept a result for `generation`. The detection is replaced every
    /// time: it is set only when the request ran with auto-detect and the
    /// backend named a catalog language.
    pub(crate) fn accept_result(
        &mut self,
        generation: u64,
        requested_source: LanguageCode,
        result: TranslationResult,
    ) {
        self.detected = (requested_source == AUTO_DETECT && !result.resolved_source.is_auto())
            .then_some(Detection {
                generation,
                code: result.resolved_source,
            });
        self.result = Some(result);
        self.is_loading = false;
    }

    /// Drop result and detection, e.g. when the text becomes empty.
    pub(crate) fn clear_result(&mut self) {
        self.result = None;
        self.detected = None;
        self.is_loading = false;
    }
}

/// What: Cut `text` down to [`MAX_TEXT_CHARS`] characters.
///
/// Inputs:
/// - `text`: Text as submitted
///
/// Output:
/// - `(text, Some(original_len))` when truncated, `(text, None)` otherwise.
///
/// Details:
/// - Counts Unicode scalar values and cuts on a char boundary.
#[must_use]
pub fn truncate_to_limit(mut text: String) -> (String, Option<usize>) {
    match text.char_indices().nth(MAX_TEXT_CHARS) {
        Some((byte_idx, _)) => {
            let length = text.chars().count();
            text.truncate(byte_idx);
            (text, Some(length))
        }
        None => (text, None),
    }
}
