use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::Result;
use crate::error::SessionError;
use crate::languages::LanguageCode;
use crate::session::{Session, SessionConfig};
use crate::sources::TranslateClient;
use crate::state::SessionEvent;

/// Printed result of `--text` (also the `--json` shape).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OneShotOutput {
    /// Text that was sent, after truncation.
    pub text: String,
    /// Selected source language.
    pub source: LanguageCode,
    /// Language the backend detected, when the source was auto-detect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source: Option<LanguageCode>,
    /// Target language.
    pub target: LanguageCode,
    /// Translated text.
    pub translation: String,
}

/// What: Translate one text through a throwaway session.
///
/// Inputs:
/// - `config`: Languages (the debounce window is ignored)
/// - `client`: Backend
/// - `text`: Text to translate
///
/// Output:
/// - The settled result.
///
/// # Errors
/// - The backend failure reported for the cycle.
///
/// Details:
/// - Over-long input is truncated with a warning on stderr, like an edit.
pub async fn translate_once(
    config: SessionConfig,
    client: Arc<dyn TranslateClient>,
    text: String,
) -> Result<OneShotOutput> {
    let (mut session, mut events) = Session::new(config.with_debounce(Duration::ZERO), client);
    let _ = session.on_text_changed(text);
    session.settle().await;

    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::Notice(SessionError::Backend(err)) => return Err(err.into()),
            SessionEvent::Notice(notice) => eprintln!("warning: {notice}"),
            SessionEvent::Loading { .. } | SessionEvent::Translated { .. } | SessionEvent::Cleared => {}
        }
    }

    let source = session.source_language();
    Ok(OneShotOutput {
        text: session.text().to_string(),
        source,
        detected_source: source
            .is_auto()
            .then(|| session.effective_source_language())
            .filter(|code| !code.is_auto()),
        target: session.target_language(),
        translation: session.translated_text().to_string(),
    })
}
