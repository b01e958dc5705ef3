//! Consumer-facing translation session.
//!
//! A [`Session`] owns the session state and its request scheduler. Edits and
//! language changes are plain method calls; the owner drives asynchronous
//! progress by awaiting [`Session::tick`] (e.g. inside a `select!` loop) or
//! [`Session::settle`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::SessionError;
use crate::languages::{self, AUTO_DETECT, DEFAULT_TARGET, LanguageCode, LanguageEntry};
use crate::logic;
use crate::scheduler::{DEFAULT_DEBOUNCE, RequestScheduler};
use crate::sources::{TranslateClient, web_url};
use crate::state::{Phase, SessionEvent, SessionState, TextUpdate, TranslationResult};

/// What: Explicit configuration for a new session.
///
/// Details:
/// - Built only through [`SessionConfig::new`] or `Default`, so the target is
///   never the auto-detect sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial source language (auto-detect allowed).
    source: LanguageCode,
    /// Initial target language.
    target: LanguageCode,
    /// Debounce window applied to edits.
    debounce: Duration,
}

impl SessionConfig {
    /// What: Validated configuration.
    ///
    /// Inputs:
    /// - `source`, `target`: Initial languages
    /// - `debounce`: Debounce window
    ///
    /// # Errors
    /// - `InvalidTarget` when `target` is the auto-detect sentinel.
    pub fn new(
        source: LanguageCode,
        target: LanguageCode,
        debounce: Duration,
    ) -> Result<Self, SessionError> {
        if target.is_auto() {
            return Err(SessionError::InvalidTarget);
        }
        Ok(Self {
            source,
            target,
            debounce,
        })
    }

    /// Initial source language.
    #[must_use]
    pub const fn source(&self) -> LanguageCode {
        self.source
    }

    /// Initial target language; never auto-detect.
    #[must_use]
    pub const fn target(&self) -> LanguageCode {
        self.target
    }

    /// Debounce window.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Same languages with another debounce window.
    #[must_use]
    pub const fn with_debounce(self, debounce: Duration) -> Self {
        Self { debounce, ..self }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            source: AUTO_DETECT,
            target: DEFAULT_TARGET,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// One interactive translation session.
pub struct Session {
    /// Text, languages and accepted result.
    state: SessionState,
    /// Debounce and staleness control.
    scheduler: RequestScheduler,
    /// Sender shared with the scheduler for input notices.
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl Session {
    /// What: Start a session with empty text.
    ///
    /// Inputs:
    /// - `config`: Initial languages and debounce window
    /// - `client`: Translation backend
    ///
    /// Output:
    /// - The session and the receiver of its [`SessionEvent`]s.
    #[must_use]
    pub fn new(
        config: SessionConfig,
        client: Arc<dyn TranslateClient>,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        debug_assert!(!config.target.is_auto(), "target must not be auto-detect");
        let (events, events_rx) = mpsc::unbounded_channel();
        let scheduler = RequestScheduler::new(client, config.debounce, events.clone());
        let session = Self {
            state: SessionState::new(config.source, config.target),
            scheduler,
            events,
        };
        tracing::info!(
            source = %config.source,
            target = %config.target,
            debounce_ms = u64::try_from(config.debounce.as_millis()).unwrap_or(u64::MAX),
            "[Session] Started"
        );
        (session, events_rx)
    }

    /// What: Replace the input text.
    ///
    /// Inputs:
    /// - `text`: Full edited text
    ///
    /// Output:
    /// - `TextUpdate::Truncated` when the text exceeded the limit (the cut
    ///   text is still applied and an `InputTooLong` notice is sent).
    ///
    /// Details:
    /// - Never fails; backend problems surface later as events.
    pub fn on_text_changed(&mut self, text: impl Into<String>) -> TextUpdate {
        let update = logic::apply_text_change(&mut self.state, text.into());
        if let TextUpdate::Truncated { length, limit } = update {
            let _ = self.events.send(SessionEvent::Notice(SessionError::InputTooLong {
                length,
                limit,
            }));
        }
        self.scheduler.reconsider(&mut self.state);
        update
    }

    /// What: Select the source language and re-trigger translation.
    ///
    /// # Errors
    /// - `UnknownLanguage` for codes outside the catalog; nothing changes.
    pub fn set_source(&mut self, code: &str) -> Result<(), SessionError> {
        logic::set_source(&mut self.state, code)?;
        self.scheduler.reconsider(&mut self.state);
        Ok(())
    }

    /// What: Select the target language and re-trigger translation.
    ///
    /// # Errors
    /// - `UnknownLanguage` for codes outside the catalog.
    /// - `InvalidTarget` for the auto-detect sentinel.
    pub fn set_target(&mut self, code: &str) -> Result<(), SessionError> {
        logic::set_target(&mut self.state, code)?;
        self.scheduler.reconsider(&mut self.state);
        Ok(())
    }

    /// What: Swap source and target and re-trigger translation.
    ///
    /// # Errors
    /// - `NoDetectionYet` when auto-detect is selected and the most recent
    ///   cycle has not resolved a detected language.
    pub fn swap(&mut self) -> Result<(), SessionError> {
        logic::swap(&mut self.state, self.scheduler.generation())?;
        tracing::debug!(
            source = %self.state.source(),
            target = %self.state.target(),
            "[Session] Languages swapped"
        );
        self.scheduler.reconsider(&mut self.state);
        Ok(())
    }

    /// Handle the next debounce expiry or call completion. Cancel-safe.
    pub async fn tick(&mut self) {
        self.scheduler.tick(&mut self.state).await;
    }

    /// Drive the scheduler until no timer is armed and no call is running.
    pub async fn settle(&mut self) {
        while !self.scheduler.is_settled() {
            self.tick().await;
        }
    }

    /// Whether [`Session::settle`] would return immediately.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.scheduler.is_settled()
    }

    /// Read-only view of the whole state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current input text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Selected source language, possibly auto-detect.
    #[must_use]
    pub const fn source_language(&self) -> LanguageCode {
        self.state.source()
    }

    /// Detected language while auto-detecting, else the selected source.
    #[must_use]
    pub fn effective_source_language(&self) -> LanguageCode {
        self.state.effective_source()
    }

    /// Selected target language.
    #[must_use]
    pub const fn target_language(&self) -> LanguageCode {
        self.state.target()
    }

    /// Whether the current cycle has a backend call outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Translated text, empty when there is no result.
    #[must_use]
    pub fn translated_text(&self) -> &str {
        self.state.translated_text()
    }

    /// Last accepted result.
    #[must_use]
    pub const fn result(&self) -> Option<&TranslationResult> {
        self.state.result()
    }

    /// Scheduler phase of the most recent cycle.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    /// Generation token of the most recent cycle.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.scheduler.generation()
    }

    /// What: Entries for a "From" menu.
    ///
    /// Output:
    /// - The detected language first (when auto-detecting and detected),
    ///   followed by the full catalog.
    #[must_use]
    pub fn source_choices(&self) -> Vec<&'static LanguageEntry> {
        let detected = self.state.detected().map(|d| languages::entry(d.code));
        detected
            .into_iter()
            .chain(languages::all_languages())
            .collect()
    }

    /// Entries for a "To" menu: the catalog without auto-detect.
    #[must_use]
    pub fn target_choices(&self) -> Vec<&'static LanguageEntry> {
        languages::targetable_languages().collect()
    }

    /// Action title, e.g. `"🇬🇧 <-> 🇫🇷 Switch Languages"` (flags or codes).
    #[must_use]
    pub fn swap_label(&self) -> String {
        let to = languages::entry(self.state.target());
        let from = languages::entry(self.state.source());
        format!(
            "{} <-> {} Switch Languages",
            to.short_label(),
            from.short_label()
        )
    }

    /// Link opening the current text and languages in the Google Translate web UI.
    #[must_use]
    pub fn web_url(&self) -> Option<String> {
        web_url(self.state.text(), self.state.source(), self.state.target())
    }
}
