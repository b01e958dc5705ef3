//! Test utilities for common test setup.
//!
//! This module provides a scripted translation backend shared by the unit
//! tests and, through `#[path]`, by the integration tests. Imports go through
//! `super` so both crate roots can provide them.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;

use super::languages::lookup_code;
use super::{BackendError, LanguageCode, TranslateClient, TranslationResult};

/// What: In-memory backend with per-text latency, failures and a fixed detection.
///
/// Details:
/// - Translation of `text` into `target` is `"{text} [{target}]"`.
/// - Every call is recorded before the simulated latency starts.
#[derive(Default)]
pub struct ScriptedClient {
    /// Texts passed to `translate`, in call order.
    calls: Mutex<Vec<(String, LanguageCode, LanguageCode)>>,
    /// Latency per text; missing texts use `default_delay`.
    delays: Mutex<HashMap<String, Duration>>,
    /// Texts whose call fails.
    failures: Mutex<HashSet<String>>,
    /// Texts whose detected language the backend cannot name.
    undetectable: Mutex<HashSet<String>>,
    /// Latency for texts without an explicit delay.
    default_delay: Duration,
    /// Language reported for auto-detect requests.
    detect_as: Option<LanguageCode>,
}

impl ScriptedClient {
    /// Client detecting every auto-detect request as `detect_as`.
    pub fn detecting(detect_as: &str) -> Arc<Self> {
        Arc::new(Self {
            detect_as: Some(lookup_code(detect_as).expect("catalog code")),
            default_delay: Duration::from_millis(20),
            ..Self::default()
        })
    }

    /// Make calls for `text` take `delay`.
    pub fn delay(&self, text: &str, delay: Duration) {
        self.delays
            .lock()
            .expect("delays lock")
            .insert(text.to_string(), delay);
    }

    /// Make calls for `text` fail.
    pub fn fail_on(&self, text: &str) {
        self.failures
            .lock()
            .expect("failures lock")
            .insert(text.to_string());
    }

    /// Make auto-detect calls for `text` resolve to no catalog language.
    pub fn undetectable(&self, text: &str) {
        self.undetectable
            .lock()
            .expect("undetectable lock")
            .insert(text.to_string());
    }

    /// Texts sent so far.
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .map(|(text, _, _)| text.clone())
            .collect()
    }

    /// Full call log.
    pub fn calls(&self) -> Vec<(String, LanguageCode, LanguageCode)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl TranslateClient for ScriptedClient {
    fn translate(
        &self,
        text: String,
        source: LanguageCode,
        target: LanguageCode,
    ) -> BoxFuture<'_, Result<TranslationResult, BackendError>> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((text.clone(), source, target));
        let delay = self
            .delays
            .lock()
            .expect("delays lock")
            .get(&text)
            .copied()
            .unwrap_or(self.default_delay);
        let fails = self.failures.lock().expect("failures lock").contains(&text);
        let undetectable = self
            .undetectable
            .lock()
            .expect("undetectable lock")
            .contains(&text);
        let resolved_source = match self.detect_as {
            Some(detected) if source.is_auto() && !undetectable => detected,
            _ => source,
        };
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            if fails {
                return Err(BackendError::Malformed(format!("scripted failure for {text}")));
            }
            Ok(TranslationResult {
                translated_text: format!("{text} [{target}]"),
                resolved_source,
            })
        })
    }
}
