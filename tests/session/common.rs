//! Session helpers shared by the integration tests.

#![cfg(test)]

use std::sync::Arc;
use std::time::Duration;

use livetranslate::{Session, SessionConfig, SessionEvent, TranslateClient};
use tokio::sync::mpsc;

pub use crate::test_utils::ScriptedClient;

/// Session with `config` over `backend`.
pub fn session_with(
    config: SessionConfig,
    backend: &Arc<ScriptedClient>,
) -> (Session, mpsc::UnboundedReceiver<SessionEvent>) {
    let client: Arc<dyn TranslateClient> = backend.clone();
    Session::new(config, client)
}

/// Auto → en session with the default 500ms debounce.
pub fn auto_session(
    backend: &Arc<ScriptedClient>,
) -> (Session, mpsc::UnboundedReceiver<SessionEvent>) {
    session_with(SessionConfig::default(), backend)
}

/// What: Drive the session for `duration` of (paused) time.
///
/// Details:
/// - Returns only by timing out; `tick` never returns while settled.
pub async fn run_for(session: &mut Session, duration: Duration) {
    let _ = tokio::time::timeout(duration, async {
        loop {
            session.tick().await;
        }
    })
    .await;
}

/// Drain buffered events.
pub fn drain(events: &mut mpsc::UnboundedReceiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}
