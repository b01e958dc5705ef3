//! Debounce, staleness and failure behavior of a session driven end to end.

#![cfg(test)]

use std::time::Duration;

use livetranslate::{BackendError, Phase, SessionError, SessionEvent};

use crate::common::{ScriptedClient, auto_session, drain, run_for};

#[tokio::test(start_paused = true)]
/// What: A slow earlier call never overwrites a newer result.
///
/// Inputs:
/// - "hi" (backend takes 2s) fires, then "hello" (50ms) is typed while "hi"
///   is still in flight.
///
/// Output:
/// - Both calls are made; the final result is the translation of "hello" and
///   only its cycle emits `Translated`.
async fn late_result_of_superseded_cycle_is_ignored() {
    let backend = ScriptedClient::detecting("en");
    backend.delay("hi", Duration::from_secs(2));
    let (mut session, mut events) = auto_session(&backend);

    let _ = session.on_text_changed("hi");
    run_for(&mut session, Duration::from_millis(600)).await;
    assert!(session.is_loading());
    assert_eq!(session.phase(), Phase::InFlight);

    let _ = session.on_text_changed("hello");
    let latest = session.generation();
    session.settle().await;

    assert_eq!(backend.texts(), vec!["hi".to_string(), "hello".to_string()]);
    assert_eq!(session.translated_text(), "hello [en]");
    assert!(!session.is_loading());
    assert_eq!(session.phase(), Phase::Resolved);
    let translated: Vec<u64> = drain(&mut events)
        .into_iter()
        .filter_map(|event| match event {
            SessionEvent::Translated { generation } => Some(generation),
            _ => None,
        })
        .collect();
    assert_eq!(translated, vec![latest]);
}

#[tokio::test(start_paused = true)]
/// What: Edits inside the debounce window collapse into one call.
///
/// Inputs:
/// - "a", "ab", "abc" typed 100ms apart.
///
/// Output:
/// - Exactly one backend call, for "abc".
async fn bursts_of_edits_make_one_call() {
    let backend = ScriptedClient::detecting("en");
    let (mut session, _events) = auto_session(&backend);

    for text in ["a", "ab", "abc"] {
        let _ = session.on_text_changed(text);
        run_for(&mut session, Duration::from_millis(100)).await;
    }
    assert!(backend.texts().is_empty());
    session.settle().await;

    assert_eq!(backend.texts(), vec!["abc".to_string()]);
    assert_eq!(session.translated_text(), "abc [en]");
}

#[tokio::test(start_paused = true)]
/// What: Clearing the text resets everything without calling the backend.
///
/// Inputs:
/// - A resolved "bonjour"; then "salut" in flight; then empty text.
///
/// Output:
/// - No loading, no result, `Idle`, and no call beyond the first two.
async fn empty_text_clears_without_calls() {
    let backend = ScriptedClient::detecting("fr");
    backend.delay("salut", Duration::from_secs(1));
    let (mut session, mut events) = auto_session(&backend);

    let _ = session.on_text_changed("bonjour");
    session.settle().await;
    assert!(session.result().is_some());

    let _ = session.on_text_changed("salut");
    run_for(&mut session, Duration::from_millis(600)).await;
    assert!(session.is_loading());

    let _ = session.on_text_changed("");
    assert!(!session.is_loading());
    assert!(session.result().is_none());
    assert_eq!(session.phase(), Phase::Idle);

    session.settle().await;
    assert!(!session.is_loading());
    assert!(session.result().is_none());
    assert_eq!(session.translated_text(), "");
    assert_eq!(backend.texts().len(), 2);
    assert!(
        drain(&mut events)
            .iter()
            .any(|event| matches!(event, SessionEvent::Cleared))
    );
}

#[tokio::test(start_paused = true)]
/// What: A failed call keeps the last good result and reports a notice.
///
/// Inputs:
/// - "ok" resolves; "bad" fails with a malformed response.
///
/// Output:
/// - Result still holds "ok [en]", loading cleared, `Failed`, and a backend
///   notice carrying the backend error.
async fn failure_keeps_previous_result() {
    let backend = ScriptedClient::detecting("en");
    backend.fail_on("bad");
    let (mut session, mut events) = auto_session(&backend);

    let _ = session.on_text_changed("ok");
    session.settle().await;
    let _ = drain(&mut events);

    let _ = session.on_text_changed("bad");
    session.settle().await;

    assert_eq!(session.translated_text(), "ok [en]");
    assert!(!session.is_loading());
    assert_eq!(session.phase(), Phase::Failed);
    assert!(drain(&mut events).iter().any(|event| matches!(
        event,
        SessionEvent::Notice(SessionError::Backend(BackendError::Malformed(_)))
    )));
}

#[tokio::test(start_paused = true)]
/// What: Re-submitting the same text calls again and yields the same result.
///
/// Inputs:
/// - "same" resolved, then "same" again.
///
/// Output:
/// - Two calls; result unchanged and `Resolved`.
async fn identical_retrigger_is_stable() {
    let backend = ScriptedClient::detecting("en");
    let (mut session, _events) = auto_session(&backend);

    let _ = session.on_text_changed("same");
    session.settle().await;
    let first = session.result().cloned();

    let _ = session.on_text_changed("same");
    session.settle().await;

    assert_eq!(backend.texts().len(), 2);
    assert_eq!(session.result().cloned(), first);
    assert_eq!(session.phase(), Phase::Resolved);
}

#[tokio::test(start_paused = true)]
/// What: A failure of a superseded call leaves the newer cycle untouched.
///
/// Inputs:
/// - "one" fires and fails after 1s; "two" (2s latency) is typed while
///   "one" is in flight, so "one" fails while "two" is in flight.
///
/// Output:
/// - Right after the stale failure: still loading, still `InFlight`, no
///   backend notice. After settling: "two" resolved.
async fn stale_failure_keeps_newer_cycle_loading() {
    let backend = ScriptedClient::detecting("en");
    backend.fail_on("one");
    backend.delay("one", Duration::from_secs(1));
    backend.delay("two", Duration::from_secs(2));
    let (mut session, mut events) = auto_session(&backend);

    let _ = session.on_text_changed("one");
    run_for(&mut session, Duration::from_millis(600)).await;
    let _ = session.on_text_changed("two");
    // "two" fires at 1100ms, "one" fails at 1500ms.
    run_for(&mut session, Duration::from_millis(1000)).await;

    assert_eq!(backend.texts(), vec!["one".to_string(), "two".to_string()]);
    assert!(session.is_loading());
    assert_eq!(session.phase(), Phase::InFlight);
    assert!(!drain(&mut events).iter().any(|event| matches!(
        event,
        SessionEvent::Notice(SessionError::Backend(_))
    )));

    session.settle().await;
    assert!(!session.is_loading());
    assert_eq!(session.phase(), Phase::Resolved);
    assert_eq!(session.translated_text(), "two [en]");
}
