//! Language selection, swap and input limits through the public session API.

#![cfg(test)]

use std::time::Duration;

use livetranslate::languages::lookup_code;
use livetranslate::state::MAX_TEXT_CHARS;
use livetranslate::{SessionConfig, SessionError, SessionEvent, TextUpdate};

use crate::common::{ScriptedClient, auto_session, drain, run_for, session_with};

#[tokio::test(start_paused = true)]
/// What: Auto-detect is never accepted as target.
///
/// Inputs:
/// - `set_target("auto")` on a resolved auto → en session.
///
/// Output:
/// - `InvalidTarget`; target still English and no extra call scheduled.
async fn auto_target_is_rejected() {
    let backend = ScriptedClient::detecting("fr");
    let (mut session, _events) = auto_session(&backend);
    let _ = session.on_text_changed("bonjour");
    session.settle().await;

    let err = session.set_target("auto").expect_err("auto target");
    assert!(matches!(err, SessionError::InvalidTarget));
    assert_eq!(session.target_language().as_str(), "en");
    assert!(session.is_settled());
    assert_eq!(backend.texts().len(), 1);
}

#[tokio::test(start_paused = true)]
/// What: Unknown codes are rejected with the code in the error.
async fn unknown_codes_are_rejected() {
    let backend = ScriptedClient::detecting("fr");
    let (mut session, _events) = auto_session(&backend);
    let err = session.set_source("klingon").expect_err("unknown");
    assert!(matches!(err, SessionError::UnknownLanguage { ref code } if code == "klingon"));
    assert!(session.source_language().is_auto());
    assert!(matches!(
        session.set_target("xx"),
        Err(SessionError::UnknownLanguage { .. })
    ));
}

#[tokio::test(start_paused = true)]
/// What: Swap with auto-detect needs a detection from the current cycle.
///
/// Inputs:
/// - Swap before any text, swap while "bonjour" is pending, swap after it
///   resolved as French.
///
/// Output:
/// - `NoDetectionYet` twice, then source en and target fr, with a new call
///   translating en → fr.
async fn swap_requires_detection() {
    let backend = ScriptedClient::detecting("fr");
    let (mut session, _events) = auto_session(&backend);

    assert!(matches!(session.swap(), Err(SessionError::NoDetectionYet)));
    let _ = session.on_text_changed("bonjour");
    assert!(matches!(session.swap(), Err(SessionError::NoDetectionYet)));

    session.settle().await;
    assert_eq!(session.effective_source_language().as_str(), "fr");
    session.swap().expect("swap after detection");
    assert_eq!(session.source_language().as_str(), "en");
    assert_eq!(session.target_language().as_str(), "fr");

    session.settle().await;
    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].1.as_str(), "en");
    assert_eq!(calls[1].2.as_str(), "fr");
    assert_eq!(session.translated_text(), "bonjour [fr]");
}

#[tokio::test(start_paused = true)]
/// What: A detection from an older cycle does not allow swapping.
///
/// Inputs:
/// - "bonjour" resolved as French, then the text is edited and the new cycle
///   has not resolved yet.
///
/// Output:
/// - `NoDetectionYet` until the new cycle resolves.
async fn swap_ignores_outdated_detection() {
    let backend = ScriptedClient::detecting("fr");
    let (mut session, _events) = auto_session(&backend);
    let _ = session.on_text_changed("bonjour");
    session.settle().await;

    let _ = session.on_text_changed("bonjour tout le monde");
    assert!(matches!(session.swap(), Err(SessionError::NoDetectionYet)));
    session.settle().await;
    assert!(session.swap().is_ok());
}

#[tokio::test(start_paused = true)]
/// What: Swap with explicit languages just exchanges them.
///
/// Inputs:
/// - de → ja session.
///
/// Output:
/// - ja → de.
async fn swap_explicit_languages() {
    let backend = ScriptedClient::detecting("en");
    let config = SessionConfig::new(
        lookup_code("de").expect("de"),
        lookup_code("ja").expect("ja"),
        Duration::from_millis(500),
    )
    .expect("config");
    let (mut session, _events) = session_with(config, &backend);
    session.swap().expect("swap");
    assert_eq!(session.source_language().as_str(), "ja");
    assert_eq!(session.target_language().as_str(), "de");
    assert!(backend.texts().is_empty());
}

#[tokio::test(start_paused = true)]
/// What: Changing a language re-translates the current text after the debounce.
///
/// Inputs:
/// - "hola" resolved into English, then target switched to German.
///
/// Output:
/// - A second call es-detected → de, result "hola [de]".
async fn language_change_retranslates() {
    let backend = ScriptedClient::detecting("es");
    let (mut session, _events) = auto_session(&backend);
    let _ = session.on_text_changed("hola");
    session.settle().await;

    session.set_target("de").expect("de");
    run_for(&mut session, Duration::from_millis(400)).await;
    assert_eq!(backend.texts().len(), 1);
    session.settle().await;

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].1.is_auto());
    assert_eq!(calls[1].2.as_str(), "de");
    assert_eq!(session.translated_text(), "hola [de]");
}

#[tokio::test(start_paused = true)]
/// What: Over-long input is cut to the limit, reported, and still translated.
///
/// Inputs:
/// - 6000 characters.
///
/// Output:
/// - Text of 5000 characters, an `InputTooLong` notice, one call with the
///   truncated text.
async fn long_input_is_truncated() {
    let backend = ScriptedClient::detecting("en");
    let (mut session, mut events) = auto_session(&backend);

    let update = session.on_text_changed("é".repeat(6000));
    assert_eq!(
        update,
        TextUpdate::Truncated {
            length: 6000,
            limit: MAX_TEXT_CHARS
        }
    );
    assert_eq!(session.text().chars().count(), MAX_TEXT_CHARS);
    assert!(drain(&mut events).iter().any(|event| matches!(
        event,
        SessionEvent::Notice(SessionError::InputTooLong {
            length: 6000,
            limit: 5000
        })
    )));

    session.settle().await;
    let texts = backend.texts();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0], session.text());
}

#[tokio::test(start_paused = true)]
/// What: An undetectable result retires the previous detection.
///
/// Inputs:
/// - "bonjour" detected as French, then "zzz" for which the backend names
///   no catalog language.
///
/// Output:
/// - Effective source equals the result's resolved source (auto); the
///   label and menu no longer show French; swap is refused.
async fn undetectable_result_drops_old_detection() {
    let backend = ScriptedClient::detecting("fr");
    backend.undetectable("zzz");
    let (mut session, _events) = auto_session(&backend);
    let _ = session.on_text_changed("bonjour");
    session.settle().await;
    assert_eq!(session.effective_source_language().as_str(), "fr");

    let _ = session.on_text_changed("zzz");
    session.settle().await;
    let resolved = session.result().map(|r| r.resolved_source);
    assert_eq!(resolved, Some(session.effective_source_language()));
    assert!(session.effective_source_language().is_auto());
    assert_eq!(session.state().source_label(), "Auto Language Detection");
    assert!(session.source_choices()[0].code.is_auto());
    assert!(matches!(session.swap(), Err(SessionError::NoDetectionYet)));
}

#[tokio::test(start_paused = true)]
/// What: Returning to auto-detect does not show a detection from earlier cycles.
///
/// Inputs:
/// - "bonjour" detected as French, source set to German and settled, then
///   source set back to auto.
///
/// Output:
/// - Before the new cycle resolves: no detected language in label or menu.
///   After it resolves: French again, from the new cycle.
async fn reselecting_auto_hides_old_detection() {
    let backend = ScriptedClient::detecting("fr");
    let (mut session, _events) = auto_session(&backend);
    let _ = session.on_text_changed("bonjour");
    session.settle().await;

    session.set_source("de").expect("de");
    session.settle().await;
    assert_eq!(
        session.result().map(|r| r.resolved_source.as_str()),
        Some("de")
    );

    session.set_source("auto").expect("auto");
    assert!(session.effective_source_language().is_auto());
    assert!(session.source_choices()[0].code.is_auto());
    assert_eq!(session.state().source_label(), "Auto Language Detection");

    session.settle().await;
    assert_eq!(session.source_choices()[0].code.as_str(), "fr");
    assert_eq!(session.effective_source_language().as_str(), "fr");
}
