use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use super::Result;
use super::command::{Command, HELP, parse_command};
use crate::languages;
use crate::session::{Session, SessionConfig};
use crate::sources::TranslateClient;
use crate::state::SessionEvent;

/// What the loop should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading; print the message if any.
    Continue(Option<String>),
    /// Leave the loop.
    Quit,
}

/// One wake-up of the interactive loop.
enum Wake {
    /// A stdin line, or `None` at end of input.
    Line(Option<String>),
    /// A session event.
    Event(SessionEvent),
    /// The scheduler made progress.
    Ticked,
}

/// What: Read stdin lines and print translations until `:quit` or EOF.
///
/// Inputs:
/// - `config`: Session configuration
/// - `client`: Backend
///
/// # Errors
/// - Stdin read failures.
pub(super) async fn run(config: SessionConfig, client: Arc<dyn TranslateClient>) -> Result<()> {
    let (mut session, mut events) = Session::new(config, client);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", status_line(&session));
    println!("Type :help for commands.");

    loop {
        // All three futures are cancel-safe.
        let wake = tokio::select! {
            line = lines.next_line() => Wake::Line(line?),
            Some(event) = events.recv() => Wake::Event(event),
            () = session.tick() => Wake::Ticked,
        };
        match wake {
            Wake::Line(None) => break,
            Wake::Line(Some(line)) => match handle_command(&mut session, parse_command(&line)) {
                Flow::Quit => break,
                Flow::Continue(Some(message)) => println!("{message}"),
                Flow::Continue(None) => {}
            },
            Wake::Event(event) => {
                if let Some(message) = render_event(&session, &event) {
                    println!("{message}");
                }
            }
            Wake::Ticked => {}
        }
    }
    tracing::info!("[Runtime] Interactive session ended");
    Ok(())
}

/// What: Apply one command to the session.
///
/// Inputs:
/// - `session`: Live session
/// - `command`: Parsed input line
///
/// Output:
/// - `Flow::Quit` for `:quit`, otherwise an optional message for the user.
///
/// Details:
/// - Selection errors are reported as messages; the session is unchanged.
pub fn handle_command(session: &mut Session, command: Command) -> Flow {
    let message = match command {
        Command::Quit => return Flow::Quit,
        Command::Text(text) => {
            let _ = session.on_text_changed(text);
            None
        }
        Command::Clear => {
            let _ = session.on_text_changed(String::new());
            None
        }
        Command::From(code) => Some(
            session
                .set_source(&code)
                .map_or_else(|e| format!("! {e}"), |()| status_line(session)),
        ),
        Command::To(code) => Some(
            session
                .set_target(&code)
                .map_or_else(|e| format!("! {e}"), |()| status_line(session)),
        ),
        Command::Swap => {
            let label = session.swap_label();
            Some(session.swap().map_or_else(
                |e| format!("! {e}"),
                |()| format!("{label}\n{}", status_line(session)),
            ))
        }
        Command::Languages => Some(super::language_listing().trim_end().to_string()),
        Command::Url => Some(
            session
                .web_url()
                .unwrap_or_else(|| "! cannot build a link for the current text".to_string()),
        ),
        Command::Status => Some(status_line(session)),
        Command::Help => Some(HELP.to_string()),
        Command::Unknown(line) => Some(format!("! unknown command: {line} (try :help)")),
    };
    Flow::Continue(message)
}

/// What: Text to print for a session event.
///
/// Output:
/// - The translation prefixed with the language pair, `!`-prefixed notices,
///   or `None` for events that need no output.
#[must_use]
pub fn render_event(session: &Session, event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::Translated { .. } => Some(format!(
            "[{} -> {}] {}",
            session.effective_source_language(),
            session.target_language(),
            session.translated_text()
        )),
        SessionEvent::Notice(notice) => Some(format!("! {notice}")),
        SessionEvent::Loading { generation } => {
            tracing::trace!(generation, "[Runtime] Loading");
            None
        }
        SessionEvent::Cleared => None,
    }
}

/// Current languages, e.g. `From: 🇫🇷 French (Auto-detect)  To: 🇬🇧 English`.
fn status_line(session: &Session) -> String {
    let from = languages::entry(session.effective_source_language());
    let to = languages::entry(session.target_language());
    format!(
        "From: {} {}  To: {} {}",
        from.icon(),
        session.state().source_label(),
        to.icon(),
        to.name
    )
}
