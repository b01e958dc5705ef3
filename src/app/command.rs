//! Interactive command parsing.

/// One line of interactive input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the text to translate.
    Text(String),
    /// `:from <code>`
    From(String),
    /// `:to <code>`
    To(String),
    /// `:swap`
    Swap,
    /// `:langs`
    Languages,
    /// `:url`
    Url,
    /// `:clear`
    Clear,
    /// `:status`
    Status,
    /// `:help`
    Help,
    /// `:quit` / `:q`
    Quit,
    /// Anything else starting with `:`.
    Unknown(String),
}

/// What: Parse one input line.
///
/// Inputs:
/// - `line`: Line read from stdin (without the trailing newline)
///
/// Output:
/// - A `Command`; lines not starting with `:` are text.
///
/// Details:
/// - A leading `::` escapes the colon, so `::x` is the text `:x`.
/// - Missing arguments to `:from`/`:to` yield `Unknown`.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(escaped) = line.strip_prefix("::") {
        return Command::Text(format!(":{escaped}"));
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Text(line.to_string());
    };
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next().map(str::to_string);
    match (name.as_str(), arg) {
        ("from" | "f", Some(code)) => Command::From(code),
        ("to" | "t", Some(code)) => Command::To(code),
        ("swap" | "s", _) => Command::Swap,
        ("langs" | "languages" | "l", _) => Command::Languages,
        ("url" | "open", _) => Command::Url,
        ("clear" | "c", _) => Command::Clear,
        ("status", _) => Command::Status,
        ("help" | "h" | "?", _) => Command::Help,
        ("quit" | "q" | "exit", _) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Help text for interactive mode.
pub const HELP: &str = "\
Type text to translate it (each line replaces the text).
  :from <code>   set source language (auto for detection)
  :to <code>     set target language
  :swap          swap source and target
  :langs         list language codes
  :url           print a Google Translate link for the current text
  :clear         clear the text
  :status        show languages and state
  :quit          exit
Start a line with :: to translate text beginning with a colon.";
