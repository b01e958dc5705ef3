//! livetranslate application runtime.
//!
//! Wires settings, command-line overrides and the Google backend into a
//! [`Session`](crate::Session), then runs either the one-shot or the
//! interactive front end.

use std::sync::Arc;

use crate::args::Args;
use crate::languages;
use crate::settings::Settings;
use crate::sources::GoogleTranslateClient;

/// Interactive command parsing.
pub mod command;
/// Line-driven interactive front end.
mod interactive;
/// Single translation for `--text`.
mod oneshot;

pub use interactive::{Flow, handle_command, render_event};
pub use oneshot::{OneShotOutput, translate_once};

/// Result type alias for application runtime.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the application selected by `args`.
///
/// Inputs:
/// - `args`: Parsed command line
///
/// Output:
/// - `Ok(())` on normal exit; an error when the backend cannot be built, a
///   one-shot translation fails, or stdin/stdout break.
///
/// # Errors
/// - Propagates client construction, backend and I/O errors.
pub async fn run(args: Args) -> Result<()> {
    if args.list_languages {
        print!("{}", language_listing());
        return Ok(());
    }

    let settings = args.apply_to(Settings::load());
    let config = settings.session_config();
    let client = Arc::new(GoogleTranslateClient::new(
        &settings.backend_url,
        settings.request_timeout(),
    )?);
    tracing::info!(
        endpoint = %settings.backend_url,
        source = %config.source(),
        target = %config.target(),
        "[Runtime] Backend ready"
    );

    if let Some(text) = args.text {
        let output = translate_once(config, client, text).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", output.translation);
        }
        return Ok(());
    }
    interactive::run(config, client).await
}

/// What: Render the catalog as `code<TAB>icon name` lines.
///
/// Output:
/// - One line per catalog entry, auto-detect first.
#[must_use]
pub fn language_listing() -> String {
    languages::all_languages()
        .iter()
        .map(|entry| format!("{}\t{} {}\n", entry.code, entry.icon(), entry.name))
        .collect()
}
