//! Command-line argument definition.

use clap::Parser;

use crate::settings::Settings;

/// livetranslate - Live, debounced translation in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "livetranslate")]
#[command(version)]
#[command(about = "Live, debounced translation in the terminal", long_about = None)]
pub struct Args {
    /// Source language code (e.g. auto, en, fr, zh-CN); overrides settings.conf
    #[arg(short, long)]
    pub from: Option<String>,

    /// Target language code (e.g. en, de, ja); overrides settings.conf
    #[arg(short, long)]
    pub to: Option<String>,

    /// Debounce window in milliseconds; overrides settings.conf
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Translate this text once, print the result and exit
    #[arg(long)]
    pub text: Option<String>,

    /// Print the one-shot result as JSON (use with --text)
    #[arg(long)]
    pub json: bool,

    /// List supported languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Layer command-line overrides over file settings.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from disk
    ///
    /// Output:
    /// - Settings with `--from`, `--to` and `--debounce-ms` applied.
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(from) = &self.from {
            settings.lang_from.clone_from(from);
        }
        if let Some(to) = &self.to {
            settings.lang_to.clone_from(to);
        }
        if let Some(ms) = self.debounce_ms.filter(|ms| *ms > 0) {
            settings.debounce_ms = ms;
        }
        settings
    }
}

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
