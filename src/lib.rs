//! Library entry for livetranslate: a debounced, staleness-safe translation
//! session controller with a Google Translate backend.

pub mod app;
pub mod args;
pub mod error;
pub mod languages;
pub mod logic;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod sources;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use error::{BackendError, SessionError};
pub use languages::{AUTO_DETECT, LanguageCode, LanguageEntry};
pub use session::{Session, SessionConfig};
pub use sources::{GoogleTranslateClient, TranslateClient};
pub use state::{Phase, SessionEvent, TextUpdate, TranslationResult};
