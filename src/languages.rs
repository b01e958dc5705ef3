//! Static catalog of languages supported by the translation backend.
//!
//! The catalog is an ordered list whose first entry is the auto-detect
//! sentinel. Lookups by code go through a lazily built index so they stay
//! constant-time regardless of catalog size.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::SessionError;

/// Identifier of a catalog language.
///
/// Values can only be obtained from the catalog (or the [`AUTO_DETECT`]
/// constant), so holding a `LanguageCode` means the code is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static str);

/// Sentinel source code asking the backend to infer the language.
pub const AUTO_DETECT: LanguageCode = LanguageCode("auto");

/// Target used when nothing else is configured.
pub const DEFAULT_TARGET: LanguageCode = LanguageCode("en");

/// Glyph shown for languages without a flag.
pub const FALLBACK_FLAG: &str = "🏳️";

impl LanguageCode {
    /// Backend-facing code string (e.g. `"fr"`, `"zh-CN"`, `"auto"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Whether this is the auto-detect sentinel.
    #[must_use]
    pub fn is_auto(self) -> bool {
        self == AUTO_DETECT
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl serde::Serialize for LanguageCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// One selectable language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Unique code.
    pub code: LanguageCode,
    /// English display name.
    pub name: &'static str,
    /// Optional flag glyph for menus.
    pub flag: Option<&'static str>,
}

impl LanguageEntry {
    /// What: Glyph to show next to the language in menus.
    ///
    /// Output:
    /// - The flag when the entry has one, otherwise [`FALLBACK_FLAG`].
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.flag.unwrap_or(FALLBACK_FLAG)
    }

    /// Short label: the flag if present, else the code.
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        self.flag.unwrap_or(self.code.0)
    }
}

/// Shorthand used to keep the table below readable.
const fn lang(code: &'static str, name: &'static str, flag: Option<&'static str>) -> LanguageEntry {
    LanguageEntry {
        code: LanguageCode(code),
        name,
        flag,
    }
}

/// Ordered catalog; the auto-detect sentinel must stay first.
static LANGUAGES: &[LanguageEntry] = &[
    lang("auto", "Auto Language Detection", Some("🔍")),
    lang("af", "Afrikaans", Some("🇿🇦")),
    lang("sq", "Albanian", Some("🇦🇱")),
    lang("am", "Amharic", Some("🇪🇹")),
    lang("ar", "Arabic", Some("🇸🇦")),
    lang("hy", "Armenian", Some("🇦🇲")),
    lang("az", "Azerbaijani", Some("🇦🇿")),
    lang("eu", "Basque", None),
    lang("be", "Belarusian", Some("🇧🇾")),
    lang("bn", "Bengali", Some("🇧🇩")),
    lang("bs", "Bosnian", Some("🇧🇦")),
    lang("bg", "Bulgarian", Some("🇧🇬")),
    lang("ca", "Catalan", None),
    lang("ceb", "Cebuano", Some("🇵🇭")),
    lang("ny", "Chichewa", Some("🇲🇼")),
    lang("zh-CN", "Chinese Simplified", Some("🇨🇳")),
    lang("zh-TW", "Chinese Traditional", Some("🇹🇼")),
    lang("co", "Corsican", Some("🇫🇷")),
    lang("hr", "Croatian", Some("🇭🇷")),
    lang("cs", "Czech", Some("🇨🇿")),
    lang("da", "Danish", Some("🇩🇰")),
    lang("nl", "Dutch", Some("🇳🇱")),
    lang("en", "English", Some("🇬🇧")),
    lang("eo", "Esperanto", None),
    lang("et", "Estonian", Some("🇪🇪")),
    lang("tl", "Filipino", Some("🇵🇭")),
    lang("fi", "Finnish", Some("🇫🇮")),
    lang("fr", "French", Some("🇫🇷")),
    lang("fy", "Frisian", Some("🇳🇱")),
    lang("gl", "Galician", None),
    lang("ka", "Georgian", Some("🇬🇪")),
    lang("de", "German", Some("🇩🇪")),
    lang("el", "Greek", Some("🇬🇷")),
    lang("gu", "Gujarati", Some("🇮🇳")),
    lang("ht", "Haitian Creole", Some("🇭🇹")),
    lang("ha", "Hausa", Some("🇳🇬")),
    lang("haw", "Hawaiian", None),
    lang("he", "Hebrew", Some("🇮🇱")),
    lang("hi", "Hindi", Some("🇮🇳")),
    lang("hmn", "Hmong", None),
    lang("hu", "Hungarian", Some("🇭🇺")),
    lang("is", "Icelandic", Some("🇮🇸")),
    lang("ig", "Igbo", Some("🇳🇬")),
    lang("id", "Indonesian", Some("🇮🇩")),
    lang("ga", "Irish", Some("🇮🇪")),
    lang("it", "Italian", Some("🇮🇹")),
    lang("ja", "Japanese", Some("🇯🇵")),
    lang("jv", "Javanese", Some("🇮🇩")),
    lang("kn", "Kannada", Some("🇮🇳")),
    lang("kk", "Kazakh", Some("🇰🇿")),
    lang("km", "Khmer", Some("🇰🇭")),
    lang("ko", "Korean", Some("🇰🇷")),
    lang("ku", "Kurdish (Kurmanji)", None),
    lang("ky", "Kyrgyz", Some("🇰🇬")),
    lang("lo", "Lao", Some("🇱🇦")),
    lang("la", "Latin", None),
    lang("lv", "Latvian", Some("🇱🇻")),
    lang("lt", "Lithuanian", Some("🇱🇹")),
    lang("lb", "Luxembourgish", Some("🇱🇺")),
    lang("mk", "Macedonian", Some("🇲🇰")),
    lang("mg", "Malagasy", Some("🇲🇬")),
    lang("ms", "Malay", Some("🇲🇾")),
    lang("ml", "Malayalam", Some("🇮🇳")),
    lang("mt", "Maltese", Some("🇲🇹")),
    lang("mi", "Maori", Some("🇳🇿")),
    lang("mr", "Marathi", Some("🇮🇳")),
    lang("mn", "Mongolian", Some("🇲🇳")),
    lang("my", "Myanmar (Burmese)", Some("🇲🇲")),
    lang("ne", "Nepali", Some("🇳🇵")),
    lang("no", "Norwegian", Some("🇳🇴")),
    lang("ps", "Pashto", Some("🇦🇫")),
    lang("fa", "Persian", Some("🇮🇷")),
    lang("pl", "Polish", Some("🇵🇱")),
    lang("pt", "Portuguese", Some("🇵🇹")),
    lang("pa", "Punjabi", Some("🇮🇳")),
    lang("ro", "Romanian", Some("🇷🇴")),
    lang("ru", "Russian", Some("🇷🇺")),
    lang("sm", "Samoan", Some("🇼🇸")),
    lang("gd", "Scots Gaelic", None),
    lang("sr", "Serbian", Some("🇷🇸")),
    lang("st", "Sesotho", Some("🇱🇸")),
    lang("sn", "Shona", Some("🇿🇼")),
    lang("sd", "Sindhi", Some("🇵🇰")),
    lang("si", "Sinhala", Some("🇱🇰")),
    lang("sk", "Slovak", Some("🇸🇰")),
    lang("sl", "Slovenian", Some("🇸🇮")),
    lang("so", "Somali", Some("🇸🇴")),
    lang("es", "Spanish", Some("🇪🇸")),
    lang("su", "Sundanese", Some("🇸🇩")),
    lang("sw", "Swahili", Some("🇰🇪")),
    lang("sv", "Swedish", Some("🇸🇪")),
    lang("tg", "Tajik", Some("🇹🇯")),
    lang("ta", "Tamil", Some("🇮🇳")),
    lang("te", "Telugu", Some("🇮🇳")),
    lang("th", "Thai", Some("🇹🇭")),
    lang("tr", "Turkish", Some("🇹🇷")),
    lang("uk", "Ukrainian", Some("🇺🇦")),
    lang("ur", "Urdu", Some("🇵🇰")),
    lang("uz", "Uzbek", Some("🇺🇿")),
    lang("vi", "Vietnamese", Some("🇻🇳")),
    lang("cy", "Welsh", None),
    lang("xh", "Xhosa", Some("🇿🇦")),
    lang("yi", "Yiddish", None),
    lang("yo", "Yoruba", Some("🇳🇬")),
    lang("zu", "Zulu", Some("🇿🇦")),
];

/// Legacy or shortened codes the backend may report for detected languages.
const BACKEND_ALIASES: &[(&str, &str)] = &[
    ("iw", "he"),
    ("jw", "jv"),
    ("zh", "zh-CN"),
    ("zh-cn", "zh-CN"),
    ("zh-tw", "zh-TW"),
];

/// Code → position in [`LANGUAGES`].
static INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    LANGUAGES
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.code.0, i))
        .collect()
});

/// Every catalog entry in stable order, auto-detect first.
#[must_use]
pub fn all_languages() -> &'static [LanguageEntry] {
    LANGUAGES
}

/// What: Look up a catalog entry by its code.
///
/// Inputs:
/// - `code`: Code string as typed or configured (exact match, e.g. `"zh-CN"`)
///
/// Output:
/// - The matching entry, or `SessionError::UnknownLanguage`.
///
/// # Errors
/// - Returns `UnknownLanguage` when `code` is not in the catalog.
pub fn by_code(code: &str) -> Result<&'static LanguageEntry, SessionError> {
    INDEX
        .get(code)
        .map(|&i| &LANGUAGES[i])
        .ok_or_else(|| SessionError::UnknownLanguage {
            code: code.to_string(),
        })
}

/// Validate a code string and return its [`LanguageCode`].
///
/// # Errors
/// - Returns `UnknownLanguage` when `code` is not in the catalog.
pub fn lookup_code(code: &str) -> Result<LanguageCode, SessionError> {
    by_code(code).map(|entry| entry.code)
}

/// Entry for a code obtained from the catalog.
///
/// Every `LanguageCode` originates here, so the lookup cannot miss; the
/// sentinel entry is returned in the impossible case to keep this total.
#[must_use]
pub fn entry(code: LanguageCode) -> &'static LanguageEntry {
    INDEX.get(code.0).map_or(&LANGUAGES[0], |&i| &LANGUAGES[i])
}

/// Catalog without the auto-detect sentinel, for target selection.
pub fn targetable_languages() -> impl Iterator<Item = &'static LanguageEntry> {
    LANGUAGES.iter().filter(|entry| !entry.code.is_auto())
}

/// What: Map a language code reported by the backend onto the catalog.
///
/// Inputs:
/// - `raw`: Code string from a backend response
///
/// Output:
/// - `Some(code)` for catalog codes and known aliases, `None` otherwise.
///
/// Details:
/// - Tries an exact match first, then a case-insensitive match, then the
///   alias table (`iw` → `he`, `jw` → `jv`, `zh` → `zh-CN`).
#[must_use]
pub fn resolve_backend_code(raw: &str) -> Option<LanguageCode> {
    let raw = raw.trim();
    if let Ok(entry) = by_code(raw) {
        return Some(entry.code);
    }
    let lower = raw.to_ascii_lowercase();
    if let Some(entry) = LANGUAGES
        .iter()
        .find(|e| e.code.0.eq_ignore_ascii_case(&lower))
    {
        return Some(entry.code);
    }
    BACKEND_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .and_then(|(_, canonical)| by_code(canonical).ok())
        .map(|entry| entry.code)
}
