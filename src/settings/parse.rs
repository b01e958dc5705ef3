use super::Settings;

/// What: Check if a line should be skipped (empty or comment).
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// Drop a trailing ` # comment` from a value. `#` glued to text (as in URL
/// fragments) is kept.
fn strip_inline_comment(value: &str) -> &str {
    value
        .find(" #")
        .or_else(|| value.find("\t#"))
        .map_or(value, |i| &value[..i])
        .trim()
}

/// What: Parse a positive integer, warning on bad input.
///
/// Output:
/// - `Some(n)` for integers > 0, `None` otherwise.
fn parse_positive(key: &str, val: &str) -> Option<u64> {
    match val.parse::<u64>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            tracing::warn!(key, value = val, "[Config] Ignoring invalid number");
            None
        }
    }
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to populate (existing values act as defaults)
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `key = value` lines; keys are lowercased and `.`, `-` and spaces map to `_`.
/// - Language codes are stored verbatim; validation happens when the session
///   configuration is built.
/// - Unknown keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = line.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "lang_from" | "lang1" | "source" | "from" => {
                settings.lang_from = val.to_string();
            }
            "lang_to" | "lang2" | "target" | "to" => {
                settings.lang_to = val.to_string();
            }
            "debounce_ms" | "debounce" => {
                if let Some(v) = parse_positive(&key, val) {
                    settings.debounce_ms = v;
                }
            }
            "request_timeout_secs" | "timeout_secs" | "timeout" => {
                if let Some(v) = parse_positive(&key, val) {
                    settings.request_timeout_secs = v;
                }
            }
            "backend_url" | "endpoint" => {
                if !val.is_empty() {
                    settings.backend_url = val.to_string();
                }
            }
            _ => {
                tracing::debug!(key = %key, "[Config] Ignoring unknown setting");
            }
        }
    }
}
