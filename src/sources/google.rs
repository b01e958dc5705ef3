//! Google Translate web endpoint (`translate_a/single`, `client=gtx`).

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Url;
use serde_json::Value;

use super::TranslateClient;
use crate::error::BackendError;
use crate::languages::{AUTO_DETECT, LanguageCode, resolve_backend_code};
use crate::state::TranslationResult;

/// Default backend endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Page opened by "Open in Google Translate".
const WEB_UI: &str = "https://translate.google.com/";

/// HTTP client for the Google Translate web endpoint.
#[derive(Clone, Debug)]
pub struct GoogleTranslateClient {
    /// Pooled HTTP client with timeouts applied.
    http: reqwest::Client,
    /// Endpoint without query parameters.
    endpoint: Url,
}

impl GoogleTranslateClient {
    /// What: Build a client for `endpoint` with a per-request timeout.
    ///
    /// Inputs:
    /// - `endpoint`: Absolute URL of the `translate_a/single` endpoint
    /// - `timeout`: Total time allowed for one request
    ///
    /// Output:
    /// - Ready client, or an error when the URL or HTTP client is invalid.
    ///
    /// # Errors
    /// - `Malformed` when `endpoint` does not parse as a URL.
    /// - `Request` when the HTTP client cannot be constructed.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, BackendError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| BackendError::Malformed(format!("invalid endpoint {endpoint}: {e}")))?;
        let http = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .timeout(timeout)
            .user_agent(format!("livetranslate/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Request URL carrying the query parameters for one call.
    fn request_url(&self, text: &str, source: LanguageCode, target: LanguageCode) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", source.as_str())
            .append_pair("tl", target.as_str())
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }

    /// Perform one call and decode the response.
    async fn fetch(
        &self,
        text: String,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<TranslationResult, BackendError> {
        let url = self.request_url(&text, source, target);
        tracing::debug!(
            chars = text.chars().count(),
            %source,
            %target,
            "[Google] Sending translation request"
        );
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "[Google] Non-success response");
            return Err(BackendError::Status {
                code: status.as_u16(),
            });
        }
        let body: Value = response.json().await?;
        parse_response(&body, source)
    }
}

impl TranslateClient for GoogleTranslateClient {
    fn translate(
        &self,
        text: String,
        source: LanguageCode,
        target: LanguageCode,
    ) -> BoxFuture<'_, Result<TranslationResult, BackendError>> {
        self.fetch(text, source, target).boxed()
    }
}

/// What: Decode a `translate_a/single` response body.
///
/// Inputs:
/// - `body`: Parsed JSON, shaped like `[[["Bonjour","Hello",..],..],null,"en",..]`
/// - `requested_source`: Source sent with the request
///
/// Output:
/// - Joined translation segments plus the resolved source language.
///
/// # Errors
/// - `Malformed` when the body is not an array or the segment list has an
///   unexpected shape.
///
/// Details:
/// - A `null` segment list (blank input) yields an empty translation.
/// - For auto-detect requests the detected code at index 2 is mapped through
///   the catalog; unknown codes leave the resolved source as auto-detect.
pub fn parse_response(
    body: &Value,
    requested_source: LanguageCode,
) -> Result<TranslationResult, BackendError> {
    let top = body
        .as_array()
        .ok_or_else(|| BackendError::Malformed("response is not a JSON array".into()))?;
    let translated_text = match top.first() {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(segments)) => segments
            .iter()
            .filter_map(|seg| seg.get(0).and_then(Value::as_str))
            .collect(),
        Some(other) => {
            return Err(BackendError::Malformed(format!(
                "unexpected segment list: {other}"
            )));
        }
    };
    let resolved_source = if requested_source.is_auto() {
        top.get(2)
            .and_then(Value::as_str)
            .and_then(resolve_backend_code)
            .unwrap_or(AUTO_DETECT)
    } else {
        requested_source
    };
    Ok(TranslationResult {
        translated_text,
        resolved_source,
    })
}

/// What: Link that opens the same translation in the Google Translate web UI.
///
/// Inputs:
/// - `text`: Source text
/// - `source`, `target`: Selected languages
///
/// Output:
/// - URL string, e.g. `https://translate.google.com/?sl=auto&tl=fr&text=hi&op=translate`.
#[must_use]
pub fn web_url(text: &str, source: LanguageCode, target: LanguageCode) -> Option<String> {
    Url::parse_with_params(
        WEB_UI,
        &[
            ("sl", source.as_str()),
            ("tl", target.as_str()),
            ("text", text),
            ("op", "translate"),
        ],
    )
    .ok()
    .map(String::from)
}
