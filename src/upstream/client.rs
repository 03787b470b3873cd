//! Dictionary entries client.
//!
//! # Responsibilities
//! - Template `{base}/entries/{lang}/{word}` with the fixed field selection
//! - Inject credentials as request headers
//! - Issue exactly one GET per lookup and decode the JSON body
//!
//! # Design Decisions
//! - The HTTP transport is injected per instance, never a process global
//! - The base URL is validated when the client is built, not per call
//! - Upstream status codes are not branched on; a body that does not decode
//!   is a failure whatever the status was
//! - No retries, no caching, no timeout beyond the transport's own

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::upstream::types::EntriesResponse;

/// Oxford Dictionaries API v2 base address.
pub const DEFAULT_BASE_URL: &str = "https://od-api.oxforddictionaries.com/api/v2";

/// Locale substituted when a lookup does not name one.
pub const DEFAULT_LANG: &str = "en-us";

const ENTRY_FIELDS: &str = "definitions,domains,etymologies,examples,pronunciations";

/// Errors that can occur during a dictionary lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Base URL is not an absolute http(s) URL that can carry a path.
    #[error("invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),

    /// Connection, TLS, request building or body read failed.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream body was not an entries document.
    #[error("failed to decode upstream response (status {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::InvalidBaseUrl(_) => "config",
            LookupError::Transport(_) => "transport",
            LookupError::Decode { .. } => "decode",
        }
    }
}

/// Parse and check an upstream base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, LookupError> {
    let url = Url::parse(raw).map_err(|e| LookupError::InvalidBaseUrl(e.to_string()))?;
    check_base_url(&url)?;
    Ok(url)
}

fn check_base_url(url: &Url) -> Result<(), LookupError> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LookupError::InvalidBaseUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(LookupError::InvalidBaseUrl(format!(
            "'{}' cannot carry path segments",
            url
        )));
    }
    Ok(())
}

/// Client for the provider's entries endpoint.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DictionaryClient {
    /// Create a client over the given transport and base URL.
    pub fn new(http: reqwest::Client, base_url: Url) -> Result<Self, LookupError> {
        check_base_url(&base_url)?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the entries URL for a lookup. An empty `lang` becomes [`DEFAULT_LANG`].
    ///
    /// `lang` and `word` are each appended as one percent-encoded path segment.
    pub fn entry_url(&self, lang: &str, word: &str) -> Result<Url, LookupError> {
        let lang = if lang.is_empty() { DEFAULT_LANG } else { lang };

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("entries")
            .push(lang)
            .push(word);
        url.query_pairs_mut()
            .append_pair("fields", ENTRY_FIELDS)
            .append_pair("strictMatch", "false");

        Ok(url)
    }

    /// Look up `word` and decode the provider's entries document.
    pub async fn lookup(
        &self,
        app_id: &str,
        app_key: &str,
        lang: &str,
        word: &str,
    ) -> Result<EntriesResponse, LookupError> {
        let url = self.entry_url(lang, word)?;

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header("app_id", app_id)
            .header("app_key", app_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| LookupError::Decode { status, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> DictionaryClient {
        DictionaryClient::new(reqwest::Client::new(), Url::parse(base).unwrap()).unwrap()
    }

    fn query(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_entry_url_shape() {
        let url = client(DEFAULT_BASE_URL).entry_url("en-gb", "run").unwrap();
        assert_eq!(url.host_str(), Some("od-api.oxforddictionaries.com"));
        assert_eq!(url.path(), "/api/v2/entries/en-gb/run");
        assert_eq!(
            query(&url),
            vec![
                ("fields".to_string(), ENTRY_FIELDS.to_string()),
                ("strictMatch".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_lang_uses_default() {
        let url = client(DEFAULT_BASE_URL).entry_url("", "run").unwrap();
        assert_eq!(url.path(), "/api/v2/entries/en-us/run");
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = client("http://127.0.0.1:9000/api/v2/").entry_url("es", "correr").unwrap();
        assert_eq!(url.path(), "/api/v2/entries/es/correr");
    }

    #[test]
    fn test_word_is_a_single_segment() {
        let url = client("http://127.0.0.1:9000").entry_url("en-us", "ad hoc/x").unwrap();
        assert_eq!(url.path(), "/entries/en-us/ad%20hoc%2Fx");
    }

    #[test]
    fn test_url_never_carries_credentials() {
        let url = client(DEFAULT_BASE_URL).entry_url("", "run").unwrap();
        assert!(url.username().is_empty());
        assert!(url.password().is_none());
        assert!(query(&url)
            .iter()
            .all(|(k, _)| k != "app_id" && k != "app_key"));
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(LookupError::InvalidBaseUrl(_))
        ));
        assert!(parse_base_url("ftp://example.com/").is_err());
        assert!(parse_base_url("data:text/plain,hello").is_err());
        assert!(parse_base_url(DEFAULT_BASE_URL).is_ok());

        let opaque = Url::parse("mailto:someone@example.com").unwrap();
        assert!(DictionaryClient::new(reqwest::Client::new(), opaque).is_err());
    }

    #[test]
    fn test_error_kinds() {
        let err = LookupError::InvalidBaseUrl("x".into());
        assert_eq!(err.kind(), "config");

        let source = serde_json::from_str::<EntriesResponse>("nope").unwrap_err();
        let err = LookupError::Decode {
            status: StatusCode::FORBIDDEN,
            source,
        };
        assert_eq!(err.kind(), "decode");
        assert!(err.to_string().contains("403"));
    }
}
