//! Minimal HTTP client with safe logging and bearer auth.
//!
//! - JSON GETs against a base URL, decoded via serde
//! - Binary GETs for absolute URLs (image bodies, any content type)
//! - Never logs secret values; only the auth kind (bearer/none) appears
//! - Single-attempt semantics: no retries, no backoff, no per-request timeout
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), onboard_http::HttpError> {
//! let client = onboard_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client.get_json("items", None).await?;
//! # Ok(()) }
//! ```
//!
//! Observability: structured `tracing` events are emitted for request start,
//! response status, truncated body snippets, and final errors.

use bytes::Bytes;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

const SNIPPET_MAX: usize = 500;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// A binary response body together with its reported content type.
#[derive(Debug, Clone)]
pub struct BinaryBody {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// Thin wrapper over `reqwest::Client` anchored to a base URL.
#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// ```no_run
    /// use onboard_http::{HttpClient, HttpError};
    ///
    /// let client = HttpClient::new("https://api.example.com")?;
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self { base, inner })
    }

    /// GET a JSON document relative to the base URL, optionally with a
    /// bearer credential. `Accept: application/json` is always sent.
    pub async fn get_json<T>(&self, path: &str, bearer: Option<&str>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;

        let mut rb = self
            .inner
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(tok) = bearer {
            rb = rb.bearer_auth(sanitize_api_key(tok)?);
        }

        let auth_kind = if bearer.is_some() { "bearer" } else { "none" };
        tracing::debug!(
            host_path = %host_path(&url),
            auth_kind,
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = rb
            .send()
            .await
            .map_err(|e| log_network("send", e.to_string()))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| log_network("body", e.to_string()))?;

        tracing::debug!(
            %status,
            duration_ms = t0.elapsed().as_millis() as u64,
            body_len = bytes.len(),
            "http.response"
        );
        let snippet = snip_body(&bytes);
        tracing::trace!(body_snippet = %snippet, "http.response.body_snippet");

        if !status.is_success() {
            let message = extract_error_message(&bytes);
            tracing::warn!(%status, message = %message, body_snippet = %snippet, "http.error");
            return Err(HttpError::Api { status, message });
        }

        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            tracing::warn!(
                serde_line = %e.line(),
                serde_col = %e.column(),
                serde_err = %e.to_string(),
                body_snippet = %snippet,
                "http.response.decode_error"
            );
            HttpError::Decode(e.to_string(), snippet)
        })
    }

    /// GET an arbitrary absolute URL and return the raw body. Any content
    /// type is accepted; non-2xx statuses are surfaced as [`HttpError::Api`].
    pub async fn get_bytes(&self, url: &str) -> Result<BinaryBody, HttpError> {
        let url = Url::parse(url).map_err(|e| HttpError::Url(e.to_string()))?;

        tracing::debug!(host_path = %host_path(&url), "http.request.start");

        let t0 = std::time::Instant::now();
        let resp = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| log_network("send", e.to_string()))?;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| log_network("body", e.to_string()))?;

        tracing::debug!(
            %status,
            duration_ms = t0.elapsed().as_millis() as u64,
            body_len = bytes.len(),
            content_type = content_type.as_deref().unwrap_or("-"),
            "http.response"
        );

        if !status.is_success() {
            let message = extract_error_message(&bytes);
            tracing::warn!(%status, message = %message, "http.error");
            return Err(HttpError::Api { status, message });
        }

        Ok(BinaryBody {
            bytes,
            content_type,
        })
    }
}

// ==============================
// Helpers
// ==============================

fn log_network(phase: &str, message: String) -> HttpError {
    tracing::warn!(phase, message = %message, "http.network_error");
    HttpError::Network(message)
}

/// Host + path for logging; never includes query strings or credentials.
fn host_path(url: &Url) -> String {
    format!("{}{}", url.domain().unwrap_or("-"), url.path())
}

/// Pull a human-readable message out of a JSON error body, falling back to a
/// truncated body snippet.
fn extract_error_message(body: &[u8]) -> String {
    // Generic: {"message":"..."} or {"detail":"..."} or {"error":"..."}
    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.detail.is_empty() {
            return m.detail;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > SNIPPET_MAX {
        snip.truncate(SNIPPET_MAX);
        snip.push_str("...");
    }
    snip
}

/// Trim quotes/whitespace out of a pasted API key and reject values that
/// cannot form a valid Authorization header.
fn sanitize_api_key(raw: &str) -> Result<String, HttpError> {
    let mut s = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    s.retain(|ch| !ch.is_ascii_whitespace());

    if !s.is_ascii() {
        return Err(HttpError::Build("API key contains non-ASCII bytes".into()));
    }
    if s.bytes().any(|b| b < 0x20 || b == 0x7F) {
        return Err(HttpError::Build(
            "API key contains control characters".into(),
        ));
    }

    HeaderValue::from_str(&format!("Bearer {}", s))
        .map_err(|e| HttpError::Build(format!("invalid Authorization header: {e}")))?;
    Ok(s)
}
