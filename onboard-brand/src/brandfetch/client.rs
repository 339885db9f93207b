//! Lookup client for the Brandfetch brand endpoint.
//!
//! [`BrandClient`] does the single authenticated GET and returns typed
//! results; [`LookupSession`] layers the UI-facing in-flight flag and
//! last-error message on top, converting failures to `None`.
use bytes::Bytes;
use onboard_http::{BinaryBody, HttpClient, HttpError};
use thiserror::Error;

use super::extract::extract_domain;
use super::types::CompanyRecord;

/// Failure modes of a single lookup. Transport and decode failures both
/// read as "try again or enter details manually" in the UI, but stay
/// distinct for logging.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid URL or domain")]
    Validation,
    #[error("Company not found. Please enter details manually.")]
    NotFound,
    #[error("Failed to fetch company data: {0}")]
    Transport(String),
    #[error("Malformed company data: {0}")]
    Decode(String),
}

impl From<HttpError> for LookupError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Api { status, message } => {
                if status.as_u16() == 404 {
                    LookupError::NotFound
                } else {
                    LookupError::Transport(
                        status
                            .canonical_reason()
                            .map(str::to_string)
                            .unwrap_or(message),
                    )
                }
            }
            HttpError::Decode(msg, _) => LookupError::Decode(msg),
            HttpError::Url(msg) | HttpError::Build(msg) | HttpError::Network(msg) => {
                LookupError::Transport(msg)
            }
        }
    }
}

/// An image fetched into memory, ready to be attached to the form as a
/// named file: body bytes plus the filename and reported content type.
#[derive(Debug, Clone)]
pub struct DownloadedImage {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Minimal client for the Brandfetch brand endpoint.
#[derive(Clone)]
pub struct BrandClient {
    http: HttpClient,
    api_key: String,
}

impl BrandClient {
    /// Construct a client for `base_url` (e.g.
    /// `https://api.brandfetch.io/v2/brands`) and a bearer credential.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, HttpError> {
        // The base must end in '/' or joining the domain would replace the
        // last path segment.
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Ok(Self {
            http: HttpClient::new(&base)?,
            api_key: api_key.into(),
        })
    }

    /// Look up the company record for a raw URL/email/domain string.
    ///
    /// The input is normalised first; unusable input fails with
    /// [`LookupError::Validation`] before any network traffic.
    pub async fn fetch_company(&self, url_or_domain: &str) -> Result<CompanyRecord, LookupError> {
        let domain = extract_domain(url_or_domain).ok_or(LookupError::Validation)?;
        tracing::debug!(%domain, "brandfetch.lookup");

        let record = self
            .http
            .get_json::<CompanyRecord>(&domain, Some(&self.api_key))
            .await?;
        Ok(record)
    }

    /// Fetch an image body and wrap it as a named in-memory file. Any
    /// failure is logged and yields `None`; download problems never block
    /// the rest of the prefill flow.
    pub async fn download_image(
        &self,
        image_url: &str,
        filename: &str,
    ) -> Option<DownloadedImage> {
        match self.http.get_bytes(image_url).await {
            Ok(BinaryBody {
                bytes,
                content_type,
            }) => Some(DownloadedImage {
                filename: filename.to_string(),
                content_type,
                bytes,
            }),
            Err(e) => {
                tracing::warn!(image_url, error = %e, "image download failed");
                None
            }
        }
    }
}

/// Stateful lookup surface for the UI layer.
///
/// Owns the in-flight flag and the last error message; `&mut self` on
/// [`LookupSession::lookup`] enforces single-writer-at-a-time use, so the
/// flag and message always describe the most recent call.
pub struct LookupSession {
    client: BrandClient,
    in_flight: bool,
    last_error: Option<String>,
}

impl LookupSession {
    pub fn new(client: BrandClient) -> Self {
        Self {
            client,
            in_flight: false,
            last_error: None,
        }
    }

    /// True only while a lookup is executing.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Message from the most recent failed lookup; cleared when a new call
    /// starts. A `None` result from [`LookupSession::lookup`] means "see
    /// this".
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run one lookup, recording any failure as a human-readable message
    /// and resolving to `None` instead of propagating it.
    pub async fn lookup(&mut self, url_or_domain: &str) -> Option<CompanyRecord> {
        self.in_flight = true;
        self.last_error = None;

        let result = self.client.fetch_company(url_or_domain).await;
        self.in_flight = false;

        match result {
            Ok(record) => Some(record),
            Err(e) => {
                let message = e.to_string();
                tracing::error!(error = %message, "company lookup failed");
                self.last_error = Some(message);
                None
            }
        }
    }

    /// See [`BrandClient::download_image`].
    pub async fn download_image(
        &self,
        image_url: &str,
        filename: &str,
    ) -> Option<DownloadedImage> {
        self.client.download_image(image_url, filename).await
    }
}
