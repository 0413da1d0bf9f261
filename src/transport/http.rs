//! `reqwest`-backed transport.
//!
//! Resolves command paths against a base URL of the form
//! `http://<host>:<port><prefix>` and exchanges JSON bodies.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::{debug, trace};
use url::Url;

use crate::error::Result;
use crate::protocol::{Command, Method, STATUS_OK, WireResponse};

use super::Transport;

// ============================================================================
// Constants
// ============================================================================

/// Default deadline for one request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type sent with JSON bodies.
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// ============================================================================
// HttpTransport
// ============================================================================

/// HTTP transport to a WebDriver remote end.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use wire_webdriver::transport::HttpTransport;
///
/// let transport = HttpTransport::new("127.0.0.1", 4444, "/", Duration::from_secs(10))?;
/// assert_eq!(transport.base_url().as_str(), "http://127.0.0.1:4444/");
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    /// Pooled HTTP client.
    client: Client,
    /// Base URL, always ending in `/`.
    base_url: Url,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Creates a transport for `http://<host>:<port><url_prefix>`.
    ///
    /// # Arguments
    ///
    /// * `host` - Remote end host name or IPv4 address
    /// * `port` - Remote end port
    /// * `url_prefix` - Path prefix, e.g. `/` or `/wd/hub`
    /// * `timeout` - Deadline applied to every request
    ///
    /// # Errors
    ///
    /// - [`Error::Url`](crate::Error::Url) if the base URL is invalid
    /// - [`Error::Http`](crate::Error::Http) if the client cannot be built
    pub fn new(host: &str, port: u16, url_prefix: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(&format!(
            "http://{host}:{port}{}",
            normalize_prefix(url_prefix)
        ))?;
        let client = Client::builder().timeout(timeout).build()?;

        debug!(
            base_url = %base_url,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            "HTTP transport created"
        );

        Ok(Self { client, base_url })
    }

    /// Returns the base URL commands are resolved against.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a command path against the base URL.
    fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, command: &Command, headers: Option<&HeaderMap>) -> Result<WireResponse> {
        let url = self.url_for(&command.path)?;
        let mut request = self.client.request(command.method.clone(), url);

        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }

        // POST endpoints reject an empty body; send `{}` instead.
        let body = match (&command.body, &command.method) {
            (Some(body), _) => Some(body.clone()),
            (None, &Method::POST) => Some(json!({})),
            (None, _) => None,
        };

        if let Some(body) = body {
            trace!(command = %command, body = %body, "Sending body");
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                .body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = parse_body(status, &bytes)?;

        trace!(command = %command, status, body = %body, "Received response");

        Ok(WireResponse::new(status, body))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Decodes a reply body.
///
/// | Body | Status | Result |
/// |------|--------|--------|
/// | blank | any | `null` |
/// | JSON | any | the parsed value |
/// | not JSON | non-200 | `{"value": {"message": <text>}}` |
/// | not JSON | 200 | [`Error::Json`](crate::Error::Json) |
///
/// Proxies in front of a remote end answer failures with HTML or plain
/// text; those replies keep their status so they classify as protocol
/// errors.
fn parse_body(status: u16, bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice(bytes) {
        Ok(body) => Ok(body),
        Err(_) if status != STATUS_OK => {
            let text = String::from_utf8_lossy(bytes);
            Ok(json!({ "value": { "message": text.trim() } }))
        }
        Err(e) => Err(e.into()),
    }
}

/// Ensures the prefix starts and ends with `/`.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

// ============================================================================
// Tests
// ============================================================================
