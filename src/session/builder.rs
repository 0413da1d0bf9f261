//! Builder pattern for session configuration.
//!
//! Provides a fluent API for configuring and creating [`Session`] instances.
//! Building a session does not contact the remote end; the session is
//! created by [`Session::start`] or by the first session-scoped command.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use wire_webdriver::Session;
//!
//! # fn example() -> wire_webdriver::Result<()> {
//! let session = Session::builder()
//!     .host("127.0.0.1")
//!     .port(4444)
//!     .url_prefix("/wd/hub")
//!     .desired_capabilities(json!({"browserName": "firefox"}))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::protocol::{Capabilities, CapabilitiesShape};
use crate::transport::{DEFAULT_HTTP_TIMEOUT, HttpTransport, Transport};

use super::core::{ExtensionFactory, Session, WeakSession};

// ============================================================================
// Constants
// ============================================================================

/// Default remote end host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default remote end port.
pub const DEFAULT_PORT: u16 = 4444;

/// Default URL path prefix.
pub const DEFAULT_URL_PREFIX: &str = "/";

// ============================================================================
// SessionBuilder
// ============================================================================

/// Builder for configuring a [`Session`] instance.
///
/// Use [`Session::builder()`] to create a new builder.
#[derive(Clone)]
pub struct SessionBuilder {
    /// Remote end host.
    host: String,
    /// Remote end port.
    port: u16,
    /// URL path prefix.
    url_prefix: String,
    /// Desired capability set.
    desired: Option<Value>,
    /// Required capability set.
    required: Option<Value>,
    /// Per-request deadline.
    timeout: Duration,
    /// Creation body envelope.
    shape: CapabilitiesShape,
    /// Extension constructor run at start.
    extension_factory: Option<ExtensionFactory>,
    /// Transport override (replaces the HTTP transport).
    transport: Option<Arc<dyn Transport>>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            desired: None,
            required: None,
            timeout: DEFAULT_HTTP_TIMEOUT,
            shape: CapabilitiesShape::default(),
            extension_factory: None,
            transport: None,
        }
    }
}

impl fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("url_prefix", &self.url_prefix)
            .field("desired", &self.desired)
            .field("required", &self.required)
            .field("timeout", &self.timeout)
            .field("shape", &self.shape)
            .field("extension", &self.extension_factory.is_some())
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

// ============================================================================
// SessionBuilder Implementation
// ============================================================================

impl SessionBuilder {
    /// Creates a builder pointing at `http://127.0.0.1:4444/`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the remote end host.
    #[inline]
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the remote end port.
    #[inline]
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the URL path prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Path prefix, e.g. `/` or `/wd/hub`
    #[inline]
    #[must_use]
    pub fn url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Sets the desired capability set sent at session creation.
    #[inline]
    #[must_use]
    pub fn desired_capabilities(mut self, capabilities: Value) -> Self {
        self.desired = Some(capabilities);
        self
    }

    /// Sets the required capability set sent at session creation.
    #[inline]
    #[must_use]
    pub fn required_capabilities(mut self, capabilities: Value) -> Self {
        self.required = Some(capabilities);
        self
    }

    /// Sets the deadline applied to every request.
    #[inline]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the envelope of the session creation body.
    #[inline]
    #[must_use]
    pub fn capabilities_shape(mut self, shape: CapabilitiesShape) -> Self {
        self.shape = shape;
        self
    }

    /// Registers a constructor for a session extension.
    ///
    /// `factory` runs right after each successful start; its result is
    /// available through [`Session::extension`] until the session ends.
    /// The extension may keep the [`WeakSession`] it is given; it must not
    /// keep an upgraded [`Session`].
    #[must_use]
    pub fn extension<F, T>(mut self, factory: F) -> Self
    where
        F: Fn(WeakSession) -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.extension_factory = Some(Arc::new(move |session: WeakSession| {
            Arc::new(factory(session)) as Arc<dyn Any + Send + Sync>
        }));
        self
    }

    /// Replaces the HTTP transport.
    ///
    /// Host, port, prefix and timeout are ignored when a transport is set.
    #[inline]
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the session with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if host is empty, port is 0 or timeout is zero
    /// - [`Error::Url`] if the base URL cannot be formed
    /// - [`Error::Http`] if the HTTP client cannot be built
    pub fn build(self) -> Result<Session> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                Self::validate(&self.host, self.port, self.timeout)?;
                Arc::new(HttpTransport::new(
                    &self.host,
                    self.port,
                    &self.url_prefix,
                    self.timeout,
                )?)
            }
        };

        let capabilities = Capabilities {
            desired: self.desired,
            required: self.required,
        };

        Ok(Session::new(
            transport,
            capabilities,
            self.shape,
            self.extension_factory,
        ))
    }
}

// ============================================================================
// Validation
// ============================================================================

impl SessionBuilder {
    fn validate(host: &str, port: u16, timeout: Duration) -> Result<()> {
        if host.trim().is_empty() {
            return Err(Error::config(
                "Host is required. Use .host() to set it.\n\
                 Example: Session::builder().host(\"127.0.0.1\")",
            ));
        }

        if port == 0 {
            return Err(Error::config(
                "Port must be non-zero. Use .port() to set it.\n\
                 Example: Session::builder().port(4444)",
            ));
        }

        if timeout.is_zero() {
            return Err(Error::config("Request timeout must be greater than zero"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
