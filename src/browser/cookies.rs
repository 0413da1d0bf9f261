//! Cookie access for the current browsing context's document.
//!
//! # Example
//!
//! ```ignore
//! use wire_webdriver::Cookie;
//!
//! let mut cookie = Cookie::new("session", "abc");
//! cookie.path = Some("/".into());
//! session.cookies().set(cookie).await?;
//!
//! let stored = session.cookies().get("session").await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{ErrorKind, Result};
use crate::protocol::Method;
use crate::session::{Session, SessionScoped};

// ============================================================================
// Cookie
// ============================================================================

/// A cookie as serialized on the wire.
///
/// Optional fields are omitted when `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
    /// Domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Secure flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    /// HttpOnly flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    /// SameSite attribute (`Strict`, `Lax` or `None`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
    /// Expiry in seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

impl Cookie {
    /// Creates a cookie with name and value.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Cookies
// ============================================================================

/// Reads and writes cookies.
#[derive(Debug, Clone)]
pub struct Cookies {
    session: Session,
}

impl Cookies {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Returns every cookie visible to the current document.
    pub async fn all(&self) -> Result<Vec<Cookie>> {
        self.session.execute_as(Method::GET, "cookie", None).await
    }

    /// Returns the named cookie, or `None` if it does not exist.
    pub async fn get(&self, name: &str) -> Result<Option<Cookie>> {
        let path = format!("cookie/{}", urlencoding::encode(name));
        match self.session.execute_as::<Option<Cookie>>(Method::GET, &path, None).await {
            Ok(cookie) => Ok(cookie),
            Err(e) if e.kind() == Some(ErrorKind::NoSuchCookie) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Adds a cookie.
    pub async fn set(&self, cookie: Cookie) -> Result<()> {
        debug!(name = %cookie.name, "Setting cookie");
        self.session
            .execute(Method::POST, "cookie", Some(json!({ "cookie": cookie })))
            .await?;
        Ok(())
    }

    /// Deletes the named cookie.
    pub async fn delete(&self, name: &str) -> Result<()> {
        debug!(name, "Deleting cookie");
        let path = format!("cookie/{}", urlencoding::encode(name));
        self.session.execute(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// Deletes every cookie.
    pub async fn clear(&self) -> Result<()> {
        debug!("Clearing cookies");
        self.session.execute(Method::DELETE, "cookie", None).await?;
        Ok(())
    }
}

impl SessionScoped for Cookies {
    fn session(&self) -> &Session {
        &self.session
    }
}

// ============================================================================
// Tests
// ============================================================================
