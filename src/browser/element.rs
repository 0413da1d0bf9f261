//! Remote DOM element handles.
//!
//! An [`Element`] wraps a server-issued element id. Handles are minted by
//! the session's registry, so within one live session the same id always
//! yields the same handle (see [`Element::same_handle`]).
//!
//! Every operation is a session-scoped command on
//! `session/<id>/element/<element id>/...`. Once the session that minted
//! a handle has ended, the handle is stale and every operation fails with
//! [`Error::StaleElement`].
//!
//! # Example
//!
//! ```ignore
//! use wire_webdriver::By;
//!
//! let form = session.find().css_first("form#login").await?;
//! let email = form.find_element(By::name("email")).await?;
//!
//! email.clear().await?;
//! email.send_keys("user@example.com").await?;
//!
//! let rect = email.rect().await?;
//! let text = form.text().await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{Error, Result};
use crate::identifiers::{ElementId, SessionId};
use crate::protocol::{ELEMENT_KEY, Method};
use crate::session::{Session, SessionScoped};

use super::selector::By;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for an element.
pub(crate) struct ElementInner {
    /// Server-issued element id.
    pub id: ElementId,

    /// Session id the handle was minted under.
    pub session_id: SessionId,

    /// Owning session.
    pub session: Session,
}

/// Element position and size in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Rect {
    /// Left edge relative to the document.
    pub x: f64,
    /// Top edge relative to the document.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

// ============================================================================
// Element
// ============================================================================

/// A handle to a DOM element held by the remote end.
#[derive(Clone)]
pub struct Element {
    /// Shared inner state.
    pub(crate) inner: Arc<ElementInner>,
}

// ============================================================================
// Element - Display
// ============================================================================

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("session_id", &self.inner.session_id)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Element - Constructor
// ============================================================================

impl Element {
    /// Creates a new, unregistered element handle.
    pub(crate) fn new(session: Session, id: ElementId, session_id: SessionId) -> Self {
        Self {
            inner: Arc::new(ElementInner {
                id,
                session_id,
                session,
            }),
        }
    }
}

// ============================================================================
// Element - Accessors
// ============================================================================

impl Element {
    /// Returns the server-issued element id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.inner.id
    }

    /// Returns the session id this handle was minted under.
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.inner.session_id
    }

    /// Returns `true` if both values are the same registry handle.
    #[inline]
    #[must_use]
    pub fn same_handle(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns `true` while the minting session is still active.
    #[inline]
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.inner.session.is_current(&self.inner.session_id)
    }

    /// Returns the protocol element reference `{"element-6066-...": id}`.
    ///
    /// Use this wherever a command parameter expects an element.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ ELEMENT_KEY: self.inner.id })
    }
}

impl SessionScoped for Element {
    fn session(&self) -> &Session {
        &self.inner.session
    }
}

// ============================================================================
// Element - Actions
// ============================================================================

impl Element {
    /// Clicks the element.
    pub async fn click(&self) -> Result<()> {
        debug!(element_id = %self.inner.id, "Clicking element");
        self.execute(Method::POST, "click", Some(json!({}))).await?;
        Ok(())
    }

    /// Taps the element (touch input).
    pub async fn tap(&self) -> Result<()> {
        debug!(element_id = %self.inner.id, "Tapping element");
        self.execute(Method::POST, "tap", Some(json!({}))).await?;
        Ok(())
    }

    /// Clears an editable or resettable element.
    pub async fn clear(&self) -> Result<()> {
        debug!(element_id = %self.inner.id, "Clearing element");
        self.execute(Method::POST, "clear", Some(json!({}))).await?;
        Ok(())
    }

    /// Types text into the element, one character at a time.
    ///
    /// Embed [`Key`](super::Key) values for special keys.
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        debug!(element_id = %self.inner.id, text_len = text.len(), "Sending keys");

        let chars: Vec<String> = text.chars().map(String::from).collect();
        self.execute(Method::POST, "value", Some(json!({ "value": chars })))
            .await?;
        Ok(())
    }
}

// ============================================================================
// Element - Properties
// ============================================================================

impl Element {
    /// Gets the element's rendered text.
    pub async fn text(&self) -> Result<String> {
        self.execute_string("text").await
    }

    /// Gets the element's tag name.
    pub async fn name(&self) -> Result<String> {
        self.execute_string("name").await
    }

    /// Gets an attribute value.
    ///
    /// Returns `None` if the attribute is absent or empty.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let value = self
            .execute(Method::GET, &format!("attribute/{}", urlencoding::encode(name)), None)
            .await?;
        Ok(value.and_then(|v| v.as_str().map(str::to_string)))
    }

    /// Gets a DOM property value.
    ///
    /// Returns `None` for `null`, `""`, `[]` and `{}`.
    pub async fn property(&self, name: &str) -> Result<Option<Value>> {
        self.execute(Method::GET, &format!("property/{}", urlencoding::encode(name)), None)
            .await
    }

    /// Gets the computed value of a CSS property.
    pub async fn style(&self, property_name: &str) -> Result<String> {
        self.execute_string(&format!("css/{}", urlencoding::encode(property_name)))
            .await
    }

    /// Gets the element's position and size.
    pub async fn rect(&self) -> Result<Rect> {
        match self.execute(Method::GET, "rect", None).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Rect::default()),
        }
    }
}

// ============================================================================
// Element - Nested Search
// ============================================================================

impl Element {
    /// Finds the first descendant matching `by`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use wire_webdriver::By;
    ///
    /// let form = session.find().element(By::id("login-form")).await?;
    /// let btn = form.find_element(By::css("button[type='submit']")).await?;
    /// ```
    pub async fn find_element(&self, by: impl Into<By>) -> Result<Element> {
        let by = by.into();
        let value = self.execute(Method::POST, "element", Some(by.to_json())).await?;

        let value = value.ok_or_else(|| {
            Error::invalid_response(format!("empty result for {} {}", by.strategy(), by.value()))
        })?;
        self.inner.session.element(&value)
    }

    /// Finds all descendants matching `by`.
    pub async fn find_elements(&self, by: impl Into<By>) -> Result<Vec<Element>> {
        let by = by.into();
        let value = self.execute(Method::POST, "elements", Some(by.to_json())).await?;
        self.inner.session.elements(value)
    }
}

// ============================================================================
// Element - Internal
// ============================================================================

impl Element {
    /// Returns the element-relative command path.
    fn path(&self, suffix: &str) -> String {
        format!(
            "element/{}/{}",
            urlencoding::encode(self.inner.id.as_str()),
            suffix
        )
    }

    /// Sends an element-scoped command.
    ///
    /// Fails with [`Error::StaleElement`] if the minting session ended.
    async fn execute(
        &self,
        method: Method,
        suffix: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        if !self.is_live() {
            return Err(Error::stale_element(self.inner.id.clone()));
        }
        self.session().execute(method, &self.path(suffix), body).await
    }

    /// Sends a `GET` and returns the value as a string (empty if none).
    async fn execute_string(&self, suffix: &str) -> Result<String> {
        let value = self.execute(Method::GET, suffix, None).await?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
