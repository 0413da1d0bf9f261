//! Command values and session path composition.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde_json::Value;

use crate::identifiers::SessionId;

pub use reqwest::Method;

// ============================================================================
// Command
// ============================================================================

/// One protocol command: HTTP method, request path, optional JSON body.
///
/// Paths are relative to the transport's base URL, e.g. `session` or
/// `session/abc123/window/rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// HTTP method.
    pub method: Method,

    /// Request path relative to the remote end's base URL.
    pub path: String,

    /// JSON body, if any.
    pub body: Option<Value>,
}

impl Command {
    /// Creates a command without a body.
    #[inline]
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[inline]
    #[must_use]
    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }

    /// Shorthand for a `GET` command.
    #[inline]
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a `POST` command.
    #[inline]
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(Some(body))
    }

    /// Shorthand for a `DELETE` command.
    #[inline]
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

// ============================================================================
// Path Composition
// ============================================================================

/// Joins `session/<id>/` with a session-relative command path.
///
/// Leading separators on `relative` are dropped so the result never
/// contains `//`. An empty `relative` yields `session/<id>`.
#[must_use]
pub fn session_path(session_id: &SessionId, relative: &str) -> String {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        format!("session/{session_id}")
    } else {
        format!("session/{session_id}/{relative}")
    }
}

// ============================================================================
// Tests
// ============================================================================
