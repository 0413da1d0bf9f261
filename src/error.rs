//! Error types for the WebDriver client.
//!
//! Every fallible operation returns [`Result<T>`] which uses [`Error`].
//! Remote ends report failures as a non-200 status with a body of the form
//! `{"value": {"error": "<code>", "message": "..."}}`; the error code is
//! classified into an [`ErrorKind`] by [`ErrorKind::from_code`].
//!
//! # Usage
//!
//! ```ignore
//! use wire_webdriver::{Error, ErrorKind, Result};
//!
//! async fn example(session: &Session) -> Result<()> {
//!     match session.find().css_first("#missing").await {
//!         Err(e) if e.kind() == Some(ErrorKind::NoSuchElement) => {}
//!         other => { other?; }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Session | [`Error::SessionNotCreated`], [`Error::StaleElement`] |
//! | Protocol | [`Error::Protocol`], [`Error::InvalidResponse`] |
//! | External | [`Error::Http`], [`Error::Json`], [`Error::Url`] |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error;

use crate::identifiers::ElementId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// ErrorKind
// ============================================================================

/// Classified protocol error kind.
///
/// One variant per error code of the WebDriver specification, plus
/// [`ErrorKind::Generic`] for codes this client does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `element click intercepted`
    ElementClickIntercepted,
    /// `element not interactable`
    ElementNotInteractable,
    /// `insecure certificate`
    InsecureCertificate,
    /// `invalid argument`
    InvalidArgument,
    /// `invalid cookie domain`
    InvalidCookieDomain,
    /// `invalid element state`
    InvalidElementState,
    /// `invalid selector`
    InvalidSelector,
    /// `invalid session id`
    InvalidSessionId,
    /// `javascript error`
    JavascriptError,
    /// `move target out of bounds`
    MoveTargetOutOfBounds,
    /// `no such alert`
    NoSuchAlert,
    /// `no such cookie`
    NoSuchCookie,
    /// `no such element`
    NoSuchElement,
    /// `no such frame`
    NoSuchFrame,
    /// `no such window`
    NoSuchWindow,
    /// `script timeout`
    ScriptTimeout,
    /// `session not created`
    SessionNotCreated,
    /// `stale element reference`
    StaleElementReference,
    /// `timeout`
    Timeout,
    /// `unable to set cookie`
    UnableToSetCookie,
    /// `unable to capture screen`
    UnableToCaptureScreen,
    /// `unexpected alert open`
    UnexpectedAlertOpen,
    /// `unknown command`
    UnknownCommand,
    /// `unknown error`
    UnknownError,
    /// `unknown method`
    UnknownMethod,
    /// `unsupported operation`
    UnsupportedOperation,
    /// Absent or unrecognized error code.
    Generic,
}

impl ErrorKind {
    /// Every classified kind, excluding [`ErrorKind::Generic`].
    pub const ALL: [ErrorKind; 26] = [
        Self::ElementClickIntercepted,
        Self::ElementNotInteractable,
        Self::InsecureCertificate,
        Self::InvalidArgument,
        Self::InvalidCookieDomain,
        Self::InvalidElementState,
        Self::InvalidSelector,
        Self::InvalidSessionId,
        Self::JavascriptError,
        Self::MoveTargetOutOfBounds,
        Self::NoSuchAlert,
        Self::NoSuchCookie,
        Self::NoSuchElement,
        Self::NoSuchFrame,
        Self::NoSuchWindow,
        Self::ScriptTimeout,
        Self::SessionNotCreated,
        Self::StaleElementReference,
        Self::Timeout,
        Self::UnableToSetCookie,
        Self::UnableToCaptureScreen,
        Self::UnexpectedAlertOpen,
        Self::UnknownCommand,
        Self::UnknownError,
        Self::UnknownMethod,
        Self::UnsupportedOperation,
    ];

    /// Classifies a protocol error code.
    ///
    /// Returns [`ErrorKind::Generic`] when `code` is absent or unrecognized.
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code else {
            return Self::Generic;
        };

        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .unwrap_or(Self::Generic)
    }

    /// Returns the wire error code for this kind.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ElementClickIntercepted => "element click intercepted",
            Self::ElementNotInteractable => "element not interactable",
            Self::InsecureCertificate => "insecure certificate",
            Self::InvalidArgument => "invalid argument",
            Self::InvalidCookieDomain => "invalid cookie domain",
            Self::InvalidElementState => "invalid element state",
            Self::InvalidSelector => "invalid selector",
            Self::InvalidSessionId => "invalid session id",
            Self::JavascriptError => "javascript error",
            Self::MoveTargetOutOfBounds => "move target out of bounds",
            Self::NoSuchAlert => "no such alert",
            Self::NoSuchCookie => "no such cookie",
            Self::NoSuchElement => "no such element",
            Self::NoSuchFrame => "no such frame",
            Self::NoSuchWindow => "no such window",
            Self::ScriptTimeout => "script timeout",
            Self::SessionNotCreated => "session not created",
            Self::StaleElementReference => "stale element reference",
            Self::Timeout => "timeout",
            Self::UnableToSetCookie => "unable to set cookie",
            Self::UnableToCaptureScreen => "unable to capture screen",
            Self::UnexpectedAlertOpen => "unexpected alert open",
            Self::UnknownCommand => "unknown command",
            Self::UnknownError => "unknown error",
            Self::UnknownMethod => "unknown method",
            Self::UnsupportedOperation => "unsupported operation",
            Self::Generic => "webdriver error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned by [`SessionBuilder::build`](crate::SessionBuilder::build)
    /// when the configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Session Errors
    // ========================================================================
    /// A session-scoped command was sent with no active session.
    #[error("Session not created: {message}")]
    SessionNotCreated {
        /// Description of the failure.
        message: String,
    },

    /// Element handle belongs to a session that has ended.
    #[error("Stale element: {element_id}")]
    StaleElement {
        /// The stale element's ID.
        element_id: ElementId,
    },

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// The remote end answered with a non-success status.
    #[error("{kind}: {message}")]
    Protocol {
        /// Classified error code.
        kind: ErrorKind,
        /// Message reported by the remote end.
        message: String,
    },

    /// A success response did not have the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of the malformed payload.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parse error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a session not created error.
    #[inline]
    pub fn session_not_created(message: impl Into<String>) -> Self {
        Self::SessionNotCreated {
            message: message.into(),
        }
    }

    /// Creates a stale element error.
    #[inline]
    pub fn stale_element(element_id: ElementId) -> Self {
        Self::StaleElement { element_id }
    }

    /// Creates a classified protocol error.
    #[inline]
    pub fn protocol(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Protocol {
            kind,
            message: message.into(),
        }
    }

    /// Creates an invalid response error.
    #[inline]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns the classified kind for protocol errors.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Protocol { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if no session exists or the remote end refused one.
    #[inline]
    #[must_use]
    pub fn is_session_not_created(&self) -> bool {
        matches!(
            self,
            Self::SessionNotCreated { .. }
                | Self::Protocol {
                    kind: ErrorKind::SessionNotCreated,
                    ..
                }
        )
    }

    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Protocol { kind, .. } => {
                matches!(kind, ErrorKind::Timeout | ErrorKind::ScriptTimeout)
            }
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if the element reference is no longer usable.
    #[inline]
    #[must_use]
    pub fn is_stale_element(&self) -> bool {
        matches!(
            self,
            Self::StaleElement { .. }
                | Self::Protocol {
                    kind: ErrorKind::StaleElementReference,
                    ..
                }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::protocol(ErrorKind::NoSuchElement, "Unable to locate #x");
        assert_eq!(err.to_string(), "no such element: Unable to locate #x");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("host must not be empty");
        assert_eq!(err.to_string(), "Configuration error: host must not be empty");
    }

    #[test]
    fn test_from_code_known() {
        assert_eq!(
            ErrorKind::from_code(Some("no such window")),
            ErrorKind::NoSuchWindow
        );
        assert_eq!(
            ErrorKind::from_code(Some("session not created")),
            ErrorKind::SessionNotCreated
        );
    }

    #[test]
    fn test_from_code_defaults_to_generic() {
        assert_eq!(ErrorKind::from_code(None), ErrorKind::Generic);
        assert_eq!(ErrorKind::from_code(Some("")), ErrorKind::Generic);
        assert_eq!(
            ErrorKind::from_code(Some("made up error")),
            ErrorKind::Generic
        );
    }

    #[test]
    fn test_every_code_round_trips() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(Some(kind.code())), kind);
        }
    }

    #[test]
    fn test_is_session_not_created() {
        assert!(Error::session_not_created("no session").is_session_not_created());
        assert!(
            Error::protocol(ErrorKind::SessionNotCreated, "refused").is_session_not_created()
        );
        assert!(!Error::protocol(ErrorKind::Generic, "x").is_session_not_created());
    }

    #[test]
    fn test_is_timeout() {
        assert!(Error::protocol(ErrorKind::ScriptTimeout, "slow").is_timeout());
        assert!(!Error::config("test").is_timeout());
    }

    #[test]
    fn test_is_stale_element() {
        assert!(Error::stale_element(ElementId::new("e")).is_stale_element());
        assert!(Error::protocol(ErrorKind::StaleElementReference, "gone").is_stale_element());
        assert!(!Error::protocol(ErrorKind::NoSuchElement, "x").is_stale_element());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
