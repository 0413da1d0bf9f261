//! Wire WebDriver - async client core for the W3C WebDriver protocol.
//!
//! This library talks to a WebDriver remote end (geckodriver,
//! chromedriver, a Selenium grid, ...) over HTTP/JSON.
//!
//! # Architecture
//!
//! The client follows the protocol's local end / remote end split:
//!
//! - **Local End (Rust)**: builds commands, dispatches them, maps replies
//! - **Remote End (driver)**: owns the browser, answers `{"value": ...}`
//!
//! Key design principles:
//!
//! - A [`Session`] owns the remote session id and the element registry
//! - Session-scoped commands start the session on first use
//! - One live [`Element`] handle per server-issued id
//! - Non-200 replies become classified [`Error::Protocol`] values
//!
//! # Quick Start
//!
//! ```no_run
//! use wire_webdriver::{By, Result, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let session = Session::builder()
//!         .host("127.0.0.1")
//!         .port(4444)
//!         .build()?;
//!
//!     session.go("https://example.com").await?;
//!     let heading = session.find().element(By::tag("h1")).await?;
//!     println!("Heading: {}", heading.text().await?);
//!
//!     session.end().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`session`] | [`Session`] lifecycle, dispatch and builder |
//! | [`browser`] | Session sub-components: [`Element`], [`Actions`], [`Find`], ... |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Wire message shapes |
//! | [`transport`] | HTTP transport and the [`Transport`] seam |

// ============================================================================
// Modules
// ============================================================================

/// Session sub-components: Element, Actions, Find, Timeouts, ...
pub mod browser;

/// Error types and result alias.
pub mod error;

/// Type-safe identifiers for protocol entities.
pub mod identifiers;

/// Wire protocol message types.
pub mod protocol;

/// Session lifecycle and command dispatch.
pub mod session;

/// HTTP transport layer.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

pub use browser::{
    Action, ActionSequence, Actions, By, Cookie, Cookies, Element, Find, Key, Rect, SourceType,
    TimeoutValues, Timeouts, UserPrompt, WindowRect,
};
pub use error::{Error, ErrorKind, Result};
pub use identifiers::{ElementId, InputSourceId, SessionId};
pub use protocol::{Capabilities, CapabilitiesShape, Command, Method, WireResponse};
pub use session::{
    ExtensionFactory, Frame, Session, SessionBuilder, SessionScoped, WeakSession,
};
pub use transport::{HttpTransport, Transport};
