//! WebDriver session module.
//!
//! This module provides the main entry point for talking to a remote end.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Session`] | Session lifecycle and command dispatch |
//! | [`SessionBuilder`] | Fluent configuration builder |
//! | [`SessionScoped`] | Implemented by everything that issues session commands |
//! | [`Frame`] | Frame switching target |
//!
//! # Example
//!
//! ```no_run
//! use wire_webdriver::{Result, Session};
//!
//! # async fn example() -> Result<()> {
//! let session = Session::builder()
//!     .host("127.0.0.1")
//!     .port(4444)
//!     .build()?;
//!
//! // The first command starts the session.
//! session.go("https://example.com").await?;
//! let title = session.title().await?;
//!
//! session.end().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for session configuration.
pub mod builder;

/// Session lifecycle and command dispatch.
pub mod core;

/// Navigation, window handles and frames.
mod navigation;

/// Session-scoped capability interface.
pub mod scoped;

/// Script execution.
mod script;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::SessionBuilder;
pub use core::{ExtensionFactory, Session, WeakSession};
pub use navigation::Frame;
pub use scoped::SessionScoped;
