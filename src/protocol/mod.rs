//! WebDriver wire protocol types.
//!
//! This module defines the HTTP/JSON message shapes exchanged between
//! the local end (this crate) and a remote end (geckodriver, chromedriver,
//! a Marionette server, a Selenium grid, ...).
//!
//! # Protocol Overview
//!
//! | Message | Direction | Shape |
//! |---------|-----------|-------|
//! | [`Command`] | Local → Remote | `<METHOD> <path>` + optional JSON body |
//! | [`WireResponse`] | Remote → Local | status + `{"value": ...}` envelope |
//!
//! Session-scoped commands live under `session/<id>/`. Element references
//! travel as `{"element-6066-11e4-a52e-4f735466cecf": "<id>"}` in both
//! directions.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `capabilities` | Session creation payload |
//! | `command` | Command values and session path composition |
//! | `request` | Response envelope and error classification |

// ============================================================================
// Submodules
// ============================================================================

/// Session creation payload.
pub mod capabilities;

/// Command values and path composition.
pub mod command;

/// Response envelope handling.
pub mod request;

// ============================================================================
// Constants
// ============================================================================

/// Web element identifier key used by the WebDriver protocol.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

// ============================================================================
// Re-exports
// ============================================================================

pub use capabilities::{Capabilities, CapabilitiesShape};
pub use command::{Command, Method, session_path};
pub use request::{STATUS_OK, WireResponse, is_empty_value};
