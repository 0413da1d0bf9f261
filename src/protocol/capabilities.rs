//! Session creation payload.
//!
//! The capabilities envelope changed between protocol revisions: older
//! remote ends read `desiredCapabilities`/`requiredCapabilities` at the
//! top level of the `POST session` body, newer ones expect them under a
//! `capabilities` key. [`CapabilitiesShape`] selects which one is sent.

// ============================================================================
// Imports
// ============================================================================

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::Result;

// ============================================================================
// CapabilitiesShape
// ============================================================================

/// Envelope used for the session creation body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapabilitiesShape {
    /// `{"desiredCapabilities": ..., "requiredCapabilities": ...}`
    #[default]
    Flat,
    /// `{"capabilities": {"desiredCapabilities": ..., "requiredCapabilities": ...}}`
    Wrapped,
}

// ============================================================================
// Capabilities
// ============================================================================

/// Desired and required capability sets requested at session start.
///
/// A set that is `None` is omitted from the payload entirely; the remote
/// end never sees a `null` for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Capabilities {
    /// Capabilities the remote end should try to satisfy.
    #[serde(rename = "desiredCapabilities", skip_serializing_if = "Option::is_none")]
    pub desired: Option<Value>,

    /// Capabilities the remote end must satisfy.
    #[serde(rename = "requiredCapabilities", skip_serializing_if = "Option::is_none")]
    pub required: Option<Value>,
}

impl Capabilities {
    /// Builds the `POST session` body for the given envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if a capability set
    /// cannot be serialized.
    pub fn to_body(&self, shape: CapabilitiesShape) -> Result<Value> {
        let caps = serde_json::to_value(self)?;

        Ok(match shape {
            CapabilitiesShape::Flat => caps,
            CapabilitiesShape::Wrapped => json!({ "capabilities": caps }),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
