//! Type-safe identifier wrappers.
//!
//! Remote ends hand out opaque string identifiers for sessions and
//! elements. Wrapping them in newtypes keeps a session id from being
//! passed where an element id is expected.
//!
//! | Type | Issued by | Example |
//! |------|-----------|---------|
//! | [`SessionId`] | remote end (`POST session`) | `"4f2a..."` |
//! | [`ElementId`] | remote end (element results) | `"a1b2c3"` |
//! | [`InputSourceId`] | local end (action sequences) | `"keyboard"` |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Macro
// ============================================================================

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier string.
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// ============================================================================
// Identifiers
// ============================================================================

string_id! {
    /// Remote session identifier returned by `POST session`.
    SessionId
}

string_id! {
    /// Server-issued element reference, unique within its session.
    ElementId
}

string_id! {
    /// Identifier of a virtual input source in an action sequence.
    InputSourceId
}

impl InputSourceId {
    /// Generates a random input source id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
