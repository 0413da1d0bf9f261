//! HTTP transport layer.
//!
//! The session core never talks to the network directly. It hands a
//! [`Command`] to a [`Transport`] and gets back a [`WireResponse`]:
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Session (Rust) │                              │  Remote end     │
//! │                 │          HTTP/JSON           │  (geckodriver,  │
//! │  Transport      │◄────────────────────────────►│   chromedriver, │
//! │  → send()       │     host:port/prefix/...     │   grid, ...)    │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! The transport owns connection reuse, TLS and the per-request
//! deadline. It does not interpret status codes; that is the
//! dispatcher's job.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `http` | [`HttpTransport`] backed by `reqwest` |

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::Result;
use crate::protocol::{Command, WireResponse};

// ============================================================================
// Submodules
// ============================================================================

/// `reqwest`-backed transport.
pub mod http;

/// Recording transport for unit tests.
#[cfg(test)]
pub(crate) mod mock;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{DEFAULT_HTTP_TIMEOUT, HttpTransport};

// ============================================================================
// Transport Trait
// ============================================================================

/// Sends one command to the remote end and returns the raw response.
///
/// Implementations must return `Ok` for every response that arrived,
/// whatever its status. `Err` is reserved for failures to get a response
/// at all (connection refused, timeout, unparseable body).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one HTTP round trip.
    async fn send(&self, command: &Command, headers: Option<&HeaderMap>) -> Result<WireResponse>;
}
