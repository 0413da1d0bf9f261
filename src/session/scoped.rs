//! Session-scoped capability interface.

use std::future::Future;

use crate::error::Result;
use crate::identifiers::SessionId;

use super::core::Session;

/// Implemented by every value that issues commands in a session.
///
/// The provided [`ensure_session`](Self::ensure_session) is the same guard
/// that every session-scoped command runs before dispatch.
pub trait SessionScoped {
    /// Returns the owning session.
    fn session(&self) -> &Session;

    /// Starts the owning session if needed and returns its id.
    fn ensure_session(&self) -> impl Future<Output = Result<SessionId>> + Send
    where
        Self: Sync,
    {
        self.session().ensure_started()
    }
}

impl SessionScoped for Session {
    fn session(&self) -> &Session {
        self
    }
}
