//! Window geometry of the current top-level browsing context.
//!
//! # Example
//!
//! ```ignore
//! let window = session.window();
//! window.set_size(1280.0, 800.0).await?;
//! let (x, y) = window.position().await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::Result;
use crate::protocol::Method;
use crate::session::{Session, SessionScoped};

// ============================================================================
// Types
// ============================================================================

/// Window rect as reported by the remote end.
///
/// Drivers may report fractional CSS pixels on scaled displays.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct RawRect {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

// ============================================================================
// WindowRect
// ============================================================================

/// Size and position of the current window.
#[derive(Debug, Clone)]
pub struct WindowRect {
    session: Session,
}

impl WindowRect {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Returns `(width, height)` in CSS pixels.
    pub async fn size(&self) -> Result<(f64, f64)> {
        let rect = self.rect().await?;
        Ok((rect.width, rect.height))
    }

    /// Resizes the window.
    pub async fn set_size(&self, width: f64, height: f64) -> Result<()> {
        debug!(width, height, "Resizing window");
        self.set_rect(json!({ "width": width, "height": height })).await
    }

    /// Returns the `(x, y)` of the window's top-left corner.
    pub async fn position(&self) -> Result<(f64, f64)> {
        let rect = self.rect().await?;
        Ok((rect.x, rect.y))
    }

    /// Moves the window.
    pub async fn set_position(&self, x: f64, y: f64) -> Result<()> {
        debug!(x, y, "Moving window");
        self.set_rect(json!({ "x": x, "y": y })).await
    }

    /// Maximizes the window.
    pub async fn maximize(&self) -> Result<()> {
        self.session
            .execute(Method::POST, "window/maximize", Some(json!({})))
            .await?;
        Ok(())
    }

    async fn rect(&self) -> Result<RawRect> {
        self.session.execute_as(Method::GET, "window/rect", None).await
    }

    async fn set_rect(&self, body: Value) -> Result<()> {
        self.session
            .execute(Method::POST, "window/rect", Some(body))
            .await?;
        Ok(())
    }
}

impl SessionScoped for WindowRect {
    fn session(&self) -> &Session {
        &self.session
    }
}

// ============================================================================
// Tests
// ============================================================================
