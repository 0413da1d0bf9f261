//! Navigation, window handles and frame switching.
//!
//! # Example
//!
//! ```ignore
//! use wire_webdriver::Frame;
//!
//! session.go("https://example.com").await?;
//! let iframe = session.find().css_first("iframe").await?;
//! session.switch_frame(Frame::Element(&iframe)).await?;
//! session.switch_frame(Frame::Top).await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde_json::{Value, json};
use tracing::debug;

use crate::browser::Element;
use crate::error::Result;
use crate::protocol::Method;

use super::core::Session;

// ============================================================================
// Frame
// ============================================================================

/// Target of [`Session::switch_frame`].
#[derive(Debug, Clone, Copy)]
pub enum Frame<'a> {
    /// Parent of the current frame.
    Parent,
    /// Top-level browsing context.
    Top,
    /// Child frame by index.
    Index(u16),
    /// Child frame by its `<iframe>`/`<frame>` element.
    Element(&'a Element),
}

// ============================================================================
// Session - Navigation
// ============================================================================

impl Session {
    /// Returns the current URL.
    pub async fn url(&self) -> Result<String> {
        self.execute_as(Method::GET, "url", None).await
    }

    /// Navigates to `url` and waits for the load to complete.
    pub async fn go(&self, url: &str) -> Result<()> {
        debug!(url, "Navigating");
        self.execute(Method::POST, "url", Some(json!({ "url": url })))
            .await?;
        Ok(())
    }

    /// Goes back in history.
    pub async fn back(&self) -> Result<()> {
        self.execute(Method::POST, "back", Some(json!({}))).await?;
        Ok(())
    }

    /// Goes forward in history.
    pub async fn forward(&self) -> Result<()> {
        self.execute(Method::POST, "forward", Some(json!({}))).await?;
        Ok(())
    }

    /// Reloads the current page.
    pub async fn refresh(&self) -> Result<()> {
        self.execute(Method::POST, "refresh", Some(json!({}))).await?;
        Ok(())
    }

    /// Returns the document title.
    pub async fn title(&self) -> Result<String> {
        self.execute_as(Method::GET, "title", None).await
    }
}

// ============================================================================
// Session - Windows & Frames
// ============================================================================

impl Session {
    /// Returns the handle of the current window.
    pub async fn window_handle(&self) -> Result<String> {
        self.execute_as(Method::GET, "window", None).await
    }

    /// Returns the handles of every open window.
    pub async fn window_handles(&self) -> Result<Vec<String>> {
        self.execute_as(Method::GET, "window/handles", None).await
    }

    /// Switches to the window with the given handle.
    pub async fn switch_window(&self, handle: &str) -> Result<()> {
        debug!(handle, "Switching window");
        self.execute(Method::POST, "window", Some(json!({ "handle": handle })))
            .await?;
        Ok(())
    }

    /// Closes the current window and returns the remaining handles.
    pub async fn close_window(&self) -> Result<Vec<String>> {
        self.execute_as(Method::DELETE, "window", None).await
    }

    /// Switches the current browsing context to a frame.
    pub async fn switch_frame(&self, frame: Frame<'_>) -> Result<()> {
        let (path, body) = match frame {
            Frame::Parent => ("frame/parent", json!({})),
            Frame::Top => ("frame", json!({ "id": null })),
            Frame::Index(index) => ("frame", json!({ "id": index })),
            Frame::Element(element) => ("frame", json!({ "id": element.to_json() })),
        };
        debug!(path, "Switching frame");

        self.execute(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    /// Returns the focused element, if any.
    pub async fn active_element(&self) -> Result<Option<Element>> {
        match self.execute(Method::GET, "element/active", None).await? {
            Some(value @ Value::Object(_)) => self.element(&value).map(Some),
            _ => Ok(None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
