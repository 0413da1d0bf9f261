//! Session sub-components.
//!
//! Everything here holds a [`Session`](crate::Session) and issues
//! session-scoped commands through it, so the session is started on first
//! use no matter which component is touched first.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Element`] | DOM element handle |
//! | [`ActionSequence`] | Queued key/pause actions for one input source |
//! | [`Actions`] | Perform and release input actions |
//! | [`Find`] | Element lookup from the document root |
//! | [`Timeouts`] | Script, page load and implicit wait timeouts |
//! | [`WindowRect`] | Window size and position |
//! | [`Cookies`] | Cookie jar of the current document |
//! | [`UserPrompt`] | `alert` / `confirm` / `prompt` handling |
//!
//! # Example
//!
//! ```no_run
//! use wire_webdriver::{By, Result, Session};
//!
//! # async fn example() -> Result<()> {
//! let session = Session::builder().port(4444).build()?;
//!
//! session.go("https://example.com").await?;
//! let heading = session.find().element(By::tag("h1")).await?;
//! let text = heading.text().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Input action sequences.
pub mod actions;

/// User prompt handling.
pub mod alert;

/// Cookie access.
pub mod cookies;

/// DOM element handles.
pub mod element;

/// Element lookup.
pub mod find;

/// Keyboard key definitions.
pub mod keyboard;

mod registry;

/// Element locator strategies.
pub mod selector;

/// Session timeouts.
pub mod timeouts;

/// Window geometry.
pub mod window;

// ============================================================================
// Re-exports
// ============================================================================

pub use actions::{Action, ActionSequence, Actions, SourceType};
pub use alert::UserPrompt;
pub use cookies::{Cookie, Cookies};
pub use element::{Element, Rect};
pub use find::Find;
pub use keyboard::Key;
pub use selector::By;
pub use timeouts::{TimeoutValues, Timeouts};
pub use window::WindowRect;

pub(crate) use registry::ElementRegistry;
