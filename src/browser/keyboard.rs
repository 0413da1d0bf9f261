//! Keyboard key definitions.
//!
//! The WebDriver protocol encodes non-printable keys as characters in
//! the Unicode private use area (`U+E000`..`U+E05D`). [`Key`] names the
//! common ones so they can be mixed into typed text or key actions.
//!
//! # Example
//!
//! ```ignore
//! use wire_webdriver::Key;
//!
//! element.send_keys(&format!("hello{}", Key::Enter)).await?;
//!
//! session.actions().key_sequence()
//!     .key_down(Key::Control)
//!     .key_down("a")
//!     .key_up("a")
//!     .key_up(Key::Control)
//!     .perform()
//!     .await?;
//! ```

use std::fmt;

// ============================================================================
// Key Enum
// ============================================================================

/// Common keyboard keys for navigation, editing and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // ========================================================================
    // Navigation & Control
    // ========================================================================
    /// Enter key
    Enter,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Space bar
    Space,

    // ========================================================================
    // Arrow Keys
    // ========================================================================
    /// Arrow Up
    ArrowUp,
    /// Arrow Down
    ArrowDown,
    /// Arrow Left
    ArrowLeft,
    /// Arrow Right
    ArrowRight,

    // ========================================================================
    // Page Navigation
    // ========================================================================
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,

    // ========================================================================
    // Modifiers
    // ========================================================================
    /// Shift key
    Shift,
    /// Control key
    Control,
    /// Alt key
    Alt,
    /// Meta (Command/Windows) key
    Meta,
}

impl Key {
    /// Returns the protocol code point for this key.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Key::Backspace => '\u{E003}',
            Key::Tab => '\u{E004}',
            Key::Enter => '\u{E007}',
            Key::Shift => '\u{E008}',
            Key::Control => '\u{E009}',
            Key::Alt => '\u{E00A}',
            Key::Escape => '\u{E00C}',
            Key::Space => '\u{E00D}',
            Key::PageUp => '\u{E00E}',
            Key::PageDown => '\u{E00F}',
            Key::End => '\u{E010}',
            Key::Home => '\u{E011}',
            Key::ArrowLeft => '\u{E012}',
            Key::ArrowUp => '\u{E013}',
            Key::ArrowRight => '\u{E014}',
            Key::ArrowDown => '\u{E015}',
            Key::Delete => '\u{E017}',
            Key::Meta => '\u{E03D}',
        }
    }

    /// Returns `true` for Shift, Control, Alt and Meta.
    #[inline]
    #[must_use]
    pub fn is_modifier(self) -> bool {
        matches!(self, Key::Shift | Key::Control | Key::Alt | Key::Meta)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.as_char().to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
