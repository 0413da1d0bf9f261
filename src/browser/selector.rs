//! Element locator strategies.
//!
//! Maps Selenium-like `By` selectors onto the five locator strategies
//! the WebDriver protocol defines. `Id`, `Name` and `Class` have no
//! protocol strategy of their own and are sent as CSS selectors.
//!
//! # Example
//!
//! ```ignore
//! use wire_webdriver::By;
//!
//! let btn = session.find().element(By::css("#submit")).await?;
//! let links = session.find().elements(By::partial_link_text("Read")).await?;
//! let rows = table.find_elements(By::tag("tr")).await?;
//! ```

use serde_json::{Value, json};

// ============================================================================
// By Enum
// ============================================================================

/// Element locator strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
    /// CSS selector.
    Css(String),

    /// XPath expression.
    XPath(String),

    /// Exact link text (for `<a>` elements).
    LinkText(String),

    /// Partial link text (for `<a>` elements).
    PartialLinkText(String),

    /// Tag name.
    Tag(String),

    /// Element ID, sent as `[id="..."]`.
    Id(String),

    /// Name attribute, sent as `[name="..."]`.
    Name(String),

    /// Single class name, sent as `.class`.
    Class(String),
}

impl By {
    /// Creates a CSS selector.
    #[inline]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Creates an XPath selector.
    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates a link text selector.
    #[inline]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Creates a partial link text selector.
    #[inline]
    pub fn partial_link_text(text: impl Into<String>) -> Self {
        Self::PartialLinkText(text.into())
    }

    /// Creates a tag name selector.
    #[inline]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Creates an ID selector.
    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a name attribute selector.
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a class name selector.
    #[inline]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Returns the protocol strategy name.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Css(_) | Self::Id(_) | Self::Name(_) | Self::Class(_) => "css selector",
            Self::XPath(_) => "xpath",
            Self::LinkText(_) => "link text",
            Self::PartialLinkText(_) => "partial link text",
            Self::Tag(_) => "tag name",
        }
    }

    /// Returns the selector value sent on the wire.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Css(v)
            | Self::XPath(v)
            | Self::LinkText(v)
            | Self::PartialLinkText(v)
            | Self::Tag(v) => v.clone(),
            Self::Id(v) => format!("[id=\"{}\"]", escape_attribute(v)),
            Self::Name(v) => format!("[name=\"{}\"]", escape_attribute(v)),
            Self::Class(v) => format!(".{v}"),
        }
    }

    /// Returns the `{"using": ..., "value": ...}` request body.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "using": self.strategy(),
            "value": self.value(),
        })
    }
}

/// Escapes a value for use inside a double-quoted CSS attribute selector.
fn escape_attribute(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

// ============================================================================
// From implementations for ergonomics
// ============================================================================

impl From<&str> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<String> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_css() {
        let by = By::css("#login");
        assert_eq!(by.strategy(), "css selector");
        assert_eq!(by.value(), "#login");
    }

    #[test]
    fn test_by_id_becomes_css() {
        let by = By::id("user\"name");
        assert_eq!(by.strategy(), "css selector");
        assert_eq!(by.value(), "[id=\"user\\\"name\"]");
    }

    #[test]
    fn test_by_xpath() {
        let by = By::xpath("//button");
        assert_eq!(by.strategy(), "xpath");
        assert_eq!(by.value(), "//button");
    }

    #[test]
    fn test_by_link_text() {
        assert_eq!(By::link_text("Home").strategy(), "link text");
        assert_eq!(By::partial_link_text("Ho").strategy(), "partial link text");
        assert_eq!(By::tag("a").strategy(), "tag name");
    }

    #[test]
    fn test_to_json() {
        assert_eq!(
            By::class("btn").to_json(),
            json!({"using": "css selector", "value": ".btn"})
        );
    }

    #[test]
    fn test_from_str() {
        let by: By = "#login".into();
        assert!(matches!(by, By::Css(_)));
    }
}
