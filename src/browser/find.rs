//! Element lookup from the document root.
//!
//! # Example
//!
//! ```ignore
//! use wire_webdriver::By;
//!
//! let rows = session.find().css("table tr").await?;
//! let heading = session.find().element(By::tag("h1")).await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::Method;
use crate::session::{Session, SessionScoped};

use super::element::Element;
use super::selector::By;

// ============================================================================
// Find
// ============================================================================

/// Locates elements in the current browsing context.
#[derive(Debug, Clone)]
pub struct Find {
    session: Session,
}

impl Find {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Finds all elements matching a CSS selector.
    pub async fn css(&self, selector: &str) -> Result<Vec<Element>> {
        self.elements(By::css(selector)).await
    }

    /// Finds the first element matching a CSS selector.
    pub async fn css_first(&self, selector: &str) -> Result<Element> {
        self.element(By::css(selector)).await
    }

    /// Finds the first element matching `by`.
    ///
    /// # Errors
    ///
    /// - [`Error::Protocol`] with `no such element` if nothing matches
    /// - [`Error::InvalidResponse`] if the reply is not an element reference
    pub async fn element(&self, by: impl Into<By>) -> Result<Element> {
        let by = by.into();
        debug!(strategy = by.strategy(), value = %by.value(), "Finding element");

        let value = self
            .session
            .execute(Method::POST, "element", Some(by.to_json()))
            .await?
            .ok_or_else(|| {
                let target = format!("{} {}", by.strategy(), by.value());
                Error::invalid_response(format!("empty result for {target}"))
            })?;
        self.session.element(&value)
    }

    /// Finds every element matching `by`. No match is an empty list.
    pub async fn elements(&self, by: impl Into<By>) -> Result<Vec<Element>> {
        let by = by.into();
        debug!(strategy = by.strategy(), value = %by.value(), "Finding elements");

        let value = self
            .session
            .execute(Method::POST, "elements", Some(by.to_json()))
            .await?;
        self.session.elements(value)
    }
}

impl SessionScoped for Find {
    fn session(&self) -> &Session {
        &self.session
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::ErrorKind;
    use crate::protocol::{Capabilities, CapabilitiesShape, ELEMENT_KEY};
    use crate::transport::mock::MockTransport;

    fn session(transport: &std::sync::Arc<MockTransport>) -> Session {
        Session::new(
            transport.clone(),
            Capabilities::default(),
            CapabilitiesShape::Flat,
            None,
        )
    }

    #[tokio::test]
    async fn test_css_first_auto_starts_and_resolves() {
        let transport = MockTransport::new();
        let session = session(&transport);

        transport.push_value(json!({"sessionId": "S9"}));
        transport.push_value(json!({ ELEMENT_KEY: "e1" }));
        let element = session.find().css_first("h1").await.expect("h1");

        assert_eq!(element.id().as_str(), "e1");
        assert_eq!(element.session_id().as_str(), "S9");
        assert_eq!(transport.requests(), vec!["POST session", "POST session/S9/element"]);
        assert_eq!(
            transport.last_body(),
            Some(json!({"using": "css selector", "value": "h1"}))
        );
    }

    #[tokio::test]
    async fn test_same_id_twice_is_same_handle() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        transport.push_value(json!([{ ELEMENT_KEY: "a" }, { ELEMENT_KEY: "b" }]));
        let all = session.find().css("li").await.expect("li");

        transport.push_value(json!({ ELEMENT_KEY: "a" }));
        let first = session.find().element(By::xpath("//li")).await.expect("li");

        assert_eq!(all.len(), 2);
        assert!(first.same_handle(&all[0]));
    }

    #[tokio::test]
    async fn test_no_such_element() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        transport.push(
            404,
            json!({"value": {"error": "no such element", "message": "#missing"}}),
        );
        let err = session.find().css_first("#missing").await.unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NoSuchElement));
    }

    #[tokio::test]
    async fn test_non_reference_payload_is_invalid() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        transport.push_value(json!({"unexpected": "shape"}));
        let err = session.find().css_first("div").await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
    }
}
