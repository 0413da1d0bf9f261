//! User prompt handling (`alert`, `confirm`, `prompt`).

// ============================================================================
// Imports
// ============================================================================

use serde_json::{Value, json};
use tracing::debug;

use crate::error::Result;
use crate::protocol::Method;
use crate::session::{Session, SessionScoped};

// ============================================================================
// UserPrompt
// ============================================================================

/// The currently open user prompt.
///
/// Every method fails with `no such alert` when no prompt is open.
#[derive(Debug, Clone)]
pub struct UserPrompt {
    session: Session,
}

impl UserPrompt {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Accepts the prompt.
    pub async fn accept(&self) -> Result<()> {
        debug!("Accepting user prompt");
        self.session
            .execute(Method::POST, "alert/accept", Some(json!({})))
            .await?;
        Ok(())
    }

    /// Dismisses the prompt.
    pub async fn dismiss(&self) -> Result<()> {
        debug!("Dismissing user prompt");
        self.session
            .execute(Method::POST, "alert/dismiss", Some(json!({})))
            .await?;
        Ok(())
    }

    /// Returns the prompt message.
    pub async fn text(&self) -> Result<String> {
        let value = self.session.execute(Method::GET, "alert/text", None).await?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    /// Types into a `prompt()` input.
    pub async fn send_text(&self, text: &str) -> Result<()> {
        let chars: Vec<String> = text.chars().map(String::from).collect();
        self.session
            .execute(Method::POST, "alert/text", Some(json!({ "value": chars })))
            .await?;
        Ok(())
    }
}

impl SessionScoped for UserPrompt {
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

    use crate::ErrorKind;
    use crate::protocol::{Capabilities, CapabilitiesShape};
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_prompt_commands() {
        let transport = MockTransport::new();
        let session = Session::new(
            transport.clone(),
            Capabilities::default(),
            CapabilitiesShape::Flat,
            None,
        );
        let alert = session.alert();

        alert.send_text("ok").await.expect("send text");
        assert_eq!(transport.last_body(), Some(json!({"value": ["o", "k"]})));

        transport.push_value(json!("Are you sure?"));
        assert_eq!(alert.text().await.expect("text"), "Are you sure?");

        alert.accept().await.expect("accept");
        alert.dismiss().await.expect("dismiss");

        assert_eq!(
            transport.requests(),
            vec![
                "POST session",
                "POST session/S1/alert/text",
                "GET session/S1/alert/text",
                "POST session/S1/alert/accept",
                "POST session/S1/alert/dismiss",
            ]
        );
    }

    #[tokio::test]
    async fn test_no_open_prompt() {
        let transport = MockTransport::new();
        let session = Session::new(
            transport.clone(),
            Capabilities::default(),
            CapabilitiesShape::Flat,
            None,
        );
        session.start().await.expect("start");

        transport.push(404, json!({"value": {"error": "no such alert", "message": ""}}));
        let err = session.alert().accept().await.unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NoSuchAlert));
    }
}
