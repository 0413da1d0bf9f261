//! Session timeout configuration.
//!
//! | Key | Governs |
//! |-----|---------|
//! | `script` | `execute_script` / `execute_async_script` |
//! | `pageLoad` | navigation |
//! | `implicit` | element lookup retries |

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::Result;
use crate::protocol::Method;
use crate::session::{Session, SessionScoped};

// ============================================================================
// TimeoutValues
// ============================================================================

/// All three timeouts as reported by the remote end, in milliseconds.
///
/// A `None` script timeout means scripts never time out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutValues {
    /// Script timeout.
    #[serde(default)]
    pub script: Option<u64>,
    /// Page load timeout.
    #[serde(default)]
    pub page_load: Option<u64>,
    /// Implicit wait.
    #[serde(default)]
    pub implicit: Option<u64>,
}

// ============================================================================
// Timeouts
// ============================================================================

/// Reads and writes session timeouts.
#[derive(Debug, Clone)]
pub struct Timeouts {
    session: Session,
}

impl Timeouts {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Returns every timeout.
    pub async fn all(&self) -> Result<TimeoutValues> {
        self.session.execute_as(Method::GET, "timeouts", None).await
    }

    /// Script timeout. `None` if scripts never time out.
    pub async fn script(&self) -> Result<Option<Duration>> {
        Ok(self.all().await?.script.map(Duration::from_millis))
    }

    /// Page load timeout.
    pub async fn page_load(&self) -> Result<Option<Duration>> {
        Ok(self.all().await?.page_load.map(Duration::from_millis))
    }

    /// Implicit wait timeout.
    pub async fn implicit(&self) -> Result<Option<Duration>> {
        Ok(self.all().await?.implicit.map(Duration::from_millis))
    }

    /// Sets the script timeout.
    pub async fn set_script(&self, timeout: Duration) -> Result<()> {
        self.set("script", timeout).await
    }

    /// Sets the page load timeout.
    pub async fn set_page_load(&self, timeout: Duration) -> Result<()> {
        self.set("pageLoad", timeout).await
    }

    /// Sets the implicit wait timeout.
    pub async fn set_implicit(&self, timeout: Duration) -> Result<()> {
        self.set("implicit", timeout).await
    }

    async fn set(&self, key: &str, timeout: Duration) -> Result<()> {
        let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        debug!(key, ms, "Setting timeout");
        self.session
            .execute(Method::POST, "timeouts", Some(json!({ key: ms })))
            .await?;
        Ok(())
    }
}

impl SessionScoped for Timeouts {
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

    use std::sync::Arc;

    use crate::protocol::{Capabilities, CapabilitiesShape};
    use crate::transport::mock::MockTransport;

    fn session(transport: &Arc<MockTransport>) -> Session {
        Session::new(
            transport.clone(),
            Capabilities::default(),
            CapabilitiesShape::Flat,
            None,
        )
    }

    #[tokio::test]
    async fn test_huge_timeout_saturates() {
        let transport = MockTransport::new();
        let timeouts = session(&transport).timeouts();

        timeouts.set_script(Duration::MAX).await.expect("script");
        assert_eq!(transport.last_body(), Some(json!({"script": u64::MAX})));
    }

    #[tokio::test]
    async fn test_setters_send_milliseconds() {
        let transport = MockTransport::new();
        let timeouts = session(&transport).timeouts();

        timeouts
            .set_page_load(Duration::from_secs(5))
            .await
            .expect("page load");
        assert_eq!(transport.last_body(), Some(json!({"pageLoad": 5000})));

        timeouts
            .set_implicit(Duration::from_millis(250))
            .await
            .expect("implicit");
        assert_eq!(transport.last_body(), Some(json!({"implicit": 250})));
        assert_eq!(transport.count(Method::POST, "session/S1/timeouts"), 2);
    }

    #[tokio::test]
    async fn test_getters_read_values() {
        let transport = MockTransport::new();
        let timeouts = session(&transport).timeouts();
        timeouts.session().start().await.expect("start");

        transport.push_value(json!({"script": null, "pageLoad": 300000, "implicit": 0}));
        let all = timeouts.all().await.expect("all");
        assert_eq!(all.script, None);
        assert_eq!(all.page_load, Some(300_000));

        transport.push_value(json!({"script": 30000, "pageLoad": 300000, "implicit": 0}));
        assert_eq!(
            timeouts.script().await.expect("script"),
            Some(Duration::from_secs(30))
        );
    }
}
