//! Input action sequences.
//!
//! An [`ActionSequence`] queues actions for one virtual input source.
//! [`ActionSequence::perform`] sends the queue as a single
//! `POST session/<id>/actions` request. The queue is not cleared by
//! `perform`, so performing twice replays the same actions; build a new
//! sequence for new input.
//!
//! # Example
//!
//! ```ignore
//! use wire_webdriver::{InputSourceId, SourceType};
//!
//! session
//!     .actions()
//!     .sequence(SourceType::Key, InputSourceId::new("keyboard"))
//!     .key_down("a")
//!     .key_up("a")
//!     .perform()
//!     .await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::Result;
use crate::identifiers::InputSourceId;
use crate::protocol::Method;
use crate::session::{Session, SessionScoped};

use super::keyboard::Key;

// ============================================================================
// SourceType
// ============================================================================

/// Input source type of an action sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Null input source; only pauses.
    #[serde(rename = "none")]
    Null,
    /// Keyboard.
    Key,
    /// Mouse, pen or touch.
    Pointer,
}

// ============================================================================
// Action
// ============================================================================

/// One queued action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Press a key.
    KeyDown {
        /// Key value (a single character or [`Key`] code point).
        value: String,
    },
    /// Release a key.
    KeyUp {
        /// Key value.
        value: String,
    },
    /// Wait for one tick, optionally for a minimum duration.
    Pause {
        /// Duration in milliseconds.
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
    },
}

// ============================================================================
// ActionSequence
// ============================================================================

/// Queued actions for one input source.
#[derive(Debug, Clone)]
pub struct ActionSequence {
    session: Session,
    source_type: SourceType,
    id: InputSourceId,
    actions: Vec<Action>,
}

impl ActionSequence {
    /// Creates an empty sequence bound to one input source.
    #[must_use]
    pub fn new(session: Session, source_type: SourceType, id: InputSourceId) -> Self {
        Self {
            session,
            source_type,
            id,
            actions: Vec::new(),
        }
    }

    /// Returns the input source type.
    #[inline]
    #[must_use]
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Returns the input source id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &InputSourceId {
        &self.id
    }

    /// Returns the queued actions.
    #[inline]
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Queues a keyDown action.
    pub fn key_down(&mut self, value: impl Into<String>) -> &mut Self {
        self.actions.push(Action::KeyDown {
            value: value.into(),
        });
        self
    }

    /// Queues a keyUp action.
    pub fn key_up(&mut self, value: impl Into<String>) -> &mut Self {
        self.actions.push(Action::KeyUp {
            value: value.into(),
        });
        self
    }

    /// Queues a keyDown/keyUp pair per character of `keys`.
    pub fn send_keys(&mut self, keys: &str) -> &mut Self {
        for c in keys.chars() {
            self.key_down(c).key_up(c);
        }
        self
    }

    /// Queues a keyDown/keyUp pair for a named key.
    pub fn press(&mut self, key: Key) -> &mut Self {
        self.key_down(key).key_up(key)
    }

    /// Queues a pause.
    ///
    /// Durations beyond `u64::MAX` milliseconds saturate.
    pub fn pause(&mut self, duration: Option<Duration>) -> &mut Self {
        self.actions.push(Action::Pause {
            duration: duration.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        });
        self
    }

    /// Returns `{"type": ..., "id": ..., "actions": [...]}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "type": self.source_type,
            "id": self.id,
            "actions": self.actions,
        })
    }

    /// Sends the queued actions. The queue is kept.
    pub async fn perform(&self) -> Result<()> {
        Actions::new(self.session.clone())
            .perform(vec![self.to_json()])
            .await
    }
}

impl SessionScoped for ActionSequence {
    fn session(&self) -> &Session {
        &self.session
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Session-level action dispatch.
#[derive(Debug, Clone)]
pub struct Actions {
    session: Session,
}

impl Actions {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Performs the given input source sequences tick by tick.
    pub async fn perform(&self, sequences: Vec<Value>) -> Result<()> {
        debug!(sources = sequences.len(), "Performing actions");
        self.session
            .execute(Method::POST, "actions", Some(json!({ "actions": sequences })))
            .await?;
        Ok(())
    }

    /// Releases all pressed keys and buttons.
    pub async fn release(&self) -> Result<()> {
        debug!("Releasing actions");
        self.session.execute(Method::DELETE, "actions", None).await?;
        Ok(())
    }

    /// Returns an empty sequence for the given input source.
    #[must_use]
    pub fn sequence(&self, source_type: SourceType, id: InputSourceId) -> ActionSequence {
        ActionSequence::new(self.session.clone(), source_type, id)
    }

    /// Returns an empty key sequence with a generated input source id.
    #[must_use]
    pub fn key_sequence(&self) -> ActionSequence {
        self.sequence(SourceType::Key, InputSourceId::generate())
    }
}

impl SessionScoped for Actions {
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

    #[test]
    fn test_send_keys_queues_pairs_in_order() {
        let transport = MockTransport::new();
        let mut seq = session(&transport)
            .actions()
            .sequence(SourceType::Key, InputSourceId::new("kb"));

        seq.send_keys("ab");
        assert_eq!(
            seq.actions(),
            [
                Action::KeyDown { value: "a".into() },
                Action::KeyUp { value: "a".into() },
                Action::KeyDown { value: "b".into() },
                Action::KeyUp { value: "b".into() },
            ]
        );
    }

    #[test]
    fn test_sequence_json() {
        let transport = MockTransport::new();
        let mut seq = session(&transport)
            .actions()
            .sequence(SourceType::Null, InputSourceId::new("idle"));

        seq.pause(Some(Duration::from_millis(250))).pause(None);
        assert_eq!(
            seq.to_json(),
            json!({
                "type": "none",
                "id": "idle",
                "actions": [{"type": "pause", "duration": 250}, {"type": "pause"}],
            })
        );
    }

    #[test]
    fn test_pause_saturates_huge_duration() {
        let transport = MockTransport::new();
        let mut seq = session(&transport).actions().key_sequence();

        seq.pause(Some(Duration::MAX));
        assert_eq!(seq.actions(), [Action::Pause { duration: Some(u64::MAX) }]);
    }

    #[test]
    fn test_press_named_key() {
        let transport = MockTransport::new();
        let mut seq = session(&transport).actions().key_sequence();

        seq.press(Key::Enter);
        assert_eq!(
            seq.actions(),
            [
                Action::KeyDown { value: "\u{E007}".into() },
                Action::KeyUp { value: "\u{E007}".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_perform_flushes_one_request() {
        let transport = MockTransport::new();
        let session = session(&transport);

        session
            .actions()
            .sequence(SourceType::Key, InputSourceId::new("kb"))
            .key_down("a")
            .key_up("a")
            .perform()
            .await
            .expect("perform");

        assert_eq!(transport.requests(), vec!["POST session", "POST session/S1/actions"]);
        assert_eq!(
            transport.last_body(),
            Some(json!({"actions": [{
                "type": "key",
                "id": "kb",
                "actions": [
                    {"type": "keyDown", "value": "a"},
                    {"type": "keyUp", "value": "a"},
                ],
            }]}))
        );
    }

    #[tokio::test]
    async fn test_perform_twice_resends_same_actions() {
        let transport = MockTransport::new();
        let session = session(&transport);

        let mut seq = session.actions().key_sequence();
        seq.send_keys("x");

        seq.perform().await.expect("perform");
        let first = transport.last_body();
        seq.perform().await.expect("perform again");

        assert_eq!(transport.last_body(), first);
        assert_eq!(transport.count(Method::POST, "session/S1/actions"), 2);
    }

    #[tokio::test]
    async fn test_release() {
        let transport = MockTransport::new();
        let session = session(&transport);

        session.actions().release().await.expect("release");
        assert_eq!(transport.requests(), vec!["POST session", "DELETE session/S1/actions"]);
    }
}
