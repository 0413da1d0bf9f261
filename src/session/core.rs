//! Session lifecycle and command dispatch.
//!
//! The [`Session`] struct owns the remote session id, the transport and
//! the element handle registry. Every session-scoped operation in the
//! crate funnels through [`Session::execute`], which starts the session
//! on first use and then dispatches the command.
//!
//! # Lifecycle
//!
//! ```text
//! NO_SESSION ──start()──► ACTIVE ──end()──► NO_SESSION
//!     ▲  │                 │  ▲
//!     └──┘ end() no-op     └──┘ start() no-op
//! ```
//!
//! # Dispatch layers
//!
//! | Method | Needs session | Path | Returns |
//! |--------|---------------|------|---------|
//! | [`Session::send_raw`] | no | as given | [`WireResponse`] |
//! | [`Session::send_command`] | yes | `session/<id>/<path>` | unwrapped value |
//! | [`Session::execute`] | started on demand | `session/<id>/<path>` | unwrapped value |

// ============================================================================
// Imports
// ============================================================================

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::browser::{
    Actions, Cookies, Element, ElementRegistry, Find, Timeouts, UserPrompt, WindowRect,
};
use crate::error::{Error, Result};
use crate::identifiers::SessionId;
use crate::protocol::{
    Capabilities, CapabilitiesShape, Command, ELEMENT_KEY, Method, WireResponse, is_empty_value,
    session_path,
};
use crate::transport::Transport;

use super::builder::SessionBuilder;

// ============================================================================
// Types
// ============================================================================

/// Constructs a session extension once the session has started.
///
/// The returned object is available through [`Session::extension`] until
/// the session ends. It receives a [`WeakSession`] because the session
/// owns the extension; holding an upgraded [`Session`] inside it keeps the
/// session alive forever and disables teardown on drop.
pub type ExtensionFactory =
    Arc<dyn Fn(WeakSession) -> Arc<dyn Any + Send + Sync> + Send + Sync>;

/// Mutable per-session state.
pub(crate) struct SessionState {
    /// Remote session id (`None` = not started).
    pub session_id: Option<SessionId>,
    /// Live element handles for the current session.
    pub elements: ElementRegistry,
    /// Extension object created at start.
    pub extension: Option<Arc<dyn Any + Send + Sync>>,
}

/// Internal shared state for a session.
pub(crate) struct SessionInner {
    /// Wire transport.
    transport: Arc<dyn Transport>,
    /// Capability sets sent at start.
    capabilities: Capabilities,
    /// Envelope used for the creation body.
    shape: CapabilitiesShape,
    /// Optional extension constructor.
    extension_factory: Option<ExtensionFactory>,
    /// Session id, handle registry, extension.
    state: Mutex<SessionState>,
    /// Serializes `start` and `end`.
    lifecycle: tokio::sync::Mutex<()>,
}

// ============================================================================
// Session
// ============================================================================

/// A WebDriver session on a remote end.
///
/// Cloning is cheap and every clone refers to the same remote session.
/// When the last clone (including the ones held by element handles) is
/// dropped while the session is still active, a `DELETE session/<id>` is
/// spawned on the current tokio runtime. Failures on that path are logged
/// and otherwise ignored.
///
/// Teardown on drop is best effort. The spawned request only runs if the
/// runtime keeps going: a session dropped at the end of `#[tokio::main]`,
/// or with no runtime at all, is left open on the remote end. Call
/// [`Session::end`] before returning from `main`, including on error paths.
///
/// # Example
///
/// ```no_run
/// # use wire_webdriver::Session;
/// # async fn example() -> wire_webdriver::Result<()> {
/// let session = Session::builder().port(4444).build()?;
///
/// session.start().await?;
/// assert!(session.is_active());
///
/// session.end().await?;
/// assert!(!session.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    /// Shared inner state.
    pub(crate) inner: Arc<SessionInner>,
}

// ============================================================================
// Session - Display
// ============================================================================

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Session")
            .field("session_id", &state.session_id)
            .field("element_count", &state.elements.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Session - Constructor
// ============================================================================

impl Session {
    /// Creates a configuration builder for a session.
    #[inline]
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Creates a session that is not started yet.
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        capabilities: Capabilities,
        shape: CapabilitiesShape,
        extension_factory: Option<ExtensionFactory>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                transport,
                capabilities,
                shape,
                extension_factory,
                state: Mutex::new(SessionState {
                    session_id: None,
                    elements: ElementRegistry::default(),
                    extension: None,
                }),
                lifecycle: tokio::sync::Mutex::new(()),
            }),
        }
    }
}

// ============================================================================
// Session - Accessors
// ============================================================================

impl Session {
    /// Returns the remote session id, if started.
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.inner.state.lock().session_id.clone()
    }

    /// Returns `true` if a remote session is active.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.state.lock().session_id.is_some()
    }

    /// Returns the extension object if it is of type `T`.
    ///
    /// `None` before start, after end, or when no extension is configured.
    #[must_use]
    pub fn extension<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let extension = self.inner.state.lock().extension.clone()?;
        extension.downcast::<T>().ok()
    }

    /// Returns `true` if both values refer to the same session.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Session) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns a handle that does not keep the session alive.
    #[inline]
    #[must_use]
    pub fn downgrade(&self) -> WeakSession {
        WeakSession {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Timeout configuration.
    #[inline]
    #[must_use]
    pub fn timeouts(&self) -> Timeouts {
        Timeouts::new(self.clone())
    }

    /// Window geometry.
    #[inline]
    #[must_use]
    pub fn window(&self) -> WindowRect {
        WindowRect::new(self.clone())
    }

    /// Element lookup from the document root.
    #[inline]
    #[must_use]
    pub fn find(&self) -> Find {
        Find::new(self.clone())
    }

    /// Cookie access.
    #[inline]
    #[must_use]
    pub fn cookies(&self) -> Cookies {
        Cookies::new(self.clone())
    }

    /// User prompt (alert/confirm/prompt) handling.
    #[inline]
    #[must_use]
    pub fn alert(&self) -> UserPrompt {
        UserPrompt::new(self.clone())
    }

    /// Input action dispatch.
    #[inline]
    #[must_use]
    pub fn actions(&self) -> Actions {
        Actions::new(self.clone())
    }
}

// ============================================================================
// Session - Lifecycle
// ============================================================================

impl Session {
    /// Creates the remote session.
    ///
    /// Does nothing and returns `null` if a session is already active.
    /// Otherwise sends `POST session` and returns the creation payload
    /// (`{"sessionId": ..., "capabilities": ...}`).
    ///
    /// # Errors
    ///
    /// - [`Error::Protocol`] if the remote end refuses the session
    /// - [`Error::InvalidResponse`] if the payload has no `sessionId`
    pub async fn start(&self) -> Result<Value> {
        let (_, payload) = self.start_inner().await?;
        Ok(payload)
    }

    /// Terminates the remote session.
    ///
    /// Does nothing if no session is active. On success the session id is
    /// cleared and every element handle minted in this session becomes
    /// stale. If the remote end rejects the `DELETE`, the session stays
    /// active and the error is returned.
    pub async fn end(&self) -> Result<()> {
        let _lifecycle = self.inner.lifecycle.lock().await;

        let Some(session_id) = self.session_id() else {
            return Ok(());
        };

        self.send_raw(Method::DELETE, &session_path(&session_id, ""), None, None)
            .await?;

        let (invalidated, extension) = {
            let mut state = self.inner.state.lock();
            state.session_id = None;
            (state.elements.clear(), state.extension.take())
        };
        drop(extension);

        info!(session_id = %session_id, invalidated, "Session ended");
        Ok(())
    }

    /// Returns the live session id, starting the session if needed.
    ///
    /// This is the guard every session-scoped operation runs first.
    pub async fn ensure_started(&self) -> Result<SessionId> {
        if let Some(session_id) = self.session_id() {
            return Ok(session_id);
        }
        let (session_id, _) = self.start_inner().await?;
        Ok(session_id)
    }

    /// Starts the session unless active; returns the id and the payload.
    async fn start_inner(&self) -> Result<(SessionId, Value)> {
        let _lifecycle = self.inner.lifecycle.lock().await;

        if let Some(session_id) = self.session_id() {
            debug!(session_id = %session_id, "Session already active");
            return Ok((session_id, Value::Null));
        }

        let body = self.inner.capabilities.to_body(self.inner.shape)?;
        let payload = self
            .send_raw(Method::POST, "session", Some(body), None)
            .await?
            .into_value();

        let session_id = payload
            .get("sessionId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(SessionId::new)
            .ok_or_else(|| Error::invalid_response("session creation payload has no sessionId"))?;

        self.inner.state.lock().session_id = Some(session_id.clone());

        if let Some(factory) = &self.inner.extension_factory {
            let extension = factory(self.downgrade());
            self.inner.state.lock().extension = Some(extension);
        }

        info!(session_id = %session_id, "Session started");
        Ok((session_id, payload))
    }
}

// ============================================================================
// Session - Dispatch
// ============================================================================

impl Session {
    /// Sends a command as-is, with or without an active session.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Full request path, e.g. `session` or `status`
    /// * `body` - Optional JSON body
    /// * `headers` - Optional extra request headers
    ///
    /// # Errors
    ///
    /// - [`Error::Protocol`] for any status other than 200, classified
    ///   from `value.error` with the message from `value.message`
    /// - transport errors ([`Error::Http`], [`Error::Json`], [`Error::Url`])
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<WireResponse> {
        let command = Command::new(method, path).with_body(body);
        debug!(command = %command, "Sending command");

        let response = self.inner.transport.send(&command, headers).await?;

        response.error_for_status().inspect_err(|e| {
            debug!(command = %command, error = %e, "Command failed");
        })
    }

    /// Sends a command relative to the active session.
    ///
    /// `path` is joined to `session/<id>/`. Returns `None` when the
    /// unwrapped value is `null`, `""`, `[]` or `{}`.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionNotCreated`] if no session is active
    /// - everything [`send_raw`](Self::send_raw) returns
    pub async fn send_command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        let session_id = self
            .session_id()
            .ok_or_else(|| Error::session_not_created("no active session"))?;

        let value = self
            .send_raw(method, &session_path(&session_id, path), body, None)
            .await?
            .into_value();

        Ok((!is_empty_value(&value)).then_some(value))
    }

    /// Starts the session if needed, then sends a session-relative command.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        self.ensure_started().await?;
        self.send_command(method, path, body).await
    }

    /// Like [`execute`](Self::execute), deserializing the value into `T`.
    ///
    /// An empty value yields `T::default()`.
    pub async fn execute_as<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.execute(method, path, body).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(T::default()),
        }
    }
}

// ============================================================================
// Session - Element Handles
// ============================================================================

impl Session {
    /// Resolves an element reference payload to a handle.
    ///
    /// The payload must be `{"element-6066-11e4-a52e-4f735466cecf": "<id>"}`.
    /// Resolving the same id twice while the first handle is alive returns
    /// the same handle.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidResponse`] if the reference key is missing or empty
    /// - [`Error::SessionNotCreated`] if no session is active
    pub fn element(&self, payload: &Value) -> Result<Element> {
        let element_id = payload
            .get(ELEMENT_KEY)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                Error::invalid_response(format!("not an element reference: {payload}"))
            })?;

        let mut state = self.inner.state.lock();
        let session_id = state
            .session_id
            .clone()
            .ok_or_else(|| Error::session_not_created("no active session"))?;

        Ok(state.elements.resolve(self, &session_id, element_id))
    }

    /// Resolves a list of element reference payloads.
    pub(crate) fn elements(&self, value: Option<Value>) -> Result<Vec<Element>> {
        match value {
            Some(Value::Array(items)) => items.iter().map(|item| self.element(item)).collect(),
            Some(other) => Err(Error::invalid_response(format!(
                "expected a list of element references, got {other}"
            ))),
            None => Ok(Vec::new()),
        }
    }

    /// Returns `true` if `session_id` is the live session.
    pub(crate) fn is_current(&self, session_id: &SessionId) -> bool {
        self.inner.state.lock().session_id.as_ref() == Some(session_id)
    }
}

// ============================================================================
// WeakSession
// ============================================================================

/// Non-owning reference to a [`Session`].
///
/// Handed to extension factories so an extension can reach its session
/// without keeping it alive.
#[derive(Clone)]
pub struct WeakSession {
    inner: Weak<SessionInner>,
}

impl WeakSession {
    /// Returns the session if any strong handle is still alive.
    #[inline]
    #[must_use]
    pub fn upgrade(&self) -> Option<Session> {
        self.inner.upgrade().map(|inner| Session { inner })
    }
}

impl fmt::Debug for WeakSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSession")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

// ============================================================================
// Drop
// ============================================================================

impl Drop for SessionInner {
    fn drop(&mut self) {
        let Some(session_id) = self.state.get_mut().session_id.take() else {
            return;
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(session_id = %session_id, "No runtime to end session on drop");
            return;
        };

        let transport = Arc::clone(&self.transport);
        runtime.spawn(async move {
            let command = Command::delete(session_path(&session_id, ""));
            let result = transport
                .send(&command, None)
                .await
                .and_then(WireResponse::error_for_status);

            match result {
                Ok(_) => debug!(session_id = %session_id, "Session ended on drop"),
                Err(e) => {
                    warn!(
                        session_id = %session_id,
                        error = %e,
                        "Ignoring session teardown failure"
                    );
                }
            }
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

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
    async fn test_start_is_idempotent() {
        let transport = MockTransport::new();
        let session = session(&transport);

        let payload = session.start().await.expect("start");
        assert_eq!(payload["sessionId"], json!("S1"));
        assert_eq!(session.start().await.expect("start"), Value::Null);

        assert_eq!(transport.count(Method::POST, "session"), 1);
        assert_eq!(session.session_id(), Some(SessionId::new("S1")));
    }

    #[tokio::test]
    async fn test_end_is_idempotent() {
        let transport = MockTransport::new();
        let session = session(&transport);

        session.end().await.expect("end without session");
        assert!(transport.sent().is_empty());

        session.start().await.expect("start");
        session.end().await.expect("end");
        session.end().await.expect("second end");

        assert_eq!(transport.count(Method::DELETE, "session/S1"), 1);
        assert!(!session.is_active());
    }

    #[tokio::test]
    async fn test_start_sends_capabilities() {
        let transport = MockTransport::new();
        let session = Session::new(
            transport.clone(),
            Capabilities {
                desired: Some(json!({"browserName": "firefox"})),
                required: None,
            },
            CapabilitiesShape::Flat,
            None,
        );

        session.start().await.expect("start");
        assert_eq!(
            transport.last_body(),
            Some(json!({"desiredCapabilities": {"browserName": "firefox"}}))
        );
    }

    #[tokio::test]
    async fn test_start_without_session_id_fails() {
        let transport = MockTransport::new();
        transport.push_value(json!({"capabilities": {}}));
        let session = session(&transport);

        let err = session.start().await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
        assert!(!session.is_active());
    }

    #[tokio::test]
    async fn test_start_refused_is_classified() {
        let transport = MockTransport::new();
        transport.push(
            500,
            json!({"value": {"error": "session not created", "message": "no browser"}}),
        );
        let session = session(&transport);

        let err = session.start().await.unwrap_err();
        assert!(err.is_session_not_created());
        assert!(!session.is_active());
    }

    #[tokio::test]
    async fn test_failed_end_keeps_session() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        transport.push(500, json!({"value": {"error": "unknown error", "message": "busy"}}));
        assert!(session.end().await.is_err());
        assert!(session.is_active());
    }

    #[tokio::test]
    async fn test_send_command_requires_session() {
        let transport = MockTransport::new();
        let session = session(&transport);

        let err = session
            .send_command(Method::GET, "title", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SessionNotCreated { .. }));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_execute_auto_starts_once() {
        let transport = MockTransport::new();
        let session = session(&transport);

        session.execute(Method::GET, "title", None).await.expect("title");
        session.execute(Method::GET, "url", None).await.expect("url");

        assert_eq!(
            transport.requests(),
            vec!["POST session", "GET session/S1/title", "GET session/S1/url"]
        );
    }

    #[tokio::test]
    async fn test_path_composition() {
        let transport = MockTransport::new();
        transport.push_value(json!({"sessionId": "abc123"}));
        let session = session(&transport);

        session.start().await.expect("start");
        session
            .send_command(Method::GET, "window/rect", None)
            .await
            .expect("rect");

        assert_eq!(
            transport.sent().last().map(|c| c.path.clone()),
            Some("session/abc123/window/rect".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_values_normalize_to_none() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        for empty in [json!(""), json!({}), json!([]), Value::Null] {
            transport.push_value(empty);
            let value = session.send_command(Method::GET, "x", None).await.expect("x");
            assert_eq!(value, None);
        }

        for kept in [json!(false), json!(0), json!("a")] {
            transport.push_value(kept.clone());
            let value = session.send_command(Method::GET, "x", None).await.expect("x");
            assert_eq!(value, Some(kept));
        }
    }

    #[tokio::test]
    async fn test_status_maps_to_classified_error() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        transport.push(
            404,
            json!({"value": {"error": "no such window", "message": "window closed"}}),
        );
        let err = session
            .send_command(Method::GET, "window", None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Some(crate::ErrorKind::NoSuchWindow));
        assert_eq!(err.to_string(), "no such window: window closed");
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let transport = MockTransport::new();
        let session = session(&transport);

        let payload = session.start().await.expect("start");
        assert_eq!(payload["sessionId"], json!("S1"));
        assert_eq!(session.session_id(), Some(SessionId::new("S1")));

        transport.push_value(json!("Example"));
        let title: String = session
            .execute_as(Method::GET, "title", None)
            .await
            .expect("title");
        assert_eq!(title, "Example");

        transport.push_value(Value::Null);
        session.end().await.expect("end");
        assert_eq!(session.session_id(), None);

        session.execute(Method::GET, "title", None).await.expect("title");
        assert_eq!(
            transport.requests(),
            vec![
                "POST session",
                "GET session/S1/title",
                "DELETE session/S1",
                "POST session",
                "GET session/S2/title",
            ]
        );
    }

    #[tokio::test]
    async fn test_extension_created_on_start_and_cleared_on_end() {
        struct Marker(String);

        let transport = MockTransport::new();
        let factory: ExtensionFactory = Arc::new(|session: WeakSession| {
            let id = session
                .upgrade()
                .and_then(|session| session.session_id())
                .map(|id| id.to_string())
                .unwrap_or_default();
            Arc::new(Marker(id)) as Arc<dyn Any + Send + Sync>
        });
        let session = Session::new(
            transport.clone(),
            Capabilities::default(),
            CapabilitiesShape::Flat,
            Some(factory),
        );

        assert!(session.extension::<Marker>().is_none());
        session.start().await.expect("start");

        let marker = session.extension::<Marker>().expect("extension");
        assert_eq!(marker.0, "S1");
        assert!(session.extension::<String>().is_none());

        session.end().await.expect("end");
        assert!(session.extension::<Marker>().is_none());
    }

    #[tokio::test]
    async fn test_drop_ends_active_session() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        drop(session);
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert_eq!(transport.count(Method::DELETE, "session/S1"), 1);
    }

    #[tokio::test]
    async fn test_drop_swallows_teardown_failure() {
        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        transport.push(500, json!({"value": {"error": "unknown error", "message": "x"}}));
        drop(session);
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert_eq!(transport.count(Method::DELETE, "session/S1"), 1);
    }

    #[tokio::test]
    async fn test_drop_without_session_sends_nothing() {
        let transport = MockTransport::new();
        drop(session(&transport));
        tokio::task::yield_now().await;
        assert!(transport.sent().is_empty());
    }
    #[tokio::test]
    async fn test_drop_ends_session_when_extension_holds_handle() {
        struct Holder(WeakSession);

        let transport = MockTransport::new();
        let factory: ExtensionFactory = Arc::new(|session: WeakSession| {
            Arc::new(Holder(session)) as Arc<dyn Any + Send + Sync>
        });
        let session = Session::new(
            transport.clone(),
            Capabilities::default(),
            CapabilitiesShape::Flat,
            Some(factory),
        );
        session.start().await.expect("start");

        let holder = session.extension::<Holder>().expect("extension");
        assert!(holder.0.upgrade().is_some_and(|s| s.ptr_eq(&session)));
        let weak = holder.0.clone();
        drop(holder);

        drop(session);
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert!(weak.upgrade().is_none());
        assert_eq!(transport.requests(), vec!["POST session", "DELETE session/S1"]);
    }

    #[tokio::test]
    async fn test_teardown_failure_logs_warning() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        use tracing_subscriber::layer::{Context, SubscriberExt};

        struct WarnCounter(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == tracing::Level::WARN {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let transport = MockTransport::new();
        let session = session(&transport);
        session.start().await.expect("start");

        transport.push(500, json!({"value": {"error": "unknown error", "message": "x"}}));
        drop(session);
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert_eq!(transport.count(Method::DELETE, "session/S1"), 1);
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_outside_runtime_leaves_session_open() {
        let transport = MockTransport::new();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");

        let session = session(&transport);
        runtime.block_on(session.start()).expect("start");
        drop(runtime);

        drop(session);
        assert_eq!(transport.requests(), vec!["POST session"]);
    }
}
