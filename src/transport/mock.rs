//! Recording transport for unit tests.
//!
//! Replies from a queue of scripted responses. When the queue is empty,
//! `POST session` creates `S1`, `S2`, ... and everything else answers
//! `200 {"value": null}`.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use serde_json::{Value, json};

use crate::error::Result;
use crate::protocol::{Command, Method, WireResponse};

use super::Transport;

#[derive(Default)]
pub(crate) struct MockTransport {
    sent: Mutex<Vec<Command>>,
    responses: Mutex<VecDeque<WireResponse>>,
    sessions_created: AtomicUsize,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a raw response.
    pub(crate) fn push(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .push_back(WireResponse::new(status, body));
    }

    /// Queues `200 {"value": value}`.
    pub(crate) fn push_value(&self, value: Value) {
        self.push(200, json!({ "value": value }));
    }

    /// Every command sent so far, in order.
    pub(crate) fn sent(&self) -> Vec<Command> {
        self.sent.lock().clone()
    }

    /// `"<METHOD> <path>"` for every command sent so far.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.sent.lock().iter().map(ToString::to_string).collect()
    }

    /// Number of sent commands matching method and path.
    pub(crate) fn count(&self, method: Method, path: &str) -> usize {
        self.sent
            .lock()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    /// Body of the most recent command.
    pub(crate) fn last_body(&self) -> Option<Value> {
        self.sent.lock().last().and_then(|c| c.body.clone())
    }

    fn default_response(&self, command: &Command) -> WireResponse {
        if command.method == Method::POST && command.path == "session" {
            let n = self.sessions_created.fetch_add(1, Ordering::SeqCst) + 1;
            return WireResponse::new(
                200,
                json!({"value": {"sessionId": format!("S{n}"), "capabilities": {}}}),
            );
        }
        WireResponse::new(200, json!({ "value": null }))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, command: &Command, _headers: Option<&HeaderMap>) -> Result<WireResponse> {
        self.sent.lock().push(command.clone());
        let queued = self.responses.lock().pop_front();
        Ok(queued.unwrap_or_else(|| self.default_response(command)))
    }
}
