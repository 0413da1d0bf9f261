//! Script execution in the current browsing context.
//!
//! Results come back as raw JSON. Element references inside a result can
//! be turned into handles with [`Session::element`].

use serde_json::{Value, json};
use tracing::debug;

use crate::error::Result;
use crate::protocol::Method;

use super::core::Session;

impl Session {
    /// Runs `script` as the body of a function called with `args`.
    ///
    /// Returns `None` for `null`, `""`, `[]` and `{}` results.
    pub async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Option<Value>> {
        debug!(script_len = script.len(), args = args.len(), "Executing script");
        self.execute(
            Method::POST,
            "execute/sync",
            Some(json!({ "script": script, "args": args })),
        )
        .await
    }

    /// Like [`execute_script`](Self::execute_script), but the script
    /// signals completion by calling its last argument.
    pub async fn execute_async_script(
        &self,
        script: &str,
        args: Vec<Value>,
    ) -> Result<Option<Value>> {
        debug!(script_len = script.len(), args = args.len(), "Executing async script");
        self.execute(
            Method::POST,
            "execute/async",
            Some(json!({ "script": script, "args": args })),
        )
        .await
    }
}
