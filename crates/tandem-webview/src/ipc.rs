//! IPC protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: `window.tandem.ipc.invoke(kind, payload)` posts
//!   `{kind, payload, request}` through `window.ipc.postMessage`, which
//!   triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust evaluates `window.tandem.ipc._resolve(request, result)`
//!   (or `_reject`) to settle the matching promise, or `_dispatch(kind, payload)`
//!   for unsolicited pushes.
//!
//! Replies are evaluated in the order requests are handled, so promises from
//! one caller settle in program order.

use serde::{Deserialize, Serialize};
use tandem_common::SessionId;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: IpcPayload,
    /// Correlation id for `invoke` calls; absent for fire-and-forget sends.
    #[serde(default)]
    pub request: Option<u64>,
}

/// Payload of an IPC message: either a simple string or structured JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcPayload {
    /// Extract `{ "id": n }` as a session id.
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            IpcPayload::Json(value) => value
                .get("id")
                .and_then(serde_json::Value::as_u64)
                .and_then(|raw| u32::try_from(raw).ok())
                .and_then(SessionId::new),
            IpcPayload::Text(_) | IpcPayload::None => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into the sidebar WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // Tandem IPC bridge
    window.tandem = window.tandem || {};
    window.tandem.ipc = {
        _next: 1,
        _pending: {},
        _handlers: {},
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        invoke: function(kind, payload) {
            var self = this;
            var request = self._next++;
            return new Promise(function(resolve, reject) {
                self._pending[request] = { resolve: resolve, reject: reject };
                window.ipc.postMessage(JSON.stringify({
                    kind: kind,
                    payload: payload === undefined ? null : payload,
                    request: request
                }));
            });
        },
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _resolve: function(request, result) {
            var p = this._pending[request];
            if (p) {
                delete this._pending[request];
                p.resolve(result);
            }
        },
        _reject: function(request, message) {
            var p = this._pending[request];
            if (p) {
                delete this._pending[request];
                p.reject(new Error(message));
            }
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn js_value(value: &serde_json::Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// JS snippet that settles an `invoke` promise with `result`.
pub fn js_resolve(request: u64, result: &serde_json::Value) -> String {
    format!("window.tandem.ipc._resolve({request}, {});", js_value(result))
}

/// JS snippet that rejects an `invoke` promise with `message`.
pub fn js_reject(request: u64, message: &str) -> String {
    format!("window.tandem.ipc._reject({request}, {});", js_string(message))
}

/// JS snippet that dispatches a push message to a JS handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    format!(
        "window.tandem.ipc._dispatch({}, {});",
        js_string(kind),
        js_value(payload),
    )
}
