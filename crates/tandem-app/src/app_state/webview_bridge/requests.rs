//! Sidebar requests applied to the session manager.
//!
//! Kept free of any window so it runs against any [`ViewBackend`].

use serde_json::Value;

use tandem_common::SessionId;
use tandem_session::{SessionManager, ViewBackend};
use tandem_webview::IpcMessage;

/// Result of applying one request.
#[derive(Debug, PartialEq)]
pub(super) struct RequestOutcome {
    /// Value to resolve the caller's promise with, or the rejection message.
    pub result: Result<Value, String>,
    /// Whether the active session or the session set may have changed.
    pub changed: bool,
}

impl RequestOutcome {
    fn read(value: Value) -> Self {
        Self {
            result: Ok(value),
            changed: false,
        }
    }

    fn read_err(message: String) -> Self {
        Self {
            result: Err(message),
            changed: false,
        }
    }

    fn write(result: Result<Value, String>) -> Self {
        Self {
            result,
            changed: true,
        }
    }
}

fn ids_to_json(ids: &[SessionId]) -> Value {
    Value::Array(ids.iter().map(|id| Value::from(id.get())).collect())
}

fn require_id(msg: &IpcMessage) -> Result<SessionId, String> {
    msg.payload
        .session_id()
        .ok_or_else(|| format!("{} requires a positive integer id", msg.kind))
}

/// Apply an allowlisted request to `sessions`.
pub(super) fn apply_request<B: ViewBackend>(
    sessions: &mut SessionManager<B>,
    msg: &IpcMessage,
) -> RequestOutcome {
    match msg.kind.as_str() {
        "list_sessions" => RequestOutcome::read(ids_to_json(&sessions.list())),
        "open_session" => match require_id(msg) {
            Ok(id) => RequestOutcome::write(
                sessions
                    .activate(id)
                    .map(|()| Value::Null)
                    .map_err(|e| e.to_string()),
            ),
            Err(e) => RequestOutcome::read_err(e),
        },
        "close_session" => match require_id(msg) {
            Ok(id) => {
                sessions.remove(id);
                RequestOutcome::write(Ok(Value::Null))
            }
            Err(e) => RequestOutcome::read_err(e),
        },
        "add_session" => RequestOutcome::write(
            sessions
                .add()
                .map(|id| Value::from(id.get()))
                .map_err(|e| e.to_string()),
        ),
        "ping" => RequestOutcome::read(Value::from("pong")),
        other => RequestOutcome::read_err(format!("unsupported request: {other}")),
    }
}

// =============================================================================
// TESTS
// =============================================================================
