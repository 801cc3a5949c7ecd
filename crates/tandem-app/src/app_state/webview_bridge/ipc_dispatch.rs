//! IPC message validation and dispatch from the sidebar to the session
//! manager.

use serde_json::Value;

use tandem_webview::ipc::{js_dispatch_message, js_reject, js_resolve};
use tandem_webview::IpcMessage;

use crate::app_state::core::TandemApp;

use super::requests::apply_request;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the sidebar.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "open_session",
    "close_session",
    "list_sessions",
    "add_session",
    "ping",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl TandemApp {
    /// Handle a single IPC message from the sidebar.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            if let Some(request) = msg.request {
                self.eval_in_sidebar(&js_reject(request, &format!("unknown kind: {}", msg.kind)));
            }
            return;
        }

        let Some(ref mut sessions) = self.sessions else {
            tracing::warn!(kind = %msg.kind, "IPC message dropped: no session manager");
            return;
        };

        tracing::debug!(kind = %msg.kind, request = ?msg.request, "IPC message dispatched");
        let outcome = apply_request(sessions, &msg);
        let active = sessions.active();

        if let Err(ref e) = outcome.result {
            tracing::warn!(kind = %msg.kind, error = %e, "IPC request failed");
        }

        // Replies go out in handling order so the sidebar's promises settle
        // in the order it sent them.
        if let Some(request) = msg.request {
            let script = match &outcome.result {
                Ok(value) => js_resolve(request, value),
                Err(e) => js_reject(request, e),
            };
            self.eval_in_sidebar(&script);
        }

        if outcome.changed {
            self.session_titles.retain(|id, _| {
                self.sessions
                    .as_ref()
                    .is_some_and(|sessions| sessions.contains(*id))
            });
            let payload = match active {
                Some(id) => serde_json::json!({ "id": id.get() }),
                None => serde_json::json!({ "id": Value::Null }),
            };
            self.eval_in_sidebar(&js_dispatch_message("active_changed", &payload));
            self.update_window_title();
        }
    }

    /// Evaluate a script in the sidebar, logging failures.
    fn eval_in_sidebar(&self, script: &str) {
        let Some(ref sidebar) = self.sidebar else {
            return;
        };
        if let Err(e) = sidebar.evaluate_script(script) {
            tracing::warn!(error = %e, "Failed to evaluate script in sidebar");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
