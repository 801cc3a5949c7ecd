use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ViewKey, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Which URLs a WebView may navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Only the initial inline document. Used by the sidebar.
    Pinned,
    /// Encrypted web origins plus their blob URLs. Used by sessions.
    HttpsOnly,
}

const PINNED_PREFIXES: &[&str] = &["about:blank", "about:srcdoc"];

const HTTPS_PREFIXES: &[&str] = &["https://", "blob:https://", "about:blank"];

impl NavigationPolicy {
    /// Check whether `url` may be loaded under this policy.
    pub fn allows(self, url: &str) -> bool {
        let prefixes = match self {
            NavigationPolicy::Pinned => PINNED_PREFIXES,
            NavigationPolicy::HttpsOnly => HTTPS_PREFIXES,
        };
        prefixes.iter().any(|prefix| url.starts_with(prefix))
    }
}

fn push_event(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewKey,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    view = %view,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(view = %view, body_len = body.len(), "IPC message from JS");
            push_event(&events, WebViewEvent::IpcMessage { view, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewKey,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view = %view, ?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { view, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewKey,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(view = %view, title = %title, "title changed");
            push_event(&events, WebViewEvent::TitleChanged { view, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewKey,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if policy.allows(&url) {
                return true;
            }
            warn!(view = %view, url = %url, ?policy, "navigation blocked");
            push_event(&events, WebViewEvent::NavigationBlocked { view, url });
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
