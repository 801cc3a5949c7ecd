//! Routing of WebView events drained from the shared queue.

use tandem_webview::{PageLoadState, ViewKey, WebViewEvent};

use crate::app_state::core::TandemApp;

impl TandemApp {
    /// Drain and handle every pending WebView event.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events = match self.sessions {
            Some(ref sessions) => sessions.backend().drain_events(),
            None => return,
        };

        for event in events {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::IpcMessage {
                view: ViewKey::Sidebar,
                body,
            } => self.handle_ipc_message(&body),
            WebViewEvent::IpcMessage { view, .. } => {
                tracing::warn!(%view, "IPC message from a session view ignored");
            }
            WebViewEvent::TitleChanged {
                view: ViewKey::Session(id),
                title,
            } => {
                let is_active = self.sessions.as_ref().and_then(|s| s.active()) == Some(id);
                self.session_titles.insert(id, title);
                if is_active {
                    self.update_window_title();
                }
            }
            WebViewEvent::TitleChanged { .. } => {}
            WebViewEvent::PageLoad { view, state, url } => match state {
                PageLoadState::Started => tracing::debug!(%view, %url, "Page load started"),
                PageLoadState::Finished => tracing::info!(%view, %url, "Page loaded"),
            },
            WebViewEvent::NavigationBlocked { view, url } => {
                tracing::debug!(%view, %url, "Navigation blocked");
            }
        }
    }
}
