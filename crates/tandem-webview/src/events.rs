//! WebView event types.

use std::fmt;

use serde::{Deserialize, Serialize};
use tandem_common::SessionId;

/// Which WebView an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Sidebar,
    Session(SessionId),
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKey::Sidebar => write!(f, "sidebar"),
            ViewKey::Session(id) => write!(f, "session-{id}"),
        }
    }
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view: ViewKey,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { view: ViewKey, title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { view: ViewKey, body: String },
    /// A navigation was refused by the view's policy.
    NavigationBlocked { view: ViewKey, url: String },
}

impl WebViewEvent {
    pub fn view(&self) -> ViewKey {
        match self {
            WebViewEvent::PageLoad { view, .. }
            | WebViewEvent::TitleChanged { view, .. }
            | WebViewEvent::IpcMessage { view, .. }
            | WebViewEvent::NavigationBlocked { view, .. } => *view,
        }
    }
}
