//! WebView bridge for Tandem.
//!
//! Wraps the `wry` crate to provide:
//! - One child WebView per session, each with its own storage partition
//! - The sidebar WebView hosting the account list
//! - Bidirectional IPC (Rust <-> JavaScript) with request/response replies
//! - Event collection (page load, title change, IPC, blocked navigation)

pub mod backend;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod sidebar;

pub use backend::{to_wry_rect, SessionTemplate, WryBackend};
pub use events::{PageLoadState, ViewKey, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{NavigationPolicy, WebViewConfig, WebViewHandle, WebViewManager};
