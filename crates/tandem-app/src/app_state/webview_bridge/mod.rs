//! Bridge between the sidebar, the session views, and the session manager.
//!
//! Handles IPC request dispatch, replies to the sidebar, and routing of
//! page events from every WebView.

mod events;
mod ipc_dispatch;
mod requests;
