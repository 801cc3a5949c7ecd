//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the session manager, the sidebar, and
//! window geometry.

mod core;
mod event_handler;
mod geometry;
mod init;
mod polling;
mod shutdown;
mod title;
mod webview_bridge;

pub use core::{LaunchOptions, TandemApp};
