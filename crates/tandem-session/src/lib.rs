//! Session-view lifecycle for Tandem.
//!
//! Owns the set of per-account embedded views: which exist, which one is
//! attached to the window, where it sits, and what is persisted on disk.
//! The windowing toolkit is abstracted behind [`ViewBackend`] so the whole
//! lifecycle runs without a display.

pub mod backend;
pub mod layout;
pub mod manager;
pub mod pool;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{SessionView, ViewBackend};
pub use layout::SidebarLayout;
pub use manager::SessionManager;
pub use pool::ViewPool;
pub use registry::{LoadOutcome, SessionRegistry};
