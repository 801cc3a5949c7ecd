//! Per-tick work: WebView events and deferred resizes.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::TandemApp;

/// How often WebView events are drained while the window is idle.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl TandemApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_webview_events();
        self.flush_deferred_resize();

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}
