//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Fullscreen, WindowId};

use super::core::TandemApp;
use super::geometry::GeometryEvent;

impl ApplicationHandler for TandemApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                self.should_exit = true;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    let Some(ref window) = self.window else {
                        return;
                    };
                    let event = GeometryEvent::Resized {
                        maximized: window.is_maximized(),
                        fullscreen: window.fullscreen().is_some(),
                    };
                    self.on_geometry_event(event);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.on_geometry_event(GeometryEvent::ScaleFactorChanged);
            }

            WindowEvent::Occluded(false) => {
                self.on_geometry_event(GeometryEvent::Shown);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl TandemApp {
    /// F11 toggles borderless fullscreen. Other keys belong to the WebViews.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if state != ElementState::Pressed || repeat {
            return;
        }
        if logical_key != Key::Named(NamedKey::F11) {
            return;
        }

        let Some(ref window) = self.window else {
            return;
        };
        let next = match window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        tracing::debug!(fullscreen = next.is_some(), "Toggling fullscreen");
        window.set_fullscreen(next);
        self.on_geometry_event(GeometryEvent::FullscreenToggled);
    }
}
