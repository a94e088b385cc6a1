//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use crate::controls::Command;

use super::core::BubbleApp;

impl ApplicationHandler for BubbleApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_live_reload();
        self.update_window_title();
        event_loop.set_control_flow(ControlFlow::Poll);
        self.request_redraw();
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
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.poll_config_reload();
        self.request_redraw();
    }
}

impl BubbleApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(command) = Command::from_key(&event.logical_key, self.modifiers.shift_key())
        else {
            return;
        };
        self.run_command(command);
    }

    /// Carry out a decoded key command.
    pub(super) fn run_command(&mut self, command: Command) {
        match command {
            Command::SelectPrevious => self.controls.select_previous(),
            Command::SelectNext => self.controls.select_next(),
            Command::Adjust(steps) => {
                if self.controls.adjust(&mut self.config, steps) {
                    self.apply_config();
                }
            }
            Command::Save => self.save_config(),
            Command::Reload => self.reload_from_disk(),
            Command::SetVariant(variant) => self.set_variant(variant),
            Command::TogglePause => {
                self.paused = !self.paused;
                tracing::info!(paused = self.paused, "Animation pause toggled");
            }
        }
        self.update_window_title();
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    /// Stop the reload watcher and release GPU resources before the window.
    fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");
        self.config_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(std::time::Duration::from_secs(2));
        }
        self.render_state = None;
        tracing::info!("Shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use bubble_config::schema::{BubbleConfig, SceneVariant};

    use crate::app_state::core::BubbleApp;
    use crate::cli::Overrides;
    use crate::controls::Command;

    fn app() -> (tempfile::TempDir, BubbleApp) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let app = BubbleApp::new(BubbleConfig::default(), path, Overrides::default());
        (dir, app)
    }

    #[test]
    fn adjust_edits_the_selected_control() {
        let (_dir, mut app) = app();
        app.run_command(Command::SelectNext); // noise speed
        app.run_command(Command::Adjust(-1.0));
        assert!((app.config.noise.speed - 0.35).abs() < 1e-5);
    }

    #[test]
    fn pause_stops_and_resumes() {
        let (_dir, mut app) = app();
        app.run_command(Command::TogglePause);
        assert!(app.paused);
        app.run_command(Command::TogglePause);
        assert!(!app.paused);
    }

    #[test]
    fn save_command_writes_config_file() {
        let (dir, mut app) = app();
        app.run_command(Command::Adjust(5.0)); // noise intensity 0.08 -> 0.13
        app.run_command(Command::Save);
        let saved = bubble_config::load_config_from(&dir.path().join("config.toml")).unwrap();
        assert!((saved.noise.intensity - 0.13).abs() < 1e-5);
    }

    #[test]
    fn variant_command_switches_scene() {
        let (_dir, mut app) = app();
        app.run_command(Command::SetVariant(SceneVariant::Bloom));
        assert_eq!(app.config.scene.variant, SceneVariant::Bloom);
        assert!(!app.scene.features().hue_saturation);
    }
}
