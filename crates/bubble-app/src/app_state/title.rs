//! Window title management: shows the selected control and frame rate.

use std::time::{Duration, Instant};

use super::core::BubbleApp;

/// Minimum time between title refreshes while animating.
const TITLE_REFRESH: Duration = Duration::from_millis(250);

impl BubbleApp {
    /// Format: "{title} | {variant} | {control}: {value} | {fps} fps ({ms} ms)"
    pub(super) fn window_title(&self) -> String {
        let mut title = format!(
            "{} | {} | {} | {:.0} fps ({:.1} ms)",
            self.config.window.title,
            self.config.scene.variant.name(),
            self.controls.status(&self.config),
            self.timer.fps(),
            self.timer.frame_time_ms(),
        );
        if self.paused {
            title.push_str(" | paused");
        }
        title
    }

    /// Update the window title now.
    pub(super) fn update_window_title(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&self.window_title());
        self.last_title_update = Instant::now();
    }

    /// Update the title if it has not been refreshed recently.
    pub(super) fn refresh_window_title(&mut self) {
        if self.last_title_update.elapsed() >= TITLE_REFRESH {
            self.update_window_title();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bubble_config::schema::BubbleConfig;

    use crate::app_state::core::BubbleApp;
    use crate::cli::Overrides;

    fn app() -> BubbleApp {
        BubbleApp::new(
            BubbleConfig::default(),
            PathBuf::from("config.toml"),
            Overrides::default(),
        )
    }

    #[test]
    fn title_shows_variant_and_selected_control() {
        let app = app();
        let title = app.window_title();
        assert!(title.starts_with("Bubble | graded | noise intensity: 0.08"));
        assert!(title.ends_with("0 fps (0.0 ms)"));
    }

    #[test]
    fn title_reports_frame_time() {
        let mut app = app();
        for _ in 0..4 {
            app.timer.record(std::time::Duration::from_millis(20));
        }
        assert!(app.window_title().ends_with("50 fps (20.0 ms)"));
    }

    #[test]
    fn title_marks_pause() {
        let mut app = app();
        app.paused = true;
        assert!(app.window_title().ends_with("| paused"));
    }

    #[test]
    fn update_title_without_window_does_not_panic() {
        let mut app = app();
        app.update_window_title();
    }
}
