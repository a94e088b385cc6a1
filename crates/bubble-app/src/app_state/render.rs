//! Per-frame animation and rendering.

use bubble_renderer::TickOutcome;

use super::core::BubbleApp;

impl BubbleApp {
    /// Advance the animation by one frame and draw it.
    pub(super) fn render_frame(&mut self) {
        let delta = self.timer.begin_frame();

        if !self.paused {
            if let TickOutcome::NotReady = self.scene.update(delta, &self.config) {
                tracing::trace!("bubble geometry not ready, skipping displacement");
            }
        }

        if let Some(ref mut rs) = self.render_state {
            let elapsed = self.timer.elapsed();
            if let Err(e) = rs.render_frame(&mut self.scene, &self.config, elapsed) {
                tracing::error!("Render error: {e}");
            }
        }

        self.refresh_window_title();
    }
}
