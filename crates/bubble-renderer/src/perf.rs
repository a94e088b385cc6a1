//! Frame timing: per-frame delta for animation plus rolling FPS.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks frame durations for animation deltas and FPS calculation.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    started: Instant,
    last_frame: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::new(),
            started: now,
            last_frame: now,
            max_samples: 120,
        }
    }

    /// Start over from now, dropping every recorded sample.
    ///
    /// Call once setup is done so the first frame's delta does not include
    /// window and GPU initialization.
    pub fn restart(&mut self) {
        let now = Instant::now();
        self.frame_times.clear();
        self.started = now;
        self.last_frame = now;
    }

    /// Record the start of a new frame and return seconds since the last one.
    /// Call this once per frame.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt)
    }

    /// Push a frame duration into the window and return it in seconds.
    pub fn record(&mut self, dt: Duration) -> f32 {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        dt.as_secs_f32()
    }

    /// Seconds since the timer was created.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
