use std::time::{Duration, Instant};

const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Frames per second averaged over one-second windows.
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    window_start: Instant,
    frames_in_window: u32,
    fps: f64,
}

impl FpsCounter {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames_in_window: 0,
            fps: 0.0,
        }
    }

    /// Records a presented frame. Returns the new rate when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames_in_window += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < SAMPLE_WINDOW {
            return None;
        }

        self.fps = f64::from(self.frames_in_window) / elapsed.as_secs_f64();
        self.frames_in_window = 0;
        self.window_start = now;
        Some(self.fps)
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }
}
