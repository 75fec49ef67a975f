pub const MIN_ITERATIONS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    pub max_iterations_limit: u32,
    /// Per-frame zoom-in factor; zoom-out uses `2 - zoom_scale`.
    pub zoom_scale: f64,
    /// Converts elapsed milliseconds into pan speed.
    pub time_scale: f64,
    pub max_elapsed_ms: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl CameraLimits {
    #[must_use]
    pub fn zoom_in_factor(&self) -> f64 {
        self.zoom_scale
    }

    #[must_use]
    pub fn zoom_out_factor(&self) -> f64 {
        2.0 - self.zoom_scale
    }

    #[must_use]
    pub fn clamp_iterations(&self, iterations: u32) -> u32 {
        iterations.clamp(MIN_ITERATIONS, self.max_iterations_limit.max(MIN_ITERATIONS))
    }
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            max_iterations_limit: 5500,
            zoom_scale: 0.993,
            time_scale: 0.1,
            max_elapsed_ms: 100.0,
            min_zoom: f64::MIN_POSITIVE,
            max_zoom: 1e3,
        }
    }
}
