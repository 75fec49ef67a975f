use crate::core::fractals::mandelbrot::params::ViewParams;

/// The camera: mutated once per frame, snapshotted into [`ViewParams`] for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub pan: [f64; 2],
    pub max_iterations: u32,
    pub velocity: f64,
}

impl ViewState {
    #[must_use]
    pub fn params(&self) -> ViewParams {
        ViewParams {
            zoom: self.zoom,
            pan_x: self.pan[0],
            pan_y: self.pan[1],
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewState;

    #[test]
    fn params_copies_the_four_render_inputs() {
        let state = ViewState {
            zoom: 0.25,
            pan: [1.5, -2.0],
            max_iterations: 77,
            velocity: 0.3,
        };
        let params = state.params();

        assert_eq!(params.zoom, 0.25);
        assert_eq!(params.pan_x, 1.5);
        assert_eq!(params.pan_y, -2.0);
        assert_eq!(params.max_iterations, 77);
    }
}
