use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::ViewParams;
use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the iterations of `z = z² + c` completed before `|z| > 2`.
///
/// The step that escapes is not counted, so a point already outside the
/// radius after the first step returns zero. Points that never escape return
/// `max_iterations`.
#[inline]
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z.square() + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    params: ViewParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.viewport, self.params)?;

        Ok(escape_iterations(c, self.params.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(viewport: Viewport, params: ViewParams) -> Result<Self, MandelbrotError> {
        if !params.zoom.is_finite() || params.zoom <= 0.0 {
            return Err(MandelbrotError::InvalidZoom { zoom: params.zoom });
        }

        if !params.pan_x.is_finite() || !params.pan_y.is_finite() {
            return Err(MandelbrotError::NonFinitePan {
                pan_x: params.pan_x,
                pan_y: params.pan_y,
            });
        }

        Ok(Self { viewport, params })
    }

    #[must_use]
    pub fn params(&self) -> ViewParams {
        self.params
    }
}
