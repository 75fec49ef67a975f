use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::params::ViewParams;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideViewport { point: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideViewport {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} viewport",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a raster pixel onto the complex plane:
/// `c = ((x - offset_x) * zoom - pan_x) + i((y - offset_y) * zoom - pan_y)`.
#[inline]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    viewport: Viewport,
    params: ViewParams,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !viewport.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideViewport {
            point: pixel_position,
            width: viewport.width(),
            height: viewport.height(),
        });
    }

    Ok(plane_coords(
        f64::from(pixel_position.x),
        f64::from(pixel_position.y),
        viewport,
        params,
    ))
}

#[inline]
fn plane_coords(x: f64, y: f64, viewport: Viewport, params: ViewParams) -> Complex {
    Complex {
        real: (x - viewport.offset_x()) * params.zoom - params.pan_x,
        imag: (y - viewport.offset_y()) * params.zoom - params.pan_y,
    }
}
