use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::params::ViewParams;

/// Everything a renderer needs from the camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderJob {
    pub frame: u64,
    pub params: ViewParams,
    pub colour_map_kind: MandelbrotColourMapKinds,
}
