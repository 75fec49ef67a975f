use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::params::ViewParams;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub frame: u64,
    pub params: ViewParams,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
