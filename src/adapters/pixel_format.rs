//! Pixel format conversion between the core raster and presentation surfaces.

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::error::Error;
use std::fmt;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for FrameSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba frame holds {} bytes, raster needs {}",
            self.actual, self.expected
        )
    }
}

impl Error for FrameSizeMismatch {}

/// Expands the RGB raster into an opaque RGBA frame of the same size.
pub fn copy_pixel_buffer_to_rgba(
    buffer: &PixelBuffer,
    dst: &mut [u8],
) -> Result<(), FrameSizeMismatch> {
    let src = buffer.buffer();
    let expected = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected {
        return Err(FrameSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
