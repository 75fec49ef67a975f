use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Persists a finished frame.
pub trait FilePresenterPort {
    fn format_name(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
