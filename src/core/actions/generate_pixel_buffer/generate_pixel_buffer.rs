use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    Cancelled(Cancelled),
    ColourMap(ColourMapFailure),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps a row-major grid of values to colours, one rayon task per row.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    viewport: Viewport,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
{
    generate_pixel_buffer_cancelable(input, mapper, viewport, &NeverCancel)
}

/// Like [`generate_pixel_buffer`], polling `cancel` before each row.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    viewport: Viewport,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
    C: CancelToken,
{
    if input.len() != viewport.size() {
        return Err(GeneratePixelBufferError::PixelBuffer(
            PixelBufferError::BoundsMismatch {
                viewport_size: viewport.size() * BYTES_PER_PIXEL,
                buffer_size: input.len() * BYTES_PER_PIXEL,
            },
        ));
    }

    let width = viewport.width() as usize;
    let mut buffer: PixelBufferData = vec![0; viewport.size() * BYTES_PER_PIXEL];

    buffer
        .par_chunks_exact_mut(width * BYTES_PER_PIXEL)
        .zip(input.par_chunks_exact(width))
        .try_for_each(|(row_out, row_in)| {
            if cancel.is_cancelled() {
                return Err(GeneratePixelBufferError::Cancelled(Cancelled));
            }

            for (rgb, &value) in row_out.chunks_exact_mut(BYTES_PER_PIXEL).zip(row_in) {
                let Colour { r, g, b } = mapper
                    .map(value)
                    .map_err(GeneratePixelBufferError::ColourMap)?;

                rgb[0] = r;
                rgb[1] = g;
                rgb[2] = b;
            }

            Ok(())
        })?;

    Ok(PixelBuffer::from_data(viewport, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, ColourMapFailure> {
            Ok(Colour::grey(value))
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, ColourMapFailure> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let viewport = Viewport::new(3, 2).unwrap();
        let expected: PixelBufferData = vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let result = generate_pixel_buffer(&input, &StubColourMapSuccess {}, viewport).unwrap();

        assert_eq!(result.buffer(), &expected);
        assert_eq!(result.viewport(), viewport);
    }

    #[test]
    fn test_rows_land_in_row_major_order() {
        let input: Vec<u8> = vec![10, 20, 30, 40];
        let viewport = Viewport::new(2, 2).unwrap();

        let result = generate_pixel_buffer(&input, &StubColourMapSuccess {}, viewport).unwrap();

        assert_eq!(result.pixel(Point { x: 1, y: 0 }).unwrap(), Colour::grey(20));
        assert_eq!(result.pixel(Point { x: 0, y: 1 }).unwrap(), Colour::grey(30));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let viewport = Viewport::new(3, 2).unwrap();

        let result = generate_pixel_buffer(&input, &StubColourMapFailure {}, viewport);

        assert!(matches!(result, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let viewport = Viewport::new(2, 2).unwrap();

        let result = generate_pixel_buffer(&input, &StubColourMapSuccess {}, viewport);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    viewport_size: 12,
                    buffer_size: 18
                }
            ))
        ));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_set() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let viewport = Viewport::new(3, 2).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_pixel_buffer_cancelable(&input, &StubColourMapSuccess {}, viewport, &cancel_token);

        assert!(matches!(result, Err(GeneratePixelBufferError::Cancelled(_))));
    }

    #[test]
    fn test_error_display() {
        let cancelled = GeneratePixelBufferError::Cancelled(Cancelled);
        let colour = GeneratePixelBufferError::ColourMap("StubColourMapError".into());

        assert_eq!(cancelled.to_string(), "operation cancelled");
        assert_eq!(colour.to_string(), "colour map error: StubColourMapError");
    }
}
