use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::ViewParams;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFrameError {
    Cancelled(Cancelled),
    InvalidView(MandelbrotError),
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(GeneratePixelBufferError),
}

impl RenderFrameError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::InvalidView(err) => write!(f, "invalid view: {}", err),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::InvalidView(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderFrameError {
    fn from(err: MandelbrotError) -> Self {
        Self::InvalidView(err)
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderFrameError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Algorithm(e),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            other => Self::PixelBuffer(other),
        }
    }
}

/// Escape counts for the whole viewport, then colours, both stages on rayon.
pub fn render_frame<CMap>(
    viewport: Viewport,
    params: ViewParams,
    colour_map: &CMap,
) -> Result<PixelBuffer, RenderFrameError>
where
    CMap: ColourMap<u32> + Sync,
{
    render_frame_cancelable(viewport, params, colour_map, &NeverCancel)
}

pub fn render_frame_cancelable<CMap, C>(
    viewport: Viewport,
    params: ViewParams,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError>
where
    CMap: ColourMap<u32> + Sync,
    C: CancelToken,
{
    let algorithm = MandelbrotAlgorithm::new(viewport, params)?;
    let escape_grid = generate_fractal_parallel_rayon_cancelable(viewport, &algorithm, cancel)?;

    Ok(generate_pixel_buffer_cancelable(
        &escape_grid,
        colour_map,
        viewport,
        cancel,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMapFailure;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
    use crate::core::palette::palette::Palette;
    use image::{Rgb, RgbImage};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    // encodes the escape count in the red channel
    struct IterationsAsRed {}

    impl ColourMap<u32> for IterationsAsRed {
        fn map(&self, value: u32) -> Result<Colour, ColourMapFailure> {
            Ok(Colour {
                r: value as u8,
                g: 0,
                b: 0,
            })
        }

        fn display_name(&self) -> &str {
            "Iterations as red"
        }
    }

    fn classic_params(max_iterations: u32) -> ViewParams {
        ViewParams {
            zoom: 2.2 / 450.0,
            pan_x: 0.0,
            pan_y: 0.0,
            max_iterations,
        }
    }

    fn ramp_palette() -> Arc<Palette> {
        let image = RgbImage::from_fn(64, 64, |x, y| Rgb([x as u8 * 4, y as u8, 9]));
        Arc::new(Palette::from_image(&image).unwrap())
    }

    #[test]
    fn test_every_count_is_within_budget() {
        let viewport = Viewport::new(160, 90).unwrap();
        let buffer = render_frame(viewport, classic_params(30), &IterationsAsRed {}).unwrap();

        assert!(buffer.buffer().chunks_exact(3).all(|rgb| rgb[0] <= 30));
    }

    #[test]
    fn test_classic_view_centre_and_corner() {
        let viewport = Viewport::default();
        let buffer = render_frame(viewport, classic_params(30), &IterationsAsRed {}).unwrap();

        assert_eq!(buffer.pixel(viewport.centre()).unwrap().r, 30);
        assert!(buffer.pixel(Point { x: 0, y: 0 }).unwrap().r <= 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let viewport = Viewport::new(200, 120).unwrap();
        let palette = ramp_palette();
        let colour_map =
            mandelbrot_colour_map_factory(MandelbrotColourMapKinds::PaletteGradient, &palette, 64);
        let params = ViewParams {
            zoom: 0.01,
            pan_x: 0.4,
            pan_y: -0.1,
            max_iterations: 64,
        };

        let first = render_frame(viewport, params, &colour_map).unwrap();
        let second = render_frame(viewport, params, &colour_map).unwrap();

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_palette_colours_come_from_diagonal() {
        let viewport = Viewport::new(80, 45).unwrap();
        let palette = ramp_palette();
        let colour_map =
            mandelbrot_colour_map_factory(MandelbrotColourMapKinds::PaletteGradient, &palette, 30);

        let buffer = render_frame(viewport, classic_params(30), &colour_map).unwrap();

        for rgb in buffer.buffer().chunks_exact(3) {
            assert_eq!(rgb[0], rgb[1] * 4);
            assert_eq!(rgb[2], 9);
        }
    }

    #[test]
    fn test_invalid_zoom_is_rejected() {
        let params = ViewParams {
            zoom: 0.0,
            ..classic_params(30)
        };

        let result = render_frame(Viewport::default(), params, &IterationsAsRed {});

        assert!(matches!(result, Err(RenderFrameError::InvalidView(_))));
    }

    #[test]
    fn test_cancelled_render_returns_cancelled() {
        let cancelled = AtomicBool::new(true);
        let cancel = || cancelled.load(Ordering::Relaxed);

        let result = render_frame_cancelable(
            Viewport::default(),
            classic_params(30),
            &IterationsAsRed {},
            &cancel,
        );

        assert!(result.as_ref().is_err_and(RenderFrameError::is_cancelled));
    }
}
