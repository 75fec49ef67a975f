use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::{scaled_index, MandelbrotColourMap};
use crate::core::palette::palette::Palette;
use std::sync::Arc;

/// Samples `palette[col][col]` with `col = floor(texture_size * n / max_iterations)`.
#[derive(Debug, Clone)]
pub struct MandelbrotPaletteGradient {
    palette: Arc<Palette>,
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotPaletteGradient {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapFailure> {
        MandelbrotColourMapError::check_iterations(iterations, self.max_iterations)?;

        let texture_size = self.palette.texture_size();
        let index = scaled_index(texture_size, iterations, self.max_iterations);

        self.palette.get(index).ok_or_else(|| {
            MandelbrotColourMapError::PaletteIndexMissing {
                index,
                texture_size,
            }
            .into()
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotPaletteGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::PaletteGradient
    }
}

impl MandelbrotPaletteGradient {
    #[must_use]
    pub fn new(palette: Arc<Palette>, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}
