use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::{scaled_index, MandelbrotColourMap};

const WHITE_LEVEL: u32 = 255;

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotGrayscale {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotGrayscale {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapFailure> {
        MandelbrotColourMapError::check_iterations(iterations, self.max_iterations)?;

        let level = scaled_index(WHITE_LEVEL, iterations, self.max_iterations);

        Ok(Colour::grey(level as u8))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_immediately_is_black() {
        let mapper = MandelbrotGrayscale::new(30);

        assert_eq!(mapper.map(0).unwrap(), Colour::grey(0));
    }

    #[test]
    fn test_inside_set_is_white() {
        let mapper = MandelbrotGrayscale::new(30);

        assert_eq!(mapper.map(30).unwrap(), Colour::grey(255));
    }

    #[test]
    fn test_midpoint_is_floored() {
        let mapper = MandelbrotGrayscale::new(30);

        assert_eq!(mapper.map(15).unwrap(), Colour::grey(127));
    }

    #[test]
    fn test_iterations_above_max_is_error() {
        let mapper = MandelbrotGrayscale::new(10);
        let err = mapper.map(11).unwrap_err();

        assert_eq!(err.to_string(), "iterations 11 exceeds maximum 10");
    }
}
