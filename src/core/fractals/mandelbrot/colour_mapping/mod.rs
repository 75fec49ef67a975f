pub mod errors;
pub mod factory;
pub mod kinds;
pub mod maps;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapFailure};
use crate::core::data::colour::Colour;
use kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<u32> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: u32) -> Result<Colour, ColourMapFailure> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// `floor(scale * iterations / max_iterations)` in integer arithmetic, zero
/// when `max_iterations` is zero.
#[inline]
#[must_use]
pub fn scaled_index(scale: u32, iterations: u32, max_iterations: u32) -> u32 {
    if max_iterations == 0 {
        return 0;
    }

    (u64::from(scale) * u64::from(iterations) / u64::from(max_iterations)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_index_bounds() {
        assert_eq!(scaled_index(255, 0, 30), 0);
        assert_eq!(scaled_index(255, 30, 30), 255);
        assert_eq!(scaled_index(127, 15, 30), 63);
    }

    #[test]
    fn test_scaled_index_zero_max_iterations() {
        assert_eq!(scaled_index(255, 0, 0), 0);
        assert_eq!(scaled_index(255, 7, 0), 0);
    }

    #[test]
    fn test_scaled_index_never_exceeds_scale() {
        for max_iterations in [1, 2, 3, 30, 997, 5500] {
            for iterations in 0..=max_iterations {
                assert!(scaled_index(511, iterations, max_iterations) <= 511);
            }
        }
    }

    #[test]
    fn test_scaled_index_large_values_do_not_overflow() {
        assert_eq!(scaled_index(u32::MAX, 5500, 5500), u32::MAX);
    }
}
