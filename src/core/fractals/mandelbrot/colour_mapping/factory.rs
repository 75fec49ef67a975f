use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::maps::grayscale::MandelbrotGrayscale;
use crate::core::fractals::mandelbrot::colour_mapping::maps::palette_gradient::MandelbrotPaletteGradient;
use crate::core::fractals::mandelbrot::colour_mapping::MandelbrotColourMap;
use crate::core::palette::palette::Palette;
use std::sync::Arc;

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    palette: &Arc<Palette>,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::PaletteGradient => Box::new(MandelbrotPaletteGradient::new(
            Arc::clone(palette),
            max_iterations,
        )),
        MandelbrotColourMapKinds::Grayscale => Box::new(MandelbrotGrayscale::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
    use image::RgbImage;

    fn palette() -> Arc<Palette> {
        Arc::new(Palette::from_image(&RgbImage::new(8, 8)).unwrap())
    }

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        let palette = palette();
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, &palette, 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        let palette = palette();
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, &palette, 256);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = MandelbrotColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
