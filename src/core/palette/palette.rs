use crate::core::data::colour::Colour;
use image::{ImageError, RgbImage};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum PaletteError {
    Load { path: PathBuf, source: ImageError },
    TooSmall { width: u32, height: u32 },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, source } => {
                write!(f, "failed to load palette {}: {}", path.display(), source)
            }
            Self::TooSmall { width, height } => {
                write!(f, "palette image {}x{} has no pixels", width, height)
            }
        }
    }
}

impl Error for PaletteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load { source, .. } => Some(source),
            Self::TooSmall { .. } => None,
        }
    }
}

/// The gradient sampled along the diagonal of a palette image.
///
/// Only pixels `(i, i)` for `i` in `0..=texture_size` are ever read, so the
/// rest of the image is dropped at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    diagonal: Vec<Colour>,
}

impl Palette {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| PaletteError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();

        Self::from_image(&image)
    }

    pub fn from_image(image: &RgbImage) -> Result<Self, PaletteError> {
        let (width, height) = image.dimensions();
        let side = width.min(height);

        if side == 0 {
            return Err(PaletteError::TooSmall { width, height });
        }

        let diagonal = (0..side).map(|i| Colour::from(image.get_pixel(i, i).0)).collect();

        Ok(Self { diagonal })
    }

    /// Largest valid lookup index, `min(width, height) - 1`.
    #[must_use]
    pub fn texture_size(&self) -> u32 {
        (self.diagonal.len() - 1) as u32
    }

    #[must_use]
    pub fn get(&self, index: u32) -> Option<Colour> {
        self.diagonal.get(index as usize).copied()
    }

    #[must_use]
    pub fn dimensions_label(&self) -> String {
        let side = self.diagonal.len();
        format!("{}x{}", side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn diagonal_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if x == y {
                Rgb([x as u8, 255 - x as u8, 7])
            } else {
                Rgb([1, 2, 3])
            }
        })
    }

    #[test]
    fn test_texture_size_uses_shorter_side() {
        let palette = Palette::from_image(&diagonal_image(20, 12)).unwrap();

        assert_eq!(palette.texture_size(), 11);
    }

    #[test]
    fn test_reads_diagonal_only() {
        let palette = Palette::from_image(&diagonal_image(8, 8)).unwrap();

        assert_eq!(palette.get(0), Some(Colour { r: 0, g: 255, b: 7 }));
        assert_eq!(palette.get(5), Some(Colour { r: 5, g: 250, b: 7 }));
        assert_eq!(palette.get(7), Some(Colour { r: 7, g: 248, b: 7 }));
    }

    #[test]
    fn test_get_past_texture_size_is_none() {
        let palette = Palette::from_image(&diagonal_image(4, 4)).unwrap();

        assert!(palette.get(3).is_some());
        assert_eq!(palette.get(4), None);
    }

    #[test]
    fn test_single_pixel_palette() {
        let palette = Palette::from_image(&diagonal_image(1, 1)).unwrap();

        assert_eq!(palette.texture_size(), 0);
        assert_eq!(palette.dimensions_label(), "1x1");
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let image = RgbImage::new(0, 5);

        assert!(matches!(
            Palette::from_image(&image),
            Err(PaletteError::TooSmall {
                width: 0,
                height: 5
            })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = Palette::load("does/not/exist.png");

        match result {
            Err(err @ PaletteError::Load { .. }) => {
                assert!(err.to_string().contains("does/not/exist.png"));
                assert!(err.source().is_some());
            }
            other => panic!("expected load error, got {:?}", other),
        }
    }
}
