use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 450;

// the origin sits right of centre so the whole set fits the default view
const OFFSET_X_FACTOR: f64 = 1.3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: u32, height: u32 },
    NonFiniteOffset { offset_x: f64, offset_y: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::NonFiniteOffset { offset_x, offset_y } => {
                write!(
                    f,
                    "viewport offset must be finite: ({}, {})",
                    offset_x, offset_y
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The output raster together with the pixel that maps onto the plane origin
/// at zoom 1 and zero pan.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    offset_x: f64,
    offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            offset_x: default_offset_x(DEFAULT_WIDTH),
            offset_y: default_offset_y(DEFAULT_HEIGHT),
        }
    }
}

fn default_offset_x(width: u32) -> f64 {
    (OFFSET_X_FACTOR * f64::from(width) / 2.0).floor()
}

fn default_offset_y(height: u32) -> f64 {
    (f64::from(height) / 2.0).floor()
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::with_offset(width, height, default_offset_x(width), default_offset_y(height))
    }

    pub fn with_offset(
        width: u32,
        height: u32,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(ViewportError::NonFiniteOffset { offset_x, offset_y });
        }

        Ok(Self {
            width,
            height,
            offset_x,
            offset_y,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: self.width / 2,
            y: self.height / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_matches_classic_raster() {
        let viewport = Viewport::default();

        assert_eq!(viewport.width(), 800);
        assert_eq!(viewport.height(), 450);
        assert_eq!(viewport.offset_x(), 520.0);
        assert_eq!(viewport.offset_y(), 225.0);
        assert_eq!(viewport.size(), 360_000);
    }

    #[test]
    fn test_new_derives_offset_from_size() {
        let viewport = Viewport::new(100, 51).unwrap();

        assert_eq!(viewport.offset_x(), 65.0);
        assert_eq!(viewport.offset_y(), 25.0);
    }

    #[test]
    fn test_new_matches_default_for_default_size() {
        assert_eq!(
            Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap(),
            Viewport::default()
        );
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            Viewport::new(0, 10),
            Err(ViewportError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Viewport::new(10, 0),
            Err(ViewportError::InvalidSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_non_finite_offset_is_rejected() {
        let result = Viewport::with_offset(10, 10, f64::NAN, 0.0);

        assert!(matches!(result, Err(ViewportError::NonFiniteOffset { .. })));
    }

    #[test]
    fn test_contains_point() {
        let viewport = Viewport::new(3, 2).unwrap();

        assert!(viewport.contains_point(Point { x: 0, y: 0 }));
        assert!(viewport.contains_point(Point { x: 2, y: 1 }));
        assert!(!viewport.contains_point(Point { x: 3, y: 0 }));
        assert!(!viewport.contains_point(Point { x: 0, y: 2 }));
    }
}
