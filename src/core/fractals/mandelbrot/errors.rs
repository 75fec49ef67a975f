use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    InvalidZoom { zoom: f64 },
    NonFinitePan { pan_x: f64, pan_y: f64 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be positive and finite, got {}", zoom)
            }
            Self::NonFinitePan { pan_x, pan_y } => {
                write!(f, "pan must be finite, got ({}, {})", pan_x, pan_y)
            }
        }
    }
}

impl Error for MandelbrotError {}
