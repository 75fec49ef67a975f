use crate::core::camera::{CameraLimits, MIN_ITERATIONS, ViewState};
use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;

const DEFAULT_ZOOM_SPAN: f64 = 2.2;
const DEFAULT_MAX_ITERATIONS: u32 = 30;
const DEFAULT_VELOCITY: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    Viewport(ViewportError),
    InvalidZoom { zoom: f64 },
    InvalidZoomScale { zoom_scale: f64 },
    InvalidTimeScale { time_scale: f64 },
    InvalidMaxElapsed { max_elapsed_ms: f64 },
    InvalidZoomBounds { min_zoom: f64, max_zoom: f64 },
    IterationLimitTooLow { limit: u32 },
    IterationsOutOfRange { max_iterations: u32, limit: u32 },
    InvalidVelocity { velocity: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::InvalidZoom { zoom } => {
                write!(f, "initial zoom must be positive and finite, got {}", zoom)
            }
            Self::InvalidZoomScale { zoom_scale } => {
                write!(f, "zoom scale must lie in (0, 1), got {}", zoom_scale)
            }
            Self::InvalidTimeScale { time_scale } => {
                write!(f, "time scale must be positive and finite, got {}", time_scale)
            }
            Self::InvalidMaxElapsed { max_elapsed_ms } => {
                write!(
                    f,
                    "max elapsed must be positive and finite, got {} ms",
                    max_elapsed_ms
                )
            }
            Self::InvalidZoomBounds { min_zoom, max_zoom } => {
                write!(
                    f,
                    "zoom bounds must satisfy 0 < min <= max < inf, got [{}, {}]",
                    min_zoom, max_zoom
                )
            }
            Self::IterationLimitTooLow { limit } => {
                write!(
                    f,
                    "iteration limit {} is below the minimum {}",
                    limit, MIN_ITERATIONS
                )
            }
            Self::IterationsOutOfRange {
                max_iterations,
                limit,
            } => {
                write!(
                    f,
                    "initial iterations {} outside [{}, {}]",
                    max_iterations, MIN_ITERATIONS, limit
                )
            }
            Self::InvalidVelocity { velocity } => {
                write!(f, "velocity must be finite and non-negative, got {}", velocity)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Everything fixed at startup: raster, initial camera and camera limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub viewport: Viewport,
    pub initial_zoom: f64,
    pub initial_max_iterations: u32,
    pub initial_velocity: f64,
    pub limits: CameraLimits,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        let viewport = Viewport::default();

        Self {
            viewport,
            initial_zoom: default_zoom(viewport),
            initial_max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_velocity: DEFAULT_VELOCITY,
            limits: CameraLimits::default(),
        }
    }
}

// 2.2 plane units span the raster height
fn default_zoom(viewport: Viewport) -> f64 {
    DEFAULT_ZOOM_SPAN / f64::from(viewport.height())
}

impl ExplorerConfig {
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Result<Self, ConfigError> {
        let viewport = Viewport::new(width, height)?;
        let config = Self {
            viewport,
            initial_zoom: default_zoom(viewport),
            initial_max_iterations: max_iterations,
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;

        if !self.initial_zoom.is_finite() || self.initial_zoom <= 0.0 {
            return Err(ConfigError::InvalidZoom {
                zoom: self.initial_zoom,
            });
        }

        if !(limits.zoom_scale > 0.0 && limits.zoom_scale < 1.0) {
            return Err(ConfigError::InvalidZoomScale {
                zoom_scale: limits.zoom_scale,
            });
        }

        if !limits.time_scale.is_finite() || limits.time_scale <= 0.0 {
            return Err(ConfigError::InvalidTimeScale {
                time_scale: limits.time_scale,
            });
        }

        if !limits.max_elapsed_ms.is_finite() || limits.max_elapsed_ms <= 0.0 {
            return Err(ConfigError::InvalidMaxElapsed {
                max_elapsed_ms: limits.max_elapsed_ms,
            });
        }

        if !(limits.min_zoom > 0.0 && limits.min_zoom <= limits.max_zoom)
            || !limits.max_zoom.is_finite()
        {
            return Err(ConfigError::InvalidZoomBounds {
                min_zoom: limits.min_zoom,
                max_zoom: limits.max_zoom,
            });
        }

        if self.initial_zoom < limits.min_zoom || self.initial_zoom > limits.max_zoom {
            return Err(ConfigError::InvalidZoom {
                zoom: self.initial_zoom,
            });
        }

        if limits.max_iterations_limit < MIN_ITERATIONS {
            return Err(ConfigError::IterationLimitTooLow {
                limit: limits.max_iterations_limit,
            });
        }

        if self.initial_max_iterations < MIN_ITERATIONS
            || self.initial_max_iterations > limits.max_iterations_limit
        {
            return Err(ConfigError::IterationsOutOfRange {
                max_iterations: self.initial_max_iterations,
                limit: limits.max_iterations_limit,
            });
        }

        if !self.initial_velocity.is_finite() || self.initial_velocity < 0.0 {
            return Err(ConfigError::InvalidVelocity {
                velocity: self.initial_velocity,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn initial_view_state(&self) -> ViewState {
        ViewState {
            zoom: self.initial_zoom,
            pan: [0.0, 0.0],
            max_iterations: self.initial_max_iterations,
            velocity: self.initial_velocity,
        }
    }
}
