#[cfg(feature = "gui")]
mod adapters;
mod cli;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use cli::ExplorerArgs;
pub use controllers::data::frame_data::FrameData;
pub use controllers::data::render_job::RenderJob;
pub use controllers::explorer::{ExplorerController, render_job};
pub use controllers::render_worker::{RenderOutcome, RenderWorker};
pub use controllers::snapshot::SnapshotController;
pub use crate::core::actions::cancellation::{CancelToken, NeverCancel, QuitFlag};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::render_frame::{RenderFrameError, render_frame};
pub use crate::core::camera::{CameraControlsSnapshot, CameraLimits, ViewState};
pub use crate::core::config::explorer_config::{ConfigError, ExplorerConfig};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::params::ViewParams;
pub use crate::core::palette::palette::{Palette, PaletteError};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
