use crate::core::config::explorer_config::{ConfigError, ExplorerConfig};
use crate::core::data::viewport::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Escape-time Mandelbrot renderer")]
pub struct ExplorerArgs {
    /// Image whose diagonal supplies the colour gradient
    #[arg(long, default_value = "images/texture.bmp")]
    pub palette: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Starting iteration budget, must lie in [2, 5500]
    #[arg(long, default_value_t = 30)]
    pub max_iter: u32,

    /// Shade by iteration count instead of sampling the palette
    #[arg(long)]
    pub grayscale: bool,

    /// Where the headless render is written
    #[arg(long, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

impl ExplorerArgs {
    pub fn config(&self) -> Result<ExplorerConfig, ConfigError> {
        ExplorerConfig::new(self.width, self.height, self.max_iter)
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        if self.grayscale {
            MandelbrotColourMapKinds::Grayscale
        } else {
            MandelbrotColourMapKinds::PaletteGradient
        }
    }
}
