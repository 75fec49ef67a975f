use clap::Parser;
use log::{error, info};
use mandelbrot_explorer::{ExplorerArgs, ExplorerController, Palette, PixelsPresenterFactory, RunGuiCommand};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = ExplorerArgs::parse();
    let config = args.config()?;
    info!(
        "starting explorer at {}x{}, max_iter {}",
        config.viewport.width(),
        config.viewport.height(),
        config.initial_max_iterations
    );

    let palette = Palette::load(&args.palette).inspect_err(|e| error!("{e}"))?;
    info!("palette {} loaded ({})", args.palette.display(), palette.dimensions_label());

    let mut explorer = ExplorerController::new(config, Arc::new(palette))?;
    explorer.set_colour_map_kind(args.colour_map_kind());

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());
    command.execute(explorer)
}
