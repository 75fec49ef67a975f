use crate::controllers::explorer::ExplorerController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::RenderFrameError;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::info;
use std::io;
use std::path::Path;

/// Renders the startup view once and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    explorer: ExplorerController,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, explorer: ExplorerController) -> Self {
        Self {
            presenter,
            explorer,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), RenderFrameError> {
        let viewport = self.explorer.config().viewport;
        let view = self.explorer.view();

        info!(
            "rendering {}x{} with max_iter {} ({})",
            viewport.width(),
            viewport.height(),
            view.max_iterations,
            self.explorer.colour_map_kind()
        );

        let frame = self.explorer.render()?;
        info!("render took {:?}", frame.render_duration);

        self.buffer = Some(frame.pixel_buffer);
        Ok(())
    }

    /// Fails with `NotFound` until `generate` has produced a frame.
    pub fn write(&self, filepath: impl AsRef<Path>) -> io::Result<()> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no frame rendered"))?;

        self.presenter.present(buffer, &filepath)?;
        info!(
            "saved {} to {}",
            self.presenter.format_name(),
            filepath.as_ref().display()
        );

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
