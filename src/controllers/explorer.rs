use crate::controllers::data::frame_data::FrameData;
use crate::controllers::data::render_job::RenderJob;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::render_frame::{RenderFrameError, render_frame_cancelable};
use crate::core::camera::{CameraControlsSnapshot, ViewState, ViewStepReport, step_view};
use crate::core::config::explorer_config::{ConfigError, ExplorerConfig};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::palette::palette::Palette;
use log::{debug, trace};
use std::sync::Arc;
use std::time::Instant;

/// Owns the camera and turns it into frames.
///
/// Each frame is `update` followed by `render`; rendering never observes a
/// half-updated camera because both take `&mut self`.
pub struct ExplorerController {
    config: ExplorerConfig,
    palette: Arc<Palette>,
    view: ViewState,
    colour_map_kind: MandelbrotColourMapKinds,
    frames_rendered: u64,
}

impl ExplorerController {
    pub fn new(config: ExplorerConfig, palette: Arc<Palette>) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            view: config.initial_view_state(),
            config,
            palette,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            frames_rendered: 0,
        })
    }

    pub fn update(&mut self, controls: CameraControlsSnapshot, elapsed_ms: f64) -> ViewStepReport {
        let report = step_view(&mut self.view, controls, elapsed_ms, &self.config.limits);

        if report.iterations_clamped {
            debug!("max iterations clamped to {}", self.view.max_iterations);
        }
        if report.zoom_clamped {
            debug!("zoom step skipped at zoom {:e}", self.view.zoom);
        }
        if report.elapsed_clamped {
            debug!("frame time {} ms clamped", elapsed_ms);
        }

        report
    }

    pub fn render(&mut self) -> Result<FrameData, RenderFrameError> {
        self.render_cancelable(&NeverCancel)
    }

    pub fn render_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<FrameData, RenderFrameError> {
        let frame = render_job(self.config.viewport, &self.palette, self.next_job(), cancel)?;
        self.frames_rendered = frame.frame;

        Ok(frame)
    }

    /// Snapshot of the current view for a renderer off this thread.
    #[must_use]
    pub fn next_job(&self) -> RenderJob {
        RenderJob {
            frame: self.frames_rendered + 1,
            params: self.view.params(),
            colour_map_kind: self.colour_map_kind,
        }
    }

    /// Counts a frame finished by a renderer off this thread.
    pub fn record_frame(&mut self, frame: &FrameData) {
        self.frames_rendered = self.frames_rendered.max(frame.frame);
    }

    pub fn reset_view(&mut self) {
        self.view = self.config.initial_view_state();
        debug!("view reset");
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.colour_map_kind
    }

    pub fn set_colour_map_kind(&mut self, kind: MandelbrotColourMapKinds) {
        if self.colour_map_kind != kind {
            debug!("colour map changed to {}", kind);
            self.colour_map_kind = kind;
        }
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

/// Renders `job` against `viewport`, timing the whole pipeline.
pub fn render_job<C: CancelToken>(
    viewport: Viewport,
    palette: &Arc<Palette>,
    job: RenderJob,
    cancel: &C,
) -> Result<FrameData, RenderFrameError> {
    let colour_map =
        mandelbrot_colour_map_factory(job.colour_map_kind, palette, job.params.max_iterations);

    let start = Instant::now();
    let pixel_buffer = render_frame_cancelable(viewport, job.params, &colour_map, cancel)?;
    let render_duration = start.elapsed();

    trace!(
        "frame {} rendered in {:?} (zoom {:e}, max_iter {})",
        job.frame, render_duration, job.params.zoom, job.params.max_iterations
    );

    Ok(FrameData {
        frame: job.frame,
        params: job.params,
        pixel_buffer,
        render_duration,
    })
}
