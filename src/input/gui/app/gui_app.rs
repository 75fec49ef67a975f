use crate::controllers::explorer::ExplorerController;
use crate::controllers::render_worker::RenderWorker;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::input::gui::app::fps_counter::FpsCounter;
use crate::input::gui::app::key_input::KeyInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::error::EventLoopError;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    explorer: ExplorerController,
    key_input: KeyInputState,
    fps: FpsCounter,
    worker: RenderWorker,
    last_frame_at: Instant,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        explorer: ExplorerController,
    ) -> io::Result<Self> {
        let worker = RenderWorker::spawn(explorer.config().viewport, Arc::clone(explorer.palette()))?;
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );
        let now = Instant::now();

        Ok(Self {
            presenter,
            explorer,
            key_input: KeyInputState::default(),
            fps: FpsCounter::new(now),
            worker,
            last_frame_at: now,
            last_render_duration: None,
            last_error_message: None,
            egui_ctx,
            egui_state,
        })
    }

    /// Drives the window until it is closed or Escape is pressed.
    pub fn run(mut self, event_loop: EventLoop<()>, window: &'static Window) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                    let egui_consumed = self.egui_state.on_window_event(window, event).consumed;

                    match event {
                        WindowEvent::CloseRequested => {
                            self.worker.shutdown();
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput { event: key_event, .. } if !egui_consumed => {
                            if let PhysicalKey::Code(key_code) = key_event.physical_key {
                                self.key_input.handle_key_event(key_code, key_event.state);
                            }
                            if self.key_input.quit_requested() {
                                self.worker.shutdown();
                                elwt.exit();
                            }
                        }
                        WindowEvent::Focused(false) => self.key_input.release_all(),
                        WindowEvent::Resized(size) => {
                            if let Err(e) = self.presenter.resize(size.width, size.height) {
                                error!("resize failed: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            if let Err(e) = self.presenter.resize(size.width, size.height) {
                                error!("resize failed: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            if let Err(e) = self.frame(window) {
                                error!("present failed: {e}");
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => window.request_redraw(),
                _ => {}
            }
        })
    }

    /// Draws whatever the worker finished, hands it the next view once it is
    /// idle, then presents the framebuffer under the HUD.
    fn frame(&mut self, window: &Window) -> Result<(), pixels::Error> {
        if let Some(outcome) = self.worker.take_finished() {
            match outcome {
                Ok(frame) => {
                    self.presenter.draw_frame(&frame.pixel_buffer);
                    self.explorer.record_frame(&frame);
                    self.last_render_duration = Some(frame.render_duration);
                    self.last_error_message = None;

                    if let Some(fps) = self.fps.tick(Instant::now()) {
                        window.set_title(&format!("{} | FPS: {:.1}", WINDOW_TITLE, fps));
                    }
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    error!("render failed: {e}");
                    self.last_error_message = Some(e.to_string());
                }
            }
        }

        if !self.worker.is_busy() {
            self.advance_camera();
        }

        let egui_output = self.update_ui(window);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// One camera step per rendered frame, timed from the previous step.
    fn advance_camera(&mut self) {
        let now = Instant::now();
        let elapsed_ms = now.saturating_duration_since(self.last_frame_at).as_secs_f64() * 1000.0;
        self.last_frame_at = now;

        let controls = self.key_input.snapshot(self.egui_ctx.wants_keyboard_input());
        if self.key_input.take_reset() {
            self.explorer.reset_view();
        }
        self.explorer.update(controls, elapsed_ms);

        self.worker.submit(self.explorer.next_job());
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let view = self.explorer.view();
        let mut colour_map_kind = self.explorer.colour_map_kind();
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("View")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .show(ctx, |ui| {
                    ui.label(format!("Zoom: {:.3e}", view.zoom));
                    ui.label(format!("Pan: ({:.6}, {:.6})", view.pan[0], view.pan[1]));
                    ui.label(format!("Max iterations: {}", view.max_iterations));

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("mandelbrot_colour_map")
                            .selected_text(colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKinds::ALL {
                                    ui.selectable_value(&mut colour_map_kind, kind, kind.display_name());
                                }
                            });
                    });

                    if ui.button("Reset view").clicked() {
                        reset_clicked = true;
                    }

                    ui.separator();
                    ui.label(format!("FPS: {:.1}", self.fps.fps()));
                    if let Some(render_duration) = self.last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = &self.last_error_message {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                    ui.small("WASD pan, Up/Down zoom, Left/Right iterations, R reset");
                });
        });

        self.explorer.set_colour_map_kind(colour_map_kind);
        if reset_clicked {
            info!("view reset from HUD");
            self.explorer.reset_view();
        }

        output
    }
}
