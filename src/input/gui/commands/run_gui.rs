use crate::controllers::explorer::ExplorerController;
use crate::input::gui::app::gui_app::{GuiApp, WINDOW_TITLE};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use log::info;
use std::error::Error;
use std::marker::PhantomData;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self, explorer: ExplorerController) -> Result<(), Box<dyn Error>> {
        let viewport = explorer.config().viewport;
        let event_loop = EventLoop::new()?;

        // pixels needs the window for the lifetime of the surface
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(
                    f64::from(viewport.width()),
                    f64::from(viewport.height()),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, viewport)?;
        info!(
            "window open at {}x{}, framebuffer {}x{}",
            window.inner_size().width,
            window.inner_size().height,
            viewport.width(),
            viewport.height()
        );

        let app = GuiApp::new(window, &event_loop, presenter, explorer)?;
        app.run(event_loop, window)?;

        info!("window closed");
        Ok(())
    }
}
