use crate::core::data::viewport::Viewport;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use winit::window::Window;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    /// Builds a presenter whose framebuffer matches `viewport` and whose
    /// surface fills `window`.
    fn build(&self, window: &'static Window, viewport: Viewport) -> Result<T, pixels::Error>;
}
