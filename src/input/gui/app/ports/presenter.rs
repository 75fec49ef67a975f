use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    /// Replaces the framebuffer contents with a finished frame.
    fn draw_frame(&mut self, buffer: &PixelBuffer);

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
