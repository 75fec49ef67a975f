/// The four numbers a frame is rendered from, snapshotted out of the view
/// state before rendering starts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParams {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub max_iterations: u32,
}
