/// Which of the eight camera actions are held during this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraControlsSnapshot {
    pub pan_left: bool,
    pub pan_right: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub more_iterations: bool,
    pub fewer_iterations: bool,
}

impl CameraControlsSnapshot {
    #[must_use]
    pub fn any_held(&self) -> bool {
        self.pan_left
            || self.pan_right
            || self.pan_up
            || self.pan_down
            || self.zoom_in
            || self.zoom_out
            || self.more_iterations
            || self.fewer_iterations
    }
}
