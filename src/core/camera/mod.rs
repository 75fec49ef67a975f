pub mod controls;
pub mod limits;
pub mod step;
pub mod view_state;

pub use controls::CameraControlsSnapshot;
pub use limits::{CameraLimits, MIN_ITERATIONS};
pub use step::{ViewStepReport, step_view};
pub use view_state::ViewState;
