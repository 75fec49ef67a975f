use crate::core::camera::controls::CameraControlsSnapshot;
use crate::core::camera::limits::CameraLimits;
use crate::core::camera::view_state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewStepReport {
    pub view_changed: bool,
    pub iterations_clamped: bool,
    pub zoom_clamped: bool,
    pub elapsed_clamped: bool,
}

/// Advances the camera by one frame.
///
/// Pan moves by `velocity * speed` where `speed` is the clamped elapsed time
/// multiplied by `limits.time_scale`. Zoom factors scale both `zoom` and
/// `velocity`. A zoom step that would leave `[min_zoom, max_zoom]` is
/// skipped.
pub fn step_view(
    view: &mut ViewState,
    controls: CameraControlsSnapshot,
    elapsed_ms: f64,
    limits: &CameraLimits,
) -> ViewStepReport {
    let mut report = ViewStepReport::default();
    let before = *view;

    let (elapsed, elapsed_clamped) = clamp_elapsed(elapsed_ms, limits.max_elapsed_ms);
    report.elapsed_clamped = elapsed_clamped;

    let step = view.velocity * elapsed * limits.time_scale;
    view.pan[0] += step * axis_from_pair(controls.pan_left, controls.pan_right);
    view.pan[1] += step * axis_from_pair(controls.pan_up, controls.pan_down);

    if controls.zoom_in {
        report.zoom_clamped |= !apply_zoom(view, limits.zoom_in_factor(), limits);
    }
    if controls.zoom_out {
        report.zoom_clamped |= !apply_zoom(view, limits.zoom_out_factor(), limits);
    }

    let mut iterations = view.max_iterations;
    if controls.more_iterations {
        iterations = iterations.saturating_add(1);
    }
    if controls.fewer_iterations {
        iterations = iterations.saturating_sub(1);
    }
    view.max_iterations = limits.clamp_iterations(iterations);
    report.iterations_clamped = view.max_iterations != iterations;

    report.view_changed = *view != before;
    report
}

fn clamp_elapsed(elapsed_ms: f64, max_elapsed_ms: f64) -> (f64, bool) {
    if !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
        return (0.0, true);
    }

    if elapsed_ms > max_elapsed_ms {
        return (max_elapsed_ms, true);
    }

    (elapsed_ms, false)
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

fn apply_zoom(view: &mut ViewState, factor: f64, limits: &CameraLimits) -> bool {
    let zoom = view.zoom * factor;

    if !zoom.is_finite() || zoom < limits.min_zoom || zoom > limits.max_zoom {
        return false;
    }

    view.zoom = zoom;
    view.velocity *= factor;
    true
}
