use crate::core::camera::CameraControlsSnapshot;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Held-key flags gathered from window events, read once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyInputState {
    a_held: bool,
    d_held: bool,
    w_held: bool,
    s_held: bool,
    up_held: bool,
    down_held: bool,
    right_held: bool,
    left_held: bool,
    reset_edge_pending: bool,
    quit_requested: bool,
}

impl KeyInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyA => self.a_held = pressed,
            KeyCode::KeyD => self.d_held = pressed,
            KeyCode::KeyW => self.w_held = pressed,
            KeyCode::KeyS => self.s_held = pressed,
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::KeyR if pressed => self.reset_edge_pending = true,
            KeyCode::Escape if pressed => self.quit_requested = true,
            _ => {}
        }
    }

    /// Returns a neutral snapshot while a text field has focus.
    pub fn snapshot(&mut self, text_editing: bool) -> CameraControlsSnapshot {
        if text_editing {
            self.reset_edge_pending = false;
            return CameraControlsSnapshot::default();
        }

        CameraControlsSnapshot {
            pan_left: self.a_held,
            pan_right: self.d_held,
            pan_up: self.w_held,
            pan_down: self.s_held,
            zoom_in: self.up_held,
            zoom_out: self.down_held,
            more_iterations: self.right_held,
            fewer_iterations: self.left_held,
        }
    }

    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_edge_pending)
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Drops held keys, used when the window loses focus.
    pub fn release_all(&mut self) {
        *self = Self {
            quit_requested: self.quit_requested,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::KeyInputState;
    use crate::core::camera::CameraControlsSnapshot;
    use winit::{event::ElementState, keyboard::KeyCode};

    const ALL_HELD_KEYS: [KeyCode; 8] = [
        KeyCode::KeyA,
        KeyCode::KeyD,
        KeyCode::KeyW,
        KeyCode::KeyS,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowRight,
        KeyCode::ArrowLeft,
    ];

    #[test]
    fn press_and_release_updates_held_flags() {
        let mut input = KeyInputState::default();

        for key in ALL_HELD_KEYS {
            input.handle_key_event(key, ElementState::Pressed);
        }

        let pressed = input.snapshot(false);
        assert!(pressed.pan_left);
        assert!(pressed.pan_right);
        assert!(pressed.pan_up);
        assert!(pressed.pan_down);
        assert!(pressed.zoom_in);
        assert!(pressed.zoom_out);
        assert!(pressed.more_iterations);
        assert!(pressed.fewer_iterations);

        for key in ALL_HELD_KEYS {
            input.handle_key_event(key, ElementState::Released);
        }

        assert_eq!(input.snapshot(false), CameraControlsSnapshot::default());
    }

    #[test]
    fn held_keys_persist_across_snapshots() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed);

        assert!(input.snapshot(false).zoom_in);
        assert!(input.snapshot(false).zoom_in);
    }

    #[test]
    fn reset_edge_is_consumed_once() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);

        assert!(input.take_reset());
        assert!(!input.take_reset());
    }

    #[test]
    fn text_editing_suppresses_controls_and_reset() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);

        assert_eq!(input.snapshot(true), CameraControlsSnapshot::default());
        assert!(!input.take_reset());
        assert!(input.snapshot(false).pan_up);
    }

    #[test]
    fn escape_requests_quit() {
        let mut input = KeyInputState::default();

        assert!(!input.quit_requested());
        input.handle_key_event(KeyCode::Escape, ElementState::Pressed);
        assert!(input.quit_requested());
    }

    #[test]
    fn release_all_keeps_quit_request() {
        let mut input = KeyInputState::default();
        input.handle_key_event(KeyCode::KeyA, ElementState::Pressed);
        input.handle_key_event(KeyCode::Escape, ElementState::Pressed);

        input.release_all();

        assert_eq!(input.snapshot(false), CameraControlsSnapshot::default());
        assert!(input.quit_requested());
    }
}
