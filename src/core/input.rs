//! Input state tracking

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Discrete control axes driven by the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAxis {
    ThrottleForward,
    ThrottleBack,
    YawLeft,
    YawRight,
}

/// Tracks keyboard axes and mouse input state
///
/// Written by the window event layer, read by the flight controller. The
/// mouse delta accumulates in normalized window units (one half-window of
/// travel is 1.0 on either axis) and is consumed once per frame via
/// [`InputState::sample_mouse_delta`].
pub struct InputState {
    throttle_forward: bool,
    throttle_back: bool,
    yaw_left: bool,
    yaw_right: bool,
    /// Accumulated mouse delta since the last sample
    mouse_delta: (f32, f32),
    /// Whether mouse is captured
    mouse_captured: bool,
}

impl InputState {
    /// Create new input state with all axes inactive
    pub fn new() -> Self {
        Self {
            throttle_forward: false,
            throttle_back: false,
            yaw_left: false,
            yaw_right: false,
            mouse_delta: (0.0, 0.0),
            mouse_captured: false,
        }
    }

    /// Set a control axis. Opposing axes may be active at the same time;
    /// they cancel in the flight model.
    pub fn set_axis(&mut self, axis: ControlAxis, active: bool) {
        match axis {
            ControlAxis::ThrottleForward => self.throttle_forward = active,
            ControlAxis::ThrottleBack => self.throttle_back = active,
            ControlAxis::YawLeft => self.yaw_left = active,
            ControlAxis::YawRight => self.yaw_right = active,
        }
    }

    /// Check whether a control axis is active
    pub fn axis(&self, axis: ControlAxis) -> bool {
        match axis {
            ControlAxis::ThrottleForward => self.throttle_forward,
            ControlAxis::ThrottleBack => self.throttle_back,
            ControlAxis::YawLeft => self.yaw_left,
            ControlAxis::YawRight => self.yaw_right,
        }
    }

    /// Process a window event, mapping W/S/A/D onto the control axes
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event: KeyEvent {
                physical_key: PhysicalKey::Code(key_code),
                state,
                ..
            },
            ..
        } = event
        {
            let active = *state == ElementState::Pressed;
            match key_code {
                KeyCode::KeyW => self.set_axis(ControlAxis::ThrottleForward, active),
                KeyCode::KeyS => self.set_axis(ControlAxis::ThrottleBack, active),
                KeyCode::KeyA => self.set_axis(ControlAxis::YawLeft, active),
                KeyCode::KeyD => self.set_axis(ControlAxis::YawRight, active),
                _ => {}
            }
        }
    }

    /// Accumulate a mouse delta in normalized window units. Ignored while
    /// the cursor is not captured.
    pub fn push_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.mouse_captured {
            self.mouse_delta.0 += dx;
            self.mouse_delta.1 += dy;
        }
    }

    /// Take the accumulated mouse delta, resetting it to zero. Each frame
    /// consumes exactly one sample.
    pub fn sample_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Set mouse captured state, discarding any pending delta
    pub fn set_captured(&mut self, captured: bool) {
        self.mouse_captured = captured;
        self.mouse_delta = (0.0, 0.0);
    }

    /// Check if mouse is captured
    pub fn is_captured(&self) -> bool {
        self.mouse_captured
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_independent() {
        let mut input = InputState::new();
        assert!(!input.axis(ControlAxis::ThrottleForward));

        input.set_axis(ControlAxis::YawLeft, true);
        input.set_axis(ControlAxis::YawRight, true);

        // Both yaw directions at once is legal; the flight model cancels them.
        assert!(input.axis(ControlAxis::YawLeft));
        assert!(input.axis(ControlAxis::YawRight));
        assert!(!input.axis(ControlAxis::ThrottleForward));
        assert!(!input.axis(ControlAxis::ThrottleBack));

        input.set_axis(ControlAxis::YawLeft, false);
        assert!(!input.axis(ControlAxis::YawLeft));
        assert!(input.axis(ControlAxis::YawRight));
    }

    #[test]
    fn test_sample_consumes_accumulated_delta() {
        let mut input = InputState::new();
        input.set_captured(true);

        input.push_mouse_delta(0.5, 0.25);
        input.push_mouse_delta(0.1, 0.0);

        assert_eq!(input.sample_mouse_delta(), (0.6, 0.25));
        assert_eq!(input.sample_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_uncaptured_motion_is_ignored() {
        let mut input = InputState::new();

        input.push_mouse_delta(1.0, 1.0);
        assert_eq!(input.sample_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_capture_change_discards_pending_delta() {
        let mut input = InputState::new();
        input.set_captured(true);
        input.push_mouse_delta(0.4, -0.2);

        input.set_captured(false);
        assert_eq!(input.sample_mouse_delta(), (0.0, 0.0));
    }
}
