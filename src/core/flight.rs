//! Flight-style camera controller
//!
//! Integrates throttle and mouse-look input into a banking, turning camera
//! pose once per frame. Turn rate is coupled to throttle: the faster the
//! craft moves, the less agile it is.

use serde::Serialize;

use crate::core::camera::Camera;
use crate::core::config::FlightConfig;
use crate::core::input::{ControlAxis, InputState};
use crate::core::types::Vec3;

/// Read-only per-frame snapshot for display layers. Angles in degrees.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Telemetry {
    pub throttle_percent: f32,
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub heading: f32,
    pub pitch: f32,
    pub roll: f32,
    pub position: [f32; 3],
}

/// Flight camera: owns the pose and the throttle accumulator
pub struct FlightCamera {
    camera: Camera,
    config: FlightConfig,
    /// Accumulated thrust level, always in [0, 1]
    throttle: f32,
    /// Mouse delta consumed by the last update, kept for telemetry
    last_mouse: (f32, f32),
}

impl FlightCamera {
    /// Create a flight camera from an initial pose and tuning config
    pub fn new(camera: Camera, config: FlightConfig) -> Self {
        Self {
            camera,
            config,
            throttle: 0.0,
            last_mouse: (0.0, 0.0),
        }
    }

    /// Advance the simulation by one frame
    ///
    /// Reads the control axes and consumes one mouse-delta sample from
    /// `input`, then mutates the pose in place: throttle integration, forward
    /// displacement along the local +Y axis, and a camera-frame rotation
    /// built from the heading/pitch/roll offsets. `dt` is the elapsed frame
    /// time in seconds and must be non-negative and finite.
    pub fn update(&mut self, input: &mut InputState, dt: f32) {
        let (dx, dy) = input.sample_mouse_delta();
        self.last_mouse = (dx, dy);

        // Throttle ramps per call, not per second (original tuning kept).
        let ramp = if input.axis(ControlAxis::ThrottleForward) {
            self.config.throttle_ramp
        } else {
            -self.config.throttle_ramp
        };
        self.throttle = (self.throttle + ramp).clamp(0.0, 1.0);

        let displacement = dt * (self.config.speed_base + self.config.speed_limit * self.throttle);
        self.camera.translate_local(Vec3::Y * displacement);

        // Angular displacement allowance for this frame, degrees.
        let turn_budget = self.turn_rate() * dt;

        let rudder = input.axis(ControlAxis::YawLeft) as i32 as f32
            - input.axis(ControlAxis::YawRight) as i32 as f32;
        let heading = turn_budget * self.config.yaw_gain * rudder;
        let pitch = turn_budget * self.config.pitch_gain * dy;
        // Roll tracks the stick directly, independent of speed and frame time.
        let roll = dx * self.config.roll_gain;

        self.camera.rotate_local(Camera::hpr_quat(
            heading.to_radians(),
            pitch.to_radians(),
            roll.to_radians(),
        ));
    }

    /// Current turn rate in degrees per second. Decreases linearly as
    /// throttle rises.
    pub fn turn_rate(&self) -> f32 {
        self.config.turn_rate_limit * (self.config.maneuverability - self.throttle)
    }

    /// Current throttle level in [0, 1]
    pub fn throttle(&self) -> f32 {
        self.throttle
    }

    /// Set the throttle level, clamped to [0, 1]
    pub fn set_throttle(&mut self, throttle: f32) {
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    /// The camera pose
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Derived display snapshot for the current frame. Never fed back into
    /// the simulation.
    pub fn telemetry(&self) -> Telemetry {
        let (h, p, r) = self.camera.hpr();
        Telemetry {
            throttle_percent: self.throttle * 100.0,
            mouse_dx: self.last_mouse.0,
            mouse_dy: self.last_mouse.1,
            heading: h.to_degrees(),
            pitch: p.to_degrees(),
            roll: r.to_degrees(),
            position: self.camera.position.to_array(),
        }
    }
}
