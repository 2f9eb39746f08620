//! # Movement Component Module
//!
//! Composes the rotation controller, speed controller, and translator into
//! a single per-tick movement component.
//!
//! ## Data Flow
//!
//! ```text
//! ControllerSample ──> RotationController ──> rotation delta + axis factors
//!                 └──> SpeedController ─────> current/target speed factors
//!                                    └──────> translation_delta ──> position delta
//! ```
//!
//! The component owns the control state (`movement_enabled`, current/target
//! speed factors) and nothing else. It never touches the vehicle transform:
//! the host applies the returned deltas to whatever transform representation
//! it uses, and the feedback scalars are always computed whether or not any
//! presentation layer consumes them.
//!
//! ## Usage
//!
//! ```
//! use glam::{Quat, Vec3};
//! use vr_flight::config::Config;
//! use vr_flight::control::MovementControl;
//! use vr_flight::input::ControllerSample;
//!
//! let config = Config::default();
//! let mut control = MovementControl::new(&config);
//!
//! let mut orientation = Quat::IDENTITY;
//! let mut position = Vec3::ZERO;
//!
//! let dt = config.tick_duration();
//! let out = control.tick(dt, &ControllerSample::default(), orientation * Vec3::Z);
//! orientation = (orientation * out.rotation_delta).normalize();
//! position += out.position_delta;
//! ```

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::config::Config;
use crate::input::ControllerSample;

use super::rotation::RotationController;
use super::speed::SpeedController;
use super::translation::translation_delta;

/// Per-tick feedback scalars for presentation layers.
///
/// Deterministic given the same inputs; serializable for the flight log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feedback {
    pub yaw_factor: f32,
    pub pitch_factor: f32,
    pub roll_factor: f32,
    pub current_speed_factor: f32,
    pub target_speed_factor: f32,
}

/// Everything one tick of the movement component produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Incremental rotation for the host to compose onto the vehicle.
    pub rotation_delta: Quat,
    /// Position delta for the host to add to the vehicle position.
    pub position_delta: Vec3,
    /// Whether rotation input is applied after this tick's toggle handling.
    pub movement_enabled: bool,
    /// Presentation feedback scalars.
    pub feedback: Feedback,
}

/// The flight movement component.
///
/// One instance per vehicle; single-threaded, driven by the host's
/// fixed-timestep loop for the lifetime of the vehicle.
#[derive(Debug, Clone)]
pub struct MovementControl {
    rotation: RotationController,
    speed: SpeedController,
    base_movement_speed: f32,
}

impl MovementControl {
    /// Creates a movement component from validated configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            rotation: RotationController::new(&config.rotation, &config.deadzone),
            speed: SpeedController::new(&config.speed),
            base_movement_speed: config.speed.base_movement_speed,
        }
    }

    /// Whether rotation input is currently applied.
    #[must_use]
    pub fn movement_enabled(&self) -> bool {
        self.rotation.is_enabled()
    }

    /// Runs one fixed simulation tick.
    ///
    /// # Arguments
    ///
    /// * `dt` - Tick duration in seconds
    /// * `sample` - This tick's input snapshot
    /// * `forward` - Current vehicle forward direction (unit vector)
    ///
    /// # Returns
    ///
    /// Rotation and position deltas plus feedback scalars. All inputs are
    /// clamped or tolerated; the tick itself cannot fail.
    pub fn tick(&mut self, dt: f32, sample: &ControllerSample, forward: Vec3) -> TickOutput {
        let rotation = self
            .rotation
            .update(&sample.orientation, sample.toggle_released);
        let speed = self.speed.update(&sample.touch);

        TickOutput {
            rotation_delta: rotation.delta,
            position_delta: translation_delta(
                forward,
                speed.current,
                self.base_movement_speed,
                dt,
            ),
            movement_enabled: self.rotation.is_enabled(),
            feedback: Feedback {
                yaw_factor: rotation.factors.yaw,
                pitch_factor: rotation.factors.pitch,
                roll_factor: rotation.factors.roll,
                current_speed_factor: speed.current,
                target_speed_factor: speed.target,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OvershootPolicy;
    use crate::input::{OrientationSample, TouchInput};

    const DT: f32 = 1.0 / 60.0;

    fn make_control() -> MovementControl {
        MovementControl::new(&Config::default())
    }

    fn neutral() -> ControllerSample {
        ControllerSample::default()
    }

    // ==================== Tick Composition Tests ====================

    #[test]
    fn test_neutral_tick_is_inert() {
        let mut control = make_control();
        let out = control.tick(DT, &neutral(), Vec3::Z);

        assert_eq!(out.rotation_delta, Quat::IDENTITY);
        assert_eq!(out.position_delta, Vec3::ZERO);
        assert!(out.movement_enabled);
        assert_eq!(out.feedback.current_speed_factor, 0.0);
        assert_eq!(out.feedback.target_speed_factor, 0.0);
    }

    #[test]
    fn test_small_deflection_no_rotation_regardless_of_speed() {
        // inner=0.01, outer=0.25: axis at 0.005 shapes to 0 and the applied
        // rotation increment is identity, whatever the speed multiplier.
        let mut config = Config::default();
        config.rotation.yaw_speed = 1000.0;
        let mut control = MovementControl::new(&config);

        let mut sample = neutral();
        sample.orientation = OrientationSample::new(0.005, 0.0, 0.0);

        let out = control.tick(DT, &sample, Vec3::Z);
        assert_eq!(out.feedback.yaw_factor, 0.0);
        assert_eq!(out.rotation_delta, Quat::IDENTITY);
    }

    #[test]
    fn test_touch_drives_position() {
        let mut control = make_control();
        let mut sample = neutral();
        sample.touch = TouchInput::engaged_at(0.0, 1.0);

        let out = control.tick(DT, &sample, Vec3::Z);
        // One increment of speed: 0.015 * 60 / 60 units forward.
        assert!((out.position_delta.z - 0.015).abs() < 1e-6);
        assert_eq!(out.position_delta.x, 0.0);
        assert_eq!(out.position_delta.y, 0.0);
    }

    #[test]
    fn test_position_follows_supplied_forward() {
        let mut control = make_control();
        let mut sample = neutral();
        sample.touch = TouchInput::engaged_at(0.0, 1.0);

        let out = control.tick(DT, &sample, Vec3::X);
        assert!(out.position_delta.x > 0.0);
        assert_eq!(out.position_delta.z, 0.0);
    }

    #[test]
    fn test_disabled_still_translates() {
        // The toggle gates rotation only; speed keeps integrating.
        let mut control = make_control();
        let mut toggle = neutral();
        toggle.toggle_released = true;
        control.tick(DT, &toggle, Vec3::Z);
        assert!(!control.movement_enabled());

        let mut sample = neutral();
        sample.orientation = OrientationSample::new(0.2, 0.2, 0.2);
        sample.touch = TouchInput::engaged_at(0.0, 1.0);

        let out = control.tick(DT, &sample, Vec3::Z);
        assert_eq!(out.rotation_delta, Quat::IDENTITY);
        assert!(out.position_delta.z > 0.0);
    }

    #[test]
    fn test_toggle_state_surfaced_in_output() {
        let mut control = make_control();
        let mut toggle = neutral();
        toggle.toggle_released = true;

        let out = control.tick(DT, &toggle, Vec3::Z);
        assert!(!out.movement_enabled);

        let out = control.tick(DT, &toggle, Vec3::Z);
        assert!(out.movement_enabled);
    }

    #[test]
    fn test_feedback_matches_controllers() {
        let mut control = make_control();
        let mut sample = neutral();
        sample.orientation = OrientationSample::new(0.1, -0.2, 0.9);
        sample.touch = TouchInput::engaged_at(0.0, 0.0);

        let out = control.tick(DT, &sample, Vec3::Z);
        assert_eq!(out.feedback.yaw_factor, 0.1);
        assert_eq!(out.feedback.pitch_factor, -0.2);
        assert_eq!(out.feedback.roll_factor, 0.25);
        assert_eq!(out.feedback.target_speed_factor, 2.0);
        assert!((out.feedback.current_speed_factor - 0.015).abs() < 1e-6);
    }

    #[test]
    fn test_tick_deterministic() {
        let mut a = make_control();
        let mut b = make_control();

        let mut sample = neutral();
        sample.orientation = OrientationSample::new(0.1, 0.2, -0.1);
        sample.touch = TouchInput::engaged_at(0.2, 0.7);

        for _ in 0..50 {
            assert_eq!(a.tick(DT, &sample, Vec3::Z), b.tick(DT, &sample, Vec3::Z));
        }
    }

    // ==================== Integration Scenario Tests ====================

    #[test]
    fn test_cruise_scenario_reaches_steady_state() {
        let mut config = Config::default();
        config.speed.forward_steps = 5;
        config.speed.overshoot = OvershootPolicy::Clamp;
        let mut control = MovementControl::new(&config);

        let mut sample = neutral();
        sample.touch = TouchInput::engaged_at(0.0, 1.0);

        let mut position = Vec3::ZERO;
        for _ in 0..400 {
            let out = control.tick(DT, &sample, Vec3::Z);
            position += out.position_delta;
        }

        // Speed pinned at 5 steps: 5 * 60 units/s.
        let out = control.tick(DT, &sample, Vec3::Z);
        assert_eq!(out.feedback.current_speed_factor, 5.0);
        assert!((out.position_delta.z - 5.0).abs() < 1e-4);
        assert!(position.z > 0.0);
    }

    #[test]
    fn test_yaw_sweep_turns_accumulated_orientation() {
        let mut control = make_control();
        let mut sample = neutral();
        sample.orientation = OrientationSample::new(1.0, 0.0, 0.0);

        let mut orientation = Quat::IDENTITY;
        // 240 ticks at 0.375 deg/tick = 90 degrees of yaw.
        for _ in 0..240 {
            let out = control.tick(DT, &sample, orientation * Vec3::Z);
            orientation = (orientation * out.rotation_delta).normalize();
        }

        let forward = orientation * Vec3::Z;
        assert!((forward.angle_between(Vec3::Z).to_degrees() - 90.0).abs() < 0.1);
    }
}
