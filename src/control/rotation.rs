//! # Rotation Controller Module
//!
//! Derives per-axis rotation factors from the controller orientation and
//! turns them into an incremental rotation for the vehicle.
//!
//! ## Axis Mapping
//!
//! | Factor | Source | Local axis | Tuning |
//! |--------|--------|------------|--------|
//! | Yaw | `orientation.yaw` | Y (up) | `yaw_speed` |
//! | Pitch | `orientation.pitch` | X (right) | `pitch_speed` |
//! | Roll | `orientation.roll` | Z (forward) | `roll_speed` |
//!
//! Each raw axis value is deadzone-shaped, multiplied by its per-axis speed
//! (degrees per tick at full deflection), and the three local-axis rotations
//! are composed yaw, then pitch, then roll into a single delta quaternion.
//!
//! ## Movement Toggle
//!
//! Rotation can be disabled so the pilot can relax their hand without
//! affecting flight. A release edge of the designated toggle input flips the
//! enabled flag; while disabled the orientation is ignored entirely and the
//! delta is identity. When a release edge arrives on an enabled tick, the
//! rotation for that tick is still produced before the flag flips.

use glam::Quat;

use crate::config::{DeadzoneConfig, RotationConfig};
use crate::input::OrientationSample;

use super::deadzone::Deadzone;

/// Deadzone-shaped rotation factors for one tick.
///
/// Emitted for presentation layers (axis indicator bars and the like); the
/// same values feed the rotation delta, so they are reproducible from input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisFactors {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl AxisFactors {
    /// True when all three factors are zero (no rotation this tick).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && self.roll == 0.0
    }
}

/// Result of one rotation update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationUpdate {
    /// Incremental rotation to compose onto the vehicle orientation.
    pub delta: Quat,
    /// Shaped per-axis factors behind `delta`.
    pub factors: AxisFactors,
}

impl RotationUpdate {
    /// An update that leaves the vehicle orientation untouched.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            delta: Quat::IDENTITY,
            factors: AxisFactors::default(),
        }
    }
}

/// Turns orientation samples into incremental vehicle rotation.
///
/// Owns the `movement_enabled` flag; everything else is immutable tuning.
///
/// # Examples
///
/// ```
/// use vr_flight::config::{DeadzoneConfig, RotationConfig};
/// use vr_flight::control::rotation::RotationController;
/// use vr_flight::input::OrientationSample;
///
/// let mut ctrl = RotationController::new(&RotationConfig::default(), &DeadzoneConfig::default());
/// let update = ctrl.update(&OrientationSample::new(0.005, 0.0, 0.0), false);
///
/// // Within the inner deadzone: no rotation at all.
/// assert!(update.factors.is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct RotationController {
    enabled: bool,
    deadzone: Deadzone,
    yaw_speed: f32,
    pitch_speed: f32,
    roll_speed: f32,
}

impl RotationController {
    /// Creates a rotation controller from tuning config, initially enabled.
    #[must_use]
    pub fn new(rotation: &RotationConfig, deadzone: &DeadzoneConfig) -> Self {
        Self {
            enabled: true,
            deadzone: Deadzone::new(deadzone.inner, deadzone.outer),
            yaw_speed: rotation.yaw_speed,
            pitch_speed: rotation.pitch_speed,
            roll_speed: rotation.roll_speed,
        }
    }

    /// Whether rotation input is currently applied.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Processes one tick of orientation input.
    ///
    /// # Arguments
    ///
    /// * `orientation` - Current controller orientation axis proxies
    /// * `toggle_released` - Release edge of the movement-toggle input
    ///
    /// # Returns
    ///
    /// The rotation delta and the shaped factors. Identity while disabled.
    pub fn update(
        &mut self,
        orientation: &OrientationSample,
        toggle_released: bool,
    ) -> RotationUpdate {
        if self.enabled {
            let factors = AxisFactors {
                yaw: self.deadzone.apply(orientation.yaw),
                pitch: self.deadzone.apply(orientation.pitch),
                roll: self.deadzone.apply(orientation.roll),
            };

            let update = RotationUpdate {
                delta: Self::compose_delta(
                    factors.yaw * self.yaw_speed,
                    factors.pitch * self.pitch_speed,
                    factors.roll * self.roll_speed,
                ),
                factors,
            };

            // Rotation still applies on the tick the toggle releases.
            if toggle_released {
                self.enabled = false;
            }

            update
        } else {
            if toggle_released {
                self.enabled = true;
            }
            RotationUpdate::identity()
        }
    }

    /// Composes yaw, pitch, roll (degrees) into one local-axis delta.
    ///
    /// Right-multiplying successive rotations rotates about the vehicle's
    /// own axes, so `orientation * delta` yaws first, then pitches, then
    /// rolls.
    fn compose_delta(yaw_deg: f32, pitch_deg: f32, roll_deg: f32) -> Quat {
        Quat::from_rotation_y(yaw_deg.to_radians())
            * Quat::from_rotation_x(pitch_deg.to_radians())
            * Quat::from_rotation_z(roll_deg.to_radians())
    }
}
