//! # Translation Module
//!
//! Integrates the current speed factor into a forward position delta.
//!
//! This is the whole of the translator: a pure function of its inputs with
//! no state and no failure conditions. The caller owns the vehicle position
//! and adds the delta to it.

use glam::Vec3;

/// Computes the position delta for one tick.
///
/// # Arguments
///
/// * `forward` - Vehicle forward direction (unit vector from orientation)
/// * `speed_factor` - Current speed factor in step units
/// * `base_speed` - World units per second at one step
/// * `dt` - Tick duration in seconds
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use vr_flight::control::translation::translation_delta;
///
/// let delta = translation_delta(Vec3::Z, 2.0, 60.0, 1.0 / 60.0);
/// assert_eq!(delta, Vec3::new(0.0, 0.0, 2.0));
/// ```
#[must_use]
pub fn translation_delta(forward: Vec3, speed_factor: f32, base_speed: f32, dt: f32) -> Vec3 {
    forward * speed_factor * base_speed * dt
}
