//! # Speed Controller Module
//!
//! Maps the touchpad's vertical axis to a discretized target speed and
//! converges the current speed toward it one acceleration increment per
//! tick.
//!
//! ## Target Mapping
//!
//! With `f` forward steps and `b` backward steps, a vertical touch position
//! `y` in -1.0 to 1.0 maps linearly onto `[-b, f]` step units:
//!
//! ```text
//! target = (y + 1) / 2 * (f + b) - b
//! ```
//!
//! The target is sticky: while the touch surface is not engaged it keeps its
//! last computed value, and the current speed keeps converging toward it.
//!
//! ## Acceleration Stepping
//!
//! The current speed never jumps to the target; it moves by exactly one
//! increment per tick. What happens when the increment would cross the
//! target is governed by [`OvershootPolicy`]: `Clamp` snaps onto it, `Free`
//! reproduces the original free-running behavior and may oscillate around a
//! target the increment does not evenly divide.

use crate::config::{OvershootPolicy, SpeedConfig};
use crate::input::TouchInput;

/// Current and target speed factors after one update, in step units.
///
/// Emitted for presentation layers (speed indicator bars).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedUpdate {
    pub current: f32,
    pub target: f32,
}

/// Converges a signed speed factor toward a touch-driven target.
///
/// # Examples
///
/// ```
/// use vr_flight::config::SpeedConfig;
/// use vr_flight::control::speed::SpeedController;
/// use vr_flight::input::TouchInput;
///
/// let mut ctrl = SpeedController::new(&SpeedConfig::default());
///
/// // Full-forward touch: target jumps to +8, current creeps up.
/// let update = ctrl.update(&TouchInput::engaged_at(0.0, 1.0));
/// assert_eq!(update.target, 8.0);
/// assert_eq!(update.current, 0.015);
/// ```
#[derive(Debug, Clone)]
pub struct SpeedController {
    current: f32,
    target: f32,
    acceleration: f32,
    forward_steps: f32,
    backward_steps: f32,
    overshoot: OvershootPolicy,
}

impl SpeedController {
    /// Creates a speed controller from tuning config, at rest.
    #[must_use]
    pub fn new(config: &SpeedConfig) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            acceleration: config.acceleration,
            forward_steps: config.forward_steps as f32,
            backward_steps: config.backward_steps as f32,
            overshoot: config.overshoot,
        }
    }

    /// Current speed factor in step units.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Target speed factor in step units.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Processes one tick of touch input.
    ///
    /// Recomputes the target only while the surface is engaged, then steps
    /// the current speed toward it.
    pub fn update(&mut self, touch: &TouchInput) -> SpeedUpdate {
        if touch.engaged {
            self.target = self.target_for(touch.vertical());
        }

        self.current = self.step_toward(self.current, self.target);

        SpeedUpdate {
            current: self.current,
            target: self.target,
        }
    }

    /// Maps a vertical touch position onto `[-backward_steps, forward_steps]`.
    fn target_for(&self, y: f32) -> f32 {
        let step_sum = self.forward_steps + self.backward_steps;
        (y + 1.0) / 2.0 * step_sum - self.backward_steps
    }

    /// Moves `current` one acceleration increment toward `target`.
    fn step_toward(&self, current: f32, target: f32) -> f32 {
        let stepped = if target > current {
            current + self.acceleration
        } else if target < current {
            current - self.acceleration
        } else {
            return current;
        };

        match self.overshoot {
            OvershootPolicy::Free => stepped,
            OvershootPolicy::Clamp => {
                // Crossing the target means the remaining distance was
                // smaller than one increment.
                if (target - current).signum() != (target - stepped).signum() {
                    target
                } else {
                    stepped
                }
            }
        }
    }
}
