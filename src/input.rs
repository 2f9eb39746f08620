//! # Input Packet Module
//!
//! Per-tick input packets supplied by the host's input-sampling layer.
//!
//! The control model never talks to hardware. Each tick the host hands it a
//! [`ControllerSample`] snapshot containing:
//!
//! - an [`OrientationSample`]: three scalar axis proxies extracted from the
//!   hand controller's orientation, each nominally in -1.0 to 1.0
//! - a [`TouchInput`]: touchpad engagement flag plus the normalized 2D axis
//!   position (only meaningful while engaged)
//! - a discrete release edge for the designated movement-toggle input
//!
//! Engagement detection and axis value extraction are deliberately separate
//! fields so either can be driven independently in tests.
//!
//! ## Usage
//!
//! ```
//! use vr_flight::input::{ControllerSample, TouchInput};
//!
//! let mut sample = ControllerSample::default();
//! assert!(sample.is_neutral(0.001));
//!
//! sample.touch = TouchInput::engaged_at(0.0, 0.5);
//! assert!(sample.touch.engaged);
//! ```

/// Orientation sample from the hand controller.
///
/// Each component is an axis proxy nominally in -1.0 to 1.0. Out-of-range
/// values are tolerated; the deadzone shaping clamps them downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationSample {
    /// Yaw axis proxy. Negative = nose left, positive = nose right.
    pub yaw: f32,
    /// Pitch axis proxy. Negative = nose down, positive = nose up.
    pub pitch: f32,
    /// Roll axis proxy. Negative = bank left, positive = bank right.
    pub roll: f32,
}

impl OrientationSample {
    /// Creates an orientation sample from raw axis proxies.
    #[must_use]
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }
}

/// Touchpad input packet.
///
/// `axis` is only meaningful while `engaged` is true; the speed controller
/// ignores it otherwise and keeps its sticky target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchInput {
    /// Whether a finger is currently resting on the touch surface.
    pub engaged: bool,
    /// Normalized touch position, x and y each in -1.0 to 1.0.
    pub axis: (f32, f32),
}

impl TouchInput {
    /// Creates an engaged touch packet at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use vr_flight::input::TouchInput;
    ///
    /// let touch = TouchInput::engaged_at(0.0, 1.0);
    /// assert!(touch.engaged);
    /// assert_eq!(touch.axis.1, 1.0);
    /// ```
    #[must_use]
    pub fn engaged_at(x: f32, y: f32) -> Self {
        Self {
            engaged: true,
            axis: (x, y),
        }
    }

    /// Creates a released (not engaged) touch packet.
    #[must_use]
    pub fn released() -> Self {
        Self::default()
    }

    /// Vertical axis component, the speed controller's driving input.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.axis.1
    }
}

/// Complete per-tick input snapshot for the movement component.
///
/// # Examples
///
/// ```
/// use vr_flight::input::ControllerSample;
///
/// let sample = ControllerSample::default();
/// assert_eq!(sample.orientation.yaw, 0.0);
/// assert!(!sample.touch.engaged);
/// assert!(!sample.toggle_released);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerSample {
    /// Current controller orientation axis proxies.
    pub orientation: OrientationSample,
    /// Touch surface engagement and position.
    pub touch: TouchInput,
    /// Release edge of the movement-toggle input this tick.
    pub toggle_released: bool,
}

impl ControllerSample {
    /// Creates a neutral sample: centered orientation, touch released,
    /// no toggle edge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether every orientation axis is within `threshold` of center
    /// and no touch or toggle activity is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use vr_flight::input::ControllerSample;
    ///
    /// let mut sample = ControllerSample::new();
    /// assert!(sample.is_neutral(0.01));
    ///
    /// sample.orientation.pitch = 0.5;
    /// assert!(!sample.is_neutral(0.01));
    /// ```
    #[must_use]
    pub fn is_neutral(&self, threshold: f32) -> bool {
        self.orientation.yaw.abs() <= threshold
            && self.orientation.pitch.abs() <= threshold
            && self.orientation.roll.abs() <= threshold
            && !self.touch.engaged
            && !self.toggle_released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== OrientationSample Tests ====================

    #[test]
    fn test_orientation_default_centered() {
        let sample = OrientationSample::default();
        assert_eq!(sample.yaw, 0.0);
        assert_eq!(sample.pitch, 0.0);
        assert_eq!(sample.roll, 0.0);
    }

    #[test]
    fn test_orientation_new() {
        let sample = OrientationSample::new(0.1, -0.2, 0.3);
        assert_eq!(sample.yaw, 0.1);
        assert_eq!(sample.pitch, -0.2);
        assert_eq!(sample.roll, 0.3);
    }

    // ==================== TouchInput Tests ====================

    #[test]
    fn test_touch_default_released() {
        let touch = TouchInput::default();
        assert!(!touch.engaged);
        assert_eq!(touch.axis, (0.0, 0.0));
    }

    #[test]
    fn test_touch_engaged_at() {
        let touch = TouchInput::engaged_at(-0.3, 0.7);
        assert!(touch.engaged);
        assert_eq!(touch.axis, (-0.3, 0.7));
        assert_eq!(touch.vertical(), 0.7);
    }

    #[test]
    fn test_touch_released() {
        let touch = TouchInput::released();
        assert_eq!(touch, TouchInput::default());
    }

    // ==================== ControllerSample Tests ====================

    #[test]
    fn test_sample_default_neutral() {
        let sample = ControllerSample::default();
        assert!(sample.is_neutral(0.0));
    }

    #[test]
    fn test_sample_not_neutral_with_orientation() {
        let mut sample = ControllerSample::new();
        sample.orientation.roll = 0.02;
        assert!(!sample.is_neutral(0.01));
        assert!(sample.is_neutral(0.05));
    }

    #[test]
    fn test_sample_not_neutral_with_touch() {
        let mut sample = ControllerSample::new();
        sample.touch = TouchInput::engaged_at(0.0, 0.0);
        assert!(!sample.is_neutral(0.01));
    }

    #[test]
    fn test_sample_not_neutral_with_toggle() {
        let mut sample = ControllerSample::new();
        sample.toggle_released = true;
        assert!(!sample.is_neutral(0.01));
    }
}
