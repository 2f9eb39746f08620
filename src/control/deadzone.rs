//! # Deadzone Module
//!
//! Applies inner/outer deadzone shaping to raw orientation axis values.
//!
//! ## Shaping
//!
//! The inner threshold suppresses jitter around center: anything strictly
//! inside it maps to 0. The outer threshold handles out-of-bounds input
//! ranges: anything beyond it is clamped to the threshold itself. Values in
//! between pass through unchanged.
//!
//! Note that unlike stick calibration curves, this shaping does not rescale
//! the live band; a value just past the inner threshold comes out as itself,
//! not as a value near 0.
//!
//! ## Usage
//!
//! ```
//! use vr_flight::control::deadzone::Deadzone;
//!
//! let dz = Deadzone::new(0.01, 0.25);
//!
//! // Jitter suppressed
//! assert_eq!(dz.apply(0.005), 0.0);
//!
//! // Live band passes through
//! assert_eq!(dz.apply(0.1), 0.1);
//!
//! // Out-of-range clamped
//! assert_eq!(dz.apply(0.8), 0.25);
//! ```

/// Inner/outer deadzone shaping for a normalized axis value.
///
/// Input is nominally -1.0 to 1.0 but larger magnitudes are tolerated and
/// clamped by the outer threshold.
#[derive(Debug, Clone, Copy)]
pub struct Deadzone {
    /// Inner threshold (0.0 to 0.99, exclusive at the top).
    inner: f32,
    /// Outer threshold (0.01 to 1.0).
    outer: f32,
}

impl Default for Deadzone {
    fn default() -> Self {
        Self {
            inner: 0.01,
            outer: 0.25,
        }
    }
}

impl Deadzone {
    /// Creates a deadzone with the given inner and outer thresholds.
    ///
    /// Thresholds are clamped to their legal ranges. Ordering between the
    /// two is the configuration layer's responsibility
    /// ([`Config::validate`](crate::config::Config::validate) rejects
    /// `inner >= outer`).
    #[must_use]
    pub fn new(inner: f32, outer: f32) -> Self {
        Self {
            inner: inner.clamp(0.0, 0.989),
            outer: outer.clamp(0.01, 1.0),
        }
    }

    /// Returns the inner threshold.
    #[must_use]
    pub fn inner(&self) -> f32 {
        self.inner
    }

    /// Returns the outer threshold.
    #[must_use]
    pub fn outer(&self) -> f32 {
        self.outer
    }

    /// Applies deadzone shaping to a raw axis value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vr_flight::control::deadzone::Deadzone;
    ///
    /// let dz = Deadzone::new(0.1, 0.5);
    /// assert_eq!(dz.apply(0.05), 0.0);
    /// assert_eq!(dz.apply(-0.3), -0.3);
    /// assert_eq!(dz.apply(-0.9), -0.5);
    /// ```
    #[must_use]
    pub fn apply(&self, value: f32) -> f32 {
        if value > -self.inner && value < self.inner {
            return 0.0;
        }
        if value < -self.outer {
            return -self.outer;
        }
        if value > self.outer {
            return self.outer;
        }
        value
    }
}
