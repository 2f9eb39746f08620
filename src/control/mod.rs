//! # Control Module
//!
//! The per-tick flight control law.
//!
//! This module handles:
//! - Deadzone shaping of raw orientation axis values
//! - Deriving and applying incremental yaw/pitch/roll rotation
//! - Discretized target speed with fixed-step acceleration
//! - Integrating current speed into a position delta
//! - Composing all of the above into one `tick` call

pub mod component;
pub mod deadzone;
pub mod rotation;
pub mod speed;
pub mod translation;

pub use component::{Feedback, MovementControl, TickOutput};
