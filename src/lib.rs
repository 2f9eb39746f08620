//! # VR Flight Library
//!
//! Arcade-style flight control model for hand-controller-steered vehicles.
//!
//! This library converts raw controller orientation and touchpad input into
//! smoothed rotational and translational motion, with deadzone filtering and
//! discretized, accelerating speed control. The host application owns the
//! vehicle transform and the fixed-timestep loop; the library only computes
//! per-tick deltas.

pub mod config;
pub mod error;
pub mod input;
pub mod control;
pub mod telemetry;
