//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! All tuning is fixed at initialization; there is no dynamic
//! reconfiguration. Defaults follow the reference vehicle tuning
//! (base speed 60, acceleration 0.015, rotation speed 1.5 per axis,
//! 8 forward / 4 backward speed steps, deadzones 0.01 / 0.25).

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Policy for the final acceleration step when the increment would cross
/// the target speed factor.
///
/// The free-running variant reproduces the original stepping, which can
/// oscillate forever around a target the acceleration does not evenly
/// divide. Clamping snaps to the target instead and is the default.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvershootPolicy {
    /// Snap to the target when a step would overshoot it.
    #[default]
    Clamp,
    /// Always step by the full increment, overshooting up to one increment.
    Free,
}

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub speed: SpeedConfig,

    #[serde(default)]
    pub rotation: RotationConfig,

    #[serde(default)]
    pub deadzone: DeadzoneConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Speed controller configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SpeedConfig {
    /// World units per second at one speed step.
    #[serde(default = "default_base_movement_speed")]
    pub base_movement_speed: f32,

    /// Speed-factor change per tick while converging on the target.
    #[serde(default = "default_acceleration")]
    pub acceleration: f32,

    /// Number of discrete speed steps forward of neutral.
    #[serde(default = "default_forward_steps")]
    pub forward_steps: u32,

    /// Number of discrete speed steps backward of neutral.
    #[serde(default = "default_backward_steps")]
    pub backward_steps: u32,

    #[serde(default)]
    pub overshoot: OvershootPolicy,
}

/// Rotation controller configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RotationConfig {
    /// Yaw degrees per tick at full deflection.
    #[serde(default = "default_rotation_speed")]
    pub yaw_speed: f32,

    /// Pitch degrees per tick at full deflection.
    #[serde(default = "default_rotation_speed")]
    pub pitch_speed: f32,

    /// Roll degrees per tick at full deflection.
    #[serde(default = "default_rotation_speed")]
    pub roll_speed: f32,
}

/// Deadzone shaping configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DeadzoneConfig {
    /// Inner threshold suppressing jitter around center.
    #[serde(default = "default_inner_deadzone")]
    pub inner: f32,

    /// Outer threshold clamping out-of-bounds input ranges.
    #[serde(default = "default_outer_deadzone")]
    pub outer: f32,
}

/// Flight log configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    #[serde(default = "default_telemetry_enabled")]
    pub enabled: bool,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    #[serde(default = "default_max_records_per_file")]
    pub max_records_per_file: usize,

    #[serde(default = "default_max_files_to_keep")]
    pub max_files_to_keep: usize,

    /// Record every Nth tick.
    #[serde(default = "default_log_interval_ticks")]
    pub log_interval_ticks: u64,
}

/// Fixed-timestep loop configuration for the demo binary
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_rate_hz")]
    pub tick_rate_hz: u32,
}

// Default value functions
fn default_base_movement_speed() -> f32 { 60.0 }
fn default_acceleration() -> f32 { 0.015 }
fn default_forward_steps() -> u32 { 8 }
fn default_backward_steps() -> u32 { 4 }

fn default_rotation_speed() -> f32 { 1.5 }

fn default_inner_deadzone() -> f32 { 0.01 }
fn default_outer_deadzone() -> f32 { 0.25 }

fn default_telemetry_enabled() -> bool { false }
fn default_log_dir() -> String { "./logs".to_string() }
fn default_max_records_per_file() -> usize { 10000 }
fn default_max_files_to_keep() -> usize { 10 }
fn default_log_interval_ticks() -> u64 { 6 }

fn default_tick_rate_hz() -> u32 { 60 }

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            base_movement_speed: default_base_movement_speed(),
            acceleration: default_acceleration(),
            forward_steps: default_forward_steps(),
            backward_steps: default_backward_steps(),
            overshoot: OvershootPolicy::default(),
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            yaw_speed: default_rotation_speed(),
            pitch_speed: default_rotation_speed(),
            roll_speed: default_rotation_speed(),
        }
    }
}

impl Default for DeadzoneConfig {
    fn default() -> Self {
        Self {
            inner: default_inner_deadzone(),
            outer: default_outer_deadzone(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_telemetry_enabled(),
            log_dir: default_log_dir(),
            max_records_per_file: default_max_records_per_file(),
            max_files_to_keep: default_max_files_to_keep(),
            log_interval_ticks: default_log_interval_ticks(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: default_tick_rate_hz(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vr_flight::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Returns
    ///
    /// * `Result<()>` - Ok if valid, Err if invalid
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    pub fn validate(&self) -> Result<()> {
        // Validate speed tuning
        if self.speed.base_movement_speed <= 0.0 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("base_movement_speed must be greater than 0")
            ));
        }

        if self.speed.acceleration <= 0.0 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("acceleration must be greater than 0")
            ));
        }

        if self.speed.forward_steps == 0 && self.speed.backward_steps == 0 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("at least one of forward_steps/backward_steps must be greater than 0")
            ));
        }

        // Validate deadzone bounds
        if self.deadzone.inner < 0.0 || self.deadzone.inner >= 0.99 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("deadzone inner must be between 0.0 and 0.99 (exclusive)")
            ));
        }

        if self.deadzone.outer < 0.01 || self.deadzone.outer > 1.0 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("deadzone outer must be between 0.01 and 1.0")
            ));
        }

        // The shaping produces nonsense when the inner threshold swallows the
        // outer clamp, so reject it here instead of downstream.
        if self.deadzone.inner >= self.deadzone.outer {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("deadzone inner must be less than deadzone outer")
            ));
        }

        // Validate flight log configuration
        if self.telemetry.enabled && self.telemetry.log_dir.is_empty() {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("telemetry log_dir cannot be empty when enabled")
            ));
        }

        if self.telemetry.max_records_per_file == 0 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("max_records_per_file must be greater than 0")
            ));
        }

        if self.telemetry.max_files_to_keep == 0 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("max_files_to_keep must be greater than 0")
            ));
        }

        if self.telemetry.log_interval_ticks == 0 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("log_interval_ticks must be greater than 0")
            ));
        }

        // Validate simulation loop rate
        if self.simulation.tick_rate_hz == 0 || self.simulation.tick_rate_hz > 1000 {
            return Err(crate::error::FlightError::Config(
                toml::de::Error::custom("tick_rate_hz must be between 1 and 1000")
            ));
        }

        Ok(())
    }

    /// Fixed tick duration in seconds derived from the configured rate.
    #[must_use]
    pub fn tick_duration(&self) -> f32 {
        1.0 / self.simulation.tick_rate_hz as f32
    }
}
