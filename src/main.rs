//! # VR Flight
//!
//! Demo binary for the flight control model.
//!
//! Runs the movement component in a fixed-rate tick loop against a scripted
//! controller input source, integrates the returned deltas into a locally
//! owned pose, and logs flight status until Ctrl+C.
//!
//! In a real host the scripted source is replaced by the engine's input
//! sampling layer and the pose by the engine's vehicle transform; the
//! control model itself is unchanged.

use anyhow::Result;
use glam::{Quat, Vec3};
use tokio::time::{interval, Duration};
use tracing::{info, warn};
use tracing_subscriber;

mod config;
mod control;
mod error;
mod input;
mod telemetry;

use config::Config;
use control::MovementControl;
use input::{ControllerSample, OrientationSample, TouchInput};
use telemetry::FlightRecorder;

/// Default configuration file path.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Number of ticks between status log messages.
const LOG_INTERVAL_TICKS: u64 = 300;

/// Scripted controller input for the demo loop.
///
/// A slow yaw/pitch sweep with the touch surface engaged at three quarters
/// forward, so the vehicle banks gently while spooling up to cruise speed.
fn scripted_sample(tick: u64, dt: f32) -> ControllerSample {
    let t = tick as f32 * dt;

    ControllerSample {
        orientation: OrientationSample::new(
            0.15 * (0.2 * t).sin(),
            0.10 * (0.13 * t).cos(),
            0.0,
        ),
        touch: TouchInput::engaged_at(0.0, 0.75),
        toggle_released: false,
    }
}

/// Main entry point for the VR Flight demo
///
/// # Errors
///
/// Returns error if the configuration file exists but is invalid, or the
/// flight log directory cannot be created.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("VR Flight v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        let config = Config::load(&config_path)?;
        info!("Loaded configuration from {}", config_path);
        config
    } else {
        warn!("No configuration at {}, using built-in defaults", config_path);
        Config::default()
    };

    let dt = config.tick_duration();
    let mut control = MovementControl::new(&config);
    let mut recorder = FlightRecorder::new(&config.telemetry)?;

    // Host-owned vehicle pose; the component only hands back deltas.
    let mut orientation = Quat::IDENTITY;
    let mut position = Vec3::ZERO;

    let period = Duration::from_secs_f64(1.0 / config.simulation.tick_rate_hz as f64);
    let mut tick_interval = interval(period);

    info!(
        "Starting control loop at {}Hz (dt = {:.4}s)",
        config.simulation.tick_rate_hz, dt
    );
    info!("Press Ctrl+C to exit");

    let mut tick: u64 = 0;

    // Main control loop
    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                let sample = scripted_sample(tick, dt);
                let forward = orientation * Vec3::Z;

                let out = control.tick(dt, &sample, forward);
                orientation = (orientation * out.rotation_delta).normalize();
                position += out.position_delta;

                if let Err(e) = recorder.record(tick, &out.feedback) {
                    warn!("Failed to record flight log: {}", e);
                }

                tick += 1;

                if tick % LOG_INTERVAL_TICKS == 0 {
                    info!(
                        "tick {}: pos ({:.1}, {:.1}, {:.1}) speed {:.2}/{:.2} steps enabled={}",
                        tick,
                        position.x, position.y, position.z,
                        out.feedback.current_speed_factor,
                        out.feedback.target_speed_factor,
                        out.movement_enabled,
                    );
                }
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                info!("Total ticks: {}, final position ({:.1}, {:.1}, {:.1})",
                    tick, position.x, position.y, position.z);
                recorder.flush()?;
                break;
            }
        }
    }

    Ok(())
}
