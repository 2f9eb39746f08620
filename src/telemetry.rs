//! # Flight Log Module
//!
//! Records per-tick feedback to JSONL files with rotation.
//!
//! This module handles:
//! - Formatting tick feedback as JSONL (JSON Lines)
//! - Writing to rotating log files
//! - Managing file rotation (max N records per file)
//! - Retaining only the last M files
//!
//! Recording is sampled: only every `log_interval_ticks`-th tick is written.
//! A disabled recorder accepts records and drops them, so call sites need no
//! enabled checks.

use chrono::Utc;
use serde::Serialize;
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::TelemetryConfig;
use crate::control::Feedback;
use crate::error::Result;

/// One flight log record.
#[derive(Debug, Clone, Serialize)]
pub struct FlightRecord {
    /// RFC 3339 wall-clock timestamp.
    pub timestamp: String,
    /// Simulation tick number.
    pub tick: u64,
    #[serde(flatten)]
    pub feedback: Feedback,
}

/// Writes sampled tick feedback to rotating JSONL files.
///
/// # Examples
///
/// ```no_run
/// use vr_flight::config::TelemetryConfig;
/// use vr_flight::control::Feedback;
/// use vr_flight::telemetry::FlightRecorder;
///
/// let mut config = TelemetryConfig::default();
/// config.enabled = true;
/// let mut recorder = FlightRecorder::new(&config)?;
///
/// let feedback = Feedback {
///     yaw_factor: 0.0,
///     pitch_factor: 0.0,
///     roll_factor: 0.0,
///     current_speed_factor: 1.5,
///     target_speed_factor: 2.0,
/// };
/// recorder.record(0, &feedback)?;
/// # Ok::<(), vr_flight::error::FlightError>(())
/// ```
#[derive(Debug)]
pub struct FlightRecorder {
    enabled: bool,
    log_dir: PathBuf,
    max_records_per_file: usize,
    max_files_to_keep: usize,
    log_interval_ticks: u64,

    writer: Option<BufWriter<File>>,
    records_in_file: usize,
    file_seq: u64,
    files: VecDeque<PathBuf>,
}

impl FlightRecorder {
    /// Creates a recorder from config, creating the log directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the recorder is enabled and the log directory
    /// cannot be created.
    pub fn new(config: &TelemetryConfig) -> Result<Self> {
        if config.enabled {
            fs::create_dir_all(&config.log_dir)?;
        }

        Ok(Self {
            enabled: config.enabled,
            log_dir: PathBuf::from(&config.log_dir),
            max_records_per_file: config.max_records_per_file,
            max_files_to_keep: config.max_files_to_keep,
            log_interval_ticks: config.log_interval_ticks,
            writer: None,
            records_in_file: 0,
            file_seq: 0,
            files: VecDeque::new(),
        })
    }

    /// Creates a recorder that silently drops every record.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            log_dir: PathBuf::new(),
            max_records_per_file: 1,
            max_files_to_keep: 1,
            log_interval_ticks: 1,
            writer: None,
            records_in_file: 0,
            file_seq: 0,
            files: VecDeque::new(),
        }
    }

    /// Whether records are actually written.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Paths of the log files written so far, oldest first.
    #[must_use]
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Records feedback for one tick.
    ///
    /// Ticks that fall between sampling intervals are dropped. File rotation
    /// happens transparently.
    ///
    /// # Errors
    ///
    /// Returns error on serialization or file I/O failure.
    pub fn record(&mut self, tick: u64, feedback: &Feedback) -> Result<()> {
        if !self.enabled || tick % self.log_interval_ticks != 0 {
            return Ok(());
        }

        if self.writer.is_none() || self.records_in_file >= self.max_records_per_file {
            self.rotate()?;
        }

        let record = FlightRecord {
            timestamp: Utc::now().to_rfc3339(),
            tick,
            feedback: *feedback,
        };

        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        serde_json::to_writer(&mut *writer, &record)?;
        writer.write_all(b"\n")?;
        self.records_in_file += 1;

        Ok(())
    }

    /// Flushes any buffered records to disk.
    ///
    /// # Errors
    ///
    /// Returns error on file I/O failure.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Opens a fresh log file and prunes files beyond the retention limit.
    fn rotate(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }

        let name = format!(
            "flight-{}-{:04}.jsonl",
            Utc::now().format("%Y%m%dT%H%M%S"),
            self.file_seq
        );
        self.file_seq += 1;

        let path = self.log_dir.join(name);
        debug!("Rotating flight log to {}", path.display());

        self.writer = Some(BufWriter::new(File::create(&path)?));
        self.records_in_file = 0;
        self.files.push_back(path);

        while self.files.len() > self.max_files_to_keep {
            if let Some(old) = self.files.pop_front() {
                // Retention is best effort; a missing file is not fatal.
                if let Err(e) = fs::remove_file(&old) {
                    debug!("Failed to remove old flight log {}: {}", old.display(), e);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_feedback(current: f32) -> Feedback {
        Feedback {
            yaw_factor: 0.1,
            pitch_factor: -0.2,
            roll_factor: 0.0,
            current_speed_factor: current,
            target_speed_factor: 2.0,
        }
    }

    fn make_config(dir: &Path) -> TelemetryConfig {
        TelemetryConfig {
            enabled: true,
            log_dir: dir.to_string_lossy().into_owned(),
            max_records_per_file: 3,
            max_files_to_keep: 2,
            log_interval_ticks: 1,
        }
    }

    // ==================== Recording Tests ====================

    #[test]
    fn test_disabled_recorder_writes_nothing() {
        let mut recorder = FlightRecorder::disabled();
        recorder.record(0, &make_feedback(0.0)).unwrap();
        recorder.flush().unwrap();
        assert_eq!(recorder.files().count(), 0);
    }

    #[test]
    fn test_records_written_as_jsonl() {
        let dir = tempdir().unwrap();
        let mut recorder = FlightRecorder::new(&make_config(dir.path())).unwrap();

        recorder.record(0, &make_feedback(0.5)).unwrap();
        recorder.record(1, &make_feedback(0.6)).unwrap();
        recorder.flush().unwrap();

        let path = recorder.files().next().unwrap().to_path_buf();
        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["tick"], 0);
        assert_eq!(parsed["current_speed_factor"], 0.5);
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_sampling_interval_skips_ticks() {
        let dir = tempdir().unwrap();
        let mut config = make_config(dir.path());
        config.log_interval_ticks = 5;
        config.max_records_per_file = 100;
        let mut recorder = FlightRecorder::new(&config).unwrap();

        for tick in 0..20 {
            recorder.record(tick, &make_feedback(0.0)).unwrap();
        }
        recorder.flush().unwrap();

        let path = recorder.files().next().unwrap().to_path_buf();
        let contents = fs::read_to_string(path).unwrap();
        // Ticks 0, 5, 10, 15.
        assert_eq!(contents.lines().count(), 4);
    }

    // ==================== Rotation Tests ====================

    #[test]
    fn test_rotates_at_record_limit() {
        let dir = tempdir().unwrap();
        let mut recorder = FlightRecorder::new(&make_config(dir.path())).unwrap();

        // 3 per file: 5 records span two files.
        for tick in 0..5 {
            recorder.record(tick, &make_feedback(0.0)).unwrap();
        }
        recorder.flush().unwrap();

        assert_eq!(recorder.files().count(), 2);
    }

    #[test]
    fn test_prunes_oldest_beyond_retention() {
        let dir = tempdir().unwrap();
        let mut recorder = FlightRecorder::new(&make_config(dir.path())).unwrap();

        // 3 per file, keep 2: 9 records create 3 files, first is pruned.
        for tick in 0..9 {
            recorder.record(tick, &make_feedback(0.0)).unwrap();
        }
        recorder.flush().unwrap();

        assert_eq!(recorder.files().count(), 2);
        let on_disk = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(on_disk, 2);
    }

    #[test]
    fn test_rotated_files_have_distinct_names() {
        let dir = tempdir().unwrap();
        let mut config = make_config(dir.path());
        config.max_records_per_file = 1;
        config.max_files_to_keep = 10;
        let mut recorder = FlightRecorder::new(&config).unwrap();

        for tick in 0..4 {
            recorder.record(tick, &make_feedback(0.0)).unwrap();
        }

        let names: Vec<_> = recorder.files().collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), 4);
        assert_eq!(names, deduped);
    }

    #[test]
    fn test_new_creates_log_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let mut config = make_config(&nested);
        config.log_dir = nested.to_string_lossy().into_owned();

        let recorder = FlightRecorder::new(&config).unwrap();
        assert!(recorder.is_enabled());
        assert!(nested.is_dir());
    }
}
