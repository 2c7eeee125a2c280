//! Configuration management for vibeline.
//!
//! This module handles loading and validating configuration from environment variables.
//! Every setting has a default, so the browser runs with no environment at all as long
//! as `adb` is on the PATH.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the vibeline browser.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the adb executable (default: "adb", resolved via PATH)
    pub adb_path: String,

    /// Device serial to target with `adb -s`; None lets adb pick the
    /// single attached device
    pub device_serial: Option<String>,

    /// How long the splash screen stays up (default: 2000 ms)
    pub splash_duration: Duration,

    /// How long a transient notice stays in the status line (default: 2000 ms)
    pub notice_duration: Duration,

    /// Log filter used when RUST_LOG is unset (default: "error")
    pub log_level: String,

    /// Log destination file; None logs to stderr
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `VIBELINE_ADB`: Path to the adb executable (default: "adb")
    /// - `VIBELINE_DEVICE`: Device serial for `adb -s` (default: unset)
    /// - `VIBELINE_SPLASH_MS`: Splash duration in milliseconds (default: 2000)
    /// - `VIBELINE_NOTICE_MS`: Notice lifetime in milliseconds (default: 2000)
    /// - `VIBELINE_LOG`: Log filter when RUST_LOG is unset (default: "error")
    /// - `VIBELINE_LOG_FILE`: Log file path (default: unset, stderr)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let adb_path = env::var("VIBELINE_ADB").unwrap_or_else(|_| "adb".to_string());
        if adb_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "VIBELINE_ADB".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        // A blank serial means "not set", same as the variable being absent.
        let device_serial = env::var("VIBELINE_DEVICE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let splash_ms = Self::parse_env_u64("VIBELINE_SPLASH_MS", 2000)?;
        let notice_ms = Self::parse_env_u64("VIBELINE_NOTICE_MS", 2000)?;

        let log_level = env::var("VIBELINE_LOG").unwrap_or_else(|_| "error".to_string());
        let log_file = env::var("VIBELINE_LOG_FILE").ok().map(PathBuf::from);

        Ok(Config {
            adb_path,
            device_serial,
            splash_duration: Duration::from_millis(splash_ms),
            notice_duration: Duration::from_millis(notice_ms),
            log_level,
            log_file,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            adb_path: "adb".to_string(),
            device_serial: None,
            splash_duration: Duration::from_millis(2000),
            notice_duration: Duration::from_millis(2000),
            log_level: "error".to_string(),
            log_file: None,
        }
    }
}
