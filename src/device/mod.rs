//! adb process boundary for talking to the attached Android device.
//!
//! This module provides the one place vibeline spawns external processes.
//! Everything device-side (content-provider queries, intent launches) goes
//! through the [`AdbRunner`] trait so the rest of the crate can be tested
//! against a scripted runner.

use crate::config::Config;
use crate::error::{DeviceError, DeviceResult};
use std::io;
use std::process::{Command, Output, Stdio};

/// Captured result of a finished adb invocation.
#[derive(Debug, Clone)]
pub struct AdbOutput {
    /// Decoded stdout
    pub stdout: String,

    /// Decoded stderr
    pub stderr: String,

    /// Process exit code, -1 when terminated by a signal
    pub exit_code: i32,
}

impl AdbOutput {
    /// Build from a captured process output.
    pub fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }

    /// Whether the invocation exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs adb subcommands against the attached device.
///
/// `run` blocks until the command finishes and captures its output; `fire`
/// spawns the command detached and never checks the result.
pub trait AdbRunner: Send + Sync {
    /// Run an adb subcommand to completion and capture its output.
    fn run(&self, args: &[&str]) -> DeviceResult<AdbOutput>;

    /// Spawn an adb subcommand and detach without awaiting the result.
    fn fire(&self, args: &[&str]) -> DeviceResult<()>;
}

/// [`AdbRunner`] backed by the adb CLI.
#[derive(Debug, Clone)]
pub struct AdbCli {
    /// Path to the adb executable
    adb_path: String,

    /// Device serial passed as `adb -s <serial>`, if configured
    serial: Option<String>,
}

impl AdbCli {
    /// Create a new runner from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            adb_path: config.adb_path.clone(),
            serial: config.device_serial.clone(),
        }
    }

    /// Create a runner with explicit path and serial (useful for testing).
    #[doc(hidden)]
    pub fn with_path(adb_path: String, serial: Option<String>) -> Self {
        Self { adb_path, serial }
    }

    /// Full argument vector for an invocation, with the serial prepended
    /// when one is configured.
    fn device_args(&self, args: &[&str]) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(serial) = &self.serial {
            full.push("-s".to_string());
            full.push(serial.clone());
        }
        full.extend(args.iter().map(|a| a.to_string()));
        full
    }

    /// Map a spawn failure to a DeviceError.
    fn map_spawn_error(&self, error: io::Error) -> DeviceError {
        if error.kind() == io::ErrorKind::NotFound {
            DeviceError::AdbNotFound(self.adb_path.clone())
        } else {
            DeviceError::Io(error.to_string())
        }
    }

    /// Classify a non-zero adb exit from its stderr.
    fn classify_failure(exit_code: i32, stderr: &str) -> DeviceError {
        let lowered = stderr.to_lowercase();
        if lowered.contains("no devices") || lowered.contains("device not found") {
            DeviceError::NoDevice
        } else if lowered.contains("unauthorized") {
            DeviceError::Unauthorized
        } else {
            DeviceError::CommandFailed {
                status: exit_code,
                stderr: stderr.trim().to_string(),
            }
        }
    }
}

impl AdbRunner for AdbCli {
    fn run(&self, args: &[&str]) -> DeviceResult<AdbOutput> {
        let full_args = self.device_args(args);
        tracing::debug!("adb {}", full_args.join(" "));

        let output = Command::new(&self.adb_path)
            .args(&full_args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.map_spawn_error(e))?;

        let captured = AdbOutput::from_output(&output);
        if !captured.success() {
            let err = Self::classify_failure(captured.exit_code, &captured.stderr);
            tracing::debug!("adb failed: {}", err);
            return Err(err);
        }

        Ok(captured)
    }

    fn fire(&self, args: &[&str]) -> DeviceResult<()> {
        let full_args = self.device_args(args);
        tracing::debug!("adb (detached) {}", full_args.join(" "));

        // Fire-and-forget: the child is intentionally never waited on.
        let child = Command::new(&self.adb_path)
            .args(&full_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.map_spawn_error(e))?;
        drop(child);

        Ok(())
    }
}
