//! Error types for vibeline.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the attached device through adb.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The adb executable could not be found
    #[error("adb executable not found: {0}")]
    AdbNotFound(String),

    /// Spawning or waiting on the adb process failed
    #[error("failed to run adb: {0}")]
    Io(String),

    /// adb ran but exited with a failure status
    #[error("adb exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    /// No device or emulator is attached
    #[error("no device attached")]
    NoDevice,

    /// The attached device has not authorized this host
    #[error("device unauthorized: confirm the USB debugging prompt on the device")]
    Unauthorized,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DeviceError
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
