//! vibeline - a terminal contacts browser for Android devices.
//!
//! This library reads the contact store of the device attached over adb,
//! presents a searchable list in the terminal, and hands a selected number
//! to the device's dialer or SMS composer.
//!
//! # Architecture
//!
//! - **models**: Data structures for contacts read from the device
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **device**: adb process boundary (run / fire-and-forget)
//! - **store**: Content-provider queries and row parsing
//! - **loader**: The contacts-to-phone-numbers join
//! - **search**: Case-insensitive substring filtering
//! - **permissions**: The two-flow permission state machine
//! - **actions**: Call and message intent dispatch
//! - **ui**: Screen controller, list binding, rendering

// Re-export commonly used types
pub mod actions;
pub mod config;
pub mod device;
pub mod error;
pub mod loader;
pub mod models;
pub mod permissions;
pub mod search;
pub mod store;
pub mod ui;

pub use actions::{dial_uri, sms_uri, ActionDispatcher};
pub use config::Config;
pub use device::{AdbCli, AdbOutput, AdbRunner};
pub use error::{ConfigError, ConfigResult, DeviceError, DeviceResult};
pub use loader::ContactLoader;
pub use models::{Contact, ContactRecord};
pub use permissions::{Permission, PermissionGate, PermissionState, RequestOutcome};
pub use search::filter_contacts;
pub use store::{ContactStore, DeviceContactStore};
pub use ui::{App, ContactListBinder, ContactRow, Notice, Overlay, Screen};
