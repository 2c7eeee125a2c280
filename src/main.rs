//! vibeline - Main entry point
//!
//! Wires the adb transport, the contact store, and the terminal UI together
//! and runs the browser until the user quits.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vibeline::device::{AdbCli, AdbRunner};
use vibeline::store::{ContactStore, DeviceContactStore};
use vibeline::{ActionDispatcher, App, Config, ContactLoader};

fn main() -> Result<()> {
    // Load configuration first; the log filter and destination come from it.
    let config = Config::from_env().context("invalid configuration")?;

    init_tracing(&config)?;
    info!("Configuration loaded successfully");
    info!("Starting vibeline with adb at {}", config.adb_path);
    if let Some(serial) = &config.device_serial {
        info!("Targeting device {}", serial);
    }

    // Initialize the device transport and the layers over it
    let adb = Arc::new(AdbCli::new(&config)) as Arc<dyn AdbRunner>;
    let store = Arc::new(DeviceContactStore::new(adb.clone())) as Arc<dyn ContactStore>;
    let loader = ContactLoader::new(store);
    let dispatcher = ActionDispatcher::new(adb);

    // Run the browser (this blocks until the user quits)
    let mut app = App::new(&config, loader, dispatcher);
    app.run()?;

    info!("vibeline shutdown complete");
    Ok(())
}

/// Initialize logging. The terminal owns stdout while the UI runs, so logs
/// go to stderr or, when configured, to a file.
fn init_tracing(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match &config.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
