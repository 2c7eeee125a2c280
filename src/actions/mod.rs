//! Call and message dispatch through the device's intent system.
//!
//! Both actions hand a phone number to the device and walk away: the dial
//! flow via `android.intent.action.CALL` and the SMS composer via
//! `android.intent.action.VIEW` on an `sms:` target. Nothing is awaited and
//! no result is checked. Permission gating happens in the screen
//! controller, not here.

use crate::device::AdbRunner;
use std::sync::Arc;

const CALL_ACTION: &str = "android.intent.action.CALL";
const VIEW_ACTION: &str = "android.intent.action.VIEW";

/// Build a `tel:` intent target for a number.
///
/// The number is percent-encoded so `+`, spaces and `#` survive the shell
/// word-splitting between adb and the device; the dialer decodes them.
pub fn dial_uri(number: &str) -> String {
    format!("tel:{}", urlencoding::encode(number))
}

/// Build an `sms:` intent target for a number.
pub fn sms_uri(number: &str) -> String {
    format!("sms:{}", urlencoding::encode(number))
}

/// Launches the device's call and message flows.
pub struct ActionDispatcher {
    adb: Arc<dyn AdbRunner>,
}

impl ActionDispatcher {
    /// Create a new dispatcher over the given runner.
    pub fn new(adb: Arc<dyn AdbRunner>) -> Self {
        Self { adb }
    }

    /// Start a call to `number` on the device. Fire-and-forget.
    pub fn call(&self, number: &str) {
        let uri = dial_uri(number);
        tracing::info!("dispatching call intent for {}", number);
        if let Err(err) = self
            .adb
            .fire(&["shell", "am", "start", "-a", CALL_ACTION, "-d", &uri])
        {
            tracing::warn!("call dispatch failed: {}", err);
        }
    }

    /// Open the device's SMS composer for `number`. Fire-and-forget.
    pub fn message(&self, number: &str) {
        let uri = sms_uri(number);
        tracing::info!("dispatching message intent for {}", number);
        if let Err(err) = self
            .adb
            .fire(&["shell", "am", "start", "-a", VIEW_ACTION, "-d", &uri])
        {
            tracing::warn!("message dispatch failed: {}", err);
        }
    }
}
