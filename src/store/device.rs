//! Contact store implementation backed by the device's content providers.
//!
//! Rows come back from `adb shell content query` as single lines in the form
//! `Row: 0 _id=1, display_name=Alice Johnson, has_phone_number=1`, with the
//! literal `NULL` for absent values and the sentinel line `No result found.`
//! when a query matches nothing.

use crate::device::AdbRunner;
use crate::error::DeviceResult;
use crate::models::ContactRecord;
use crate::store::traits::ContactStore;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Contacts collection of the device's contacts provider.
const CONTACTS_URI: &str = "content://com.android.contacts/contacts";

/// Phone-number collection of the device's contacts provider.
const PHONES_URI: &str = "content://com.android.contacts/data/phones";

/// Columns queried from the contacts collection.
const CONTACTS_PROJECTION: &str = "_id:display_name:has_phone_number";

/// Column queried from the phones collection.
const PHONES_PROJECTION: &str = "data1";

/// The provider's no-rows sentinel line.
const NO_RESULT: &str = "No result found.";

// The display name capture is greedy so names containing ", " survive; the
// trailing field anchors the split.
static CONTACT_ROW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Row: \d+ _id=(\d+), display_name=(.*), has_phone_number=(NULL|-?\d+)$")
        .expect("Failed to compile contact row regex")
});

static PHONE_ROW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Row: \d+ data1=(.*)$").expect("Failed to compile phone row regex")
});

/// Contact store implementation querying the attached device over adb.
pub struct DeviceContactStore {
    adb: Arc<dyn AdbRunner>,
}

impl DeviceContactStore {
    /// Create a new store over the given runner.
    pub fn new(adb: Arc<dyn AdbRunner>) -> Self {
        Self { adb }
    }
}

impl ContactStore for DeviceContactStore {
    fn contact_records(&self) -> DeviceResult<Vec<ContactRecord>> {
        let output = self.adb.run(&[
            "shell",
            "content",
            "query",
            "--uri",
            CONTACTS_URI,
            "--projection",
            CONTACTS_PROJECTION,
        ])?;
        Ok(parse_contact_rows(&output.stdout))
    }

    fn phone_numbers(&self, contact_id: u64) -> DeviceResult<Vec<String>> {
        let selection = format!("contact_id={}", contact_id);
        let output = self.adb.run(&[
            "shell",
            "content",
            "query",
            "--uri",
            PHONES_URI,
            "--projection",
            PHONES_PROJECTION,
            "--where",
            &selection,
        ])?;
        Ok(parse_phone_rows(&output.stdout))
    }
}

/// Parse contacts-collection output into records, skipping lines that do
/// not look like rows. `NULL` display names become empty strings.
fn parse_contact_rows(stdout: &str) -> Vec<ContactRecord> {
    let mut records = Vec::new();
    for line in stdout.lines() {
        // adb transports device output with CRLF line endings.
        let line = line.trim_end();
        if line.is_empty() || line == NO_RESULT {
            continue;
        }
        match CONTACT_ROW_REGEX.captures(line) {
            Some(caps) => {
                let id = match caps[1].parse::<u64>() {
                    Ok(id) => id,
                    Err(_) => {
                        tracing::debug!("skipping row with bad id: {}", line);
                        continue;
                    }
                };
                let display_name = match &caps[2] {
                    "NULL" => String::new(),
                    name => name.to_string(),
                };
                let has_phone_number = caps[3].parse::<i64>().map(|n| n > 0).unwrap_or(false);
                records.push(ContactRecord::new(id, display_name, has_phone_number));
            }
            None => tracing::debug!("skipping unrecognized line: {}", line),
        }
    }
    records
}

/// Parse phones-collection output into numbers, skipping `NULL` entries.
fn parse_phone_rows(stdout: &str) -> Vec<String> {
    let mut numbers = Vec::new();
    for line in stdout.lines() {
        let line = line.trim_end();
        if line.is_empty() || line == NO_RESULT {
            continue;
        }
        match PHONE_ROW_REGEX.captures(line) {
            Some(caps) => {
                let number = caps[1].trim();
                if number.is_empty() || number == "NULL" {
                    tracing::debug!("skipping row without a number: {}", line);
                    continue;
                }
                numbers.push(number.to_string());
            }
            None => tracing::debug!("skipping unrecognized line: {}", line),
        }
    }
    numbers
}
