use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use vibeline::error::{DeviceError, DeviceResult};
use vibeline::models::ContactRecord;
use vibeline::store::ContactStore;

/// In-memory contact store for testing.
///
/// Holds contact records and per-contact phone numbers, with switches for
/// injecting failures and counters tracking how often each trait method
/// was called.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    phones: Arc<Mutex<HashMap<u64, Vec<String>>>>,
    records_failure: Arc<Mutex<bool>>,
    failing_phone_ids: Arc<Mutex<HashSet<u64>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            phones: Arc::new(Mutex::new(HashMap::new())),
            records_failure: Arc::new(Mutex::new(false)),
            failing_phone_ids: Arc::new(Mutex::new(HashSet::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a record along with its phone numbers.
    pub fn add_record(&self, record: ContactRecord, numbers: &[&str]) {
        let id = record.id;
        self.records.lock().unwrap().push(record);
        self.phones
            .lock()
            .unwrap()
            .insert(id, numbers.iter().map(|n| n.to_string()).collect());
    }

    /// Make `contact_records` fail.
    pub fn fail_records(&self) {
        *self.records_failure.lock().unwrap() = true;
    }

    /// Make `phone_numbers` fail for one contact id.
    pub fn fail_phones_for(&self, id: u64) {
        self.failing_phone_ids.lock().unwrap().insert(id);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Track a method call.
    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MockContactStore {
    fn contact_records(&self) -> DeviceResult<Vec<ContactRecord>> {
        self.track_call("contact_records");
        if *self.records_failure.lock().unwrap() {
            return Err(DeviceError::NoDevice);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn phone_numbers(&self, contact_id: u64) -> DeviceResult<Vec<String>> {
        self.track_call("phone_numbers");
        if self.failing_phone_ids.lock().unwrap().contains(&contact_id) {
            return Err(DeviceError::CommandFailed {
                status: 1,
                stderr: format!("query failed for contact {}", contact_id),
            });
        }
        Ok(self
            .phones
            .lock()
            .unwrap()
            .get(&contact_id)
            .cloned()
            .unwrap_or_default())
    }
}
