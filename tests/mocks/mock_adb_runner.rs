use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vibeline::device::{AdbOutput, AdbRunner};
use vibeline::error::{DeviceError, DeviceResult};

/// The provider's no-rows sentinel, returned for unscripted queries.
const NO_RESULT: &str = "No result found.\n";

/// Scripted adb runner for testing.
///
/// Responses are keyed by the space-joined argument vector. Unscripted
/// `run` calls answer with the provider's empty-result sentinel, the same
/// thing a real device prints for a query matching nothing. Every
/// invocation is recorded for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAdbRunner {
    outputs: Arc<Mutex<HashMap<String, String>>>,
    failures: Arc<Mutex<HashMap<String, String>>>,
    run_failure: Arc<Mutex<Option<String>>>,
    fire_failure: Arc<Mutex<Option<String>>>,
    run_calls: Arc<Mutex<Vec<Vec<String>>>>,
    fire_calls: Arc<Mutex<Vec<Vec<String>>>>,
}

#[allow(dead_code)]
impl MockAdbRunner {
    /// Create a new runner with no scripted responses.
    pub fn new() -> Self {
        Self {
            outputs: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            run_failure: Arc::new(Mutex::new(None)),
            fire_failure: Arc::new(Mutex::new(None)),
            run_calls: Arc::new(Mutex::new(Vec::new())),
            fire_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script stdout for one exact argument vector.
    pub fn stub(&self, args: &[&str], stdout: &str) {
        let mut outputs = self.outputs.lock().unwrap();
        outputs.insert(args.join(" "), stdout.to_string());
    }

    /// Script a command failure for one exact argument vector.
    pub fn fail(&self, args: &[&str], stderr: &str) {
        let mut failures = self.failures.lock().unwrap();
        failures.insert(args.join(" "), stderr.to_string());
    }

    /// Make every `run` call fail with the given stderr.
    pub fn fail_all(&self, stderr: &str) {
        *self.run_failure.lock().unwrap() = Some(stderr.to_string());
    }

    /// Make every `fire` call fail with the given stderr.
    pub fn fail_fire(&self, stderr: &str) {
        *self.fire_failure.lock().unwrap() = Some(stderr.to_string());
    }

    /// Number of completed `run` invocations.
    pub fn run_count(&self) -> usize {
        self.run_calls.lock().unwrap().len()
    }

    /// Number of `fire` invocations.
    pub fn fire_count(&self) -> usize {
        self.fire_calls.lock().unwrap().len()
    }

    /// All recorded `run` argument vectors, in call order.
    pub fn runs(&self) -> Vec<Vec<String>> {
        self.run_calls.lock().unwrap().clone()
    }

    /// All recorded `fire` argument vectors, in call order.
    pub fn fires(&self) -> Vec<Vec<String>> {
        self.fire_calls.lock().unwrap().clone()
    }
}

impl Default for MockAdbRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl AdbRunner for MockAdbRunner {
    fn run(&self, args: &[&str]) -> DeviceResult<AdbOutput> {
        let key = args.join(" ");
        self.run_calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| a.to_string()).collect());

        if let Some(stderr) = self.run_failure.lock().unwrap().clone() {
            return Err(DeviceError::CommandFailed { status: 1, stderr });
        }
        if let Some(stderr) = self.failures.lock().unwrap().get(&key).cloned() {
            return Err(DeviceError::CommandFailed { status: 1, stderr });
        }

        let stdout = self
            .outputs
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| NO_RESULT.to_string());
        Ok(AdbOutput {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        })
    }

    fn fire(&self, args: &[&str]) -> DeviceResult<()> {
        self.fire_calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| a.to_string()).collect());

        if let Some(stderr) = self.fire_failure.lock().unwrap().clone() {
            return Err(DeviceError::CommandFailed { status: 1, stderr });
        }
        Ok(())
    }
}
