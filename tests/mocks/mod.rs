pub mod mock_adb_runner;
pub mod mock_contact_store;

#[allow(unused_imports)]
pub use mock_adb_runner::MockAdbRunner;
#[allow(unused_imports)]
pub use mock_contact_store::MockContactStore;
