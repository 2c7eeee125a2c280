use crate::error::DeviceResult;
use crate::models::ContactRecord;

/// Read access to the device's contact store.
///
/// Provides abstraction over the two content-provider collections
/// (contacts and phone numbers), enabling different implementations
/// (adb-backed, mock).
pub trait ContactStore: Send + Sync {
    /// Retrieve every row of the contacts collection, in store order.
    fn contact_records(&self) -> DeviceResult<Vec<ContactRecord>>;

    /// Retrieve the phone numbers joined to one contact id, in store order.
    fn phone_numbers(&self, contact_id: u64) -> DeviceResult<Vec<String>>;
}
