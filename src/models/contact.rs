//! Contact model representing one dialable entry in the browser.

/// A display name paired with a single phone number.
///
/// This is the unit the list displays and actions operate on. A person with
/// several phone numbers appears as several `Contact` values sharing the
/// same name, one per number. Plain value, structural equality only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Display name as reported by the device
    pub name: String,

    /// One phone number, verbatim from the device (no normalization)
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact entry.
    pub fn new(name: String, phone_number: String) -> Self {
        Self { name, phone_number }
    }
}

/// A raw row from the device's contacts collection, before the phone-number
/// join. Internal to the store and loader layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    /// Provider row id, used as the join key for the phones collection
    pub id: u64,

    /// Display name; empty when the provider reports none
    pub display_name: String,

    /// Whether the provider flags this contact as having at least one number
    pub has_phone_number: bool,
}

impl ContactRecord {
    /// Create a new record.
    pub fn new(id: u64, display_name: String, has_phone_number: bool) -> Self {
        Self {
            id,
            display_name,
            has_phone_number,
        }
    }
}
