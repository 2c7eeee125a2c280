//! Contact loading: the join between the device's two contact collections.

use crate::models::Contact;
use crate::store::ContactStore;
use std::sync::Arc;

/// Produces the full contact sequence from the device store.
///
/// Contacts flagged as having a phone number are joined with the phones
/// collection by contact id, yielding one [`Contact`] per (contact, number)
/// pair. A contact with several numbers therefore appears several times,
/// once per number. Store order is preserved; nothing is sorted here.
pub struct ContactLoader {
    store: Arc<dyn ContactStore>,
}

impl ContactLoader {
    /// Create a new loader over the given store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Load every dialable contact entry.
    ///
    /// A failing contacts query degrades to an empty sequence. A failure
    /// fetching one contact's numbers skips that contact only; the rest of
    /// the sequence still loads. Neither failure reaches the user as an
    /// error, the list is simply shorter or empty.
    pub fn load(&self) -> Vec<Contact> {
        let records = match self.store.contact_records() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("contact query failed: {}", err);
                return Vec::new();
            }
        };

        let mut contacts = Vec::new();
        for record in &records {
            if !record.has_phone_number {
                continue;
            }
            match self.store.phone_numbers(record.id) {
                Ok(numbers) => {
                    for number in numbers {
                        contacts.push(Contact::new(record.display_name.clone(), number));
                    }
                }
                Err(err) => {
                    tracing::warn!("phone query failed for contact {}: {}", record.id, err);
                }
            }
        }

        tracing::info!(
            "loaded {} entries from {} contact rows",
            contacts.len(),
            records.len()
        );
        contacts
    }
}
