//! Binding between the displayed contact sequence and list rows.

use crate::models::Contact;

/// One drawn row of the contact list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRow {
    /// Display name cell
    pub name: String,

    /// Phone number cell
    pub number: String,
}

/// Holds whichever sequence (full or filtered) is currently displayed and
/// copies its values into rows.
///
/// Replacement is wholesale: [`ContactListBinder::replace`] swaps the whole
/// sequence and the next draw rebuilds every visible row. There is no
/// incremental diffing or position-level change tracking.
#[derive(Debug, Clone, Default)]
pub struct ContactListBinder {
    contacts: Vec<Contact>,
}

impl ContactListBinder {
    /// Create an empty binder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of displayed entries.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether nothing is displayed.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The displayed entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Copy the entry at `index` into `row`. Out-of-range indexes leave the
    /// row untouched.
    pub fn bind(&self, row: &mut ContactRow, index: usize) {
        if let Some(contact) = self.contacts.get(index) {
            row.name = contact.name.clone();
            row.number = contact.phone_number.clone();
        }
    }

    /// Swap in a new displayed sequence.
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Bind every entry, in order. The draw pass renders from this.
    pub fn rows(&self) -> Vec<ContactRow> {
        let mut rows = Vec::with_capacity(self.count());
        for index in 0..self.count() {
            let mut row = ContactRow::default();
            self.bind(&mut row, index);
            rows.push(row);
        }
        rows
    }
}
