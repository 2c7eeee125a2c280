//! Name filtering for the contact list.

use crate::models::Contact;

/// Return the subsequence of `contacts` whose name contains `query` as a
/// case-insensitive substring.
///
/// The empty query returns the full sequence unchanged. Relative order is
/// always preserved. This runs synchronously on every keystroke of the
/// search field, so it stays a single O(n) pass with no allocation beyond
/// the result.
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    if query.is_empty() {
        return contacts.to_vec();
    }
    let needle = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
