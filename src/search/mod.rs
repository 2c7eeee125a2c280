//! Search utilities for the contact list.
//!
//! The browser filters by case-insensitive substring match on the contact
//! name, recomputed from the full sequence on every keystroke.

pub mod filter;

pub use filter::filter_contacts;
