//! Data models for the contacts browser.
//!
//! This module contains the data structures representing contacts as read
//! from the attached device.

pub mod contact;

pub use contact::{Contact, ContactRecord};
