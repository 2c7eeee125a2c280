//! Terminal user interface: screen controller, list binding, rendering.

pub mod app;
pub mod binder;
pub mod draw;

pub use app::{App, Notice, Overlay, Screen};
pub use binder::{ContactListBinder, ContactRow};
