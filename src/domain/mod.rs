//! Domain types for the plugin layer
//!
//! Defines the alert notification shape handed in by the host daemon and
//! the incident operations handed out to the paging service.

mod incident;
mod notification;

pub use incident::{EventAction, IncidentOp};
pub use notification::{Notification, Severity};
