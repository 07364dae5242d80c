//! Alert notification types
//!
//! The host monitoring daemon invokes the plugin callback with one
//! [`Notification`] per alert event. These types are read-only inputs;
//! the plugin never mutates or stores them past the callback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert severity as reported by the host daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A check has failed
    Failure,
    /// A check is degraded but not failing
    Warning,
    /// A previously failing or degraded check has recovered
    Okay,
}

impl Severity {
    /// Human-readable label used in descriptions and details payloads
    pub fn label(&self) -> &'static str {
        match self {
            Self::Failure => "FAILURE",
            Self::Warning => "WARNING",
            Self::Okay => "OKAY",
        }
    }

    /// Whether this severity opens an incident (as opposed to closing one)
    pub fn triggers(&self) -> bool {
        matches!(self, Self::Failure | Self::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One alert event from the host monitoring daemon
///
/// The identity fields (host, plugin, plugin_instance, type_name,
/// type_instance) correlate trigger and resolve events for the same
/// underlying check; see [`Notification::incident_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity of the event
    pub severity: Severity,
    /// Host the event originated on
    pub host: String,
    /// Name of the plugin/subsystem that produced the event
    pub plugin: String,
    /// Plugin instance, if the plugin distinguishes instances
    pub plugin_instance: Option<String>,
    /// Data-set type of the value that alerted
    pub type_name: Option<String>,
    /// Type instance, if the type distinguishes instances
    pub type_instance: Option<String>,
    /// Free-form message from the host daemon
    pub message: String,
}

impl Notification {
    /// Create a notification with only the required fields set
    pub fn new(
        severity: Severity,
        host: impl Into<String>,
        plugin: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            host: host.into(),
            plugin: plugin.into(),
            plugin_instance: None,
            type_name: None,
            type_instance: None,
            message: message.into(),
        }
    }

    /// Builder: set plugin instance
    pub fn with_plugin_instance(mut self, instance: impl Into<String>) -> Self {
        self.plugin_instance = Some(instance.into());
        self
    }

    /// Builder: set type name
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Builder: set type instance
    pub fn with_type_instance(mut self, instance: impl Into<String>) -> Self {
        self.type_instance = Some(instance.into());
        self
    }

    /// Correlation key for the paging service
    ///
    /// Dot-joined concatenation of the non-empty identity fields in fixed
    /// order: host, plugin, plugin_instance, type_name, type_instance.
    /// Deterministic: two events for the same check produce the same key,
    /// which is how a later resolve finds the earlier trigger.
    pub fn incident_key(&self) -> String {
        let components = [
            Some(self.host.as_str()),
            Some(self.plugin.as_str()),
            self.plugin_instance.as_deref(),
            self.type_name.as_deref(),
            self.type_instance.as_deref(),
        ];

        components
            .into_iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(".")
    }
}
