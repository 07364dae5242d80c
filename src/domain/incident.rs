//! Incident operation types
//!
//! The router's output: one or more incident operations per notification,
//! each targeting a single on-call service key in the paging service.

use super::notification::{Notification, Severity};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Incident lifecycle action in the paging service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    /// Open or escalate an incident
    Trigger,
    /// Close an incident
    Resolve,
}

impl EventAction {
    /// Derive the lifecycle action from an event severity
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Failure | Severity::Warning => Self::Trigger,
            Severity::Okay => Self::Resolve,
        }
    }

    /// Wire-format name used by the paging API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Resolve => "resolve",
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One incident operation bound for the paging service
///
/// Constructed, handed to the paging client, then discarded; the plugin
/// keeps no incident state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentOp {
    /// On-call service key this operation targets
    pub service_key: String,
    /// Short description; ends up in SMS and email subjects, so keep it short
    pub description: String,
    /// Lifecycle action
    pub action: EventAction,
    /// Full-fidelity payload shown in the paging UI and email body
    pub details: serde_json::Value,
    /// Correlation key matching resolves to earlier triggers
    pub incident_key: String,
}

impl IncidentOp {
    /// Build the operation body shared by every target service key
    ///
    /// The service key is filled in by the router per selected route.
    pub fn from_notification(notification: &Notification, service_key: impl Into<String>) -> Self {
        let label = notification.severity.label();

        let description = format!(
            "{} on {} (from {} plugin)",
            label, notification.host, notification.plugin
        );

        let details = json!({
            "host": notification.host,
            "plugin": notification.plugin,
            "plugin_instance": notification.plugin_instance,
            "type": notification.type_name,
            "type_instance": notification.type_instance,
            "message": notification.message,
            "severity": label,
        });

        Self {
            service_key: service_key.into(),
            description,
            action: EventAction::from_severity(notification.severity),
            details,
            incident_key: notification.incident_key(),
        }
    }
}
