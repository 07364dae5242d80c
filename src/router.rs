//! Incident router
//!
//! Maps severity-tagged notifications onto paging-service incident
//! operations and fans them out to the right on-call service keys.
//!
//! Triggers go to the one route configured for the event's severity.
//! Resolves go to every configured route: an OKAY event does not say which
//! severity originally fired, so the incident must be resolved everywhere
//! it could have been triggered. The paging API treats a resolve against a
//! service with no matching open incident as a no-op.

use crate::config::PagerConfig;
use crate::domain::{EventAction, IncidentOp, Notification, Severity};
use crate::error::{Result, RouterError};
use crate::pager::PagerClient;

/// On-call routes, one service key per triggering severity
///
/// Immutable after construction; the router reads it for every event but
/// nothing writes it post-init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRoutes {
    /// Service key for failure-severity triggers
    pub failure: String,
    /// Service key for warning-severity triggers
    pub warning: String,
}

impl ServiceRoutes {
    /// Create routes from explicit service keys
    pub fn new(failure: impl Into<String>, warning: impl Into<String>) -> Self {
        Self {
            failure: failure.into(),
            warning: warning.into(),
        }
    }

    /// Project the routes out of a validated configuration
    pub fn from_config(config: &PagerConfig) -> Self {
        Self::new(&config.failure_service_key, &config.warning_service_key)
    }

    /// Select the service keys an operation should target
    ///
    /// Resolves fan out to every route. Triggers go to the single route
    /// mapped from the severity; asking for a trigger route for OKAY is an
    /// invariant violation and fails defensively rather than paging the
    /// wrong service.
    pub fn select(&self, action: EventAction, severity: Severity) -> Result<Vec<&str>> {
        match action {
            EventAction::Resolve => Ok(vec![self.failure.as_str(), self.warning.as_str()]),
            EventAction::Trigger => match severity {
                Severity::Failure => Ok(vec![self.failure.as_str()]),
                Severity::Warning => Ok(vec![self.warning.as_str()]),
                Severity::Okay => {
                    Err(RouterError::UntriggerableSeverity(severity.label().to_string()).into())
                }
            },
        }
    }
}

/// Build the incident operations for one notification
///
/// Pure: no logging, no dispatch. One op per selected service key, all
/// sharing the same description, details payload, and incident key.
pub fn build_incident_ops(
    notification: &Notification,
    routes: &ServiceRoutes,
) -> Result<Vec<IncidentOp>> {
    let action = EventAction::from_severity(notification.severity);
    let targets = routes.select(action, notification.severity)?;

    Ok(targets
        .into_iter()
        .map(|service_key| IncidentOp::from_notification(notification, service_key))
        .collect())
}

/// Incident router
///
/// Owns the routes and the paging client; the embedder registers
/// [`IncidentRouter::handle`] as the host daemon's notification callback.
pub struct IncidentRouter {
    routes: ServiceRoutes,
    client: Box<dyn PagerClient>,
}

impl IncidentRouter {
    /// Create a router from a validated configuration and a paging client
    ///
    /// Fails fast on a missing configuration key; a router that cannot
    /// route must never start accepting events.
    pub fn new(config: &PagerConfig, client: Box<dyn PagerClient>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            routes: ServiceRoutes::from_config(config),
            client,
        })
    }

    /// Get the configured routes
    pub fn routes(&self) -> &ServiceRoutes {
        &self.routes
    }

    /// Handle one notification from the host daemon
    ///
    /// Dispatches one incident operation per target service key. Each
    /// dispatch is logged before the call so failed deliveries stay
    /// traceable. A failure for one service key does not stop the
    /// remaining keys; the first error is surfaced to the caller after
    /// every target has been attempted.
    pub fn handle(&self, notification: &Notification) -> Result<()> {
        let ops = build_incident_ops(notification, &self.routes)?;

        let mut first_error = None;

        for op in &ops {
            log::info!(
                "Dispatching {} event to paging service {} via {}: {}",
                op.action,
                op.service_key,
                self.client.name(),
                op.details
            );

            if let Err(e) = self.client.create_event(op) {
                log::error!(
                    "Failed to deliver {} event to service {}: {}",
                    op.action,
                    op.service_key,
                    e
                );
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}
