//! pagerlink - monitoring-daemon plugin layer
//!
//! This library supplies the callback bodies a host monitoring daemon
//! invokes: an incident router that forwards alert notifications to an
//! external paging service, and a per-process memory sampler that reports
//! gauge metrics back to the daemon.
//!
//! The host daemon owns scheduling, metric transport, and notification
//! delivery; the paging client owns the network. Both are collaborator
//! traits here ([`pager::PagerClient`], [`sampler::ProcessProbe`],
//! [`sampler::MetricSink`]), wired up explicitly by the embedder.
//!
//! # Modules
//!
//! - [`config`]: Paging configuration and validation
//! - [`domain`]: Notification and incident operation types
//! - [`error`]: Error types
//! - [`pager`]: Paging service client seam
//! - [`router`]: Incident routing and fan-out
//! - [`sampler`]: Process memory sampling

pub mod config;
pub mod domain;
pub mod error;
pub mod pager;
pub mod router;
pub mod sampler;

#[cfg(test)]
pub mod mock;

pub use config::PagerConfig;
pub use domain::{EventAction, IncidentOp, Notification, Severity};
pub use error::{PluginError, Result};
pub use router::{build_incident_ops, IncidentRouter, ServiceRoutes};
pub use sampler::{GaugeSample, MemorySampler, ProcessStatus};
