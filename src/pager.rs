//! Paging service client seam
//!
//! The plugin never talks to the paging API directly; it hands fully-built
//! incident operations to a [`PagerClient`] implementation supplied by the
//! embedder. The client owns transport, authentication, and any
//! retry/backoff policy.

use crate::domain::IncidentOp;
use crate::error::DispatchError;

/// Paging service client trait
pub trait PagerClient: Send + Sync {
    /// Deliver one incident operation to the paging service
    ///
    /// Best-effort, fire-and-forget from the router's point of view: a
    /// failure here is logged and surfaced but never retried at this layer.
    fn create_event(&self, op: &IncidentOp) -> Result<(), DispatchError>;

    /// Client name for identification in logs
    fn name(&self) -> &str;
}
