//! Unified error types for pagerlink
//!
//! This module defines all error types used throughout the plugin layer.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level plugin error type
#[derive(Error, Debug)]
pub enum PluginError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error delivering an incident operation or metric
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Internal routing invariant violated
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Error reading process status
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Required key absent or empty
    #[error("Required configuration key {0} missing!")]
    MissingKey(&'static str),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors from delivering an operation to an external collaborator
///
/// The router and sampler do not retry these; the paging client and metric
/// transport own any retry/backoff policy.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The paging service rejected or failed to deliver an incident event
    #[error("Paging service rejected event for service {service_key}: {message}")]
    PagerRejected {
        service_key: String,
        message: String,
    },

    /// The metric transport failed to accept a gauge sample
    #[error("Metric sink rejected sample {plugin}/{type_instance}: {message}")]
    SinkRejected {
        plugin: String,
        type_instance: String,
        message: String,
    },
}

/// Errors from routing invariant violations
///
/// These indicate misuse of the routing API rather than a runtime fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A trigger was requested for a severity that never triggers
    #[error("Severity {0} cannot select a trigger route")]
    UntriggerableSeverity(String),
}

/// Errors from reading a process's status table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Process exited between tracking and sampling
    #[error("Process {0} is no longer running")]
    ProcessGone(u32),

    /// Status table present but unreadable
    #[error("Failed to read status for process {pid}: {message}")]
    Unreadable { pid: u32, message: String },
}

/// Result type alias using PluginError
pub type Result<T> = std::result::Result<T, PluginError>;
