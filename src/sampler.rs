//! Process memory sampler
//!
//! Reads memory status for a set of tracked processes and reports
//! `vmsize`/`vmrss` gauge metrics back to the host daemon. Process status
//! access and metric transport are collaborator seams: the embedder
//! supplies a [`ProcessProbe`] over the OS process table and a
//! [`MetricSink`] over the daemon's dispatch mechanism.

use crate::error::{DispatchError, ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Memory snapshot for one process, in kilobytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStatus {
    /// Virtual memory size (VmSize)
    pub vm_size_kb: u64,
    /// Resident set size (VmRSS)
    pub vm_rss_kb: u64,
}

impl ProcessStatus {
    /// Create a status snapshot
    pub fn new(vm_size_kb: u64, vm_rss_kb: u64) -> Self {
        Self {
            vm_size_kb,
            vm_rss_kb,
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VmSize {} kB, VmRSS {} kB",
            self.vm_size_kb, self.vm_rss_kb
        )
    }
}

/// Process status probe trait
///
/// Implemented over the OS process table by the embedder.
pub trait ProcessProbe {
    /// Read the memory status of one process
    ///
    /// Returns [`ProbeError::ProcessGone`] for a process that has exited;
    /// the sampler treats that as routine and skips the process.
    fn status(&self, pid: u32) -> std::result::Result<ProcessStatus, ProbeError>;
}

/// One gauge metric bound for the host daemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSample {
    /// Reporting plugin name
    pub plugin: String,
    /// Which gauge this is ("vmsize" or "vmrss")
    pub plugin_instance: String,
    /// Data-set type; always "gauge" for point-in-time values
    pub type_name: String,
    /// Position of the process among the live tracked set
    pub type_instance: String,
    /// Measured value in kilobytes
    pub value: f64,
}

/// Metric dispatch trait
///
/// Implemented over the host daemon's metric transport by the embedder.
pub trait MetricSink {
    /// Hand one gauge sample to the host daemon
    fn dispatch(&self, sample: &GaugeSample) -> std::result::Result<(), DispatchError>;
}

/// Per-process memory sampler
///
/// The embedder registers [`MemorySampler::sample`] as the host daemon's
/// read callback and keeps the tracked pid set current.
pub struct MemorySampler {
    /// Plugin name reported with every sample
    name: String,
    /// Tracked process ids
    pids: Vec<u32>,
}

impl MemorySampler {
    /// Create a sampler reporting under the given plugin name
    pub fn new(name: impl Into<String>, pids: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            pids,
        }
    }

    /// Get the plugin name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tracked pids
    pub fn pids(&self) -> &[u32] {
        &self.pids
    }

    /// Replace the tracked pid set
    pub fn set_pids(&mut self, pids: Vec<u32>) {
        self.pids = pids;
    }

    /// Sample every tracked process and dispatch its memory gauges
    ///
    /// Two phases: collect statuses first, skipping processes that exited
    /// since they were tracked, then dispatch two gauges per surviving
    /// process. The index used as type_instance counts live processes
    /// only, so a vanished worker shifts later indices rather than leaving
    /// a hole.
    pub fn sample<P: ProcessProbe, S: MetricSink>(&self, probe: &P, sink: &S) -> Result<()> {
        let mut statuses = Vec::with_capacity(self.pids.len());
        for &pid in &self.pids {
            match probe.status(pid) {
                Ok(status) => statuses.push(status),
                Err(ProbeError::ProcessGone(_)) => {
                    log::debug!("Process {} is gone, skipping", pid);
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        for (idx, status) in statuses.iter().enumerate() {
            let gauges = [
                ("vmsize", status.vm_size_kb),
                ("vmrss", status.vm_rss_kb),
            ];

            for (instance, value) in gauges {
                let sample = GaugeSample {
                    plugin: self.name.clone(),
                    plugin_instance: instance.to_string(),
                    type_name: "gauge".to_string(),
                    type_instance: idx.to_string(),
                    value: value as f64,
                };
                sink.dispatch(&sample)?;
            }
        }

        Ok(())
    }
}
