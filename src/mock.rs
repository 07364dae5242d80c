//! Mock implementations for testing
//!
//! Provides mock paging client, process probe, and metric sink for unit
//! testing without a live paging service or a real process table.

use crate::domain::IncidentOp;
use crate::error::{DispatchError, ProbeError};
use crate::pager::PagerClient;
use crate::sampler::{GaugeSample, MetricSink, ProcessProbe, ProcessStatus};

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock paging client for testing
///
/// Records every successfully accepted operation and counts every attempt,
/// so tests can verify both fan-out and dispatch isolation.
pub struct MockPagerClient {
    recorded: Arc<Mutex<Vec<IncidentOp>>>,
    attempts: Arc<Mutex<usize>>,
    failing_keys: HashSet<String>,
}

impl MockPagerClient {
    /// Create a mock client that accepts everything
    pub fn new() -> Self {
        Self {
            recorded: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(Mutex::new(0)),
            failing_keys: HashSet::new(),
        }
    }

    /// Builder: reject operations targeting the given service key
    pub fn failing_for(mut self, service_key: impl Into<String>) -> Self {
        self.failing_keys.insert(service_key.into());
        self
    }

    /// Handle to the accepted operations, shared past the router's Box
    pub fn recorded(&self) -> Arc<Mutex<Vec<IncidentOp>>> {
        Arc::clone(&self.recorded)
    }

    /// Handle to the attempt counter
    pub fn attempts(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.attempts)
    }
}

impl Default for MockPagerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PagerClient for MockPagerClient {
    fn create_event(&self, op: &IncidentOp) -> Result<(), DispatchError> {
        *self.attempts.lock().unwrap() += 1;

        if self.failing_keys.contains(&op.service_key) {
            return Err(DispatchError::PagerRejected {
                service_key: op.service_key.clone(),
                message: "mock rejection".to_string(),
            });
        }

        self.recorded.lock().unwrap().push(op.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Mock process probe for testing
///
/// Pids without a configured status read as gone.
pub struct MockProbe {
    statuses: HashMap<u32, ProcessStatus>,
    unreadable: HashSet<u32>,
}

impl MockProbe {
    /// Create an empty probe; every pid reads as gone
    pub fn new() -> Self {
        Self {
            statuses: HashMap::new(),
            unreadable: HashSet::new(),
        }
    }

    /// Builder: add a live process with the given status
    pub fn with_process(mut self, pid: u32, status: ProcessStatus) -> Self {
        self.statuses.insert(pid, status);
        self
    }

    /// Builder: make a pid's status table unreadable
    pub fn with_unreadable(mut self, pid: u32) -> Self {
        self.unreadable.insert(pid);
        self
    }
}

impl Default for MockProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for MockProbe {
    fn status(&self, pid: u32) -> Result<ProcessStatus, ProbeError> {
        if self.unreadable.contains(&pid) {
            return Err(ProbeError::Unreadable {
                pid,
                message: "mock unreadable".to_string(),
            });
        }

        self.statuses
            .get(&pid)
            .copied()
            .ok_or(ProbeError::ProcessGone(pid))
    }
}

/// Mock metric sink for testing
pub struct MockSink {
    samples: Arc<Mutex<Vec<GaugeSample>>>,
    failing: bool,
}

impl MockSink {
    /// Create a sink that accepts every sample
    pub fn new() -> Self {
        Self {
            samples: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    /// Builder: reject every sample
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Handle to the accepted samples
    pub fn samples(&self) -> Arc<Mutex<Vec<GaugeSample>>> {
        Arc::clone(&self.samples)
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSink for MockSink {
    fn dispatch(&self, sample: &GaugeSample) -> Result<(), DispatchError> {
        if self.failing {
            return Err(DispatchError::SinkRejected {
                plugin: sample.plugin.clone(),
                type_instance: sample.type_instance.clone(),
                message: "mock rejection".to_string(),
            });
        }

        self.samples.lock().unwrap().push(sample.clone());
        Ok(())
    }
}
