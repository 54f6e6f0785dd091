//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// What to do when an effect names a field of the wrong kind.
///
/// Both policies are fatal; they differ only in how the run ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Panic with the violation message. Unwinds through the batch.
    #[default]
    Panic,
    /// Abort the process without unwinding.
    Abort,
}

/// Configuration for a `Dispatcher`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Handling of contract violations.
    #[serde(default)]
    pub fault_policy: FaultPolicy,
}

impl DispatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fault policy.
    #[must_use]
    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }
}
