//! Outcome reporting.
//!
//! The dispatcher never writes to a log directly; it hands every outcome
//! to an `OutcomeSink`. `TracingSink` turns outcomes into `tracing`
//! events, `OutcomeLog` keeps them in memory.

use tracing::{debug, error, info, warn};

use crate::effects::Effect;

use super::{ContractViolation, Outcome};

/// Receives every outcome the dispatcher produces.
pub trait OutcomeSink {
    /// Report a non-fatal outcome.
    fn outcome(&mut self, effect: &Effect, outcome: &Outcome);

    /// Report a contract violation, just before the run ends.
    fn violation(&mut self, effect: &Effect, violation: &ContractViolation);
}

impl<S: OutcomeSink + ?Sized> OutcomeSink for &mut S {
    fn outcome(&mut self, effect: &Effect, outcome: &Outcome) {
        (**self).outcome(effect, outcome);
    }

    fn violation(&mut self, effect: &Effect, violation: &ContractViolation) {
        (**self).violation(effect, violation);
    }
}

/// Emits one `tracing` event per outcome.
///
/// Successes log at `info`, skips at `warn`, violations at `error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink {
    quiet_skips: bool,
}

impl TracingSink {
    /// Create a sink. With `quiet_skips`, skips are logged at `debug`.
    #[must_use]
    pub fn new(quiet_skips: bool) -> Self {
        Self { quiet_skips }
    }

    /// A sink logging skips at `debug`.
    ///
    /// Broadcasting to a mixed roster skips many targets by design;
    /// callers doing that usually want skips out of the default log.
    #[must_use]
    pub fn quiet() -> Self {
        Self::new(true)
    }

    /// Check if skips are logged at `debug`.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet_skips
    }
}

impl OutcomeSink for TracingSink {
    fn outcome(&mut self, effect: &Effect, outcome: &Outcome) {
        match outcome {
            Outcome::Received { target } => {
                info!(effect = effect.name(), target = %target, "effect handed to receiver");
            }
            Outcome::Mutated { target, field, before, after } => {
                info!(
                    effect = effect.name(),
                    target = %target,
                    field = %field,
                    before,
                    after,
                    "effect applied"
                );
            }
            Outcome::Skipped { target, reason } => {
                if self.quiet_skips {
                    debug!(effect = effect.name(), target = %target, reason = %reason, "effect not applicable");
                } else {
                    warn!(effect = effect.name(), target = %target, reason = %reason, "effect not applicable");
                }
            }
        }
    }

    fn violation(&mut self, effect: &Effect, violation: &ContractViolation) {
        error!(
            effect = effect.name(),
            target = %violation.target,
            field = %violation.field,
            kind = %violation.kind,
            "effect contract violated"
        );
    }
}

/// Collects outcomes in memory, in the order they happened.
#[derive(Clone, Debug, Default)]
pub struct OutcomeLog {
    entries: Vec<(Effect, Outcome)>,
    violations: Vec<ContractViolation>,
}

impl OutcomeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded outcomes with the effect that produced them.
    pub fn iter(&self) -> impl Iterator<Item = &(Effect, Outcome)> {
        self.entries.iter()
    }

    /// Recorded outcomes only.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.entries.iter().map(|(_, outcome)| outcome)
    }

    /// Reported violations.
    #[must_use]
    pub fn violations(&self) -> &[ContractViolation] {
        &self.violations
    }

    /// Number of recorded outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.violations.is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.violations.clear();
    }
}

impl OutcomeSink for OutcomeLog {
    fn outcome(&mut self, effect: &Effect, outcome: &Outcome) {
        self.entries.push((effect.clone(), outcome.clone()));
    }

    fn violation(&mut self, _effect: &Effect, violation: &ContractViolation) {
        self.violations.push(violation.clone());
    }
}
