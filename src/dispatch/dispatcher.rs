//! Applying effects to targets.

use crate::effects::Effect;
use crate::targets::{Field, Record, Target};

use super::{ContractViolation, DispatchConfig, FaultPolicy, Outcome, OutcomeSink, Outcomes, Skip, TracingSink};

/// Applies effects to targets and reports each outcome to a sink.
///
/// Dispatch is synchronous: `apply_all` finishes one target before
/// starting the next, and the dispatcher holds a target's field only for
/// the duration of a single add.
#[derive(Debug)]
pub struct Dispatcher<S: OutcomeSink = TracingSink> {
    config: DispatchConfig,
    sink: S,
}

impl Dispatcher<TracingSink> {
    /// Dispatcher logging through `tracing` at the default levels.
    #[must_use]
    pub fn with_config(config: DispatchConfig) -> Self {
        Self::new(config, TracingSink::default())
    }
}

impl Default for Dispatcher<TracingSink> {
    fn default() -> Self {
        Self::with_config(DispatchConfig::default())
    }
}

impl<S: OutcomeSink> Dispatcher<S> {
    /// Create a dispatcher reporting to `sink`.
    pub fn new(config: DispatchConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// The outcome sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the outcome sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the dispatcher, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Apply `effect` to a single target.
    ///
    /// # Panics
    ///
    /// Panics (or aborts, per `FaultPolicy`) when the effect's attribute
    /// names a public record field that is not a signed integer.
    pub fn apply(&mut self, effect: &Effect, target: &mut Target<'_>) -> Outcome {
        let name = target.name();

        let outcome = match target {
            Target::Receiver(receiver) => {
                receiver.receive(effect);
                Outcome::Received { target: name }
            }
            Target::Record(record) => self.mutate(effect, &mut **record, name),
            Target::Frozen(_) | Target::Opaque(_) => Outcome::Skipped {
                target: name,
                reason: Skip::WrongShape,
            },
        };

        self.sink.outcome(effect, &outcome);
        outcome
    }

    /// Apply `effect` to every target, in order.
    ///
    /// A skipped target does not affect the others. A contract violation
    /// ends the whole batch; targets before it keep their changes.
    pub fn apply_all(&mut self, effect: &Effect, targets: &mut [Target<'_>]) -> Outcomes {
        targets.iter_mut().map(|target| self.apply(effect, target)).collect()
    }

    fn mutate(&mut self, effect: &Effect, record: &mut dyn Record, target: String) -> Outcome {
        let Some(Field { access, slot }) = record.field_mut(effect.attribute()) else {
            return Outcome::Skipped {
                target,
                reason: Skip::FieldAbsent,
            };
        };

        if access.is_private() {
            return Outcome::Skipped {
                target,
                reason: Skip::FieldPrivate,
            };
        }

        match slot.add(effect.magnitude()) {
            Ok((before, after)) => Outcome::Mutated {
                target,
                field: effect.attribute().to_string(),
                before,
                after,
            },
            Err(kind) => self.fault(
                effect,
                ContractViolation {
                    effect: effect.name().to_string(),
                    target,
                    field: effect.attribute().to_string(),
                    kind,
                },
            ),
        }
    }

    fn fault(&mut self, effect: &Effect, violation: ContractViolation) -> ! {
        self.sink.violation(effect, &violation);
        match self.config.fault_policy {
            FaultPolicy::Panic => panic!("{violation}"),
            FaultPolicy::Abort => std::process::abort(),
        }
    }
}
