//! Dispatch outcomes.

use std::fmt;

use smallvec::SmallVec;

/// Why a target was left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Skip {
    /// Not a receiver and not a mutable record.
    WrongShape,
    /// The record has no field with the effect's attribute name.
    FieldAbsent,
    /// The field exists but is private to the record.
    FieldPrivate,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Skip::WrongShape => "wrong shape",
            Skip::FieldAbsent => "field absent",
            Skip::FieldPrivate => "field private",
        };
        f.write_str(reason)
    }
}

/// Result of applying one effect to one target.
///
/// Contract violations never appear here: they end the run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Handed to the target's receiver.
    Received { target: String },
    /// A record field was changed.
    Mutated {
        target: String,
        field: String,
        before: i64,
        after: i64,
    },
    /// Not applicable to this target.
    Skipped { target: String, reason: Skip },
}

impl Outcome {
    /// Name of the target this outcome is about.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Outcome::Received { target }
            | Outcome::Mutated { target, .. }
            | Outcome::Skipped { target, .. } => target,
        }
    }

    /// Check if the effect reached the target.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Skipped { .. })
    }

    /// Skip reason, if skipped.
    #[must_use]
    pub fn skip_reason(&self) -> Option<Skip> {
        match self {
            Outcome::Skipped { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Received { target } => write!(f, "{target}: received"),
            Outcome::Mutated { target, field, before, after } => {
                write!(f, "{target}.{field}: {before} -> {after}")
            }
            Outcome::Skipped { target, reason } => write!(f, "{target}: not applicable ({reason})"),
        }
    }
}

/// Outcomes of a batch, in target order.
pub type Outcomes = SmallVec<[Outcome; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let mutated = Outcome::Mutated {
            target: "Orc".to_string(),
            field: "Health".to_string(),
            before: 500,
            after: 450,
        };
        assert_eq!(mutated.target(), "Orc");
        assert!(mutated.is_applied());
        assert_eq!(mutated.skip_reason(), None);

        let skipped = Outcome::Skipped {
            target: "Wall".to_string(),
            reason: Skip::FieldAbsent,
        };
        assert!(!skipped.is_applied());
        assert_eq!(skipped.skip_reason(), Some(Skip::FieldAbsent));
    }

    #[test]
    fn test_outcome_display() {
        let mutated = Outcome::Mutated {
            target: "Orc".to_string(),
            field: "Health".to_string(),
            before: 500,
            after: 450,
        };
        assert_eq!(mutated.to_string(), "Orc.Health: 500 -> 450");

        let skipped = Outcome::Skipped {
            target: "Wall".to_string(),
            reason: Skip::FieldAbsent,
        };
        assert_eq!(skipped.to_string(), "Wall: not applicable (field absent)");

        let received = Outcome::Received { target: "Player_1".to_string() };
        assert_eq!(received.to_string(), "Player_1: received");
    }
}
