//! Fatal dispatch errors.

use thiserror::Error;

use crate::targets::FieldKind;

/// An effect named an existing, writable field that is not a signed integer.
///
/// Attributes used as effect targets must be integer-typed; reaching this
/// is a programming error in how the target or effect was declared.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("effect `{effect}` cannot modify `{target}.{field}`: field is {kind}, expected a signed integer")]
pub struct ContractViolation {
    pub effect: String,
    pub target: String,
    pub field: String,
    pub kind: FieldKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let violation = ContractViolation {
            effect: "fire".to_string(),
            target: "Banner".to_string(),
            field: "Label".to_string(),
            kind: FieldKind::Text,
        };
        assert_eq!(
            violation.to_string(),
            "effect `fire` cannot modify `Banner.Label`: field is text, expected a signed integer"
        );
    }
}
