//! Effect definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named modifier for a single target attribute.
///
/// Fields are private and only readable through accessors, so an effect
/// never changes after construction. Nothing is validated here: an
/// attribute naming a field no target has is a normal case handled by the
/// dispatcher, not a construction error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    name: String,
    attribute: String,
    magnitude: i64,
}

impl Effect {
    /// Create an effect from its name, target attribute and signed magnitude.
    pub fn new(name: impl Into<String>, attribute: impl Into<String>, magnitude: i64) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            magnitude,
        }
    }

    /// Create an effect that lowers `attribute` by `amount`.
    ///
    /// The negation saturates, so `i64::MIN` damage yields a magnitude of
    /// `i64::MAX` rather than wrapping back to `i64::MIN`.
    pub fn damage(name: impl Into<String>, attribute: impl Into<String>, amount: i64) -> Self {
        Self::new(name, attribute, amount.saturating_neg())
    }

    /// Create an effect that raises `attribute` by `amount`.
    pub fn heal(name: impl Into<String>, attribute: impl Into<String>, amount: i64) -> Self {
        Self::new(name, attribute, amount)
    }

    /// Display name of the effect ("fire", "heal", ...).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the attribute this effect modifies.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Signed amount added to the attribute.
    #[must_use]
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// Check whether this effect targets `attribute` (exact match).
    #[must_use]
    pub fn targets(&self, attribute: &str) -> bool {
        self.attribute == attribute
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} {:+})", self.name, self.attribute, self.magnitude)
    }
}
