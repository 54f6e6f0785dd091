//! Attribute keys and values for records shaped at runtime.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Signed integers (health, durability); the only kind effects write
//! - `Float`: Fractional values (speed, scale)
//! - `Bool`: Flags (flying, burning)
//! - `Text`: Strings (names, factions)
//! - `IntList` / `TextList`: Lists (resistances, tags)

use serde::{Deserialize, Serialize};

use super::FieldKind;

/// Key naming a runtime attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Value of a runtime attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    IntList(Vec<i64>),
    TextList(Vec<String>),
}

impl AttributeValue {
    /// Field kind this value presents to the dispatcher.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            AttributeValue::Int(_) => FieldKind::Int64,
            AttributeValue::Float(_) => FieldKind::Float,
            AttributeValue::Bool(_) => FieldKind::Bool,
            AttributeValue::Text(_) => FieldKind::Text,
            AttributeValue::IntList(_) | AttributeValue::TextList(_) => FieldKind::List,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<Vec<i64>> for AttributeValue {
    fn from(v: Vec<i64>) -> Self {
        AttributeValue::IntList(v)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        AttributeValue::TextList(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_key() {
        let key1 = AttributeKey::new("Health");
        let key2: AttributeKey = "Health".into();
        assert_eq!(key1, key2);
        assert_eq!(key1.as_str(), "Health");
    }

    #[test]
    fn test_attribute_value_kinds() {
        assert_eq!(AttributeValue::from(5i32).kind(), FieldKind::Int64);
        assert_eq!(AttributeValue::from(1.5).kind(), FieldKind::Float);
        assert_eq!(AttributeValue::from(true).kind(), FieldKind::Bool);
        assert_eq!(AttributeValue::from("orc").kind(), FieldKind::Text);
        assert_eq!(AttributeValue::from(vec![1i64, 2]).kind(), FieldKind::List);
    }

    #[test]
    fn test_attribute_value_accessors() {
        assert_eq!(AttributeValue::Int(42).as_int(), Some(42));
        assert_eq!(AttributeValue::Bool(true).as_int(), None);
        assert_eq!(AttributeValue::from("fire").as_text(), Some("fire"));
    }
}
