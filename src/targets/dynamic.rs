//! Records whose fields are only known at runtime.
//!
//! `DynamicRecord` covers targets loaded from data or assembled by
//! scripts, where no Rust struct exists to implement `Record` by hand.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Access, AttributeKey, AttributeValue, Field, Record, Slot};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct DynamicField {
    value: AttributeValue,
    access: Access,
}

/// A named record backed by an attribute map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DynamicRecord {
    name: String,
    #[serde(default)]
    fields: FxHashMap<AttributeKey, DynamicField>,
}

impl DynamicRecord {
    /// Create an empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FxHashMap::default(),
        }
    }

    /// Add a public field.
    #[must_use]
    pub fn with(mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value, Access::Public);
        self
    }

    /// Add a private field.
    #[must_use]
    pub fn with_private(mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value, Access::Private);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>, access: Access) {
        self.fields.insert(
            key.into(),
            DynamicField {
                value: value.into(),
                access,
            },
        );
    }

    /// Get a field's value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.fields.get(key).map(|f| &f.value)
    }

    /// Get an integer field, or `default` if missing or not an integer.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(AttributeValue::as_int).unwrap_or(default)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for DynamicRecord {
    fn record_name(&self) -> &str {
        &self.name
    }

    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        let field = self.fields.get_mut(name)?;
        let slot = match &mut field.value {
            AttributeValue::Int(v) => Slot::I64(v),
            other => Slot::Other(other.kind()),
        };
        Some(Field {
            access: field.access,
            slot,
        })
    }
}
