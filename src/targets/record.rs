//! Plain records with named fields.
//!
//! A record describes its fields on request: given a name, it returns the
//! field's access level and a typed mutable slot. Only signed integer
//! slots can take an effect; every other kind is reported through
//! `Slot::Other` so the dispatcher can tell "wrong kind" apart from
//! "no such field".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the dispatcher may write a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// Writable from outside the record.
    Public,
    /// Internal state; effects never write it.
    Private,
}

impl Access {
    /// Check if the field is internal to its record.
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Access::Private)
    }
}

/// Kind of a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Int8,
    Int16,
    Int32,
    Int64,
    IntSize,
    Unsigned,
    Float,
    Bool,
    Text,
    List,
    Nested,
}

impl FieldKind {
    /// Check if this kind can take an effect.
    #[must_use]
    pub const fn is_signed_integer(self) -> bool {
        matches!(
            self,
            FieldKind::Int8 | FieldKind::Int16 | FieldKind::Int32 | FieldKind::Int64 | FieldKind::IntSize
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Int8 => "i8",
            FieldKind::Int16 => "i16",
            FieldKind::Int32 => "i32",
            FieldKind::Int64 => "i64",
            FieldKind::IntSize => "isize",
            FieldKind::Unsigned => "unsigned integer",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::Text => "text",
            FieldKind::List => "list",
            FieldKind::Nested => "nested record",
        };
        f.write_str(name)
    }
}

/// Mutable view of a single field's storage.
#[derive(Debug)]
pub enum Slot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    /// A field that exists but cannot hold an effect.
    Other(FieldKind),
}

impl Slot<'_> {
    /// Kind of the underlying field.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::I8(_) => FieldKind::Int8,
            Slot::I16(_) => FieldKind::Int16,
            Slot::I32(_) => FieldKind::Int32,
            Slot::I64(_) => FieldKind::Int64,
            Slot::Isize(_) => FieldKind::IntSize,
            Slot::Other(kind) => *kind,
        }
    }

    /// Add `delta` to the field, returning `(before, after)`.
    ///
    /// The sum is taken in 64 bits and stored back at the field's own
    /// width, wrapping on overflow. Fails with the field kind when the
    /// slot is not a signed integer.
    pub fn add(self, delta: i64) -> Result<(i64, i64), FieldKind> {
        macro_rules! add_wrapping {
            ($v:expr, $ty:ty) => {{
                let before = *$v as i64;
                *$v = before.wrapping_add(delta) as $ty;
                Ok((before, *$v as i64))
            }};
        }

        match self {
            Slot::I8(v) => add_wrapping!(v, i8),
            Slot::I16(v) => add_wrapping!(v, i16),
            Slot::I32(v) => add_wrapping!(v, i32),
            Slot::I64(v) => add_wrapping!(v, i64),
            Slot::Isize(v) => add_wrapping!(v, isize),
            Slot::Other(kind) => Err(kind),
        }
    }
}

impl<'a> From<&'a mut i8> for Slot<'a> {
    fn from(v: &'a mut i8) -> Self {
        Slot::I8(v)
    }
}

impl<'a> From<&'a mut i16> for Slot<'a> {
    fn from(v: &'a mut i16) -> Self {
        Slot::I16(v)
    }
}

impl<'a> From<&'a mut i32> for Slot<'a> {
    fn from(v: &'a mut i32) -> Self {
        Slot::I32(v)
    }
}

impl<'a> From<&'a mut i64> for Slot<'a> {
    fn from(v: &'a mut i64) -> Self {
        Slot::I64(v)
    }
}

impl<'a> From<&'a mut isize> for Slot<'a> {
    fn from(v: &'a mut isize) -> Self {
        Slot::Isize(v)
    }
}

impl From<FieldKind> for Slot<'_> {
    fn from(kind: FieldKind) -> Self {
        Slot::Other(kind)
    }
}

/// A field located by name on a record.
#[derive(Debug)]
pub struct Field<'a> {
    pub access: Access,
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// A field the dispatcher may write.
    pub fn public(slot: impl Into<Slot<'a>>) -> Self {
        Self {
            access: Access::Public,
            slot: slot.into(),
        }
    }

    /// A field that exists but is internal to the record.
    pub fn private(slot: impl Into<Slot<'a>>) -> Self {
        Self {
            access: Access::Private,
            slot: slot.into(),
        }
    }

    /// Check if the dispatcher may write this field.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.access == Access::Public
    }
}

/// A structured target whose fields can be looked up by name.
///
/// Implementations match `name` exactly (case-sensitive) and return
/// `None` for names they do not have.
pub trait Record {
    /// Name used when reporting outcomes.
    fn record_name(&self) -> &str;

    /// Look up a field by exact name.
    fn field_mut(&mut self, name: &str) -> Option<Field<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_signed_widths() {
        let mut a: i8 = 10;
        let mut b: i16 = 10;
        let mut c: i32 = 10;
        let mut d: i64 = 10;
        let mut e: isize = 10;

        assert_eq!(Slot::from(&mut a).add(-3), Ok((10, 7)));
        assert_eq!(Slot::from(&mut b).add(-3), Ok((10, 7)));
        assert_eq!(Slot::from(&mut c).add(-3), Ok((10, 7)));
        assert_eq!(Slot::from(&mut d).add(-3), Ok((10, 7)));
        assert_eq!(Slot::from(&mut e).add(-3), Ok((10, 7)));
        assert_eq!((a, b, c, d, e), (7, 7, 7, 7, 7));
    }

    #[test]
    fn test_add_wraps_at_field_width() {
        let mut v: i8 = 120;
        assert_eq!(Slot::from(&mut v).add(10), Ok((120, -126)));
        assert_eq!(v, -126);

        let mut w: i16 = 0;
        assert_eq!(Slot::from(&mut w).add(70_000), Ok((0, 4464)));
    }

    #[test]
    fn test_add_other_kind_fails() {
        assert_eq!(Slot::Other(FieldKind::Text).add(1), Err(FieldKind::Text));
        assert_eq!(Slot::Other(FieldKind::Unsigned).add(1), Err(FieldKind::Unsigned));
    }

    #[test]
    fn test_slot_kind() {
        let mut v: i32 = 0;
        assert_eq!(Slot::from(&mut v).kind(), FieldKind::Int32);
        assert_eq!(Slot::from(FieldKind::Float).kind(), FieldKind::Float);
    }

    #[test]
    fn test_signed_integer_kinds() {
        assert!(FieldKind::Int8.is_signed_integer());
        assert!(FieldKind::IntSize.is_signed_integer());
        assert!(!FieldKind::Unsigned.is_signed_integer());
        assert!(!FieldKind::Float.is_signed_integer());
        assert!(!FieldKind::Nested.is_signed_integer());
    }

    #[test]
    fn test_field_access() {
        let mut v: i64 = 0;
        assert!(Field::public(&mut v).is_writable());
        assert!(!Field::private(&mut v).is_writable());
    }
}
