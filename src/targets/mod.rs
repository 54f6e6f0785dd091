//! Target shapes.
//!
//! A target takes an effect in one of two ways:
//! - `Receiver`: the target handles the effect itself
//! - `Record`: the target exposes named fields and the dispatcher adds
//!   the magnitude to the matching signed integer field
//!
//! `Target` makes the choice explicit: callers wrap each value in the
//! variant matching what it can do, and the dispatcher queries that
//! variant rather than probing the value.

mod receiver;
mod record;
mod value;
mod dynamic;
mod target;

pub use receiver::Receiver;
pub use record::{Access, Field, FieldKind, Record, Slot};
pub use value::{AttributeKey, AttributeValue};
pub use dynamic::DynamicRecord;
pub use target::{Shape, Target};
