//! The explicit capability query.

use std::fmt;

use super::{Receiver, Record};

/// Shape of a target, as seen by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Receiver,
    Record,
    Frozen,
    Opaque,
}

/// A borrowed target, tagged with the capability it offers.
///
/// Targets are borrowed, never owned: the caller keeps the values alive
/// across any number of effect applications.
pub enum Target<'a> {
    /// Handles effects itself.
    Receiver(&'a mut dyn Receiver),
    /// Exposes named fields for mutation.
    Record(&'a mut dyn Record),
    /// A record behind a shared borrow; nothing can be written.
    Frozen(&'a dyn Record),
    /// Not a structured record at all.
    Opaque(&'a dyn fmt::Debug),
}

impl<'a> Target<'a> {
    /// Wrap a receiver.
    pub fn receiver<R: Receiver>(receiver: &'a mut R) -> Self {
        Target::Receiver(receiver)
    }

    /// Wrap a mutable record.
    pub fn record<R: Record>(record: &'a mut R) -> Self {
        Target::Record(record)
    }

    /// Wrap a shared record.
    pub fn frozen<R: Record>(record: &'a R) -> Self {
        Target::Frozen(record)
    }

    /// Wrap any other value.
    pub fn opaque<T: fmt::Debug>(value: &'a T) -> Self {
        Target::Opaque(value)
    }

    /// Shape of this target.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Target::Receiver(_) => Shape::Receiver,
            Target::Record(_) => Shape::Record,
            Target::Frozen(_) => Shape::Frozen,
            Target::Opaque(_) => Shape::Opaque,
        }
    }

    /// Name used when reporting outcomes.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Target::Receiver(r) => r.receiver_name().to_string(),
            Target::Record(r) => r.record_name().to_string(),
            Target::Frozen(r) => r.record_name().to_string(),
            Target::Opaque(v) => format!("{v:?}"),
        }
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Target")
            .field(&self.shape())
            .field(&self.name())
            .finish()
    }
}
