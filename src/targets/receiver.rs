//! Receiver capability.

use crate::effects::Effect;

/// A target that decides for itself how an effect applies.
///
/// The dispatcher hands every effect to `receive` unchanged and never
/// touches the receiver's fields, even when the receiver ignores the
/// effect.
pub trait Receiver {
    /// Apply `effect` using the receiver's own rules.
    fn receive(&mut self, effect: &Effect);

    /// Name used when reporting outcomes.
    fn receiver_name(&self) -> &str;
}
