//! Effect values.
//!
//! An `Effect` is a named, signed modifier aimed at one attribute of a
//! target. Effects are built once, broadcast, and dropped; the dispatcher
//! decides how each target takes them.

mod effect;

pub use effect::Effect;
