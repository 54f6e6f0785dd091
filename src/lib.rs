//! # rust-spellcast
//!
//! Apply named effects to a heterogeneous set of targets.
//!
//! ## Design Principles
//!
//! 1. **Explicit Capabilities**: Each target is wrapped in a `Target`
//!    variant saying what it can do. The dispatcher asks the variant,
//!    never the value.
//!
//! 2. **Two Paths**: Receivers apply effects themselves. Records expose
//!    named fields, and the dispatcher adds the magnitude to the matching
//!    signed integer field.
//!
//! 3. **Outcomes Are Values**: Every application yields an `Outcome` and
//!    is reported to an injected `OutcomeSink`. Skips are normal; only a
//!    field of the wrong kind is fatal.
//!
//! ## Modules
//!
//! - `effects`: The `Effect` value
//! - `targets`: Receiver and record shapes, runtime records
//! - `dispatch`: Dispatcher, outcomes, sinks, configuration
//! - `bestiary`: Sample creatures and the skirmish scenario

pub mod effects;
pub mod targets;
pub mod dispatch;
pub mod bestiary;

// Re-export commonly used types
pub use crate::effects::Effect;

pub use crate::targets::{
    Access, AttributeKey, AttributeValue, DynamicRecord, Field, FieldKind,
    Receiver, Record, Shape, Slot, Target,
};

pub use crate::dispatch::{
    ContractViolation, DispatchConfig, Dispatcher, FaultPolicy,
    Outcome, OutcomeLog, OutcomeSink, Outcomes, Skip, TracingSink,
};
