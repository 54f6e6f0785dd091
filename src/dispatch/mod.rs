//! Effect dispatch.
//!
//! - `Dispatcher`: applies an effect to one target or a batch of targets
//! - `Outcome`: what happened to each target
//! - `OutcomeSink`: where outcomes are reported (`tracing` by default)
//! - `DispatchConfig`: fault policy and log levels
//!
//! ## Decision order
//!
//! 1. Receivers get the effect handed over unchanged.
//! 2. Anything that is not a mutable record is skipped as the wrong shape.
//! 3. The record field named by the effect's attribute is looked up;
//!    missing or private fields are skipped.
//! 4. Signed integer fields get the magnitude added. Any other kind is a
//!    `ContractViolation` and ends the run.

mod config;
mod error;
mod outcome;
mod sink;
mod dispatcher;

pub use config::{DispatchConfig, FaultPolicy};
pub use error::ContractViolation;
pub use outcome::{Outcome, Outcomes, Skip};
pub use sink::{OutcomeLog, OutcomeSink, TracingSink};
pub use dispatcher::Dispatcher;
