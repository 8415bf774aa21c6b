//! # Blocking predicate engine.
//!
//! This module provides the admission decision itself:
//! - [`BlockMonitor`] - evaluates a candidate against the execution and
//!   pending snapshots under a [`RuleSet`](crate::RuleSet)
//! - [`Decision`] - the outcome, either clear or blocked with evidence

mod decision;
mod monitor;

pub use decision::Decision;
pub use monitor::BlockMonitor;
