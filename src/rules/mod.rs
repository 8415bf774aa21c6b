//! # Blocking rules.
//!
//! This module provides the rule-set side of the predicate:
//! - [`RuleSet`] - immutable collection of name patterns and variable names
//!   parsed from raw line-separated configuration text
//! - [`PatternError`] - typed "pattern is invalid" error, distinguished from
//!   "no match" so the fail-open policy can tell them apart

mod pattern;
mod set;

pub use pattern::PatternError;
pub use set::RuleSet;

pub(crate) use pattern::matches_full;
