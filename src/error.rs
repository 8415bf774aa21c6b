//! Error types used by the taskgate predicate.
//!
//! This module defines two error enums:
//!
//! - [`EvalError`] — fatal caller-contract violations raised by
//!   [`BlockMonitor::evaluate`](crate::BlockMonitor::evaluate).
//! - [`EnvError`] — failures reported by a snapshot when fetching the live
//!   environment of an in-progress build.
//!
//! Both types provide an `as_label` helper for logging/metrics. Note that
//! most failure modes of the predicate are *not* errors at all: a malformed
//! rule pattern or an environment read failure fails open (the call returns
//! "not blocked") so that a configuration typo can never jam the scheduler.

use thiserror::Error;

/// # Fatal errors returned by the predicate.
///
/// These indicate a programming error in the caller rather than an
/// environmental condition; they are never swallowed into a "not blocked"
/// decision.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EvalError {
    /// Variable rules are configured but no candidate item was supplied.
    ///
    /// Variable matching sources its patterns from the candidate's own
    /// parameters, so it is only meaningful when evaluating a real pending
    /// item. A caller doing a diagnostic re-check without a candidate must
    /// not configure variable rules.
    #[error("variable rules configured but no candidate item was supplied")]
    MissingCandidate,
}

impl EvalError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskgate::EvalError;
    ///
    /// assert_eq!(EvalError::MissingCandidate.as_label(), "eval_missing_candidate");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EvalError::MissingCandidate => "eval_missing_candidate",
        }
    }
}

/// # Errors reported by a build-environment fetch.
///
/// Returned by [`Build::environment`](crate::Build::environment). The
/// predicate converts any of these into a fail-open "not blocked" decision
/// for the whole call, logged at error level.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EnvError {
    /// The environment could not be read (backing store unavailable, slot
    /// torn down mid-read, and so on).
    #[error("failed to read build environment: {reason}")]
    Io {
        /// Human-readable description of the underlying failure.
        reason: String,
    },

    /// The lookup was interrupted by the host scheduler.
    #[error("build environment lookup interrupted")]
    Interrupted,
}

impl EnvError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EnvError::Io { .. } => "env_io",
            EnvError::Interrupted => "env_interrupted",
        }
    }
}
