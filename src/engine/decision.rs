//! # Admission decision.
//!
//! The outcome of one predicate evaluation: either the candidate is clear to
//! start, or it is blocked and the decision carries the blocking task as
//! evidence. The host surfaces the blocked case as a human-readable
//! "blocked by X" status line; [`Decision`]'s `Display` renders exactly that.

use std::fmt;

use crate::snapshot::TaskRef;

/// Outcome of [`BlockMonitor::evaluate`](crate::BlockMonitor::evaluate).
#[derive(Clone)]
pub enum Decision {
    /// No running or pending work blocks the candidate.
    Clear,

    /// The candidate must wait; the carried task is the first blocker
    /// encountered in scan order.
    Blocked(TaskRef),
}

impl Decision {
    /// Returns `true` if the candidate must be held back.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Blocked(_))
    }

    /// Returns the blocking task, if any.
    pub fn blocker(&self) -> Option<&TaskRef> {
        match self {
            Decision::Clear => None,
            Decision::Blocked(task) => Some(task),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Clear => write!(f, "not blocked"),
            Decision::Blocked(task) => write!(f, "blocked by {}", task.full_name()),
        }
    }
}

impl fmt::Debug for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Clear => f.write_str("Clear"),
            Decision::Blocked(task) => f.debug_tuple("Blocked").field(&task.full_name()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{BuildRef, Task};
    use std::sync::Arc;

    struct Named(&'static str);

    impl Task for Named {
        fn full_name(&self) -> String {
            self.0.to_owned()
        }

        fn builds(&self) -> Vec<BuildRef> {
            Vec::new()
        }
    }

    #[test]
    fn test_clear_display() {
        assert_eq!(Decision::Clear.to_string(), "not blocked");
        assert!(!Decision::Clear.is_blocked());
        assert!(Decision::Clear.blocker().is_none());
    }

    #[test]
    fn test_blocked_display_names_the_task() {
        let decision = Decision::Blocked(Arc::new(Named("ci/nightly")));
        assert_eq!(decision.to_string(), "blocked by ci/nightly");
        assert!(decision.is_blocked());
        assert_eq!(decision.blocker().unwrap().full_name(), "ci/nightly");
    }
}
