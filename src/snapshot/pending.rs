//! # Pending-admission queue: items approved but not yet started.
//!
//! [`QueueItem`] is both the candidate being evaluated and the shape of the
//! items in the [`PendingSnapshot`] it is checked against. Pending items
//! participate in name matching only; variable matching reads the candidate's
//! [`Parameter`]s instead.
//!
//! An item never blocks itself: the scan over the pending snapshot skips the
//! entry whose [`QueueItem::id`] equals the candidate's.

use std::sync::Arc;

use crate::snapshot::work::TaskRef;

/// A parameter declared on a queue item.
///
/// The value is kept raw, as the host encoded it; hosts frequently wrap
/// values in single quotes (`branchName='feature-x'`), so
/// [`Parameter::unquoted_value`] is the view the predicate matches with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Creates a parameter from a name and a raw (possibly quoted) value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value exactly as declared.
    pub fn raw_value(&self) -> &str {
        &self.value
    }

    /// Returns the value with at most one leading and one trailing `'`
    /// stripped, each independently of the other.
    ///
    /// # Example
    /// ```
    /// use taskgate::Parameter;
    ///
    /// assert_eq!(Parameter::new("b", "'someBranch'").unquoted_value(), "someBranch");
    /// assert_eq!(Parameter::new("b", "plain").unquoted_value(), "plain");
    /// assert_eq!(Parameter::new("b", "'half").unquoted_value(), "half");
    /// ```
    pub fn unquoted_value(&self) -> &str {
        let v = self.value.strip_prefix('\'').unwrap_or(&self.value);
        v.strip_suffix('\'').unwrap_or(v)
    }
}

/// # A unit of work sitting in the queue.
///
/// Covers both the candidate under evaluation and already-admitted items in
/// the pending snapshot.
pub trait QueueItem: Send + Sync {
    /// Returns a stable identity for self-exclusion during the pending scan.
    fn id(&self) -> u64;

    /// Returns the task this item will run.
    fn task(&self) -> TaskRef;

    /// Returns the item's declared parameters.
    fn parameters(&self) -> Vec<Parameter>;

    /// Returns a display name for diagnostics.
    fn display_name(&self) -> String {
        self.task().full_name()
    }
}

/// Shared handle to a [`QueueItem`].
pub type ItemRef = Arc<dyn QueueItem>;

/// # Point-in-time view of admitted-but-not-started items.
pub trait PendingSnapshot: Send + Sync {
    /// Returns the pending items, in scan order.
    fn items(&self) -> Vec<ItemRef>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote_strips_matched_pair() {
        assert_eq!(Parameter::new("k", "'v'").unquoted_value(), "v");
    }

    #[test]
    fn test_unquote_strips_each_side_independently() {
        assert_eq!(Parameter::new("k", "'v").unquoted_value(), "v");
        assert_eq!(Parameter::new("k", "v'").unquoted_value(), "v");
    }

    #[test]
    fn test_unquote_leaves_inner_quotes() {
        assert_eq!(Parameter::new("k", "a'b").unquoted_value(), "a'b");
        assert_eq!(Parameter::new("k", "'a'b'").unquoted_value(), "a'b");
    }

    #[test]
    fn test_unquote_plain_value_untouched() {
        assert_eq!(Parameter::new("k", "plain").unquoted_value(), "plain");
        assert_eq!(Parameter::new("k", "").unquoted_value(), "");
    }
}
