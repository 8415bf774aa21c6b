//! # Rule set parsed from raw configuration text.
//!
//! [`RuleSet`] holds the two rule categories the predicate understands:
//! - **name patterns** — regular expressions matched against the
//!   fully-qualified name of a running or queued task;
//! - **variable names** — environment-variable names whose match pattern is
//!   sourced dynamically from the candidate item's own parameters.
//!
//! Both come from free-text configuration blocks, one entry per line,
//! verbatim (no escaping syntax). A blank or whitespace-only block yields an
//! *absent* category rather than an empty one; when both categories are
//! absent the predicate short-circuits to "not blocked" without touching any
//! snapshot.
//!
//! # Example
//! ```
//! use taskgate::RuleSet;
//!
//! let rules = RuleSet::parse("deploy-.*\nnightly", "branchName");
//! assert_eq!(rules.name_patterns().unwrap().len(), 2);
//! assert_eq!(rules.variable_names().unwrap(), ["branchName"]);
//! assert!(!rules.is_empty());
//!
//! assert!(RuleSet::parse("", "  \n ").is_empty());
//! ```

/// Immutable blocking-rule collection.
///
/// Construction is cheap and never fails: patterns are not compiled or
/// validated here. Invalid regex syntax surfaces lazily at match time and is
/// treated as a fail-open condition for that one evaluation, not as a
/// construction error. Instances carry no interior state and can be reused
/// across any number of evaluations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    name_patterns: Option<Vec<String>>,
    variable_names: Option<Vec<String>>,
}

impl RuleSet {
    /// Parses the two raw configuration blocks into a rule set.
    ///
    /// Each block is split on line breaks; every line is one entry, kept
    /// verbatim. A blank/whitespace-only block produces an absent category
    /// (`None`), distinguished from a present-but-empty one.
    ///
    /// ### Parameters
    /// - `raw_names`: line-separated task-name regular expressions
    /// - `raw_variables`: line-separated environment-variable names
    pub fn parse(raw_names: &str, raw_variables: &str) -> Self {
        Self {
            name_patterns: split_entries(raw_names),
            variable_names: split_entries(raw_variables),
        }
    }

    /// Returns the configured name patterns, in declaration order.
    pub fn name_patterns(&self) -> Option<&[String]> {
        self.name_patterns.as_deref()
    }

    /// Returns the configured variable names, in declaration order.
    pub fn variable_names(&self) -> Option<&[String]> {
        self.variable_names.as_deref()
    }

    /// Returns `true` when both categories are absent.
    ///
    /// An empty rule set makes the predicate trivially "not blocked".
    pub fn is_empty(&self) -> bool {
        self.name_patterns.is_none() && self.variable_names.is_none()
    }
}

fn split_entries(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_absent() {
        let rules = RuleSet::parse("", "");
        assert!(rules.name_patterns().is_none());
        assert!(rules.variable_names().is_none());
        assert!(rules.is_empty());
    }

    #[test]
    fn test_whitespace_only_input_is_absent() {
        let rules = RuleSet::parse("   \n\t\n", "  ");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_single_category_is_not_empty() {
        assert!(!RuleSet::parse("job", "").is_empty());
        assert!(!RuleSet::parse("", "branchName").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let rules = RuleSet::parse("b\na\nc", "");
        assert_eq!(rules.name_patterns().unwrap(), ["b", "a", "c"]);
    }

    #[test]
    fn test_lines_are_kept_verbatim() {
        // No trimming of individual entries; spaces are part of the pattern.
        let rules = RuleSet::parse(" padded \nplain", "");
        assert_eq!(rules.name_patterns().unwrap(), [" padded ", "plain"]);
    }

    #[test]
    fn test_crlf_input() {
        let rules = RuleSet::parse("one\r\ntwo\r\n", "");
        assert_eq!(rules.name_patterns().unwrap(), ["one", "two"]);
    }
}
