//! # Full-string pattern matching for blocking rules.
//!
//! Rule patterns are regular expressions matched against the *entire* target
//! string, never a substring: the pattern `block.*` matches `blockingJob` but
//! `block` alone does not. Compilation is deliberately lazy — a pattern is
//! compiled at match time, every time — so that an invalid pattern surfaces
//! as [`PatternError::Invalid`] on the exact call that touched it, and a
//! valid rule set never pays a validation pass up front.

use regex::Regex;
use thiserror::Error;

/// A rule pattern failed to compile as a regular expression.
///
/// Distinct from "compiled but did not match": the predicate fails open on
/// `Invalid` and keeps scanning on a plain non-match.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern is not valid regex syntax.
    #[error("invalid rule pattern `{pattern}`: {source}")]
    Invalid {
        /// The offending pattern, verbatim from configuration.
        pattern: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            PatternError::Invalid { .. } => "pattern_invalid",
        }
    }
}

/// Matches `text` against `pattern`, anchored at both ends.
///
/// Returns `Ok(true)` only if the whole of `text` matches. Anchoring wraps
/// the pattern as `\A(?:pattern)\z`, which preserves alternation semantics
/// (`a|ab` full-matches `ab` even though its leftmost hit would be `a`).
pub(crate) fn matches_full(pattern: &str, text: &str) -> Result<bool, PatternError> {
    let anchored = format!(r"\A(?:{pattern})\z");
    let re = Regex::new(&anchored).map_err(|source| PatternError::Invalid {
        pattern: pattern.to_owned(),
        source,
    })?;
    Ok(re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_matches() {
        assert!(matches_full("blockingJob", "blockingJob").unwrap());
    }

    #[test]
    fn test_substring_does_not_match() {
        assert!(!matches_full("blocking", "blockingJob").unwrap());
        assert!(!matches_full("Job", "blockingJob").unwrap());
    }

    #[test]
    fn test_wildcard_matches_whole_name() {
        assert!(matches_full("block.*", "blockingJob").unwrap());
        assert!(!matches_full("block.*", "otherJob").unwrap());
    }

    #[test]
    fn test_alternation_is_full_match() {
        // Leftmost-first would stop at "a"; anchoring must still accept "ab".
        assert!(matches_full("a|ab", "ab").unwrap());
    }

    #[test]
    fn test_empty_pattern_matches_only_empty_text() {
        assert!(matches_full("", "").unwrap());
        assert!(!matches_full("", "x").unwrap());
    }

    #[test]
    fn test_unbalanced_paren_is_invalid() {
        let err = matches_full("block(", "blockingJob").unwrap_err();
        assert_eq!(err.as_label(), "pattern_invalid");
        let PatternError::Invalid { pattern, .. } = err;
        assert_eq!(pattern, "block(");
    }
}
