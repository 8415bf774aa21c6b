//! # The blocking predicate.
//!
//! [`BlockMonitor`] answers one question for the host scheduler: may this
//! candidate item start now, or does some running or already-admitted work
//! block it? The host calls [`BlockMonitor::evaluate`] once per pending item
//! per scheduling tick, on its own thread; the monitor runs to completion
//! synchronously, spawns nothing, takes no locks, and owns no shared state.
//!
//! ## Scan order
//! Two passes:
//! 1. **Running work** — every node, every slot (fixed, then one-off). For a
//!    busy slot, name rules are checked first; variable rules only if no
//!    name rule hit that slot. First hit in traversal order wins.
//! 2. **Pending work** — only if pass 1 found nothing and name patterns are
//!    configured: every admitted-but-not-started item except the candidate
//!    itself, against the name patterns.
//!
//! ## Failure policy
//! A malformed rule pattern or an environment read failure fails *open*: the
//! whole call returns [`Decision::Clear`] so a configuration typo can never
//! deadlock the scheduler. The one fatal condition is variable rules with no
//! candidate supplied — that is a caller bug, reported as
//! [`EvalError::MissingCandidate`], never swallowed.

use std::collections::HashMap;

use tracing::{debug, error, warn};

use crate::engine::decision::Decision;
use crate::error::EvalError;
use crate::rules::{matches_full, RuleSet};
use crate::snapshot::{ExecutionSnapshot, PendingSnapshot, QueueItem, SlotRef, Task, TaskRef};

/// Aborts the scan early without producing a blocker.
enum Abort {
    /// Fail open: the whole call resolves to "not blocked".
    FailOpen,
    /// Caller-contract violation; surfaces as [`EvalError::MissingCandidate`].
    MissingCandidate,
}

/// # Admission monitor over a fixed rule set.
///
/// Stateless between calls; a monitor (and the [`RuleSet`] inside it) can be
/// reused across any number of evaluations, or rebuilt per decision — the
/// construction cost is a couple of `Vec`s.
///
/// # Example
/// ```
/// use taskgate::{BlockMonitor, RuleSet};
///
/// let monitor = BlockMonitor::new(RuleSet::parse("deploy-.*", ""));
/// // evaluate(candidate, &execution, &pending) each scheduling tick...
/// ```
pub struct BlockMonitor {
    rules: RuleSet,
}

impl BlockMonitor {
    /// Creates a monitor over the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the rule set this monitor evaluates.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Decides whether `candidate` is blocked by running or pending work.
    ///
    /// ### Parameters
    /// - `candidate`: the pending item under evaluation, or `None` for a
    ///   diagnostic re-check (permitted only when no variable rules are
    ///   configured)
    /// - `exec`: point-in-time view of the compute topology
    /// - `pending`: point-in-time view of admitted-but-not-started items
    ///
    /// With an empty rule set this returns [`Decision::Clear`] immediately,
    /// without touching either snapshot.
    ///
    /// # Errors
    /// [`EvalError::MissingCandidate`] if variable rules are configured and
    /// `candidate` is `None`.
    pub fn evaluate(
        &self,
        candidate: Option<&dyn QueueItem>,
        exec: &dyn ExecutionSnapshot,
        pending: &dyn PendingSnapshot,
    ) -> Result<Decision, EvalError> {
        if self.rules.is_empty() {
            return Ok(Decision::Clear);
        }

        match self.scan_running(candidate, exec) {
            Ok(Some(blocker)) => return Ok(Decision::Blocked(blocker)),
            Ok(None) => {}
            Err(Abort::FailOpen) => return Ok(Decision::Clear),
            Err(Abort::MissingCandidate) => return Err(EvalError::MissingCandidate),
        }

        Ok(match self.scan_pending(candidate, pending) {
            Some(blocker) => Decision::Blocked(blocker),
            None => Decision::Clear,
        })
    }

    /// Pass 1: every node, every slot, fixed slots before one-off slots.
    fn scan_running(
        &self,
        candidate: Option<&dyn QueueItem>,
        exec: &dyn ExecutionSnapshot,
    ) -> Result<Option<TaskRef>, Abort> {
        let name_patterns = self.rules.name_patterns().unwrap_or(&[]);
        let variable_names = self.rules.variable_names().unwrap_or(&[]);

        for node in exec.nodes() {
            let mut slots: Vec<SlotRef> = node.slots();
            slots.extend(node.one_off_slots());

            for slot in slots {
                if !slot.is_busy() {
                    continue;
                }
                // The slot may have gone idle between the two reads.
                let Some(occupant) = slot.occupant() else {
                    continue;
                };
                let owner = occupant.resolve_owner().clone();
                debug!(
                    node = %node.name(),
                    task = %owner.full_name(),
                    "inspecting busy slot"
                );

                if !name_patterns.is_empty() && name_hit(name_patterns, owner.as_ref())? {
                    return Ok(Some(owner));
                }
                if !variable_names.is_empty()
                    && self.variable_hit(variable_names, candidate, owner.as_ref())?
                {
                    return Ok(Some(owner));
                }
            }
        }
        Ok(None)
    }

    /// Checks the candidate's parameter-derived patterns against the live
    /// environment of `owner`'s in-progress builds.
    fn variable_hit(
        &self,
        variable_names: &[String],
        candidate: Option<&dyn QueueItem>,
        owner: &dyn Task,
    ) -> Result<bool, Abort> {
        let Some(item) = candidate else {
            return Err(Abort::MissingCandidate);
        };
        let params = extract_parameters(item);
        debug!(item = %item.display_name(), ?params, "candidate parameters");

        for variable in variable_names {
            // The pattern comes from the candidate itself; a candidate that
            // does not declare the variable cannot match on it.
            let Some(wanted) = params.get(variable) else {
                continue;
            };
            for build in owner.builds() {
                debug!(building = build.is_building(), "inspecting build");
                if !build.is_building() {
                    continue;
                }
                let env = match build.environment() {
                    Ok(env) => env,
                    Err(err) => {
                        error!(error = %err, "failed to read live build environment; failing open");
                        return Err(Abort::FailOpen);
                    }
                };
                let Some(live) = env.get(variable) else {
                    continue;
                };
                match matches_full(wanted, live) {
                    Ok(true) => {
                        debug!(variable = %variable, live = %live, "live environment matches; blocking");
                        return Ok(true);
                    }
                    Ok(false) => {}
                    Err(err) => {
                        warn!(error = %err, "malformed variable rule value; failing open");
                        return Err(Abort::FailOpen);
                    }
                }
            }
        }
        Ok(false)
    }

    /// Pass 2: admitted-but-not-started items, name patterns only.
    fn scan_pending(
        &self,
        candidate: Option<&dyn QueueItem>,
        pending: &dyn PendingSnapshot,
    ) -> Option<TaskRef> {
        let name_patterns = self.rules.name_patterns()?;
        if name_patterns.is_empty() {
            return None;
        }
        let candidate_id = candidate.map(|item| item.id());

        for item in pending.items() {
            // An item never blocks itself.
            if candidate_id == Some(item.id()) {
                continue;
            }
            let task = item.task();
            match name_hit(name_patterns, task.as_ref()) {
                Ok(true) => return Some(task),
                Ok(false) => {}
                Err(_) => return None,
            }
        }
        None
    }
}

/// Matches `task`'s fully-qualified name against each pattern in declared
/// order. A malformed pattern aborts fail-open.
fn name_hit(patterns: &[String], task: &dyn Task) -> Result<bool, Abort> {
    let full_name = task.full_name();
    for pattern in patterns {
        match matches_full(pattern, &full_name) {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(err) => {
                warn!(error = %err, "malformed name rule; failing open");
                return Err(Abort::FailOpen);
            }
        }
    }
    Ok(false)
}

/// Flattens the candidate's declared parameters into variable → unquoted
/// value.
fn extract_parameters(item: &dyn QueueItem) -> HashMap<String, String> {
    item.parameters()
        .iter()
        .map(|p| (p.name().to_owned(), p.unquoted_value().to_owned()))
        .collect()
}
