//! # Tasks, builds, and the work unit occupying a slot.
//!
//! A busy slot holds a [`WorkUnit`]: either a plain task, or one member of a
//! composite (matrix/fan-out) task. Rule matching always targets the *owning*
//! task, so a composite member collapses one level to its parent via
//! [`WorkUnit::resolve_owner`]. This is a closed variant on purpose — the
//! alternative, runtime type inspection of the occupant, hides the single
//! unwrap step that actually matters here.
//!
//! [`Task`] and [`Build`] are the read-only views the host scheduler
//! provides. The common handle types are [`TaskRef`] and [`BuildRef`]
//! (`Arc<dyn …>`), suitable for sharing across the scan and for returning as
//! blocker evidence in a decision.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::EnvError;

/// Live environment of an in-progress build: variable name → value.
pub type EnvVars = HashMap<String, String>;

/// # Read-only view of a schedulable task.
///
/// Implementations are point-in-time views; the build history may grow or
/// shrink between two calls within one scan.
pub trait Task: Send + Sync {
    /// Returns the fully-qualified task name rule patterns match against.
    fn full_name(&self) -> String;

    /// Returns the task's build history, most recent first.
    fn builds(&self) -> Vec<BuildRef>;
}

/// Shared handle to a [`Task`].
pub type TaskRef = Arc<dyn Task>;

/// # Read-only view of one build of a task.
pub trait Build: Send + Sync {
    /// Returns `true` while the build is executing.
    ///
    /// Only in-progress builds contribute to variable matching; a finished
    /// build's environment must never block a candidate.
    fn is_building(&self) -> bool;

    /// Fetches the build's live environment variables.
    ///
    /// Fallible: the backing store can disappear or the lookup can be
    /// interrupted mid-scan. The predicate fails open on any [`EnvError`].
    fn environment(&self) -> Result<EnvVars, EnvError>;
}

/// Shared handle to a [`Build`].
pub type BuildRef = Arc<dyn Build>;

/// The unit of work occupying a busy slot.
#[derive(Clone)]
pub enum WorkUnit {
    /// A plain task executing directly.
    Simple(TaskRef),

    /// One member of a composite (matrix/fan-out) task.
    ///
    /// The member executes in the slot, but rule matching and build-history
    /// lookups target the owning parent.
    CompositeChild {
        /// The member actually occupying the slot.
        child: TaskRef,
        /// The composite task that owns the member.
        parent: TaskRef,
    },
}

impl WorkUnit {
    /// Resolves the occupant to its top-level owning task.
    ///
    /// Collapses exactly one level of composite indirection; a
    /// [`WorkUnit::Simple`] occupant is its own owner.
    pub fn resolve_owner(&self) -> &TaskRef {
        match self {
            WorkUnit::Simple(task) => task,
            WorkUnit::CompositeChild { parent, .. } => parent,
        }
    }

    /// Returns the task physically running in the slot.
    pub fn executing(&self) -> &TaskRef {
        match self {
            WorkUnit::Simple(task) => task,
            WorkUnit::CompositeChild { child, .. } => child,
        }
    }
}
