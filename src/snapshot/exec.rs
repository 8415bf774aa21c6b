//! # Compute topology: nodes and execution slots.
//!
//! A [`Node`] is one compute machine; a [`Slot`] is one execution resource
//! on it, able to run one unit of work at a time. Nodes expose fixed slots
//! plus transient one-off slots (short-lived resources the host spins up for
//! ad-hoc work); the predicate scans both, fixed first.
//!
//! Traversal order is significant: the first matching occupant in
//! (node, slot) order is the blocker reported to the caller. There is no
//! ranking beyond "first encountered".

use std::sync::Arc;

use crate::snapshot::work::WorkUnit;

/// # One execution resource on a compute node.
///
/// Busy state and occupant are separate reads and can disagree: a slot
/// observed busy may have gone idle by the time its occupant is fetched.
/// [`Slot::occupant`] returning `None` is a normal mid-scan outcome, not an
/// error.
pub trait Slot: Send + Sync {
    /// Returns `true` if the slot was running work at the time of the read.
    fn is_busy(&self) -> bool;

    /// Returns the work unit occupying the slot, if any.
    fn occupant(&self) -> Option<WorkUnit>;
}

/// Shared handle to a [`Slot`].
pub type SlotRef = Arc<dyn Slot>;

/// # One compute node and its slots.
pub trait Node: Send + Sync {
    /// Returns the node's display name, used only for diagnostics.
    fn name(&self) -> String;

    /// Returns the node's fixed execution slots.
    fn slots(&self) -> Vec<SlotRef>;

    /// Returns transient one-off slots currently attached to the node.
    ///
    /// Defaults to none; hosts without one-off execution need not override.
    fn one_off_slots(&self) -> Vec<SlotRef> {
        Vec::new()
    }
}

/// Shared handle to a [`Node`].
pub type NodeRef = Arc<dyn Node>;

/// # Point-in-time view of everything currently executing.
///
/// Externally owned and volatile; see the [module docs](self) for the
/// consistency contract.
pub trait ExecutionSnapshot: Send + Sync {
    /// Returns the compute nodes, in scan order.
    fn nodes(&self) -> Vec<NodeRef>;
}
