//! # taskgate
//!
//! **Taskgate** is an admission-control predicate for task schedulers.
//!
//! Given a live snapshot of what is executing and what is queued but not yet
//! started, plus a set of user-declared blocking rules, it decides whether a
//! candidate unit of work must be held back — and returns the blocking task
//! as evidence for a "blocked by X" status line. The crate is designed as a
//! building block: the host scheduler calls the predicate once per pending
//! item per scheduling tick and keeps full ownership of queues, executors,
//! and rule-string persistence.
//!
//! ## Architecture
//! ```text
//!          raw configuration text            host scheduler state
//!      (names block, variables block)     (volatile, externally owned)
//!                   │                                  │
//!                   ▼                                  ▼
//!           ┌───────────────┐            ┌───────────────────────────┐
//!           │    RuleSet    │            │ ExecutionSnapshot         │
//!           │  (immutable)  │            │   Node ─► Slot ─► WorkUnit│
//!           └───────┬───────┘            │            Task ─► Build  │
//!                   │                    ├───────────────────────────┤
//!                   ▼                    │ PendingSnapshot           │
//!           ┌───────────────┐            │   QueueItem (+ Parameter) │
//!           │ BlockMonitor  │◄───────────┴───────────────────────────┘
//!           │  evaluate()   │◄────────── candidate: Option<&dyn QueueItem>
//!           └───────┬───────┘
//!                   ▼
//!        Result<Decision, EvalError>
//!          Clear │ Blocked(TaskRef)
//! ```
//!
//! ### Evaluation
//! ```text
//! evaluate(candidate, exec, pending)
//!   ├─ rules empty ─► Clear (snapshots never touched)
//!   ├─ pass 1: each node, each slot (fixed, then one-off), if busy:
//!   │    ├─ resolve occupant to owning task (one composite level)
//!   │    ├─ name rules, declared order, full-string match ─► Blocked
//!   │    └─ variable rules (if no name hit on this slot):
//!   │         candidate parameter = pattern, in-progress build's live
//!   │         environment = target ─► Blocked
//!   ├─ pass 2: each pending item except the candidate, name rules ─► Blocked
//!   └─ otherwise ─► Clear
//!
//! fail-open (whole call ─► Clear): malformed pattern, environment read error
//! fatal (Err):                     variable rules with no candidate supplied
//! ```
//!
//! ## Features
//! | Area          | Description                                                  | Key types / traits                          |
//! |---------------|--------------------------------------------------------------|---------------------------------------------|
//! | **Rules**     | Line-separated name patterns and variable names.             | [`RuleSet`], [`PatternError`]               |
//! | **Snapshots** | Injected read-only views of scheduler state.                 | [`ExecutionSnapshot`], [`PendingSnapshot`]  |
//! | **Engine**    | The admission predicate and its outcome.                     | [`BlockMonitor`], [`Decision`]              |
//! | **Errors**    | Typed fatal and environment errors.                          | [`EvalError`], [`EnvError`]                 |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use taskgate::{
//!     BlockMonitor, BuildRef, Decision, ExecutionSnapshot, ItemRef, Node, NodeRef,
//!     PendingSnapshot, RuleSet, Slot, SlotRef, Task, WorkUnit,
//! };
//!
//! // Minimal host-side snapshot implementations.
//! struct Job(&'static str);
//! impl Task for Job {
//!     fn full_name(&self) -> String { self.0.to_owned() }
//!     fn builds(&self) -> Vec<BuildRef> { Vec::new() }
//! }
//!
//! struct Busy(WorkUnit);
//! impl Slot for Busy {
//!     fn is_busy(&self) -> bool { true }
//!     fn occupant(&self) -> Option<WorkUnit> { Some(self.0.clone()) }
//! }
//!
//! struct Machine(Vec<SlotRef>);
//! impl Node for Machine {
//!     fn name(&self) -> String { "master".to_owned() }
//!     fn slots(&self) -> Vec<SlotRef> { self.0.clone() }
//! }
//!
//! struct Topology(Vec<NodeRef>);
//! impl ExecutionSnapshot for Topology {
//!     fn nodes(&self) -> Vec<NodeRef> { self.0.clone() }
//! }
//!
//! struct NoPending;
//! impl PendingSnapshot for NoPending {
//!     fn items(&self) -> Vec<ItemRef> { Vec::new() }
//! }
//!
//! let running = WorkUnit::Simple(Arc::new(Job("deploy-prod")));
//! let topology = Topology(vec![Arc::new(Machine(vec![Arc::new(Busy(running))]))]);
//!
//! let monitor = BlockMonitor::new(RuleSet::parse("deploy-.*", ""));
//! let decision = monitor.evaluate(None, &topology, &NoPending).unwrap();
//!
//! assert!(decision.is_blocked());
//! assert_eq!(decision.to_string(), "blocked by deploy-prod");
//!
//! // No rules at all: trivially clear, snapshots untouched.
//! let open = BlockMonitor::new(RuleSet::parse("", ""));
//! assert!(matches!(open.evaluate(None, &topology, &NoPending), Ok(Decision::Clear)));
//! ```

mod engine;
mod error;
mod rules;
mod snapshot;

// ---- Public re-exports ----

pub use engine::{BlockMonitor, Decision};
pub use error::{EnvError, EvalError};
pub use rules::{PatternError, RuleSet};
pub use snapshot::{
    Build, BuildRef, EnvVars, ExecutionSnapshot, ItemRef, Node, NodeRef, Parameter,
    PendingSnapshot, QueueItem, Slot, SlotRef, Task, TaskRef, WorkUnit,
};
