//! # Snapshot seams the predicate reads through.
//!
//! The engine never reaches into ambient scheduler state; everything it
//! inspects arrives as an explicit parameter behind one of these traits:
//! - [`ExecutionSnapshot`] / [`Node`] / [`Slot`] - the compute topology and
//!   its busy/idle execution slots
//! - [`Task`] / [`Build`] / [`WorkUnit`] - running work, its owning task,
//!   and the task's build history with live environments
//! - [`PendingSnapshot`] / [`QueueItem`] - items admitted but not yet started
//!
//! All of it is externally owned and **volatile**: the host scheduler keeps
//! mutating while a scan is in flight, so every accessor here is a
//! best-effort point-in-time read. Accessors that can race a state change
//! return `Option` or `Result` and the engine treats a vanished entity as
//! "no match", never as a failure.

mod exec;
mod pending;
mod work;

pub use exec::{ExecutionSnapshot, Node, NodeRef, Slot, SlotRef};
pub use pending::{ItemRef, Parameter, PendingSnapshot, QueueItem};
pub use work::{Build, BuildRef, EnvVars, Task, TaskRef, WorkUnit};
