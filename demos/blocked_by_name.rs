//! # Example: blocked_by_name
//!
//! Minimal example of the name-rule path: one busy slot whose task name
//! matches a configured pattern blocks the candidate.
//!
//! Demonstrates how to:
//! - Implement the snapshot traits over plain in-memory host state.
//! - Parse a [`RuleSet`] from raw line-separated configuration text.
//! - Evaluate a candidate with [`BlockMonitor`] and render the decision.
//!
//! ## Run
//! ```bash
//! cargo run --example blocked_by_name
//! ```

use std::sync::Arc;

use taskgate::{
    BlockMonitor, BuildRef, ExecutionSnapshot, ItemRef, Node, NodeRef, PendingSnapshot, RuleSet,
    Slot, SlotRef, Task, WorkUnit,
};

struct Job(&'static str);

impl Task for Job {
    fn full_name(&self) -> String {
        self.0.to_owned()
    }

    fn builds(&self) -> Vec<BuildRef> {
        Vec::new()
    }
}

struct BusySlot(WorkUnit);

impl Slot for BusySlot {
    fn is_busy(&self) -> bool {
        true
    }

    fn occupant(&self) -> Option<WorkUnit> {
        Some(self.0.clone())
    }
}

struct Machine {
    name: &'static str,
    slots: Vec<SlotRef>,
}

impl Node for Machine {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    fn slots(&self) -> Vec<SlotRef> {
        self.slots.clone()
    }
}

struct Topology(Vec<NodeRef>);

impl ExecutionSnapshot for Topology {
    fn nodes(&self) -> Vec<NodeRef> {
        self.0.clone()
    }
}

struct NoPending;

impl PendingSnapshot for NoPending {
    fn items(&self) -> Vec<ItemRef> {
        Vec::new()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // 1. One node, one busy slot running "deploy-prod"
    let running = WorkUnit::Simple(Arc::new(Job("deploy-prod")));
    let topology = Topology(vec![Arc::new(Machine {
        name: "master",
        slots: vec![Arc::new(BusySlot(running))],
    })]);

    // 2. Rules as they would arrive from configuration: one pattern per line
    let rules = RuleSet::parse("deploy-.*\nnightly-cleanup", "");

    // 3. Evaluate; no candidate needed for a pure name-rule check
    let monitor = BlockMonitor::new(rules);
    let decision = monitor
        .evaluate(None, &topology, &NoPending)
        .expect("no variable rules configured, so no candidate is required");

    println!("decision: {decision}");
}
