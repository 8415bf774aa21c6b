//! # Example: blocked_by_variable
//!
//! The variable-rule path: the candidate declares `branchName='feature-x'`,
//! and a running job's in-progress build carries the same `branchName` in
//! its live environment, so the candidate is held back.
//!
//! Demonstrates how to:
//! - Provide build history and live environments through [`Build`].
//! - Declare candidate parameters (quoted values are unquoted for matching).
//! - Handle the fatal [`EvalError::MissingCandidate`] contract.
//!
//! ## Run
//! ```bash
//! cargo run --example blocked_by_variable
//! ```

use std::sync::Arc;

use taskgate::{
    BlockMonitor, Build, BuildRef, EnvError, EnvVars, ExecutionSnapshot, ItemRef, Node, NodeRef,
    Parameter, PendingSnapshot, QueueItem, RuleSet, Slot, SlotRef, Task, TaskRef, WorkUnit,
};

struct LiveBuild(EnvVars);

impl Build for LiveBuild {
    fn is_building(&self) -> bool {
        true
    }

    fn environment(&self) -> Result<EnvVars, EnvError> {
        Ok(self.0.clone())
    }
}

struct Job {
    name: &'static str,
    builds: Vec<BuildRef>,
}

impl Task for Job {
    fn full_name(&self) -> String {
        self.name.to_owned()
    }

    fn builds(&self) -> Vec<BuildRef> {
        self.builds.clone()
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

struct Machine(Vec<SlotRef>);

impl Node for Machine {
    fn name(&self) -> String {
        "master".to_owned()
    }

    fn slots(&self) -> Vec<SlotRef> {
        self.0.clone()
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

struct Candidate {
    task: TaskRef,
    params: Vec<Parameter>,
}

impl QueueItem for Candidate {
    fn id(&self) -> u64 {
        1
    }

    fn task(&self) -> TaskRef {
        self.task.clone()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.params.clone()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // 1. A running job whose in-progress build exports branchName=feature-x
    let env: EnvVars = [("branchName".to_owned(), "feature-x".to_owned())].into();
    let blocking = WorkUnit::Simple(Arc::new(Job {
        name: "integration-suite",
        builds: vec![Arc::new(LiveBuild(env))],
    }));
    let topology = Topology(vec![Arc::new(Machine(vec![Arc::new(BusySlot(blocking))]))]);

    // 2. Variable rules name the variable; the pattern comes from the
    //    candidate's own parameters (host-encoded with quotes).
    let monitor = BlockMonitor::new(RuleSet::parse("", "branchName"));
    let candidate = Candidate {
        task: Arc::new(Job {
            name: "candidate-job",
            builds: Vec::new(),
        }),
        params: vec![Parameter::new("branchName", "'feature-x'")],
    };

    let decision = monitor
        .evaluate(Some(&candidate), &topology, &NoPending)
        .expect("candidate supplied");
    println!("with candidate:    {decision}");

    // 3. Variable rules without a candidate are a caller bug, not "clear".
    let err = monitor
        .evaluate(None, &topology, &NoPending)
        .expect_err("variable rules require a candidate");
    println!("without candidate: fatal: {err}");
}
