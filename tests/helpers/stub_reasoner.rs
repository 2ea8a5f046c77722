//! Reasoner double that replays a fixed outcome.

use std::sync::Mutex;

use async_trait::async_trait;
use cspops::{Reasoner, ReasonerOutcome};

/// Returns the same outcome for every call and records what it was given.
pub struct StubReasoner {
    outcome: ReasonerOutcome,
    documents: Mutex<Vec<String>>,
}

impl StubReasoner {
    /// A reasoner that accepts everything.
    pub fn accepting() -> Self {
        Self::with_outcome(ReasonerOutcome::success("----------\n", true))
    }

    /// A reasoner that rejects everything with the given stderr.
    pub fn rejecting(stderr: &str) -> Self {
        Self::with_outcome(ReasonerOutcome::failure("exit status: 1", stderr))
    }

    pub fn with_outcome(outcome: ReasonerOutcome) -> Self {
        Self {
            outcome,
            documents: Mutex::new(Vec::new()),
        }
    }

    /// Documents submitted so far, in order.
    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl Reasoner for StubReasoner {
    async fn solve(&self, document: &str) -> ReasonerOutcome {
        self.documents.lock().unwrap().push(document.to_string());
        self.outcome.clone()
    }
}
