//! Backend commands queued from UI to backend worker.

use shared::protocol::{CompareRequest, EstimateRequest};

#[derive(Debug)]
pub enum BackendCommand {
    Estimate(EstimateRequest),
    Compare(CompareRequest),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Estimate(_) => "estimate",
            BackendCommand::Compare(_) => "compare",
        }
    }
}
