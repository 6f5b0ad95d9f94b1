use thiserror::Error;

use crate::messages;

/// Failures the workflow reports to the user.
///
/// Transport detail never reaches this type; it is logged where the failure
/// is observed and collapsed into one kind per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("{}", messages::ESTIMATION_FAILED)]
    EstimationFailed,
    #[error("{}", messages::COMPARISON_FAILED)]
    ComparisonFailed,
    #[error("a request is already in flight")]
    Busy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load client configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request timeout must be at least one second")]
    InvalidTimeout,
}
