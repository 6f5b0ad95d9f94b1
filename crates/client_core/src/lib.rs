//! Client side of the experience difficulty estimator: configuration, the
//! backend transport, the estimate/compare workflow and its view projection.

pub mod config;
pub mod error;
pub mod messages;
pub mod projection;
pub mod session;
pub mod transport;
pub mod workflow;

pub use self::config::ClientConfig;
pub use error::{ConfigError, WorkflowError};
pub use projection::{
    chart_series, comparison_prompts, ChartPoint, ComparisonPrompts, EstimateView, ScoreSummary,
    SeriesSlot, WorkflowView,
};
pub use session::EstimationSession;
pub use transport::{EstimatorBackend, HttpBackend};
pub use workflow::{HeldResult, Workflow, WorkflowState};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
