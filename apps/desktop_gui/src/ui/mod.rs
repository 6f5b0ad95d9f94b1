//! UI layer for desktop GUI: app shell and the difficulty chart.

pub mod app;
pub mod chart;

pub use app::EstimatorApp;
