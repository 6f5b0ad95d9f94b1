//! Pure derivations of what the front ends display.

use shared::domain::{EstimationOutcome, ScoredExperience};

use crate::{messages, workflow::Workflow};

/// Percentile axis bounds; a missing neighbor pins the series to these.
pub const AXIS_MIN: f64 = 0.0;
pub const AXIS_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPrompts {
    pub lower_text: String,
    pub higher_text: String,
}

pub fn comparison_prompts(outcome: &EstimationOutcome) -> ComparisonPrompts {
    ComparisonPrompts {
        lower_text: neighbor_text(outcome.neighbors.lower.as_ref()),
        higher_text: neighbor_text(outcome.neighbors.higher.as_ref()),
    }
}

fn neighbor_text(neighbor: Option<&ScoredExperience>) -> String {
    match neighbor {
        Some(experience) if !experience.text.trim().is_empty() => experience.text.clone(),
        _ => messages::NO_NEIGHBOR.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSlot {
    Previous,
    Current,
    Next,
}

impl SeriesSlot {
    pub fn label(self) -> &'static str {
        match self {
            SeriesSlot::Previous => "previous",
            SeriesSlot::Current => "current",
            SeriesSlot::Next => "next",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SeriesSlot::Previous => messages::SERIES_PREVIOUS,
            SeriesSlot::Current => messages::SERIES_CURRENT,
            SeriesSlot::Next => messages::SERIES_NEXT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub slot: SeriesSlot,
    pub value: f64,
}

impl ChartPoint {
    pub fn label(&self) -> &'static str {
        self.slot.label()
    }
}

/// `[previous, current, next]` relative difficulties. Defaults apply only
/// when a neighbor is absent; a present neighbor at 0 stays at 0.
pub fn chart_series(outcome: &EstimationOutcome) -> [ChartPoint; 3] {
    let lower = outcome
        .neighbors
        .lower
        .as_ref()
        .map_or(AXIS_MIN, |e| e.relative_difficulty);
    let higher = outcome
        .neighbors
        .higher
        .as_ref()
        .map_or(AXIS_MAX, |e| e.relative_difficulty);

    [
        ChartPoint {
            slot: SeriesSlot::Previous,
            value: lower,
        },
        ChartPoint {
            slot: SeriesSlot::Current,
            value: outcome.subject.relative_difficulty,
        },
        ChartPoint {
            slot: SeriesSlot::Next,
            value: higher,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub difficulty_score: f64,
    pub relative_difficulty: f64,
}

impl ScoreSummary {
    pub fn score_text(&self) -> String {
        format!("{:.2}", self.difficulty_score)
    }

    pub fn percentile_text(&self) -> String {
        format!("{:.2}", self.relative_difficulty)
    }
}

impl From<&ScoredExperience> for ScoreSummary {
    fn from(value: &ScoredExperience) -> Self {
        Self {
            difficulty_score: value.difficulty_score,
            relative_difficulty: value.relative_difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateView {
    pub summary: ScoreSummary,
    pub corpus_size: u64,
    pub prompts: ComparisonPrompts,
    pub series: [ChartPoint; 3],
}

impl EstimateView {
    pub fn from_outcome(outcome: &EstimationOutcome) -> Self {
        Self {
            summary: ScoreSummary::from(&outcome.subject),
            corpus_size: outcome.corpus_size,
            prompts: comparison_prompts(outcome),
            series: chart_series(outcome),
        }
    }
}

/// Everything a front end renders for the current workflow state.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowView {
    pub busy: bool,
    pub submit_label: &'static str,
    pub error: Option<String>,
    pub estimate: Option<EstimateView>,
    pub comparison_enabled: bool,
    /// The refined placement. The chart keeps the estimate's framing.
    pub refined: Option<ScoreSummary>,
}

impl WorkflowView {
    pub fn project(workflow: &Workflow) -> Self {
        let state = workflow.state();
        let busy = workflow.is_busy();
        Self {
            busy,
            submit_label: if busy {
                messages::SUBMIT_BUSY
            } else {
                messages::SUBMIT_IDLE
            },
            error: workflow.last_error().map(|err| err.to_string()),
            estimate: state.outcome().map(EstimateView::from_outcome),
            comparison_enabled: workflow.can_compare(),
            refined: state.comparison().map(ScoreSummary::from),
        }
    }
}
