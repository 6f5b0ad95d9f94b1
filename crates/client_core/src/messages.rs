//! Fixed display strings shown by every front end.

pub const TITLE: &str = "Experience Difficulty Estimator";
pub const INPUT_PLACEHOLDER: &str = "Describe your experience...";
pub const SUBMIT_IDLE: &str = "Estimate difficulty";
pub const SUBMIT_BUSY: &str = "Estimating...";
pub const START_OVER: &str = "Start over";
pub const NEW_EXPERIENCE_PROMPT: &str = "Describe another experience:";

pub const ESTIMATE_HEADING: &str = "Estimate";
pub const SCORE_LABEL: &str = "Difficulty score";
pub const PERCENTILE_LABEL: &str = "Relative difficulty (percentile)";
pub const CORPUS_LABEL: &str = "Experiences ranked";

pub const COMPARE_HEADING: &str = "Compare";
pub const LOWER_PROMPT: &str = "Was your experience harder than this?";
pub const HIGHER_PROMPT: &str = "Was your experience easier than this?";
pub const NO_NEIGHBOR: &str = "Not available";

pub const CHOICE_HARDER: &str = "Harder";
pub const CHOICE_EASIER: &str = "Easier";
pub const CHOICE_BETWEEN: &str = "In between";
pub const CHOICE_NEITHER: &str = "Neither";

pub const CHART_HEADING: &str = "Relative difficulty";
pub const CHART_AXIS: &str = "Percentile";
pub const SERIES_PREVIOUS: &str = "Previous experience";
pub const SERIES_CURRENT: &str = "Your experience";
pub const SERIES_NEXT: &str = "Next experience";

pub const REFINED_HEADING: &str = "Final result";
pub const REFINED_SCORE_LABEL: &str = "Updated difficulty score";
pub const REFINED_PERCENTILE_LABEL: &str = "Updated relative difficulty (percentile)";

pub const ESTIMATION_FAILED: &str =
    "Something went wrong while estimating difficulty. Please try again.";
pub const COMPARISON_FAILED: &str =
    "Something went wrong while submitting your comparison. Please try again.";
