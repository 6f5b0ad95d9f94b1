use serde::{Deserialize, Serialize};

use crate::domain::{
    AdjacentPair, ComparisonChoice, EstimationOutcome, ExperienceId, ScoredExperience,
};

pub const ESTIMATE_PATH: &str = "/api/estimate";
pub const COMPARE_PATH: &str = "/api/compare";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacentExperiences {
    #[serde(default)]
    pub lower: Option<ScoredExperience>,
    #[serde(default)]
    pub higher: Option<ScoredExperience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub user_experience: ScoredExperience,
    pub adjacent_experiences: AdjacentExperiences,
    pub total_experiences: u64,
}

impl From<EstimateResponse> for EstimationOutcome {
    fn from(value: EstimateResponse) -> Self {
        Self {
            subject: value.user_experience,
            neighbors: AdjacentPair {
                lower: value.adjacent_experiences.lower,
                higher: value.adjacent_experiences.higher,
            },
            corpus_size: value.total_experiences,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub experience_id: ExperienceId,
    pub is_more_difficult_than_lower: bool,
    pub is_less_difficult_than_higher: bool,
}

impl CompareRequest {
    pub fn new(experience_id: ExperienceId, choice: ComparisonChoice) -> Self {
        let (is_more_difficult_than_lower, is_less_difficult_than_higher) = choice.flags();
        Self {
            experience_id,
            is_more_difficult_than_lower,
            is_less_difficult_than_higher,
        }
    }

    pub fn choice(&self) -> ComparisonChoice {
        ComparisonChoice::from_flags(
            self.is_more_difficult_than_lower,
            self.is_less_difficult_than_higher,
        )
    }
}

/// The compare endpoint answers with the refined subject.
pub type CompareResponse = ScoredExperience;
