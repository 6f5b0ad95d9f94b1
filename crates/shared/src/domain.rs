use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ExperienceId);

/// An experience as scored by the ranking backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredExperience {
    pub id: ExperienceId,
    pub text: String,
    pub difficulty_score: f64,
    /// Percentile rank among all stored experiences, in `[0, 100]`.
    pub relative_difficulty: f64,
}

/// Nearest-ranked neighbors of a subject. Either side is absent at the corpus edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacentPair {
    pub lower: Option<ScoredExperience>,
    pub higher: Option<ScoredExperience>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimationOutcome {
    pub subject: ScoredExperience,
    pub neighbors: AdjacentPair,
    pub corpus_size: u64,
}

/// The user's pairwise judgment against the two neighbors of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonChoice {
    /// Harder than the lower neighbor only.
    Harder,
    /// Easier than the higher neighbor only.
    Easier,
    /// Sits between both neighbors.
    Between,
    /// Neither expected direction holds (ties, outlier judgments).
    NeitherOrTie,
}

impl ComparisonChoice {
    pub const ALL: [ComparisonChoice; 4] = [
        ComparisonChoice::Harder,
        ComparisonChoice::Easier,
        ComparisonChoice::Between,
        ComparisonChoice::NeitherOrTie,
    ];

    /// `(is_more_difficult_than_lower, is_less_difficult_than_higher)`.
    pub fn flags(self) -> (bool, bool) {
        match self {
            ComparisonChoice::Harder => (true, false),
            ComparisonChoice::Easier => (false, true),
            ComparisonChoice::Between => (true, true),
            ComparisonChoice::NeitherOrTie => (false, false),
        }
    }

    pub fn from_flags(is_more_than_lower: bool, is_less_than_higher: bool) -> Self {
        match (is_more_than_lower, is_less_than_higher) {
            (true, false) => ComparisonChoice::Harder,
            (false, true) => ComparisonChoice::Easier,
            (true, true) => ComparisonChoice::Between,
            (false, false) => ComparisonChoice::NeitherOrTie,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonChoice::Harder => "harder",
            ComparisonChoice::Easier => "easier",
            ComparisonChoice::Between => "between",
            ComparisonChoice::NeitherOrTie => "neither",
        }
    }
}

impl std::str::FromStr for ComparisonChoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "harder" | "h" => Ok(ComparisonChoice::Harder),
            "easier" | "e" => Ok(ComparisonChoice::Easier),
            "between" | "b" => Ok(ComparisonChoice::Between),
            "neither" | "tie" | "n" => Ok(ComparisonChoice::NeitherOrTie),
            other => Err(format!(
                "unknown comparison choice '{other}' (expected harder, easier, between or neither)"
            )),
        }
    }
}
