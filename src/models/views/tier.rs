use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative badge for a score in `[0, 1]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    Excellent,
    NeedsWork,
    Poor,
}

impl ScoreTier {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::NeedsWork => "Needs Work",
            ScoreTier::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// boundaries belong to the upper tier
pub fn classify(score: f64) -> ScoreTier {
    if score >= 0.9 {
        ScoreTier::Excellent
    } else if score >= 0.5 {
        ScoreTier::NeedsWork
    } else {
        ScoreTier::Poor
    }
}
