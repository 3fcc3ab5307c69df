//! Qualitative bands for convenience scores.
//!
//! # Examples
//! ```
//! use nearby_scorer::{ScoreBand, interpret};
//!
//! assert_eq!(ScoreBand::from_score(7.4), ScoreBand::VeryGood);
//! assert!(interpret(0.0).starts_with("Poor"));
//! ```

use serde::Serialize;

/// A qualitative reading of a convenience score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Score of at least 9.
    Excellent,
    /// Score of at least 7.
    VeryGood,
    /// Score of at least 5.
    Good,
    /// Score of at least 3.
    Fair,
    /// Anything lower, including NaN.
    Poor,
}

impl ScoreBand {
    /// Bands with a floor, highest first.
    const FLOORS: [(f64, Self); 4] = [
        (9.0, Self::Excellent),
        (7.0, Self::VeryGood),
        (5.0, Self::Good),
        (3.0, Self::Fair),
    ];

    /// Pick the first band whose floor `score` reaches.
    ///
    /// Values above the scale stay [`ScoreBand::Excellent`]; negative or NaN
    /// values are [`ScoreBand::Poor`].
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self::FLOORS
            .into_iter()
            .find(|&(floor, _)| score >= floor)
            .map_or(Self::Poor, |(_, band)| band)
    }

    /// Human-readable description of the band.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent convenience - Exceptional access to amenities",
            Self::VeryGood => "Very Good - Great access to most amenities",
            Self::Good => "Good - Reasonable access to basic amenities",
            Self::Fair => "Fair - Limited access to some amenities",
            Self::Poor => "Poor - Minimal access to amenities",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe a convenience score.
#[must_use]
pub fn interpret(score: f64) -> &'static str {
    ScoreBand::from_score(score).description()
}
