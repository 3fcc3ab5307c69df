//! Convenience scoring for places found near a location.
//!
//! The crate turns already-fetched provider results into a single
//! `0.0..=10.0` convenience score:
//! - **Distance**: each place earns proximity credit from a piecewise-linear
//!   decay against its category's radius; the credits are averaged.
//! - **Density**: the place count is compared with the category's ideal
//!   count and capped once reached.
//! - **Variety**: distinct tags across all places are counted and capped at
//!   five.
//!
//! The three sub-scores are blended `0.4 / 0.4 / 0.2`, scaled by the
//! category weight, clamped and rounded to one decimal place. Scores are
//! then mapped to a [`ScoreBand`] for display, and [`NearbyReport`] bundles
//! everything with per-place distances sorted nearest first.
//!
//! # Examples
//!
//! ```
//! use nearby_scorer::{ConvenienceScorer, interpret};
//!
//! let scorer = ConvenienceScorer::default();
//! let score = scorer.score(&[], "pharmacy", "51.5074,-0.1278")?;
//! assert_eq!(score, 0.0);
//! assert!(interpret(score).starts_with("Poor"));
//! # Ok::<(), nearby_scorer::ConvenienceError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod convenience;
mod error;
mod interpretation;
mod report;

pub use convenience::{
    ConvenienceResult, ConvenienceScorer, DENSITY_WEIGHT, DISTANCE_WEIGHT, MAX_SCORE,
    ScoreBreakdown, VARIETY_CEILING, VARIETY_WEIGHT, density_score, distance_score, variety_score,
};
pub use error::ConvenienceError;
pub use interpretation::{ScoreBand, interpret};
pub use report::{
    NearbyReport, PriceSummary, RankedPlace, ReportMetadata, average_rating, estimated_cost,
    filter_by_min_rating, price_summary,
};
