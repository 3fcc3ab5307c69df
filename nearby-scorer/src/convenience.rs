//! Convenience scoring for a set of nearby places.
//!
//! The score blends three normalised sub-scores: how close the places are
//! (piecewise-linear decay against the category radius), how many there are
//! (saturating at the category's ideal count), and how varied their tags are
//! (saturating at [`VARIETY_CEILING`] distinct tags). The blend is scaled by
//! the category weight, clamped to `0.0..=10.0` and rounded to one decimal.

#![forbid(unsafe_code)]

use std::collections::HashSet;

use nearby_core::{
    CategoryProfile, CategoryRegistry, CoordinateError, Place, ResolveCoordinate, haversine_km,
};
use serde::Serialize;

use crate::{ConvenienceError, interpret};

/// Share of the blend given to the average distance score.
pub const DISTANCE_WEIGHT: f64 = 0.4;
/// Share of the blend given to the density score.
pub const DENSITY_WEIGHT: f64 = 0.4;
/// Share of the blend given to the variety score.
pub const VARIETY_WEIGHT: f64 = 0.2;
/// Number of distinct tags at which the variety score saturates.
pub const VARIETY_CEILING: usize = 5;
/// Upper bound of the published score.
pub const MAX_SCORE: f64 = 10.0;

/// Proximity credit for a single place, in `0.0..=1.0`.
///
/// Places within a third of `max_distance_km` earn full credit; credit then
/// falls linearly to zero at `max_distance_km` and stays zero beyond it.
///
/// # Examples
/// ```
/// use nearby_scorer::distance_score;
///
/// assert_eq!(distance_score(1.0, 3.0), 1.0);
/// assert_eq!(distance_score(2.0, 3.0), 0.5);
/// assert_eq!(distance_score(3.0, 3.0), 0.0);
/// assert_eq!(distance_score(4.0, 3.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the decay is a linear interpolation over kilometres"
)]
pub const fn distance_score(distance_km: f64, max_distance_km: f64) -> f64 {
    let immediate = max_distance_km / 3.0;
    if distance_km <= immediate {
        return 1.0;
    }
    if distance_km <= max_distance_km {
        // Measured from the far edge so `distance_km == max_distance_km` is exactly zero.
        return ((max_distance_km - distance_km) / (max_distance_km * 2.0 / 3.0)).clamp(0.0, 1.0);
    }
    0.0
}

/// Credit for the number of places found, capped at `1.0` once
/// `ideal_count` is reached.
///
/// # Examples
/// ```
/// use nearby_scorer::density_score;
///
/// assert_eq!(density_score(3, 3), 1.0);
/// assert_eq!(density_score(6, 3), 1.0);
/// assert_eq!(density_score(0, 3), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "place counts are far below the f64 mantissa limit"
)]
pub fn density_score(count: usize, ideal_count: u32) -> f64 {
    if ideal_count == 0 {
        return 0.0;
    }
    (count as f64 / f64::from(ideal_count)).min(1.0)
}

/// Credit for the diversity of tags across `places`, capped at `1.0`.
///
/// Tags are collected as a set union, so repeats across places count once.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "distinct tag counts are small integers"
)]
pub fn variety_score(places: &[Place]) -> f64 {
    let distinct: HashSet<&str> = places.iter().flat_map(Place::tags).collect();
    (distinct.len() as f64 / VARIETY_CEILING as f64).min(1.0)
}

/// Round to one decimal place.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to tenths scales by ten either side of round()"
)]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Every intermediate value of a convenience score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Mean of the per-place distance scores; `0.0` without places.
    pub average_distance_score: f64,
    /// Saturating place-count credit.
    pub density_score: f64,
    /// Saturating tag-variety credit.
    pub variety_score: f64,
    /// Weighted blend scaled by the category weight, before rounding.
    pub raw_score: f64,
    /// Published score: clamped to `0.0..=10.0`, rounded to one decimal.
    pub score: f64,
}

impl ScoreBreakdown {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the blend is a weighted mean of normalised sub-scores"
    )]
    fn compute(profile: &CategoryProfile, distances: &[f64], places: &[Place]) -> Self {
        let max_distance = profile.max_distance_km();
        let distance_total: f64 = distances
            .iter()
            .map(|&km| distance_score(km, max_distance))
            .sum();
        let divisor = distances.len().max(1) as f64;
        let average_distance_score = distance_total / divisor;
        let density = density_score(places.len(), profile.ideal_count());
        let variety = variety_score(places);

        let raw_score = (average_distance_score * DISTANCE_WEIGHT
            + density * DENSITY_WEIGHT
            + variety * VARIETY_WEIGHT)
            * profile.importance_weight();
        if raw_score > MAX_SCORE {
            log::warn!(
                "raw convenience score {raw_score} exceeds {MAX_SCORE}; clamping (category weight {})",
                profile.importance_weight()
            );
        }
        let score = round_to_tenth(raw_score.clamp(0.0, MAX_SCORE));

        Self {
            average_distance_score,
            density_score: density,
            variety_score: variety,
            raw_score,
            score,
        }
    }
}

/// Score plus its qualitative reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvenienceResult {
    /// Score in `0.0..=10.0`, one decimal place.
    pub score: f64,
    /// Band description from [`interpret`].
    pub interpretation: String,
}

impl ConvenienceResult {
    /// Build a result from a score, filling in its interpretation.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            interpretation: interpret(score).to_owned(),
        }
    }
}

/// Scores how well an area is served by places of a given category.
///
/// The scorer is immutable and `Send + Sync`; share one instance across
/// requests.
///
/// # Examples
/// ```
/// use nearby_core::{LatLng, Place};
/// use nearby_scorer::ConvenienceScorer;
///
/// let origin = LatLng::new(40.0, -74.0);
/// let places: Vec<Place> = ["hospital", "health", "doctor"]
///     .into_iter()
///     .map(|tag| Place::at(origin).with_types([tag]))
///     .collect();
///
/// let result = ConvenienceScorer::default().evaluate(&places, "hospital", &origin)?;
/// assert_eq!(result.score, 9.2);
/// assert!(result.interpretation.starts_with("Excellent"));
/// # Ok::<(), nearby_scorer::ConvenienceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvenienceScorer {
    registry: CategoryRegistry,
}

impl ConvenienceScorer {
    /// Build a scorer over the baseline category registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scorer over a custom registry.
    #[must_use]
    pub const fn with_registry(registry: CategoryRegistry) -> Self {
        Self { registry }
    }

    /// Registry used to resolve category profiles.
    #[must_use]
    pub const fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Profile that scoring `category` will use.
    #[must_use]
    pub fn profile_for(&self, category: &str) -> CategoryProfile {
        self.registry.profile_for(category)
    }

    /// Distance in kilometres between two coordinates, as used for scoring.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either argument is invalid.
    pub fn distance_km<A, B>(&self, from: &A, to: &B) -> Result<f64, CoordinateError>
    where
        A: ResolveCoordinate + ?Sized,
        B: ResolveCoordinate + ?Sized,
    {
        nearby_core::distance_km(from, to)
    }

    /// Compute the score and every intermediate value.
    ///
    /// # Errors
    /// Returns [`ConvenienceError::InvalidCoordinate`] when `origin` or a
    /// place location is invalid, and [`ConvenienceError::MissingLocation`]
    /// when a place has no location. An empty `places` slice is valid and
    /// scores `0.0`.
    pub fn breakdown<O>(
        &self,
        places: &[Place],
        category: &str,
        origin: &O,
    ) -> Result<ScoreBreakdown, ConvenienceError>
    where
        O: ResolveCoordinate + ?Sized,
    {
        let profile = self.profile_for(category);
        let distances = place_distances(places, origin)?;
        let breakdown = ScoreBreakdown::compute(&profile, &distances, places);
        log::debug!(
            "scored {} {category} places: distance={:.3} density={:.3} variety={:.3} score={}",
            places.len(),
            breakdown.average_distance_score,
            breakdown.density_score,
            breakdown.variety_score,
            breakdown.score
        );
        Ok(breakdown)
    }

    /// Compute the published convenience score.
    ///
    /// # Errors
    /// See [`ConvenienceScorer::breakdown`].
    pub fn score<O>(
        &self,
        places: &[Place],
        category: &str,
        origin: &O,
    ) -> Result<f64, ConvenienceError>
    where
        O: ResolveCoordinate + ?Sized,
    {
        self.breakdown(places, category, origin)
            .map(|breakdown| breakdown.score)
    }

    /// Compute the score together with its interpretation.
    ///
    /// # Errors
    /// See [`ConvenienceScorer::breakdown`].
    pub fn evaluate<O>(
        &self,
        places: &[Place],
        category: &str,
        origin: &O,
    ) -> Result<ConvenienceResult, ConvenienceError>
    where
        O: ResolveCoordinate + ?Sized,
    {
        self.score(places, category, origin)
            .map(ConvenienceResult::from_score)
    }

    pub(crate) fn breakdown_from_distances(
        &self,
        places: &[Place],
        category: &str,
        distances: &[f64],
    ) -> ScoreBreakdown {
        ScoreBreakdown::compute(&self.profile_for(category), distances, places)
    }
}

/// Distance from `origin` to each place, in input order.
///
/// The origin is resolved first so an invalid origin fails even when
/// `places` is empty.
pub(crate) fn place_distances<O>(
    places: &[Place],
    origin: &O,
) -> Result<Vec<f64>, ConvenienceError>
where
    O: ResolveCoordinate + ?Sized,
{
    let origin_coord = origin.resolve()?;
    places
        .iter()
        .enumerate()
        .map(|(index, place)| {
            let location = place
                .location()
                .ok_or_else(|| ConvenienceError::MissingLocation {
                    index,
                    place_id: place.place_id.clone(),
                })?;
            Ok(haversine_km(origin_coord, location.to_coord()?))
        })
        .collect()
}
