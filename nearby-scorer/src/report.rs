//! Distance-annotated reports for a nearby search.
//!
//! A [`NearbyReport`] is the response body a search front end hands back:
//! every place with its distance from the origin, nearest first, the
//! convenience score with its interpretation, and search metadata.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use nearby_core::{CategoryProfile, Place, ResolveCoordinate};
use serde::Serialize;

use crate::convenience::place_distances;
use crate::{ConvenienceError, ConvenienceScorer, ScoreBreakdown, interpret};

/// A place annotated with its distance from the search origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlace {
    /// The provider record, unchanged.
    #[serde(flatten)]
    pub place: Place,
    /// Great-circle distance from the origin, in kilometres.
    pub distance_km: f64,
    /// Price level rendered as dollar signs, or `"N/A"` when unpriced.
    pub estimated_cost: String,
}

/// Search context reported alongside the scored places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    /// Number of places scored.
    pub total_places: usize,
    /// Category as requested.
    pub category: String,
    /// Profile the category resolved to.
    pub profile: CategoryProfile,
    /// Radius the provider was queried with, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_radius_m: Option<u32>,
    /// Mean distance of the places from the origin; absent without places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_distance_km: Option<f64>,
    /// Mean rating across rated places; absent when none are rated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Price levels across the places.
    pub price: PriceSummary,
}

/// Price-level statistics for a set of places.
///
/// Unpriced places count as level `0`, both in the distribution and in the
/// average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Sum of price levels divided by the number of places; absent without
    /// places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price_level: Option<f64>,
    /// Number of places at each price level.
    pub distribution: BTreeMap<u8, usize>,
}

/// Scored, distance-sorted result of a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyReport {
    /// Places ordered nearest first.
    pub places: Vec<RankedPlace>,
    /// Convenience score in `0.0..=10.0`.
    pub convenience_score: f64,
    /// Qualitative reading of the score.
    pub interpretation: String,
    /// Sub-scores behind `convenience_score`.
    pub breakdown: ScoreBreakdown,
    /// Search context.
    pub metadata: ReportMetadata,
}

impl ConvenienceScorer {
    /// Score `places` and build a distance-sorted report.
    ///
    /// # Errors
    /// Fails exactly when [`ConvenienceScorer::breakdown`] would.
    ///
    /// # Examples
    /// ```
    /// use nearby_core::{LatLng, Place};
    /// use nearby_scorer::ConvenienceScorer;
    ///
    /// let places = vec![
    ///     Place::at(LatLng::new(0.02, 0.0)).with_name("far"),
    ///     Place::at(LatLng::new(0.001, 0.0)).with_name("near"),
    /// ];
    /// let report = ConvenienceScorer::default().report(places, "atm", "0,0", Some(1500))?;
    /// assert_eq!(report.places[0].place.name.as_deref(), Some("near"));
    /// assert_eq!(report.metadata.total_places, 2);
    /// # Ok::<(), nearby_scorer::ConvenienceError>(())
    /// ```
    pub fn report<O>(
        &self,
        places: Vec<Place>,
        category: &str,
        origin: &O,
        search_radius_m: Option<u32>,
    ) -> Result<NearbyReport, ConvenienceError>
    where
        O: ResolveCoordinate + ?Sized,
    {
        let distances = place_distances(&places, origin)?;
        let breakdown = self.breakdown_from_distances(&places, category, &distances);
        let metadata = ReportMetadata {
            total_places: places.len(),
            category: category.to_owned(),
            profile: self.profile_for(category),
            search_radius_m,
            mean_distance_km: mean(distances.iter().copied()),
            average_rating: average_rating(&places),
            price: price_summary(&places),
        };

        let mut ranked: Vec<RankedPlace> = places
            .into_iter()
            .zip(distances)
            .map(|(place, distance_km)| RankedPlace {
                estimated_cost: estimated_cost(&place),
                place,
                distance_km,
            })
            .collect();
        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Ok(NearbyReport {
            places: ranked,
            convenience_score: breakdown.score,
            interpretation: interpret(breakdown.score).to_owned(),
            breakdown,
            metadata,
        })
    }
}

/// Keep places whose rating is present and at least `min_rating`.
///
/// # Examples
/// ```
/// use nearby_core::{LatLng, Place};
/// use nearby_scorer::filter_by_min_rating;
///
/// let origin = LatLng::new(0.0, 0.0);
/// let places = vec![
///     Place::at(origin).with_rating(4.5),
///     Place::at(origin).with_rating(3.9),
///     Place::at(origin),
/// ];
/// assert_eq!(filter_by_min_rating(places, 4.0).len(), 1);
/// ```
#[must_use]
pub fn filter_by_min_rating(places: Vec<Place>, min_rating: f64) -> Vec<Place> {
    places
        .into_iter()
        .filter(|place| place.rating.is_some_and(|rating| rating >= min_rating))
        .collect()
}

/// Mean rating across the places that carry one.
#[must_use]
pub fn average_rating(places: &[Place]) -> Option<f64> {
    mean(places.iter().filter_map(|place| place.rating))
}

/// Render a place's price level as repeated `$`, or `"N/A"` when the level
/// is missing or zero.
///
/// # Examples
/// ```
/// use nearby_core::{LatLng, Place};
/// use nearby_scorer::estimated_cost;
///
/// let place = Place::at(LatLng::new(0.0, 0.0));
/// assert_eq!(estimated_cost(&place), "N/A");
/// assert_eq!(estimated_cost(&place.with_price_level(3)), "$$$");
/// ```
#[must_use]
pub fn estimated_cost(place: &Place) -> String {
    match place.price_level {
        Some(level) if level > 0 => "$".repeat(usize::from(level)),
        _ => "N/A".to_owned(),
    }
}

/// Summarise price levels across `places`.
#[must_use]
pub fn price_summary(places: &[Place]) -> PriceSummary {
    let levels = places
        .iter()
        .map(|place| place.price_level.unwrap_or_default());
    let distribution = levels.clone().fold(BTreeMap::new(), |mut counts, level| {
        *counts.entry(level).or_insert(0_usize) += 1;
        counts
    });
    PriceSummary {
        average_price_level: mean(levels.map(f64::from)),
        distribution,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "arithmetic mean over a small sample"
)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (total, count) = values.fold((0.0_f64, 0_usize), |(sum, n), value| (sum + value, n + 1));
    (count > 0).then(|| total / count as f64)
}
