//! Facade crate for nearby convenience scoring.
//!
//! This crate re-exports the coordinate and place types from `nearby-core`
//! alongside the scorer, interpretation bands and report builder from
//! `nearby-scorer`.

#![forbid(unsafe_code)]

pub use nearby_core::{
    Category, CategoryProfile, CategoryProfileError, CategoryRegistry, CoordinateError,
    CoordinateInput, DEFAULT_PROFILE, EARTH_RADIUS_KM, Geometry, LatLng, Place,
    ResolveCoordinate, distance_km, haversine_km, profile_for,
};

pub use nearby_scorer::{
    ConvenienceError, ConvenienceResult, ConvenienceScorer, NearbyReport, PriceSummary,
    RankedPlace, ReportMetadata, ScoreBand, ScoreBreakdown, average_rating, estimated_cost,
    filter_by_min_rating, interpret, price_summary,
};
