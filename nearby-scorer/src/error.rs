//! Error types raised while scoring nearby places.
#![forbid(unsafe_code)]

use nearby_core::CoordinateError;
use thiserror::Error;

/// Errors raised by [`ConvenienceScorer`](crate::ConvenienceScorer).
///
/// Empty place lists and unknown categories are not errors; both have a
/// defined result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvenienceError {
    /// The origin or a place location was not a usable coordinate.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
    /// A place carried no `geometry.location`.
    #[error("place {index}{} has no location", describe_id(.place_id.as_deref()))]
    MissingLocation {
        /// Position of the place in the input sequence.
        index: usize,
        /// Provider identifier, when present.
        place_id: Option<String>,
    },
}

fn describe_id(place_id: Option<&str>) -> String {
    place_id.map_or_else(String::new, |id| format!(" ({id})"))
}
