//! Geographic coordinates and their external encodings.
//!
//! Callers hand the engine coordinates either as a structured
//! [`LatLng`] pair or as a `"lat,lng"` string. Both are normalised to a
//! [`geo::Coord`] (`x = longitude`, `y = latitude`) before any arithmetic
//! happens, so downstream code only ever sees one validated shape.

use std::fmt;
use std::str::FromStr;

use geo::Coord;
use thiserror::Error;

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

/// Errors raised when a coordinate cannot be turned into two finite, in-range
/// numbers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The encoded form did not contain exactly one comma.
    #[error("coordinate {input:?} must be formatted as \"lat,lng\"")]
    ComponentCount {
        /// Raw input as supplied by the caller.
        input: String,
    },
    /// One component could not be parsed as a number.
    #[error("{component} component {value:?} of coordinate {input:?} is not a number")]
    NotANumber {
        /// Which component failed, `"latitude"` or `"longitude"`.
        component: &'static str,
        /// The offending component text.
        value: String,
        /// Raw input as supplied by the caller.
        input: String,
    },
    /// A component parsed but was NaN or infinite.
    #[error("coordinate ({lat}, {lng}) contains a non-finite component")]
    NonFinite {
        /// Latitude as received.
        lat: f64,
        /// Longitude as received.
        lng: f64,
    },
    /// A component fell outside the valid geographic range.
    #[error("coordinate ({lat}, {lng}) is outside the valid latitude/longitude range")]
    OutOfRange {
        /// Latitude as received.
        lat: f64,
        /// Longitude as received.
        lng: f64,
    },
}

/// A structured latitude/longitude pair, in degrees.
///
/// Field names mirror the `{ "lat": .., "lng": .. }` objects returned by
/// places providers.
///
/// # Examples
/// ```
/// use nearby_core::LatLng;
///
/// let origin = LatLng::new(51.5074, -0.1278);
/// let coord = origin.to_coord().expect("valid coordinate");
/// assert_eq!(coord.y, 51.5074);
/// assert_eq!(coord.x, -0.1278);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Construct a pair without validation. Use [`LatLng::to_coord`] to check
    /// it.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate the pair and convert it to a [`Coord`].
    ///
    /// # Errors
    /// Returns [`CoordinateError::NonFinite`] or
    /// [`CoordinateError::OutOfRange`] when the pair is unusable.
    pub fn to_coord(self) -> Result<Coord<f64>, CoordinateError> {
        let Self { lat, lng } = self;
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NonFinite { lat, lng });
        }
        if !(-LATITUDE_LIMIT..=LATITUDE_LIMIT).contains(&lat)
            || !(-LONGITUDE_LIMIT..=LONGITUDE_LIMIT).contains(&lng)
        {
            return Err(CoordinateError::OutOfRange { lat, lng });
        }
        Ok(Coord { x: lng, y: lat })
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for LatLng {
    type Err = CoordinateError;

    /// Parse a `"lat,lng"` string. Whitespace around either component is
    /// ignored. The result is range-checked.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split(',');
        let (Some(lat_text), Some(lng_text), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CoordinateError::ComponentCount {
                input: input.to_owned(),
            });
        };
        let lat = parse_component(lat_text, "latitude", input)?;
        let lng = parse_component(lng_text, "longitude", input)?;
        let pair = Self::new(lat, lng);
        pair.to_coord()?;
        Ok(pair)
    }
}

fn parse_component(
    text: &str,
    component: &'static str,
    input: &str,
) -> Result<f64, CoordinateError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CoordinateError::NotANumber {
            component,
            value: text.to_owned(),
            input: input.to_owned(),
        })
}

/// A coordinate in either of its accepted external representations.
///
/// With the `serde` feature the enum deserialises from either a JSON object
/// (`{"lat": 1.0, "lng": 2.0}`) or a JSON string (`"1.0,2.0"`).
///
/// # Examples
/// ```
/// use nearby_core::{CoordinateInput, LatLng, ResolveCoordinate};
///
/// let encoded = CoordinateInput::Encoded("10.5,20.25".into());
/// let structured = CoordinateInput::Structured(LatLng::new(10.5, 20.25));
/// assert_eq!(encoded.resolve(), structured.resolve());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum CoordinateInput {
    /// A structured latitude/longitude pair.
    Structured(LatLng),
    /// A `"lat,lng"` string, parsed on resolution.
    Encoded(String),
}

impl From<LatLng> for CoordinateInput {
    fn from(value: LatLng) -> Self {
        Self::Structured(value)
    }
}

impl From<&str> for CoordinateInput {
    fn from(value: &str) -> Self {
        Self::Encoded(value.to_owned())
    }
}

impl From<String> for CoordinateInput {
    fn from(value: String) -> Self {
        Self::Encoded(value)
    }
}

/// Anything that can be normalised to a validated [`Coord`].
///
/// This is the overload set for distance and scoring entry points: each
/// argument may independently be structured or encoded.
pub trait ResolveCoordinate {
    /// Validate and normalise `self`.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when the value does not describe two
    /// finite, in-range numbers.
    fn resolve(&self) -> Result<Coord<f64>, CoordinateError>;
}

impl ResolveCoordinate for LatLng {
    fn resolve(&self) -> Result<Coord<f64>, CoordinateError> {
        self.to_coord()
    }
}

impl ResolveCoordinate for Coord<f64> {
    fn resolve(&self) -> Result<Coord<f64>, CoordinateError> {
        LatLng::from(*self).to_coord()
    }
}

impl ResolveCoordinate for str {
    fn resolve(&self) -> Result<Coord<f64>, CoordinateError> {
        self.parse::<LatLng>().and_then(LatLng::to_coord)
    }
}

impl ResolveCoordinate for String {
    fn resolve(&self) -> Result<Coord<f64>, CoordinateError> {
        self.as_str().resolve()
    }
}

impl ResolveCoordinate for CoordinateInput {
    fn resolve(&self) -> Result<Coord<f64>, CoordinateError> {
        match self {
            Self::Structured(pair) => pair.resolve(),
            Self::Encoded(text) => text.resolve(),
        }
    }
}

impl<T: ResolveCoordinate + ?Sized> ResolveCoordinate for &T {
    fn resolve(&self) -> Result<Coord<f64>, CoordinateError> {
        (**self).resolve()
    }
}
