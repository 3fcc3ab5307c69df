//! Core domain types for nearby-amenity scoring.
//!
//! The crate holds the pieces every scorer needs: validated coordinates in
//! both their structured and `"lat,lng"` forms, great-circle distances,
//! provider place records, and the immutable category profile registry.
//! Nothing here performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod coordinate;
pub mod distance;
pub mod place;

pub use category::{
    Category, CategoryProfile, CategoryProfileError, CategoryRegistry, DEFAULT_PROFILE, profile_for,
};
pub use coordinate::{CoordinateError, CoordinateInput, LatLng, ResolveCoordinate};
pub use distance::{EARTH_RADIUS_KM, distance_km, haversine_km};
pub use place::{Geometry, Place};
