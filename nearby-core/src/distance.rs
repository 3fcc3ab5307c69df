//! Great-circle distances between coordinates.

use geo::Coord;

use crate::{CoordinateError, ResolveCoordinate};

/// Mean Earth radius used by every distance calculation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two resolved coordinates.
///
/// Coordinates follow the `geo` convention: `x = longitude`, `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nearby_core::haversine_km;
///
/// let here = Coord { x: -0.1278, y: 51.5074 };
/// assert_eq!(haversine_km(here, here), 0.0);
/// ```
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lng = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance in kilometres between two coordinates in any accepted
/// representation.
///
/// Each argument is resolved independently, so a `"lat,lng"` string can be
/// measured against a structured [`LatLng`](crate::LatLng).
///
/// # Errors
/// Returns [`CoordinateError`] when either argument is malformed or out of
/// range. A malformed string never yields `NaN`.
///
/// # Examples
/// ```
/// use nearby_core::{LatLng, distance_km};
///
/// let km = distance_km("51.5074,-0.1278", &LatLng::new(48.8566, 2.3522))?;
/// assert!((km - 343.5).abs() < 0.5);
/// # Ok::<(), nearby_core::CoordinateError>(())
/// ```
pub fn distance_km<A, B>(from: &A, to: &B) -> Result<f64, CoordinateError>
where
    A: ResolveCoordinate + ?Sized,
    B: ResolveCoordinate + ?Sized,
{
    Ok(haversine_km(from.resolve()?, to.resolve()?))
}
