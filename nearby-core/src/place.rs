use crate::LatLng;

/// A place returned by a proximity search.
///
/// Field names follow the provider's JSON so results can be deserialised
/// as-is. Every field is optional; the scorer reports a missing location as
/// an error rather than guessing one.
///
/// # Examples
/// ```
/// use nearby_core::{LatLng, Place};
///
/// let place = Place::at(LatLng::new(51.5, -0.12)).with_types(["pharmacy", "health"]);
///
/// assert_eq!(place.location(), Some(LatLng::new(51.5, -0.12)));
/// assert_eq!(place.tags().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Place {
    /// Provider identifier.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub place_id: Option<String>,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// Short address.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub vicinity: Option<String>,
    /// Position of the place.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub geometry: Option<Geometry>,
    /// Category tags such as `"pharmacy"` or `"point_of_interest"`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub types: Option<Vec<String>>,
    /// Average user rating, typically `1.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rating: Option<f64>,
    /// Provider price level, `0..=4`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub price_level: Option<u8>,
}

/// Geometry block of a [`Place`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Geometry {
    /// Point location of the place.
    pub location: Option<LatLng>,
}

impl Place {
    /// Construct a place with only a location.
    pub fn at(location: LatLng) -> Self {
        Self {
            geometry: Some(Geometry {
                location: Some(location),
            }),
            ..Self::default()
        }
    }

    /// Attach category tags while returning `self` for chaining.
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a display name while returning `self` for chaining.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a rating while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach a provider price level while returning `self` for chaining.
    #[must_use]
    pub fn with_price_level(mut self, price_level: u8) -> Self {
        self.price_level = Some(price_level);
        self
    }

    /// Return the location, if the provider supplied one.
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.and_then(|geometry| geometry.location)
    }

    /// Iterate over the category tags. A missing list yields nothing.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.types.iter().flatten().map(String::as_str)
    }
}
