//! Place categories and the profiles that tune how they are scored.
//!
//! Each known category carries a [`CategoryProfile`]: how important the
//! amenity is, how many of them an area ideally has, and how far away one
//! still counts. Lookups never fail; unknown categories resolve to
//! [`DEFAULT_PROFILE`].
//!
//! # Examples
//! ```
//! use nearby_core::{Category, DEFAULT_PROFILE, profile_for};
//!
//! assert_eq!(profile_for("hospital"), Category::Hospital.profile());
//! assert_eq!(profile_for("bowling_alley"), DEFAULT_PROFILE);
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Scoring parameters for a place category.
///
/// Profiles are immutable once built. [`CategoryProfile::new`] enforces that
/// every parameter is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryProfile {
    importance_weight: f64,
    ideal_count: u32,
    max_distance_km: f64,
}

/// Errors returned by [`CategoryProfile::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CategoryProfileError {
    /// The weight was zero, negative or not finite.
    #[error("importance weight must be a positive finite number, got {0}")]
    InvalidWeight(f64),
    /// The ideal count was zero.
    #[error("ideal count must be at least one")]
    ZeroIdealCount,
    /// The distance was zero, negative or not finite.
    #[error("maximum distance must be a positive finite number of kilometres, got {0}")]
    InvalidMaxDistance(f64),
}

impl CategoryProfile {
    const fn baseline(importance_weight: f64, ideal_count: u32, max_distance_km: f64) -> Self {
        Self {
            importance_weight,
            ideal_count,
            max_distance_km,
        }
    }

    /// Validate and construct a profile.
    ///
    /// # Errors
    /// Returns [`CategoryProfileError`] when any parameter is not strictly
    /// positive.
    ///
    /// # Examples
    /// ```
    /// use nearby_core::CategoryProfile;
    ///
    /// let profile = CategoryProfile::new(4.0, 2, 1.5)?;
    /// assert_eq!(profile.ideal_count(), 2);
    /// assert!(CategoryProfile::new(0.0, 2, 1.5).is_err());
    /// # Ok::<(), nearby_core::CategoryProfileError>(())
    /// ```
    pub fn new(
        importance_weight: f64,
        ideal_count: u32,
        max_distance_km: f64,
    ) -> Result<Self, CategoryProfileError> {
        if !importance_weight.is_finite() || importance_weight <= 0.0 {
            return Err(CategoryProfileError::InvalidWeight(importance_weight));
        }
        if ideal_count == 0 {
            return Err(CategoryProfileError::ZeroIdealCount);
        }
        if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
            return Err(CategoryProfileError::InvalidMaxDistance(max_distance_km));
        }
        Ok(Self::baseline(importance_weight, ideal_count, max_distance_km))
    }

    /// Multiplier applied to the combined sub-scores.
    pub const fn importance_weight(&self) -> f64 {
        self.importance_weight
    }

    /// Number of places at which the density credit saturates.
    pub const fn ideal_count(&self) -> u32 {
        self.ideal_count
    }

    /// Radius beyond which a place earns no distance credit, in kilometres.
    pub const fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }
}

/// Profile used for any category missing from the registry.
pub const DEFAULT_PROFILE: CategoryProfile = CategoryProfile::baseline(5.0, 5, 3.0);

/// The categories with hand-tuned profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Hospitals: scarce and urgent, so weighted highest.
    Hospital,
    /// Pharmacies.
    Pharmacy,
    /// Restaurants: plentiful, so a high ideal count but a lower weight.
    Restaurant,
    /// General stores.
    Store,
    /// Cash machines.
    Atm,
    /// Schools.
    School,
}

impl Category {
    /// Every category in registry order.
    pub const ALL: [Self; 6] = [
        Self::Hospital,
        Self::Pharmacy,
        Self::Restaurant,
        Self::Store,
        Self::Atm,
        Self::School,
    ];

    /// Return the category key as used by places providers.
    ///
    /// # Examples
    /// ```
    /// use nearby_core::Category;
    ///
    /// assert_eq!(Category::Atm.as_str(), "atm");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Pharmacy => "pharmacy",
            Self::Restaurant => "restaurant",
            Self::Store => "store",
            Self::Atm => "atm",
            Self::School => "school",
        }
    }

    /// Return the baseline profile for the category.
    pub const fn profile(&self) -> CategoryProfile {
        match self {
            Self::Hospital => CategoryProfile::baseline(10.0, 3, 5.0),
            Self::Pharmacy => CategoryProfile::baseline(8.0, 4, 2.0),
            Self::Restaurant => CategoryProfile::baseline(6.0, 10, 3.0),
            Self::Store => CategoryProfile::baseline(7.0, 5, 2.0),
            Self::Atm => CategoryProfile::baseline(5.0, 4, 1.0),
            Self::School => CategoryProfile::baseline(8.0, 3, 3.0),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Keys match exactly; `"Hospital"` is not a known category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Return the profile for `category`, falling back to [`DEFAULT_PROFILE`].
#[must_use]
pub fn profile_for(category: &str) -> CategoryProfile {
    category
        .parse::<Category>()
        .map_or(DEFAULT_PROFILE, |known| known.profile())
}

/// Immutable lookup table from category key to profile.
///
/// The default registry holds the six baseline categories. Additional
/// entries can be supplied while building; the table is never mutated after
/// that.
///
/// # Examples
/// ```
/// use nearby_core::{CategoryProfile, CategoryRegistry, DEFAULT_PROFILE};
///
/// let registry = CategoryRegistry::default()
///     .with_profile("bakery", CategoryProfile::new(4.0, 6, 1.0)?);
/// assert_eq!(registry.profile_for("bakery").ideal_count(), 6);
/// assert_eq!(registry.profile_for("unknown"), DEFAULT_PROFILE);
/// # Ok::<(), nearby_core::CategoryProfileError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRegistry {
    profiles: BTreeMap<String, CategoryProfile>,
    fallback: CategoryProfile,
}

impl CategoryRegistry {
    /// Build a registry with no categories and the given fallback.
    pub const fn empty(fallback: CategoryProfile) -> Self {
        Self {
            profiles: BTreeMap::new(),
            fallback,
        }
    }

    /// Add or replace a profile while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_profile(mut self, category: impl Into<String>, profile: CategoryProfile) -> Self {
        self.profiles.insert(category.into(), profile);
        self
    }

    /// Look up a profile by exact key. Unknown keys yield the fallback.
    pub fn profile_for(&self, category: &str) -> CategoryProfile {
        self.profiles
            .get(category)
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Return whether `category` has its own entry.
    pub fn contains(&self, category: &str) -> bool {
        self.profiles.contains_key(category)
    }

    /// Profile returned for unknown categories.
    pub const fn fallback(&self) -> CategoryProfile {
        self.fallback
    }

    /// Iterate over known categories in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryProfile)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Category::ALL
            .into_iter()
            .fold(Self::empty(DEFAULT_PROFILE), |registry, category| {
                registry.with_profile(category.as_str(), category.profile())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hospital", 10.0, 3, 5.0)]
    #[case("pharmacy", 8.0, 4, 2.0)]
    #[case("restaurant", 6.0, 10, 3.0)]
    #[case("store", 7.0, 5, 2.0)]
    #[case("atm", 5.0, 4, 1.0)]
    #[case("school", 8.0, 3, 3.0)]
    fn baseline_profiles(
        #[case] key: &str,
        #[case] weight: f64,
        #[case] ideal: u32,
        #[case] max_km: f64,
    ) {
        let profile = profile_for(key);
        assert_eq!(profile.importance_weight(), weight);
        assert_eq!(profile.ideal_count(), ideal);
        assert_eq!(profile.max_distance_km(), max_km);
    }

    #[rstest]
    #[case("gym")]
    #[case("")]
    #[case("Hospital")]
    fn unknown_categories_use_default(#[case] key: &str) {
        assert_eq!(profile_for(key), DEFAULT_PROFILE);
        assert_eq!(CategoryRegistry::default().profile_for(key), DEFAULT_PROFILE);
    }

    #[test]
    fn default_profile_values() {
        assert_eq!(DEFAULT_PROFILE.importance_weight(), 5.0);
        assert_eq!(DEFAULT_PROFILE.ideal_count(), 5);
        assert_eq!(DEFAULT_PROFILE.max_distance_km(), 3.0);
    }

    #[test]
    fn default_registry_matches_enum() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.iter().count(), Category::ALL.len());
        for category in Category::ALL {
            assert_eq!(registry.profile_for(category.as_str()), category.profile());
        }
    }

    #[rstest]
    #[case(0.0, 1, 1.0)]
    #[case(-1.0, 1, 1.0)]
    #[case(f64::NAN, 1, 1.0)]
    #[case(1.0, 0, 1.0)]
    #[case(1.0, 1, 0.0)]
    #[case(1.0, 1, f64::INFINITY)]
    fn rejects_non_positive_parameters(
        #[case] weight: f64,
        #[case] ideal: u32,
        #[case] max_km: f64,
    ) {
        assert!(CategoryProfile::new(weight, ideal, max_km).is_err());
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = "museum".parse::<Category>().expect_err("unknown category");
        assert!(err.contains("unknown category"));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Category::Pharmacy.to_string(), Category::Pharmacy.as_str());
    }
}
