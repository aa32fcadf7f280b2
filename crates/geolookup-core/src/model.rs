// crates/geolookup-core/src/model.rs

use crate::geo::Coord;
use crate::text::fold_key;
use crate::traits::{DataBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// Default backend: plain `String` + `f64`.
///
/// This backend is used by the convenient aliases [`StandardBackend`] and
/// [`DefaultCityIndex`]. It provides the best ergonomics and is suitable
/// for most applications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

/// A single city entry in the reference dataset.
///
/// `name` is the display form shown in suggestion rows
/// (e.g. `"Austin, TX"`); `country` is an ISO-like code used for optional
/// filtering. Coordinates may be absent; such records rank last whenever
/// proximity is part of the ordering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityRecord<B: DataBackend> {
    pub name: B::Str,
    pub country: B::Str,
    pub latitude: Option<B::Float>,
    pub longitude: Option<B::Float>,
}

/// The read-only city reference dataset.
///
/// Loaded once at application start and never mutated afterwards; all
/// lookup operations borrow from it. Safe to share freely between callers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityIndex<B: DataBackend> {
    pub cities: Vec<CityRecord<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultCityIndex = CityIndex<DefaultBackend>;
/// Convenient alias used in demos.
pub type StandardBackend = DefaultBackend;

/// Simple aggregate statistics for the dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndexStats {
    pub cities: usize,
    pub countries: usize,
}

impl<B: DataBackend> CityRecord<B> {
    /// City display name, e.g. `"Austin, TX"`.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// ISO-like country code, e.g. `"US"`.
    pub fn country(&self) -> &str {
        self.country.as_ref()
    }

    /// Coordinates as a [`Coord`] when both latitude and longitude are set.
    pub fn coord(&self) -> Option<Coord> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coord::new(B::float_to_f64(lat), B::float_to_f64(lon))),
            _ => None,
        }
    }

    /// ASCII case-insensitive country code comparison.
    #[inline]
    pub fn is_in_country(&self, code: &str) -> bool {
        self.country.as_ref().eq_ignore_ascii_case(code)
    }
}

impl<B: DataBackend> CityIndex<B> {
    /// Read-only slice of all city records, in dataset order.
    pub fn cities(&self) -> &[CityRecord<B>] {
        &self.cities
    }

    /// Number of cities in the dataset.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Aggregate statistics for the dataset.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            cities: self.cities.len(),
            countries: self.countries().len(),
        }
    }

    /// Distinct country codes present in the dataset, sorted ascending.
    pub fn countries(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.cities.iter().map(|c| c.country.as_ref()).collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    /// Find a city by display name (accent- and case-insensitive).
    ///
    /// Returns the first match in dataset order.
    pub fn find_by_name(&self, name: &str) -> Option<&CityRecord<B>> {
        let q = fold_key(name);
        self.cities.iter().find(|c| fold_key(c.name.as_ref()) == q)
    }
}

impl DataBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

impl<B: DataBackend> NameMatch for CityRecord<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
