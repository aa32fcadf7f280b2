//! geolookup prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::error::{GeoError, Result};
pub use crate::geo::{distance_km, initial_bearing_deg, Coord, EARTH_RADIUS_KM};
pub use crate::lookup::{LookupOptions, RankedCity, DEFAULT_LIMIT};
pub use crate::model::{
    CityIndex, CityRecord, DefaultBackend, DefaultCityIndex, IndexStats, StandardBackend,
};
pub use crate::score::{score, MatchTier, DISTANCE_WEIGHT_KM};
pub use crate::taxonomy::{categories_for, find_category, Category, CategoryKind, CATEGORIES};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DataBackend, NameMatch};
