// crates/geolookup-core/src/lib.rs

//! Proximity-ranked city lookup.
//!
//! This crate implements the autocomplete core used by location search
//! forms: a read-only index of city records, a Haversine distance helper,
//! a tiered fuzzy-match scorer and a lookup service that filters, scores,
//! sorts and truncates suggestions. The bundled dataset is loaded once per
//! process and never mutated.

pub mod error;
pub mod geo;
pub mod loader; // The public loader
pub mod lookup;
pub mod model;
pub mod prelude;
pub mod score;
pub mod taxonomy;
pub mod text;
pub mod traits;
// Shared Raw Input (used by the loaders)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{GeoError, Result};
pub use crate::geo::{distance_km, initial_bearing_deg, Coord};
pub use crate::lookup::{LookupOptions, RankedCity, DEFAULT_LIMIT};
// Export the Model Types
pub use crate::model::{
    CityIndex, CityRecord, DefaultBackend, DefaultCityIndex, IndexStats, StandardBackend,
};
pub use crate::score::MatchTier;
// Export Text Utils
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DataBackend, NameMatch};
