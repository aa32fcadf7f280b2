// crates/geolookup-core/src/raw.rs

//! Raw serde shapes for the source dataset, decoupled from the runtime
//! model so the stored representation can evolve independently.

use crate::model::{CityIndex, CityRecord};
use crate::traits::DataBackend;
use serde::Deserialize;

/// One city entry as it appears in the source JSON.
///
/// Coordinates are optional and deserialized defensively: a record missing
/// either component is kept, with the absent values preserved as `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRaw {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

pub type CitiesRaw = Vec<CityRaw>;

/// Converts raw JSON entries into a [`CityIndex`] using the specified backend.
///
/// All string and numeric fields are converted through the backend's type
/// conversion methods; dataset order is preserved (it is the tie-break order
/// of the lookup service).
pub fn build_index<B: DataBackend>(raw: CitiesRaw) -> CityIndex<B> {
    let cities = raw
        .into_iter()
        .map(|c| CityRecord::<B> {
            name: B::str_from(&c.name),
            country: B::str_from(&c.country),
            latitude: c.latitude.map(B::float_from),
            longitude: c.longitude.map(B::float_from),
        })
        .collect();

    CityIndex { cities }
}
