//! geolookup-wasm — WebAssembly bindings for geolookup-core
//!
//! This crate exposes a small, ergonomic JS/WASM API on top of
//! `geolookup-core` for the browser autocomplete widget: type a partial
//! city name, get back ranked suggestion rows. The bundled dataset is
//! embedded in the WASM binary via the core crate and parsed once on
//! module load.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `city_count()` — number of cities in the embedded dataset
//! - `lookup_cities(query, country?, lat?, lon?, limit?)` — ranked
//!   suggestion rows as a JSON-serializable array
//! - `distance_between(lat1, lon1, lat2, lon2)` — great-circle km
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { lookup_cities } from 'geolookup-wasm';
//!
//! async function main() {
//!   await init(); // initializes the embedded dataset
//!
//!   // On each keystroke:
//!   const rows = lookup_cities('aus', null, 30.27, -97.74, 10);
//!   // rows: [{ name, country, latitude, longitude, score }, ...]
//!   // On selection the widget emits the row's {name, latitude, longitude}.
//!   console.log(rows);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.
//! - Lookups are synchronous and side-effect-free; each keystroke simply
//!   calls `lookup_cities` again and re-renders.

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use geolookup_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;

// Static Instance: parsed once, read-only afterwards.
static INDEX: OnceLock<DefaultCityIndex> = OnceLock::new();

fn index() -> &'static DefaultCityIndex {
    INDEX.get_or_init(|| {
        // The embedded dataset is compiled in; failure to parse it is a
        // build defect, not a runtime condition.
        CityIndex::load().expect("embedded dataset parses")
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let stats = index().stats();
    web_sys::console::log_1(
        &format!(
            "geolookup: loaded {} cities in {} countries",
            stats.cities, stats.countries
        )
        .into(),
    );
}

/// One suggestion row handed to the widget.
#[derive(Serialize)]
struct SuggestionRow {
    name: String,
    country: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    score: f64,
}

/// Number of cities in the embedded dataset.
#[wasm_bindgen]
pub fn city_count() -> usize {
    index().len()
}

/// Distinct country codes present in the embedded dataset.
#[wasm_bindgen]
pub fn country_codes() -> JsValue {
    let codes = index().countries();
    to_value(&codes).unwrap_or(JsValue::NULL)
}

/// Ranked city suggestions for a query.
///
/// `country` restricts results to one country code; `lat`/`lon` (both or
/// neither) supply the reference point for proximity ranking; `limit`
/// defaults to 30. Returns a JSON array of
/// `{name, country, latitude, longitude, score}` rows, best match first.
#[wasm_bindgen]
pub fn lookup_cities(
    query: &str,
    country: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    limit: Option<usize>,
) -> JsValue {
    let reference = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coord::new(lat, lon)),
        _ => None,
    };

    let options = LookupOptions {
        country: country.as_deref(),
        reference,
        limit: limit.unwrap_or(DEFAULT_LIMIT),
    };

    let rows: Vec<SuggestionRow> = index()
        .lookup(query, &options)
        .into_iter()
        .map(|hit| SuggestionRow {
            name: hit.city.name().to_owned(),
            country: hit.city.country().to_owned(),
            latitude: hit.city.latitude,
            longitude: hit.city.longitude,
            score: hit.score,
        })
        .collect();

    to_value(&rows).unwrap_or(JsValue::NULL)
}

/// Great-circle distance in kilometers between two points.
#[wasm_bindgen]
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    distance_km(Coord::new(lat1, lon1), Coord::new(lat2, lon2))
}
