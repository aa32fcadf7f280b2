// crates/geolookup-core/src/lookup.rs

//! The lookup service: filter, score, sort, truncate.
//!
//! Candidate admission is a coarse folded-substring filter on name OR
//! country; the tiered scorer then orders the admitted set. The two stages
//! are deliberate: the scorer never admits candidates the pre-filter
//! rejected.

use crate::geo::{distance_km, Coord};
use crate::model::{CityIndex, CityRecord};
use crate::score::score;
use crate::text::fold_key;
use crate::traits::{DataBackend, NameMatch};

/// Maximum number of suggestions returned when the caller does not set one.
pub const DEFAULT_LIMIT: usize = 30;

/// Per-query options for [`CityIndex::lookup`].
#[derive(Debug, Clone, Copy)]
pub struct LookupOptions<'a> {
    /// Restrict results to this country code (exact, ASCII case-insensitive).
    pub country: Option<&'a str>,
    /// Rank nearer cities earlier; cities without coordinates rank last.
    pub reference: Option<Coord>,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for LookupOptions<'_> {
    fn default() -> Self {
        LookupOptions {
            country: None,
            reference: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A suggestion produced by [`CityIndex::lookup`]: a borrowed city record
/// plus its rank score (lower is better).
///
/// For the pure-proximity path (empty query with a reference point) the
/// score is the raw distance from the reference in kilometers.
#[derive(Debug, Clone, Copy)]
pub struct RankedCity<'a, B: DataBackend> {
    pub city: &'a CityRecord<B>,
    pub score: f64,
}

impl<B: DataBackend> CityIndex<B> {
    /// Ranked city suggestions for a free-text query.
    ///
    /// Step 1 filters candidates: an empty query admits the whole dataset,
    /// a non-empty query requires a folded substring hit on name or
    /// country; both are intersected with `options.country`. Step 2 scores
    /// and stable-sorts ascending. Step 3 truncates to `options.limit`.
    ///
    /// Special case: an empty query with a reference point skips scoring
    /// and sorts by distance alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use geolookup_core::prelude::*;
    ///
    /// let index = CityIndex::<DefaultBackend> {
    ///     cities: vec![
    ///         CityRecord {
    ///             name: "Austin, TX".into(),
    ///             country: "US".into(),
    ///             latitude: Some(30.27),
    ///             longitude: Some(-97.74),
    ///         },
    ///         CityRecord {
    ///             name: "Boston, MA".into(),
    ///             country: "US".into(),
    ///             latitude: Some(42.36),
    ///             longitude: Some(-71.06),
    ///         },
    ///     ],
    /// };
    ///
    /// let hits = index.lookup("aus", &LookupOptions::default());
    /// assert_eq!(hits[0].city.name(), "Austin, TX");
    /// ```
    pub fn lookup(&self, query: &str, options: &LookupOptions) -> Vec<RankedCity<'_, B>> {
        let q = fold_key(query.trim());

        let candidates = self.cities.iter().filter(|city| {
            if let Some(code) = options.country {
                if !city.is_in_country(code) {
                    return false;
                }
            }
            q.is_empty()
                || city.name_contains_folded(&q)
                || fold_key(city.country.as_ref()).contains(&q)
        });

        let mut ranked: Vec<RankedCity<'_, B>> = if q.is_empty() {
            match options.reference {
                // No text to rank by: order by proximity alone.
                Some(origin) => candidates
                    .map(|city| RankedCity {
                        city,
                        score: city
                            .coord()
                            .map(|at| distance_km(origin, at))
                            .unwrap_or(f64::INFINITY),
                    })
                    .collect(),
                None => candidates.map(|city| RankedCity { city, score: 0.0 }).collect(),
            }
        } else {
            candidates
                .map(|city| RankedCity {
                    city,
                    score: score(&q, city, options.reference),
                })
                .collect()
        };

        // Stable: equal scores keep dataset order.
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked.truncate(options.limit);
        ranked
    }
}
