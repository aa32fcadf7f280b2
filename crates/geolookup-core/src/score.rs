// crates/geolookup-core/src/score.rs

//! Tiered fuzzy-match scoring for city suggestions.
//!
//! Lower scores rank earlier. A textual match contributes a negative tier
//! base; physical proximity to an optional reference point contributes a
//! small positive term, weighted so that match tiers dominate unless
//! distances differ by hundreds of kilometers.

use crate::geo::{distance_km, Coord};
use crate::model::CityRecord;
use crate::traits::{DataBackend, NameMatch};

/// Kilometers of distance equivalent to one unit of score.
///
/// With tier bases 50 apart, a candidate needs to be ~5000 km closer to
/// overturn one textual tier.
pub const DISTANCE_WEIGHT_KM: f64 = 100.0;

/// Textual match quality of a candidate name against a query, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// The name starts with the query.
    Prefix,
    /// Some whitespace-delimited word of the name starts with the query.
    WordStart,
    /// The name contains the query anywhere.
    Substring,
    /// No textual match.
    NoMatch,
}

impl MatchTier {
    /// Classify a candidate name against an already-folded, non-empty query.
    pub fn classify<B: DataBackend>(city: &CityRecord<B>, folded_query: &str) -> MatchTier {
        if city.name_starts_with_folded(folded_query) {
            MatchTier::Prefix
        } else if city.name_word_starts_with_folded(folded_query) {
            MatchTier::WordStart
        } else if city.name_contains_folded(folded_query) {
            MatchTier::Substring
        } else {
            MatchTier::NoMatch
        }
    }

    /// Base score contributed by this tier.
    pub fn base(self) -> f64 {
        match self {
            MatchTier::Prefix => -100.0,
            MatchTier::WordStart => -50.0,
            MatchTier::Substring => -10.0,
            MatchTier::NoMatch => 20.0,
        }
    }
}

/// Rank score for `city` given an already-folded query; lower is better.
///
/// With an empty query every candidate gets a base of `0.0` (no textual
/// preference). When `reference` is supplied, `distance / 100 km` is added;
/// a candidate without usable coordinates gets `f64::INFINITY` so it sorts
/// after every located candidate. Pure and deterministic.
pub fn score<B: DataBackend>(
    folded_query: &str,
    city: &CityRecord<B>,
    reference: Option<Coord>,
) -> f64 {
    let base = if folded_query.is_empty() {
        0.0
    } else {
        MatchTier::classify(city, folded_query).base()
    };

    match reference {
        Some(origin) => match city.coord() {
            Some(at) => base + distance_km(origin, at) / DISTANCE_WEIGHT_KM,
            None => f64::INFINITY,
        },
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    fn record(name: &str, coord: Option<(f64, f64)>) -> CityRecord<DefaultBackend> {
        CityRecord {
            name: name.to_owned(),
            country: "US".to_owned(),
            latitude: coord.map(|c| c.0),
            longitude: coord.map(|c| c.1),
        }
    }

    #[test]
    fn tier_precedence() {
        let austin = record("Austin, TX", None);
        assert_eq!(MatchTier::classify(&austin, "aus"), MatchTier::Prefix);

        let san_jose = record("San Jose, CA", None);
        assert_eq!(MatchTier::classify(&san_jose, "jos"), MatchTier::WordStart);

        let port_augusta = record("Port Augusta, SA", None);
        assert_eq!(
            MatchTier::classify(&port_augusta, "gus"),
            MatchTier::Substring
        );

        let boston = record("Boston, MA", None);
        assert_eq!(MatchTier::classify(&boston, "aus"), MatchTier::NoMatch);
    }

    #[test]
    fn prefix_beats_word_start_beats_substring() {
        assert!(MatchTier::Prefix.base() < MatchTier::WordStart.base());
        assert!(MatchTier::WordStart.base() < MatchTier::Substring.base());
        assert!(MatchTier::Substring.base() < MatchTier::NoMatch.base());
    }

    #[test]
    fn prefix_beats_substring_without_reference() {
        let austin = record("Austin, TX", None);
        let sausalito = record("Sausalito, CA", None);
        assert_eq!(MatchTier::classify(&sausalito, "aus"), MatchTier::Substring);
        assert!(score("aus", &austin, None) < score("aus", &sausalito, None));
    }

    #[test]
    fn empty_query_is_neutral() {
        let austin = record("Austin, TX", None);
        let boston = record("Boston, MA", None);
        assert_eq!(score("", &austin, None), 0.0);
        assert_eq!(score("", &boston, None), 0.0);
    }

    #[test]
    fn proximity_breaks_ties_within_a_tier() {
        let austin = record("Springfield, TX", Some((30.27, -97.74)));
        let boston = record("Springfield, MA", Some((42.36, -71.06)));
        let near_austin = Coord::new(30.0, -97.0);

        let a = score("spring", &austin, Some(near_austin));
        let b = score("spring", &boston, Some(near_austin));
        assert!(a < b);
        // Both stay inside the prefix tier.
        assert!(a < MatchTier::WordStart.base());
        assert!(b < MatchTier::WordStart.base());
    }

    #[test]
    fn missing_coordinates_rank_last_under_proximity() {
        let located = record("Austin, TX", Some((30.27, -97.74)));
        let unlocated = record("Austin, MN", None);
        let reference = Coord::new(30.0, -97.0);

        assert!(score("aus", &unlocated, Some(reference)).is_infinite());
        assert!(
            score("aus", &located, Some(reference)) < score("aus", &unlocated, Some(reference))
        );
        // Without a reference the unlocated record scores normally.
        assert_eq!(score("aus", &unlocated, None), MatchTier::Prefix.base());
    }

    #[test]
    fn scoring_is_deterministic() {
        let city = record("Denver, CO", Some((39.74, -104.99)));
        let reference = Some(Coord::new(40.0, -105.0));
        assert_eq!(score("den", &city, reference), score("den", &city, reference));
    }
}
