//! End-to-end ranking behavior against the bundled dataset.

#![cfg(feature = "json")]

use geolookup_core::prelude::*;

#[test]
fn typing_a_city_prefix_suggests_it_first() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();

    let hits = index.lookup("aus", &LookupOptions::default());
    assert_eq!(hits[0].city.name(), "Austin, TX");

    let hits = index.lookup("bos", &LookupOptions::default());
    assert_eq!(hits[0].city.name(), "Boston, MA");
}

#[test]
fn prefix_outranks_substring() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();
    let hits = index.lookup("aus", &LookupOptions::default());

    let position = |name: &str| hits.iter().position(|h| h.city.name() == name);
    let austin = position("Austin, TX").expect("prefix hit present");
    let sausalito = position("Sausalito, CA").expect("substring hit present");
    assert!(austin < sausalito);

    // "Port Augusta" does not contain "aus" as a substring, so it never
    // enters the candidate set at all.
    assert!(position("Port Augusta, SA").is_none());
}

#[test]
fn word_start_outranks_substring() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();
    // "au" hits "Port Augusta" at a word boundary and "Sausalito" mid-word.
    let hits = index.lookup("au", &LookupOptions::default());

    let position = |name: &str| hits.iter().position(|h| h.city.name() == name);
    let austin = position("Austin, TX").expect("prefix hit present");
    let port_augusta = position("Port Augusta, SA").expect("word-start hit present");
    let sausalito = position("Sausalito, CA").expect("substring hit present");

    assert!(austin < port_augusta);
    assert!(port_augusta < sausalito);
}

#[test]
fn accented_names_match_folded_queries() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();

    let hits = index.lookup("zurich", &LookupOptions::default());
    assert_eq!(hits[0].city.name(), "Zürich, CH");

    let hits = index.lookup("lodz", &LookupOptions::default());
    assert_eq!(hits[0].city.name(), "Łódź, PL");

    let hits = index.lookup("sao pa", &LookupOptions::default());
    assert_eq!(hits[0].city.name(), "São Paulo, BR");
}

#[test]
fn reference_point_prefers_the_nearer_homonym() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();

    // Both Austins are prefix matches for "austin"; the Texan one is
    // thousands of km nearer to a reference in Texas.
    let hits = index.lookup(
        "austin",
        &LookupOptions {
            reference: Some(Coord::new(30.0, -97.0)),
            ..Default::default()
        },
    );
    assert_eq!(hits[0].city.name(), "Austin, TX");
    assert_eq!(hits[1].city.name(), "Austin, MN");

    // From Minnesota the order flips.
    let hits = index.lookup(
        "austin",
        &LookupOptions {
            reference: Some(Coord::new(44.0, -93.0)),
            ..Default::default()
        },
    );
    assert_eq!(hits[0].city.name(), "Austin, MN");
}

#[test]
fn empty_query_near_austin_returns_austin_first() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();
    let hits = index.lookup(
        "",
        &LookupOptions {
            reference: Some(Coord::new(30.27, -97.74)),
            limit: 1,
            ..Default::default()
        },
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].city.name(), "Austin, TX");
}

#[test]
fn country_filter_combines_with_text_and_proximity() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();
    let hits = index.lookup(
        "van",
        &LookupOptions {
            country: Some("ca"),
            reference: Some(Coord::new(49.0, -123.0)),
            ..Default::default()
        },
    );
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h.city.country() == "CA"));
    assert_eq!(hits[0].city.name(), "Vancouver, BC");
}

#[test]
fn results_never_exceed_the_limit() {
    let index = CityIndex::<DefaultBackend>::load().unwrap();
    for query in ["", "a", "san", "berlin"] {
        let hits = index.lookup(
            query,
            &LookupOptions {
                limit: 5,
                ..Default::default()
            },
        );
        assert!(hits.len() <= 5);
    }
}
