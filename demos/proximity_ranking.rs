//! Proximity ranking example for geolookup-rs
//!
//! This example demonstrates how a reference point changes the ranking:
//! - Pure proximity ordering for an empty query
//! - Distance as a tie-breaker between equally-matching names
//! - Raw distance and bearing computations

use geolookup_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geolookup-rs Proximity Ranking Example ===\n");

    let index = CityIndex::<StandardBackend>::load()?;
    let austin = Coord::new(30.27, -97.74);

    // Example 1: Nearest cities, no text at all
    println!("--- Example 1: Nearest cities to Austin, TX ---");
    let hits = index.lookup(
        "",
        &LookupOptions {
            reference: Some(austin),
            limit: 5,
            ..Default::default()
        },
    );
    for hit in &hits {
        println!("{:>7.0} km  {}", hit.score, hit.city.name());
    }
    println!();

    // Example 2: The same query from two places
    println!("--- Example 2: \"austin\" from Texas vs Minnesota ---");
    for (label, reference) in [
        ("Texas", Coord::new(30.0, -97.0)),
        ("Minnesota", Coord::new(44.0, -93.0)),
    ] {
        let hits = index.lookup(
            "austin",
            &LookupOptions {
                reference: Some(reference),
                limit: 2,
                ..Default::default()
            },
        );
        let names: Vec<&str> = hits.iter().map(|h| h.city.name()).collect();
        println!("from {label}: {names:?}");
    }
    println!();

    // Example 3: Distance and bearing helpers
    println!("--- Example 3: Great-circle helpers ---");
    let boston = Coord::new(42.36, -71.06);
    println!(
        "Austin → Boston: {:.0} km, initial bearing {:.0}°",
        distance_km(austin, boston),
        initial_bearing_deg(austin, boston)
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
