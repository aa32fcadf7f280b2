//! Basic usage example for geolookup-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset
//! - Get ranked autocomplete suggestions
//! - Restrict results to a country
//! - Browse the event-category taxonomy

use geolookup_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geolookup-rs Basic Usage Example ===\n");

    // Load the dataset
    println!("Loading city dataset...");
    let index = CityIndex::<StandardBackend>::load()?;
    let stats = index.stats();
    println!(
        "✓ Loaded {} cities in {} countries\n",
        stats.cities, stats.countries
    );

    // Example 1: Ranked suggestions for a partial name
    println!("--- Example 1: Suggestions for \"aus\" ---");
    let hits = index.lookup("aus", &LookupOptions::default());
    for (i, hit) in hits.iter().enumerate() {
        println!(
            "{}. {} ({})  score {:.1}",
            i + 1,
            hit.city.name(),
            hit.city.country(),
            hit.score
        );
    }
    println!();

    // Example 2: Restrict to a country
    println!("--- Example 2: \"san\" restricted to the US ---");
    let hits = index.lookup(
        "san",
        &LookupOptions {
            country: Some("US"),
            limit: 5,
            ..Default::default()
        },
    );
    for hit in &hits {
        println!("- {}", hit.city.name());
    }
    println!();

    // Example 3: Accent-insensitive matching
    println!("--- Example 3: Folded matching ---");
    for query in ["zurich", "lodz", "sao paulo"] {
        let hits = index.lookup(query, &LookupOptions::default());
        match hits.first() {
            Some(hit) => println!("\"{}\" → {}", query, hit.city.name()),
            None => println!("\"{query}\" → no match"),
        }
    }
    println!();

    // Example 4: Exact name lookup
    println!("--- Example 4: Find by display name ---");
    if let Some(city) = index.find_by_name("Austin, TX") {
        let coord = city.coord().expect("Austin has coordinates");
        println!("{} is at {:.2}, {:.2}", city.name(), coord.lat, coord.lon);
    }
    println!();

    // Example 5: Event categories
    println!("--- Example 5: Category taxonomy ---");
    println!("Volunteer categories:");
    for category in categories_for(CategoryKind::Volunteer) {
        println!("- {} ({})", category.label, category.id);
    }
    if let Some(category) = find_category("concerts") {
        println!("Lookup \"concerts\" → {}", category.label);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
