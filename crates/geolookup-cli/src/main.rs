//! geolookup — Command-line interface for geolookup-core
//!
//! This binary provides a simple way to query the bundled city dataset from
//! your terminal: print dataset statistics, list country codes, get ranked
//! autocomplete suggestions, and compute great-circle distances.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geolookup stats
//!
//! - Ranked suggestions for a query
//!   $ geolookup lookup aus
//!   $ geolookup lookup aus --country US --limit 5
//!
//! - Suggestions ranked by proximity to a point
//!   $ geolookup lookup san --near 30.27,-97.74
//!   $ geolookup lookup --near 30.27,-97.74        (nearest cities, no text)
//!
//! - Distance between two points
//!   $ geolookup distance 30.27,-97.74 42.36,-71.06
//!
//! Data source
//! -----------
//!
//! By default the CLI uses the dataset bundled with the `geolookup-core`
//! crate. Use `--input <path>` to point to a custom JSON dataset (a `.gz`
//! file works when the `compact` feature is enabled).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geolookup_core::{
    distance_km, initial_bearing_deg, CityIndex, Coord, LookupOptions, StandardBackend,
    DEFAULT_LIMIT,
};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Load the dataset (bundled unless --input was given)
    let index = match &args.input {
        Some(path) => CityIndex::<StandardBackend>::load_from_path(path)?,
        None => CityIndex::<StandardBackend>::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            println!("Dataset statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
        }

        Commands::Countries => {
            for code in index.countries() {
                println!("{code}");
            }
        }

        Commands::Lookup {
            query,
            country,
            near,
            limit,
        } => {
            let reference = near.as_deref().map(parse_coord).transpose()?;
            let options = LookupOptions {
                country: country.as_deref(),
                reference,
                limit: limit.unwrap_or(DEFAULT_LIMIT),
            };

            let hits = index.lookup(&query, &options);
            if hits.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for hit in hits {
                    match (reference, hit.city.coord()) {
                        (Some(origin), Some(at)) => println!(
                            "{} ({})  score {:.2}  {:.0} km",
                            hit.city.name(),
                            hit.city.country(),
                            hit.score,
                            distance_km(origin, at)
                        ),
                        _ => println!(
                            "{} ({})  score {:.2}",
                            hit.city.name(),
                            hit.city.country(),
                            hit.score
                        ),
                    }
                }
            }
        }

        Commands::Distance { from, to } => {
            let a = parse_coord(&from)?;
            let b = parse_coord(&to)?;
            println!("Distance: {:.1} km", distance_km(a, b));
            println!("Initial bearing: {:.1}°", initial_bearing_deg(a, b));
        }
    }

    Ok(())
}

/// Parse a "LAT,LON" pair in decimal degrees.
fn parse_coord(s: &str) -> anyhow::Result<Coord> {
    let (lat, lon) = s
        .split_once(',')
        .with_context(|| format!("expected LAT,LON but got: {s}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude: {lat}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude: {lon}"))?;
    Ok(Coord::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::parse_coord;

    #[test]
    fn parses_coordinate_pairs() {
        let c = parse_coord("30.27,-97.74").unwrap();
        assert_eq!(c.lat, 30.27);
        assert_eq!(c.lon, -97.74);

        let c = parse_coord(" 42.36 , -71.06 ").unwrap();
        assert_eq!(c.lat, 42.36);

        assert!(parse_coord("not-a-coord").is_err());
        assert!(parse_coord("1.0,abc").is_err());
    }
}
