use clap::{Parser, Subcommand};

/// CLI arguments for geolookup
#[derive(Debug, Parser)]
#[command(
    name = "geolookup",
    version,
    about = "CLI for querying the geolookup-core city dataset"
)]
pub struct CliArgs {
    /// Path to a custom dataset JSON file (default: the bundled dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List the distinct country codes present in the dataset
    Countries,

    /// Ranked city suggestions for a query
    Lookup {
        /// Free-text query (may be empty with --near for pure proximity)
        #[arg(default_value = "")]
        query: String,

        /// Restrict results to a country code (e.g. US)
        #[arg(short, long)]
        country: Option<String>,

        /// Reference point as LAT,LON (e.g. 30.27,-97.74)
        #[arg(short, long)]
        near: Option<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Great-circle distance and bearing between two points
    Distance {
        /// Origin as LAT,LON
        from: String,
        /// Destination as LAT,LON
        to: String,
    },
}
