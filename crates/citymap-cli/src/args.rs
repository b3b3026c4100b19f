use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citymap
#[derive(Debug, Parser)]
#[command(
    name = "citymap",
    version,
    about = "CLI for querying and editing a small registry of cities"
)]
pub struct CliArgs {
    /// Path to the text store (`"City, ST", lat, lon;` per line). Files ending
    /// in .gz are gzip-compressed. Falls back to the sample data when missing.
    #[arg(short = 's', long = "store", env = "CITYMAP_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the registry contents
    Stats,

    /// Print every record in store format
    List,

    /// Find the city farthest in a cardinal direction
    Farthest {
        /// north, east, south or west
        direction: String,
    },

    /// Find the city closest to a coordinate (planar distance on degrees)
    Closest {
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        #[arg(allow_hyphen_values = true)]
        longitude: String,
    },

    /// List distinct state codes in order of first appearance
    States,

    /// List the cities of a state
    Cities {
        /// Two uppercase letters (e.g. TN)
        state: String,
    },

    /// Validate and add a city, then save the store
    Add {
        city: String,
        state: String,
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        #[arg(allow_hyphen_values = true)]
        longitude: String,
    },

    /// Report rows of the store that would be skipped on load
    Check,
}
