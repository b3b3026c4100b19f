//! citymap — Command-line interface for citymap-core
//!
//! The host application around the registry: it loads the store at
//! startup, runs one query or edit, and writes the store back after an
//! edit.
//!
//! Usage examples
//! --------------
//!
//! - Farthest city in a direction
//!   $ citymap farthest west
//!
//! - Closest city to a coordinate
//!   $ citymap closest 33 -132.32
//!
//! - States and the cities of one state
//!   $ citymap states
//!   $ citymap cities TN
//!
//! - Add a city to a store file
//!   $ citymap --store cities.txt add "Los Angeles" CA 34.05 -118.24
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use citymap_core::parser::parse_with_report;
use citymap_core::{
    parse_degrees, store, AddCityRequest, CityMapError, CityQuery, CityRegistry, Direction,
};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints `value` as JSON or via the plain-text closure.
fn emit<T: Serialize>(json: bool, value: &T, plain: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        plain(value);
    }
    Ok(())
}

fn coordinate(label: &str, raw: &str) -> Result<f64, CityMapError> {
    parse_degrees(raw)
        .ok_or_else(|| CityMapError::InvalidArgument(format!("{label} is not a number: {raw:?}")))
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let mut db: CityRegistry = store::load_or_sample(args.store.as_deref())
        .context("failed to load the city store")?;
    log::debug!("registry holds {} cities", db.len());

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            emit(args.json, &stats, |s| {
                println!("Registry statistics:");
                println!("  Cities: {}", s.cities);
                println!("  States: {}", s.states);
            })?;
        }

        Commands::List => {
            emit(args.json, &db.all(), |_| println!("{}", db.save()))?;
        }

        Commands::Farthest { direction } => {
            let direction: Direction = direction.parse()?;
            let city = db.farthest(direction)?;
            emit(args.json, &city, |c| {
                println!("The {}ernmost city is {c}.", direction.as_str())
            })?;
        }

        Commands::Closest {
            latitude,
            longitude,
        } => {
            let lat = coordinate("latitude", &latitude)?;
            let lon = coordinate("longitude", &longitude)?;
            let city = db.closest(lat, lon)?;
            emit(args.json, &city, |c| {
                println!("The city that is closest to target location is {c}.")
            })?;
        }

        Commands::States => {
            let states = db.list_states();
            emit(args.json, &states, |s| println!("All states: {}.", s.join(" ")))?;
        }

        Commands::Cities { state } => {
            let cities = db.cities_in_state(&state)?;
            emit(args.json, &cities, |c| {
                if c.is_empty() {
                    println!("No cities found in state {state}.");
                } else {
                    println!("Cities of {state} state: {}.", c.join(","));
                }
            })?;
        }

        Commands::Add {
            city,
            state,
            latitude,
            longitude,
        } => {
            let Some(path) = args.store.clone() else {
                bail!("`add` needs a store to write to; pass --store or set CITYMAP_STORE");
            };
            let request = AddCityRequest::new(city, state, latitude, longitude);
            let record = match request.validate() {
                Ok(record) => record,
                Err(e) => bail!("Invalid data in form: {e}"),
            };
            db.add(record.clone());
            store::save_to_path(&db, &path)
                .with_context(|| format!("failed to save {}", path.display()))?;
            emit(args.json, &record, |r| {
                println!("City successfully added: {}, {}.", r.city(), r.state())
            })?;
        }

        Commands::Check => {
            let Some(path) = args.store.as_deref() else {
                bail!("`check` needs a store; pass --store or set CITYMAP_STORE");
            };
            let text = store::read_text(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let report = parse_with_report(&text);
            emit(args.json, &report.rejected, |rows| {
                println!("{} rows accepted, {} skipped", report.records.len(), rows.len());
                for row in rows {
                    println!("  line {}: {} -> {}", row.line, row.reason, row.content);
                }
            })?;
        }
    }

    Ok(())
}
