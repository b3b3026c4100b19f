//! Basic usage example for citymap-rs
//!
//! Loads the sample dataset and runs every query once.

use citymap_rs::{CityQuery, CityRegistry, Direction, Result};

fn main() -> Result<()> {
    let db = CityRegistry::sample();

    for direction in Direction::ALL {
        println!(
            "The {}ernmost city is {}.",
            direction,
            db.farthest(direction)?
        );
    }

    println!(
        "The city that is closest to target location is {}.",
        db.closest(33.0, -132.32)?
    );

    println!("All states: {}.", db.list_states().join(" "));

    for state in ["TN", "CA"] {
        println!("Cities of {state} state: {}.", db.cities_in_state(state)?.join(","));
    }

    Ok(())
}
