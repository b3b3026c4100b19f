// crates/citymap-core/src/search.rs

//! # Query Engine
//!
//! Read-only queries over the records of a [`CityRegistry`]. Ties always go
//! to the record that comes first in registry order.

use crate::error::{CityMapError, Result};
use crate::geo::{is_valid_coordinate, planar_distance};
use crate::model::{CityRecord, Direction};
use crate::registry::CityRegistry;
use crate::text::is_valid_state_code;

/// The query operations available on a city collection.
pub trait CityQuery {
    /// Name of the city farthest in `direction`: max latitude for north,
    /// max longitude for east, min latitude for south, min longitude for
    /// west.
    fn farthest(&self, direction: Direction) -> Result<&str>;

    /// Name of the city nearest to the given point by planar distance on
    /// raw degrees.
    fn closest(&self, latitude: f64, longitude: f64) -> Result<&str>;

    /// Distinct state codes in order of first occurrence.
    fn list_states(&self) -> Vec<&str>;

    /// Names of all cities in `state`, in registry order. An unknown but
    /// well-formed code yields an empty list.
    fn cities_in_state(&self, state: &str) -> Result<Vec<&str>>;
}

impl CityQuery for [CityRecord] {
    fn farthest(&self, direction: Direction) -> Result<&str> {
        let beats = |a: &CityRecord, b: &CityRecord| match direction {
            Direction::North => a.latitude > b.latitude,
            Direction::East => a.longitude > b.longitude,
            Direction::South => a.latitude < b.latitude,
            Direction::West => a.longitude < b.longitude,
        };

        let mut iter = self.iter();
        let mut best = iter.next().ok_or(CityMapError::EmptyCollection)?;
        for city in iter {
            // Strict comparison keeps the first of equal extremes.
            if beats(city, best) {
                best = city;
            }
        }
        Ok(best.city.as_str())
    }

    fn closest(&self, latitude: f64, longitude: f64) -> Result<&str> {
        if !is_valid_coordinate(latitude, longitude) {
            return Err(CityMapError::invalid(format!(
                "invalid latitude or longitude: {latitude}, {longitude}"
            )));
        }

        let mut best: Option<(&CityRecord, f64)> = None;
        for city in self {
            let d = planar_distance(city.latitude, city.longitude, latitude, longitude);
            // Strict comparison keeps the first of equal distances.
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((city, d));
            }
        }
        best.map(|(city, _)| city.city.as_str())
            .ok_or(CityMapError::EmptyCollection)
    }

    fn list_states(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for city in self {
            if !out.contains(&city.state.as_str()) {
                out.push(city.state.as_str());
            }
        }
        out
    }

    fn cities_in_state(&self, state: &str) -> Result<Vec<&str>> {
        if !is_valid_state_code(state) {
            return Err(CityMapError::invalid(format!("invalid state name: {state:?}")));
        }
        Ok(self
            .iter()
            .filter(|c| c.state == state)
            .map(|c| c.city.as_str())
            .collect())
    }
}

impl CityQuery for CityRegistry {
    fn farthest(&self, direction: Direction) -> Result<&str> {
        self.all().farthest(direction)
    }

    fn closest(&self, latitude: f64, longitude: f64) -> Result<&str> {
        self.all().closest(latitude, longitude)
    }

    fn list_states(&self) -> Vec<&str> {
        self.all().list_states()
    }

    fn cities_in_state(&self, state: &str) -> Result<Vec<&str>> {
        self.all().cities_in_state(state)
    }
}
