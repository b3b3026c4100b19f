// crates/citymap-core/src/model.rs
use crate::error::{CityMapError, Result};
use crate::geo::is_valid_coordinate;
use crate::text::{is_valid_city_name, is_valid_state_code};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single city entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    /// Builds a record without checking it. Callers that take input from
    /// users should go through [`CityRecord::try_new`] or
    /// [`crate::AddCityRequest::validate`].
    pub fn new(city: impl Into<String>, state: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            latitude,
            longitude,
        }
    }

    /// Builds a record, enforcing the name, state and bounds rules.
    pub fn try_new(
        city: impl Into<String>,
        state: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let record = Self::new(city, state, latitude, longitude);
        record.check()?;
        Ok(record)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if !is_valid_city_name(&self.city) {
            return Err(CityMapError::invalid(format!("invalid city name: {:?}", self.city)));
        }
        if !is_valid_state_code(&self.state) {
            return Err(CityMapError::invalid(format!("invalid state code: {:?}", self.state)));
        }
        if !is_valid_coordinate(self.latitude, self.longitude) {
            return Err(CityMapError::invalid(format!(
                "coordinates out of bounds: {}, {}",
                self.latitude, self.longitude
            )));
        }
        Ok(())
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

/// Cardinal direction for extremum queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CityMapError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                CityMapError::invalid(format!(
                    "wrong cardinal direction {token:?}; it should be \"north\", \"east\", \"south\" or \"west\""
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" West ".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("EAST".parse::<Direction>().unwrap(), Direction::East);
    }

    #[test]
    fn unknown_direction_is_invalid_argument() {
        let err = "northeast".parse::<Direction>().unwrap_err();
        assert!(matches!(err, CityMapError::InvalidArgument(_)));
        assert!(err.to_string().contains("northeast"));
    }

    #[test]
    fn try_new_enforces_invariants() {
        let la = CityRecord::try_new("Los Angeles", "CA", 34.05, -118.24).unwrap();
        assert_eq!((la.city(), la.state()), ("Los Angeles", "CA"));
        assert!(CityRecord::try_new("Los  Angeles", "CA", 34.05, -118.24).is_err());
        assert!(CityRecord::try_new("Denver", "co", 39.74, -104.98).is_err());
        assert!(CityRecord::try_new("Denver", "CO", 91.0, -104.98).is_err());
        assert!(CityRecord::try_new("Denver", "CO", f64::NAN, 0.0).is_err());
        assert!(CityRecord::try_new("Los\nAngeles", "CA", 34.05, -118.24).is_err());
    }

    #[test]
    fn serializes_direction_lowercase() {
        let json = serde_json::to_string(&Direction::South).unwrap();
        assert_eq!(json, "\"south\"");
    }
}
