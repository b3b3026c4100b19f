// crates/citymap-core/src/validate.rs
use crate::error::{CityMapError, Result};
use crate::geo::{is_valid_coordinate, parse_degrees};
use crate::model::CityRecord;
use crate::text::{is_valid_city_name, is_valid_state_code, is_valid_decimal};
use serde::{Deserialize, Serialize};

/// A single "add city" request as typed into a form: four raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCityRequest {
    pub city: String,
    pub state: String,
    pub latitude: String,
    pub longitude: String,
}

impl AddCityRequest {
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// True when [`AddCityRequest::validate`] would succeed.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks every field and converts the request into a record ready for
    /// [`crate::CityRegistry::add`].
    pub fn validate(&self) -> Result<CityRecord> {
        if !is_valid_city_name(&self.city) {
            return Err(CityMapError::invalid(format!("invalid city name: {:?}", self.city)));
        }
        if !is_valid_state_code(&self.state) {
            return Err(CityMapError::invalid(format!(
                "invalid state code: {:?} (expected two uppercase letters)",
                self.state
            )));
        }
        for (label, value) in [("latitude", &self.latitude), ("longitude", &self.longitude)] {
            if !is_valid_decimal(value) {
                return Err(CityMapError::invalid(format!("invalid {label}: {value:?}")));
            }
        }
        if !is_valid_coordinate(&self.latitude, &self.longitude) {
            return Err(CityMapError::invalid(format!(
                "coordinates out of bounds: {}, {}",
                self.latitude, self.longitude
            )));
        }

        let latitude = parse_degrees(&self.latitude)
            .ok_or_else(|| CityMapError::invalid(format!("invalid latitude: {:?}", self.latitude)))?;
        let longitude = parse_degrees(&self.longitude)
            .ok_or_else(|| CityMapError::invalid(format!("invalid longitude: {:?}", self.longitude)))?;

        Ok(CityRecord::new(self.city.clone(), self.state.clone(), latitude, longitude))
    }
}

impl TryFrom<&AddCityRequest> for CityRecord {
    type Error = CityMapError;

    fn try_from(request: &AddCityRequest) -> Result<Self> {
        request.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_becomes_record() {
        let req = AddCityRequest::new("Salt Lake City", "UT", "40.76", "-111.89");
        assert!(req.is_valid());
        assert_eq!(
            req.validate().unwrap(),
            CityRecord::new("Salt Lake City", "UT", 40.76, -111.89)
        );
    }

    #[test]
    fn rejects_each_bad_field() {
        let cases = [
            AddCityRequest::new("Salt  Lake", "UT", "40", "-111"),
            AddCityRequest::new("Salt Lake", "Utah", "40", "-111"),
            AddCityRequest::new("Salt Lake", "ut", "40", "-111"),
            AddCityRequest::new("Salt Lake", "UT", "forty", "-111"),
            AddCityRequest::new("Salt Lake", "UT", "40", ""),
            AddCityRequest::new("Salt Lake", "UT", " 40", "-111"),
            AddCityRequest::new("Salt Lake", "UT", "91", "-111"),
            AddCityRequest::new("Salt Lake", "UT", "40", "-180.5"),
        ];
        for req in cases {
            let err = req.validate().unwrap_err();
            assert!(matches!(err, CityMapError::InvalidArgument(_)), "{req:?}");
            assert!(!req.is_valid());
        }
    }

    #[test]
    fn line_breaks_in_city_are_rejected() {
        for city in ["Los\nAngeles", "Los\rAngeles"] {
            let err = AddCityRequest::new(city, "CA", "34.05", "-118.24")
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("city name"), "{city:?}");
        }
        // Tabs are still a valid single separator and survive a save/load.
        let record = AddCityRequest::new("Los\tAngeles", "CA", "34.05", "-118.24")
            .validate()
            .unwrap();
        let mut registry = crate::CityRegistry::new();
        registry.add(record);
        assert_eq!(crate::CityRegistry::load(&registry.save()), registry);
    }

    #[test]
    fn error_message_names_the_field() {
        let err = AddCityRequest::new("Boise", "ID", "43.6", "east")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn try_from_delegates_to_validate() {
        let req = AddCityRequest::new("Boise", "ID", "43.62", "-116.2");
        let record = CityRecord::try_from(&req).unwrap();
        assert_eq!(record.state, "ID");
    }
}
