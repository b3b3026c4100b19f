// crates/citymap-core/src/registry.rs
use crate::model::CityRecord;
use crate::parser::{parse, serialize};
use serde::{Deserialize, Serialize};

/// Dataset used when no store is available.
pub const SAMPLE_DATA: &str = r#""Nashville, TN", 36.17, -86.78;
"New York, NY", 40.71, -74.00;
"Atlanta, GA", 33.75, -84.39;
"Denver, CO", 39.74, -104.98;
"Seattle, WA", 47.61, -122.33;
"Los Angeles, CA", 34.05, -118.24;
"Memphis, TN", 35.15, -90.05;"#;

/// The ordered, append-only collection of city records.
///
/// The registry is a plain owned value. Hosts create it with
/// [`CityRegistry::load`] at startup and hand [`CityRegistry::save`]'s text
/// to their storage at shutdown; there is no global instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CityRegistry {
    cities: Vec<CityRecord>,
}

/// Simple aggregate counts for the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub cities: usize,
    pub states: usize,
}

impl CityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(cities: Vec<CityRecord>) -> Self {
        Self { cities }
    }

    /// Bulk-loads from the text store format. Bad rows are skipped.
    pub fn load(text: &str) -> Self {
        let registry = Self::from_records(parse(text));
        log::info!("loaded {} cities", registry.len());
        registry
    }

    /// The built-in seven-city dataset.
    pub fn sample() -> Self {
        Self::load(SAMPLE_DATA)
    }

    /// Renders the registry in the text store format, in insertion order.
    pub fn save(&self) -> String {
        serialize(&self.cities)
    }

    /// Appends a record as-is.
    ///
    /// No validation happens here: records coming from users must be
    /// checked first, e.g. with [`crate::AddCityRequest::validate`].
    pub fn add(&mut self, record: CityRecord) {
        log::debug!("adding {}, {}", record.city, record.state);
        self.cities.push(record);
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CityRecord> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        let mut states: Vec<&str> = self.cities.iter().map(|c| c.state.as_str()).collect();
        states.sort_unstable();
        states.dedup();
        RegistryStats {
            cities: self.cities.len(),
            states: states.len(),
        }
    }
}

impl<'a> IntoIterator for &'a CityRegistry {
    type Item = &'a CityRecord;
    type IntoIter = std::slice::Iter<'a, CityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_seven_cities() {
        let registry = CityRegistry::sample();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.all()[0], CityRecord::new("Nashville", "TN", 36.17, -86.78));
        assert_eq!(registry.stats(), RegistryStats { cities: 7, states: 6 });

        let last = (&registry).into_iter().last().map(|r| r.city.as_str());
        assert_eq!(last, Some("Memphis"));
    }

    #[test]
    fn add_appends_without_validation() {
        let mut registry = CityRegistry::new();
        registry.add(CityRecord::new("Boise", "ID", 43.62, -116.2));
        registry.add(CityRecord::new("not a city!", "??", 500.0, 0.0));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.all()[1].city, "not a city!");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut registry = CityRegistry::sample();
        registry.add(CityRecord::new("Memphis", "TN", 35.15, -90.05));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn save_then_load_is_lossless() {
        let mut registry = CityRegistry::sample();
        registry.add(CityRecord::new("Winston-Salem", "NC", 36.0999, -80.2442));
        let reloaded = CityRegistry::load(&registry.save());
        assert_eq!(reloaded, registry);
    }

    #[test]
    fn empty_registry_saves_to_empty_text() {
        let registry = CityRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.save(), "");
        assert_eq!(registry.stats(), RegistryStats { cities: 0, states: 0 });
    }
}
