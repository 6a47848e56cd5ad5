//! Driving-age eligibility by country

use std::collections::BTreeMap;

use tracing::debug;

use crate::{Error, Result};

/// Minimum legal driving age per country code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrivingRules {
    minimum_ages: BTreeMap<String, u32>,
}

impl DrivingRules {
    /// Create rules from a country code → minimum age table
    #[must_use]
    pub const fn new(minimum_ages: BTreeMap<String, u32>) -> Self {
        Self { minimum_ages }
    }

    /// Minimum age for `country_code`, if the country is recognized
    #[must_use]
    pub fn minimum_age(&self, country_code: &str) -> Option<u32> {
        self.minimum_ages.get(country_code).copied()
    }

    /// Recognized country codes, sorted
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.minimum_ages.keys().map(String::as_str)
    }

    /// Whether someone of `age` may drive in `country_code`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCountry` for an unrecognized code.
    pub fn can_drive(&self, age: u32, country_code: &str) -> Result<bool> {
        let minimum = self
            .minimum_age(country_code)
            .ok_or_else(|| Error::InvalidCountry(country_code.to_string()))?;
        debug!(country_code, age, minimum, "checking driving age");
        Ok(age >= minimum)
    }
}

impl Default for DrivingRules {
    fn default() -> Self {
        Self::new(default_driving_ages())
    }
}

/// Built-in table: US → 16, UK → 17
#[must_use]
pub fn default_driving_ages() -> BTreeMap<String, u32> {
    BTreeMap::from([("US".to_string(), 16), ("UK".to_string(), 17)])
}

/// [`DrivingRules::can_drive`] against the built-in table.
pub fn can_drive(age: u32, country_code: &str) -> Result<bool> {
    DrivingRules::default().can_drive(age, country_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_drive_rejects_unknown_country() {
        let result = can_drive(20, "FR");
        assert_eq!(result, Err(Error::InvalidCountry("FR".into())));
        if let Err(e) = result {
            assert!(e.to_string().to_lowercase().contains("invalid"));
        }
    }

    #[test]
    fn test_can_drive_table() {
        let cases = [
            (15, "US", false),
            (16, "US", true),
            (17, "US", true),
            (16, "UK", false),
            (17, "UK", true),
            (18, "UK", true),
        ];
        for (age, country, expected) in cases {
            assert_eq!(can_drive(age, country), Ok(expected), "{age}, {country}");
        }
    }

    #[test]
    fn test_country_codes_are_case_sensitive() {
        assert!(can_drive(30, "us").is_err());
    }

    #[test]
    fn test_injected_rules() {
        let rules = DrivingRules::new(BTreeMap::from([("NZ".to_string(), 16)]));
        assert_eq!(rules.can_drive(16, "NZ"), Ok(true));
        assert!(rules.can_drive(16, "US").is_err());
        assert_eq!(rules.countries().collect::<Vec<_>>(), vec!["NZ"]);
    }
}
