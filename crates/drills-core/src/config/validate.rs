//! Configuration validation
//!
//! Validation also doubles as the conversion point into the drill
//! components, so an invalid catalog can never reach [`Pricing`].

use super::types::Config;
use crate::{
    catalog::CouponCatalog, driving::DrivingRules, pricing::Pricing, Error, Result,
};

/// Ages above this are treated as a typo
const MAX_DRIVING_AGE: u32 = 150;

impl Config {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if:
    /// - The coupon catalog is empty or holds an invalid coupon
    /// - A country code is empty or its minimum age exceeds 150
    pub fn validate(&self) -> Result<()> {
        self.coupon_catalog()?;
        self.driving_rules()?;
        Ok(())
    }

    /// Build the coupon catalog described by this config
    pub fn coupon_catalog(&self) -> Result<CouponCatalog> {
        CouponCatalog::new(self.coupons.clone())
    }

    /// Build a discount calculator over this config's catalog
    pub fn pricing(&self) -> Result<Pricing> {
        self.coupon_catalog().map(Pricing::new)
    }

    /// Build the driving-age table described by this config
    pub fn driving_rules(&self) -> Result<DrivingRules> {
        if let Some(country) = self.driving_ages.keys().find(|c| c.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "driving_ages has an empty country code: {country:?}"
            )));
        }
        if let Some((country, age)) = self
            .driving_ages
            .iter()
            .find(|(_, age)| **age > MAX_DRIVING_AGE)
        {
            return Err(Error::InvalidConfig(format!(
                "driving age for {country} must be at most {MAX_DRIVING_AGE}, got {age}"
            )));
        }
        Ok(DrivingRules::new(self.driving_ages.clone()))
    }
}
