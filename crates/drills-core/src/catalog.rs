//! Coupon catalog

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A discount code and the fraction it takes off a price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Case-sensitive code, never empty
    pub code: String,
    /// Fraction in the open interval (0, 1)
    pub discount: f64,
}

impl Coupon {
    /// Create a coupon without checking it
    #[must_use]
    pub fn new(code: impl Into<String>, discount: f64) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// Check the coupon invariant: non-empty code, discount in (0, 1).
    pub fn validate(&self) -> Result<()> {
        if self.code.is_empty() {
            return Err(Error::InvalidConfig("coupon code cannot be empty".into()));
        }
        if !(self.discount > 0.0 && self.discount < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "coupon '{}' discount must be between 0 and 1 (exclusive), got {}",
                self.code, self.discount
            )));
        }
        Ok(())
    }
}

/// Ordered, non-empty, immutable set of coupons
#[derive(Debug, Clone, PartialEq)]
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

impl CouponCatalog {
    /// Build a catalog, rejecting an empty list or any invalid coupon.
    pub fn new(coupons: Vec<Coupon>) -> Result<Self> {
        if coupons.is_empty() {
            return Err(Error::InvalidConfig(
                "coupon catalog must contain at least one coupon".into(),
            ));
        }
        coupons.iter().try_for_each(Coupon::validate)?;
        Ok(Self { coupons })
    }

    /// All coupons in catalog order
    #[must_use]
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Exact, case-sensitive lookup. First match wins.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Always false for a constructed catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

impl Default for CouponCatalog {
    fn default() -> Self {
        Self {
            coupons: default_coupons(),
        }
    }
}

/// The built-in sample coupons
#[must_use]
pub fn default_coupons() -> Vec<Coupon> {
    vec![Coupon::new("SAVE10", 0.1), Coupon::new("SAVE20", 0.2)]
}

/// The built-in catalog's coupons, in order
#[must_use]
pub fn get_coupons() -> Vec<Coupon> {
    CouponCatalog::default().coupons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_coupons_is_non_empty() {
        assert!(!get_coupons().is_empty());
    }

    #[test]
    fn test_get_coupons_have_valid_codes() {
        for coupon in get_coupons() {
            assert!(!coupon.code.is_empty());
        }
    }

    #[test]
    fn test_get_coupons_have_valid_discounts() {
        for coupon in get_coupons() {
            assert!(coupon.discount > 0.0);
            assert!(coupon.discount < 1.0);
        }
    }

    #[test]
    fn test_default_catalog_passes_its_own_validation() {
        assert!(CouponCatalog::new(default_coupons()).is_ok());
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        let result = CouponCatalog::new(Vec::new());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_new_rejects_out_of_range_discounts() {
        for discount in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let result = CouponCatalog::new(vec![Coupon::new("BAD", discount)]);
            assert!(result.is_err(), "discount {discount} should be rejected");
        }
    }

    #[test]
    fn test_new_rejects_empty_code() {
        let result = CouponCatalog::new(vec![Coupon::new("", 0.5)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let catalog = CouponCatalog::default();
        assert!(catalog.find("SAVE10").is_some());
        assert!(catalog.find("save10").is_none());
    }
}
