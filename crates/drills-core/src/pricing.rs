//! Price calculations: coupon discounts and range checks

use tracing::{debug, warn};

use crate::{
    catalog::{Coupon, CouponCatalog},
    Error, Result,
};

/// Discount calculator bound to a coupon catalog
#[derive(Debug, Clone, Default)]
pub struct Pricing {
    catalog: CouponCatalog,
}

impl Pricing {
    /// Create a calculator over the given catalog
    #[must_use]
    pub const fn new(catalog: CouponCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &CouponCatalog {
        &self.catalog
    }

    /// Apply the coupon named `code` to `price`.
    ///
    /// An unknown code leaves the price unchanged; only a bad price is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPrice` if `price` is negative, NaN or infinite.
    pub fn calculate_discount(&self, price: f64, code: &str) -> Result<f64> {
        validate_price(price)?;

        let discounted = self.catalog.find(code).map_or_else(
            || {
                debug!(code, "unknown coupon code, price unchanged");
                price
            },
            |Coupon { discount, .. }| {
                debug!(code, discount, "applying coupon");
                price * (1.0 - discount)
            },
        );
        Ok(discounted)
    }
}

/// Apply a coupon from the built-in catalog.
///
/// See [`Pricing::calculate_discount`].
pub fn calculate_discount(price: f64, code: &str) -> Result<f64> {
    Pricing::default().calculate_discount(price, code)
}

/// `true` iff `min <= price <= max`. NaN anywhere yields `false`.
#[must_use]
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

fn validate_price(price: f64) -> Result<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        warn!(price, "rejecting price");
        Err(Error::InvalidPrice(format!(
            "expected a finite, non-negative number, got {price}"
        )))
    }
}
