//! Price conversion through an exchange-rate lookup

use tracing::debug;

/// Prices are quoted in this currency
pub const BASE_CURRENCY: &str = "USD";

/// Exchange-rate lookup
pub trait ExchangeRates: Send + Sync {
    /// Units of `to` per unit of `from`
    fn exchange_rate(&self, from: &str, to: &str) -> f64;
}

/// Convert a base-currency price into `currency`.
pub fn get_price_in_currency(rates: &dyn ExchangeRates, price: f64, currency: &str) -> f64 {
    let rate = rates.exchange_rate(BASE_CURRENCY, currency);
    debug!(currency, rate, "converting price");
    price * rate
}
