//! Shipping information from a quote lookup

use serde::{Deserialize, Serialize};

/// A priced delivery option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

/// Shipping-quote lookup
pub trait ShippingQuotes: Send + Sync {
    /// `None` when the destination cannot be served
    fn shipping_quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Human-readable shipping line for `destination`.
pub fn get_shipping_info(quotes: &dyn ShippingQuotes, destination: &str) -> String {
    quotes.shipping_quote(destination).map_or_else(
        || "Shipping Unavailable".to_string(),
        |quote| {
            format!(
                "Shipping Cost: ${} ({} Days)",
                quote.cost, quote.estimated_days
            )
        },
    )
}
