//! Order submission through a payment gateway

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{info, warn};

/// Error code reported when the charge does not go through
pub const PAYMENT_ERROR: &str = "payment_error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub credit_card_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub total_amount: f64,
}

/// Outcome reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChargeStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

/// Card charging collaborator
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, card: &CreditCard, amount: f64) -> ChargeResult;
}

/// Result of [`submit_order`]
///
/// Serializes as `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderResult {
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Charge `card` for the order total.
pub async fn submit_order(
    gateway: &dyn PaymentGateway,
    order: &Order,
    card: &CreditCard,
) -> OrderResult {
    let result = gateway.charge(card, order.total_amount).await;
    match result.status {
        ChargeStatus::Success => {
            info!(amount = order.total_amount, "order charged");
            OrderResult::succeeded()
        }
        ChargeStatus::Failed => {
            warn!(amount = order.total_amount, "charge failed");
            OrderResult::failed(PAYMENT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_result_json_shape() {
        let ok = serde_json::to_value(OrderResult::succeeded()).unwrap_or_default();
        assert_eq!(ok, serde_json::json!({ "success": true }));

        let failed = serde_json::to_value(OrderResult::failed(PAYMENT_ERROR)).unwrap_or_default();
        assert_eq!(
            failed,
            serde_json::json!({ "success": false, "error": "payment_error" })
        );
    }

    #[test]
    fn test_charge_status_round_trips_through_strum() {
        assert_eq!(ChargeStatus::Failed.to_string(), "failed");
        assert_eq!("success".parse::<ChargeStatus>().ok(), Some(ChargeStatus::Success));
    }
}
