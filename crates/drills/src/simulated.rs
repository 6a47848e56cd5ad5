//! Stand-in collaborators for running the drills without real services
//!
//! Rates and quotes are random, payments succeed after a short delay, and
//! analytics and email only log.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tracing::info;

use crate::services::{
    Analytics, ChargeResult, ChargeStatus, Clock, CreditCard, ExchangeRates, Mailer,
    PaymentGateway, ShippingQuote, ShippingQuotes,
};

/// Random rate in `[1, 2)` for any currency pair
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomExchangeRates;

impl ExchangeRates for RandomExchangeRates {
    fn exchange_rate(&self, from: &str, to: &str) -> f64 {
        let rate = rand::thread_rng().gen_range(1.0..2.0);
        info!(from, to, rate, "simulated exchange rate");
        rate
    }
}

/// Random quote for any destination
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomShippingQuotes;

impl ShippingQuotes for RandomShippingQuotes {
    fn shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
        let mut rng = rand::thread_rng();
        let quote = ShippingQuote {
            cost: f64::from(rng.gen_range(5_u32..50)),
            estimated_days: rng.gen_range(1..10),
        };
        info!(destination, ?quote, "simulated shipping quote");
        Some(quote)
    }
}

/// Logs page views
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAnalytics;

#[async_trait]
impl Analytics for LoggingAnalytics {
    async fn track_page_view(&self, path: &str) {
        info!(path, "page view");
    }
}

/// Accepts every charge after `delay`
#[derive(Debug, Clone, Copy)]
pub struct DelayedPaymentGateway {
    pub delay: Duration,
}

impl Default for DelayedPaymentGateway {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(50),
        }
    }
}

#[async_trait]
impl PaymentGateway for DelayedPaymentGateway {
    async fn charge(&self, card: &CreditCard, amount: f64) -> ChargeResult {
        tokio::time::sleep(self.delay).await;
        let number = &card.credit_card_number;
        let last_four: String = number
            .chars()
            .skip(number.chars().count().saturating_sub(4))
            .collect();
        info!(card = %last_four, amount, "simulated charge");
        ChargeResult {
            status: ChargeStatus::Success,
        }
    }
}

/// Logs outgoing mail instead of sending it
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMailer;

#[async_trait]
impl Mailer for LoggingMailer {
    async fn send_email(&self, to: &str, message: &str) {
        info!(to, message, "email sent");
    }
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
