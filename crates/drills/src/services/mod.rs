//! Checkout helpers built on injected collaborators
//!
//! Every external dependency (exchange rates, shipping quotes, analytics,
//! payments, email, the wall clock, the data source) is a trait, so tests can substitute a
//! mock and production code can plug in a real client.
//!
//! The helpers themselves are thin: each makes at most one collaborator
//! call and shapes the answer.

mod analytics;
mod availability;
mod currency;
mod email;
mod fetch;
mod payment;
mod shipping;

pub use analytics::{render_page, Analytics, HOME_PATH};
pub use availability::{get_discount, is_online, Clock, AVAILABLE_HOURS, HOLIDAY_DISCOUNT};
pub use currency::{get_price_in_currency, ExchangeRates, BASE_CURRENCY};
pub use email::{is_valid_email, sign_up, Mailer, WELCOME_MESSAGE};
pub use fetch::{fetch_data, DataSource, FetchError, SampleData};
pub use payment::{
    submit_order, ChargeResult, ChargeStatus, CreditCard, Order, OrderResult, PaymentGateway,
    PAYMENT_ERROR,
};
pub use shipping::{get_shipping_info, ShippingQuote, ShippingQuotes};
