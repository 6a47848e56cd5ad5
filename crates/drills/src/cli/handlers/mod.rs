//! Subcommand dispatch

mod checkout;
mod pure;

use anyhow::Result;
use clap::ArgMatches;
use drills_core::{Config, DrivingRules, Pricing};

use crate::{
    services::{
        Analytics, Clock, DataSource, ExchangeRates, Mailer, PaymentGateway, SampleData,
        ShippingQuotes,
    },
    simulated::{
        DelayedPaymentGateway, LoggingAnalytics, LoggingMailer, RandomExchangeRates,
        RandomShippingQuotes, SystemClock,
    },
};

/// External services the checkout subcommands talk to
pub struct Collaborators {
    pub rates: Box<dyn ExchangeRates>,
    pub shipping: Box<dyn ShippingQuotes>,
    pub analytics: Box<dyn Analytics>,
    pub payments: Box<dyn PaymentGateway>,
    pub mailer: Box<dyn Mailer>,
    pub clock: Box<dyn Clock>,
    pub data: Box<dyn DataSource>,
}

impl Collaborators {
    /// The stand-ins from [`crate::simulated`]
    #[must_use]
    pub fn simulated() -> Self {
        Self {
            rates: Box::new(RandomExchangeRates),
            shipping: Box::new(RandomShippingQuotes),
            analytics: Box::new(LoggingAnalytics),
            payments: Box::new(DelayedPaymentGateway::default()),
            mailer: Box::new(LoggingMailer),
            clock: Box::new(SystemClock),
            data: Box::new(SampleData),
        }
    }
}

/// Everything a subcommand may need
pub struct Context {
    pub pricing: Pricing,
    pub rules: DrivingRules,
    pub collaborators: Collaborators,
}

impl Context {
    /// Build drill components from a validated config
    ///
    /// # Errors
    /// Returns an error if the config breaks a catalog or driving-age invariant
    pub fn from_config(config: &Config, collaborators: Collaborators) -> Result<Self> {
        Ok(Self {
            pricing: config.pricing()?,
            rules: config.driving_rules()?,
            collaborators,
        })
    }
}

/// Run the selected subcommand, printing its result to stdout.
///
/// # Errors
/// Returns an error when the drill rejects its input or a subcommand fails
pub async fn dispatch(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    match matches.subcommand() {
        Some(("discount", m)) => pure::discount(m, ctx),
        Some(("coupons", _)) => pure::coupons(ctx),
        Some(("validate-user", m)) => pure::validate_user(m),
        Some(("price-in-range", m)) => pure::price_in_range(m),
        Some(("username", m)) => pure::username(m),
        Some(("can-drive", m)) => pure::can_drive(m, ctx),
        Some(("fizzbuzz", m)) => pure::fizzbuzz(m),
        Some(("average", m)) => pure::average(m),
        Some(("max", m)) => pure::max(m),
        Some(("stack", m)) => pure::stack(m),
        Some(("currency", m)) => checkout::currency(m, ctx),
        Some(("shipping", m)) => checkout::shipping(m, ctx),
        Some(("render", _)) => checkout::render(ctx).await,
        Some(("order", m)) => checkout::order(m, ctx).await,
        Some(("signup", m)) => checkout::signup(m, ctx).await,
        Some(("online", _)) => checkout::online(ctx),
        Some(("holiday-discount", _)) => checkout::holiday_discount(ctx),
        Some(("fetch", _)) => checkout::fetch(ctx).await,
        _ => anyhow::bail!("Unknown command. Run 'drills --help' for usage."),
    }
}
