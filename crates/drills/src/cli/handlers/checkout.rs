//! Handlers for the collaborator-backed checkout drills

use anyhow::{Context as _, Result};
use clap::ArgMatches;

use super::Context;
use crate::{
    cli::args::{required, required_typed},
    services::{self, CreditCard, Order},
};

pub fn currency(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let price: f64 = required_typed(matches, "price")?;
    let currency = required(matches, "currency")?;
    let converted =
        services::get_price_in_currency(ctx.collaborators.rates.as_ref(), price, currency);
    println!("{converted:.2}");
    Ok(())
}

pub fn shipping(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let destination = required(matches, "destination")?;
    println!(
        "{}",
        services::get_shipping_info(ctx.collaborators.shipping.as_ref(), destination)
    );
    Ok(())
}

pub async fn render(ctx: &Context) -> Result<()> {
    println!(
        "{}",
        services::render_page(ctx.collaborators.analytics.as_ref()).await
    );
    Ok(())
}

pub async fn order(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let order = Order {
        total_amount: required_typed(matches, "amount")?,
    };
    let card = CreditCard {
        credit_card_number: required(matches, "card")?.to_string(),
    };
    let result =
        services::submit_order(ctx.collaborators.payments.as_ref(), &order, &card).await;
    let json = serde_json::to_string(&result).context("Failed to serialize order result")?;
    println!("{json}");
    Ok(())
}

pub async fn signup(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let email = required(matches, "email")?;
    println!(
        "{}",
        services::sign_up(ctx.collaborators.mailer.as_ref(), email).await
    );
    Ok(())
}

pub fn online(ctx: &Context) -> Result<()> {
    println!("{}", services::is_online(ctx.collaborators.clock.as_ref()));
    Ok(())
}

pub fn holiday_discount(ctx: &Context) -> Result<()> {
    println!("{}", services::get_discount(ctx.collaborators.clock.as_ref()));
    Ok(())
}

pub async fn fetch(ctx: &Context) -> Result<()> {
    let data = services::fetch_data(ctx.collaborators.data.as_ref()).await?;
    let json = serde_json::to_string(&data).context("Failed to serialize data")?;
    println!("{json}");
    Ok(())
}
