//! Handlers for the pure drills in `drills_core`

use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;
use drills_core::{calculate_average, dynamic, fizz_buzz, Stack};
use serde_json::Value;

use super::Context;
use crate::cli::{
    args::{parse_value, required_typed, required_value},
    CliError,
};

pub fn discount(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let price = required_value(matches, "price")?;
    let code = required_value(matches, "code")?;
    let discounted = dynamic::calculate_discount(&ctx.pricing, &price, &code)?;
    println!("{discounted}");
    Ok(())
}

pub fn coupons(ctx: &Context) -> Result<()> {
    for coupon in ctx.pricing.catalog().coupons() {
        println!("{}\t{}", coupon.code, coupon.discount);
    }
    Ok(())
}

pub fn validate_user(matches: &ArgMatches) -> Result<()> {
    let username = required_value(matches, "username")?;
    let age = required_value(matches, "age")?;
    let outcome = dynamic::validate_user_input(&username, &age);
    if outcome.is_valid() {
        println!("{outcome}");
        Ok(())
    } else {
        Err(CliError::Rejected(outcome.to_string()).into())
    }
}

pub fn price_in_range(matches: &ArgMatches) -> Result<()> {
    let price = required_value(matches, "price")?;
    let min = required_value(matches, "min")?;
    let max = required_value(matches, "max")?;
    println!("{}", dynamic::is_price_in_range(&price, &min, &max));
    Ok(())
}

pub fn username(matches: &ArgMatches) -> Result<()> {
    let username = required_value(matches, "username")?;
    println!("{}", dynamic::is_valid_username(&username));
    Ok(())
}

pub fn can_drive(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let age = required_value(matches, "age")?;
    let country = required_value(matches, "country")?;
    println!("{}", dynamic::can_drive(&ctx.rules, &age, &country)?);
    Ok(())
}

pub fn fizzbuzz(matches: &ArgMatches) -> Result<()> {
    matches
        .get_many::<i64>("numbers")
        .into_iter()
        .flatten()
        .for_each(|n| println!("{}", fizz_buzz(*n)));
    Ok(())
}

pub fn average(matches: &ArgMatches) -> Result<()> {
    let numbers: Vec<f64> = matches
        .get_many::<f64>("numbers")
        .into_iter()
        .flatten()
        .copied()
        .collect();
    println!("{}", calculate_average(&numbers));
    Ok(())
}

pub fn max(matches: &ArgMatches) -> Result<()> {
    let a: f64 = required_typed(matches, "a")?;
    let b: f64 = required_typed(matches, "b")?;
    println!("{}", drills_core::max(a, b));
    Ok(())
}

/// One step of a `drills stack` script
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StackOp {
    Push(Value),
    Pop,
    Peek,
    Size,
    Empty,
    Clear,
}

impl FromStr for StackOp {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pop" => Ok(Self::Pop),
            "peek" => Ok(Self::Peek),
            "size" => Ok(Self::Size),
            "empty" => Ok(Self::Empty),
            "clear" => Ok(Self::Clear),
            _ => s
                .strip_prefix("push:")
                .map(|raw| Self::Push(parse_value(raw)))
                .ok_or_else(|| CliError::StackOperation(s.to_string())),
        }
    }
}

/// Apply `ops` in order, returning one output line per value-producing op.
///
/// # Errors
/// Stops at the first `pop`/`peek` on an empty stack.
pub(crate) fn run_stack_script(ops: &[StackOp]) -> drills_core::Result<Vec<String>> {
    let mut stack: Stack<Value> = Stack::new();
    let mut output = Vec::new();
    for op in ops {
        match op {
            StackOp::Push(value) => stack.push(value.clone()),
            StackOp::Pop => output.push(stack.pop()?.to_string()),
            StackOp::Peek => output.push(stack.peek()?.to_string()),
            StackOp::Size => output.push(stack.size().to_string()),
            StackOp::Empty => output.push(stack.is_empty().to_string()),
            StackOp::Clear => stack.clear(),
        }
    }
    Ok(output)
}

pub fn stack(matches: &ArgMatches) -> Result<()> {
    let ops = matches
        .get_many::<String>("ops")
        .into_iter()
        .flatten()
        .map(|raw| raw.parse::<StackOp>())
        .collect::<Result<Vec<_>, _>>()?;
    for line in run_stack_script(&ops)? {
        println!("{line}");
    }
    Ok(())
}
