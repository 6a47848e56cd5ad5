//! Loosely-typed boundary over the typed drills
//!
//! Values arriving from JSON or the command line can be of any shape. These
//! wrappers check the runtime type of each argument and then delegate to the
//! typed API, so `"10"` as a price or `10` as a coupon code is reported as
//! invalid instead of being coerced.

use serde_json::Value;
use tracing::warn;

use crate::{
    driving::DrivingRules,
    pricing::{self, Pricing},
    validation::{self, Validation},
    Error, Result,
};

/// [`Pricing::calculate_discount`] with runtime type checks.
///
/// # Errors
///
/// - `Error::InvalidPrice` if `price` is not a JSON number or fails the
///   typed price check
/// - `Error::InvalidCode` if `code` is not a JSON string
pub fn calculate_discount(pricing: &Pricing, price: &Value, code: &Value) -> Result<f64> {
    let price = price.as_f64().ok_or_else(|| {
        warn!(%price, "price is not a number");
        Error::InvalidPrice(format!("expected a number, got {}", describe(price)))
    })?;
    let code = code.as_str().ok_or_else(|| {
        warn!(%code, "coupon code is not a string");
        Error::InvalidCode(format!("expected a string, got {}", describe(code)))
    })?;
    pricing.calculate_discount(price, code)
}

/// [`validation::validate_user_input`] with runtime type checks.
///
/// A non-string username or non-number age is reported the same way as an
/// out-of-range one, and both fields are always checked.
#[must_use]
pub fn validate_user_input(username: &Value, age: &Value) -> Validation {
    let username_check = username.as_str().map_or_else(
        || {
            Err(Error::InvalidUsername(format!(
                "expected a string, got {}",
                describe(username)
            )))
        },
        validation::check_username,
    );
    let age_check = age.as_f64().map_or_else(
        || {
            Err(Error::InvalidAge(format!(
                "expected a number, got {}",
                describe(age)
            )))
        },
        validation::check_age,
    );

    let failures = [username_check, age_check]
        .into_iter()
        .filter_map(std::result::Result::err)
        .collect();
    Validation::from_failures(failures)
}

/// [`validation::is_valid_username`]; anything but a string is `false`.
#[must_use]
pub fn is_valid_username(username: &Value) -> bool {
    username.as_str().is_some_and(validation::is_valid_username)
}

/// [`pricing::is_price_in_range`]; any non-number argument is `false`.
#[must_use]
pub fn is_price_in_range(price: &Value, min: &Value, max: &Value) -> bool {
    match (price.as_f64(), min.as_f64(), max.as_f64()) {
        (Some(price), Some(min), Some(max)) => pricing::is_price_in_range(price, min, max),
        _ => false,
    }
}

/// [`DrivingRules::can_drive`] with runtime type checks.
///
/// Any JSON number is accepted as an age and compared against the country
/// minimum as `f64`, so `16.0` and `16.5` both clear a minimum of 16.
///
/// # Errors
///
/// - `Error::InvalidAge` if `age` is not a number
/// - `Error::InvalidCountry` if `country_code` is not a string or is unknown
pub fn can_drive(rules: &DrivingRules, age: &Value, country_code: &Value) -> Result<bool> {
    let age = age
        .as_f64()
        .filter(|a| !a.is_nan())
        .ok_or_else(|| Error::InvalidAge(format!("expected a number, got {}", describe(age))))?;
    let country_code = country_code.as_str().ok_or_else(|| {
        Error::InvalidCountry(format!("expected a string, got {}", describe(country_code)))
    })?;
    let minimum = rules
        .minimum_age(country_code)
        .ok_or_else(|| Error::InvalidCountry(country_code.to_string()))?;
    Ok(age >= f64::from(minimum))
}

/// Short type-and-value description for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
