//! # Drills Core
//!
//! Small, pure functions and one container, written to be tested:
//!
//! - [`catalog`]: coupon catalog
//! - [`pricing`]: coupon discounts and price range checks
//! - [`validation`]: username and user-input validators
//! - [`driving`]: driving-age eligibility by country
//! - [`stack`]: a LIFO [`Stack`]
//! - [`intro`]: `max`, fizzbuzz and averages
//! - [`dynamic`]: the same drills over untyped JSON values
//! - [`config`]: TOML configuration for the catalog and driving ages
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, Error>`. Validation failures render
//! with an `Invalid` prefix; an empty stack renders `Stack is empty`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod driving;
pub mod dynamic;
mod error;
pub mod intro;
pub mod pricing;
pub mod stack;
pub mod validation;

pub use catalog::{get_coupons, Coupon, CouponCatalog};
pub use config::Config;
pub use driving::{can_drive, DrivingRules};
pub use error::{Error, Result};
pub use intro::{calculate_average, fizz_buzz, max};
pub use pricing::{calculate_discount, is_price_in_range, Pricing};
pub use stack::Stack;
pub use validation::{is_valid_username, validate_user_input, Validation};
