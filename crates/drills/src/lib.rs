//! Drills - checkout helpers over injected collaborators, and the CLI
//!
//! The pure drills live in `drills_core`. This crate adds the parts that talk
//! to the outside world through traits:
//!
//! - [`services`]: currency, shipping, analytics, payment, email and clock
//!   collaborators plus the helpers that use them
//! - [`simulated`]: stand-in collaborators used by the binary
//! - [`cli`]: argument parsing and subcommand dispatch

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod services;
pub mod simulated;
