//! Command-line interface: one subcommand per drill

pub mod args;
pub mod error;
pub mod handlers;
pub mod setup;

use clap::{Arg, ArgAction, Command};

pub use error::CliError;

pub fn build_cli() -> Command {
    Command::new("drills")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run the unit-testing drills from the shell")
        .long_about(
            "Run the unit-testing drills from the shell.\n\n\
             Positional values are read as JSON when they parse as JSON and as plain \
             strings otherwise, so `drills discount 10 10` passes a number as the \
             coupon code and is rejected.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .help("Extra config file layered over the config hierarchy"),
        )
        .subcommand(cmd_discount())
        .subcommand(Command::new("coupons").about("List the coupon catalog"))
        .subcommand(cmd_validate_user())
        .subcommand(cmd_price_in_range())
        .subcommand(cmd_username())
        .subcommand(cmd_can_drive())
        .subcommand(cmd_fizzbuzz())
        .subcommand(cmd_average())
        .subcommand(cmd_max())
        .subcommand(cmd_stack())
        .subcommand(cmd_currency())
        .subcommand(cmd_shipping())
        .subcommand(Command::new("render").about("Render the home page (tracks a page view)"))
        .subcommand(cmd_order())
        .subcommand(cmd_signup())
        .subcommand(Command::new("online").about("Whether the service is within its online hours"))
        .subcommand(
            Command::new("holiday-discount").about("Today's holiday discount fraction"),
        )
        .subcommand(Command::new("fetch").about("Fetch the sample data set"))
}

fn value(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .allow_hyphen_values(true)
        .help(help)
}

fn cmd_discount() -> Command {
    Command::new("discount")
        .about("Apply a coupon code to a price")
        .arg(value("price", "Price to discount"))
        .arg(value("code", "Coupon code"))
}

fn cmd_validate_user() -> Command {
    Command::new("validate-user")
        .about("Validate a username (3-255 chars) and age (18-100)")
        .arg(value("username", "Username to check"))
        .arg(value("age", "Age to check"))
}

fn cmd_price_in_range() -> Command {
    Command::new("price-in-range")
        .about("Check min <= price <= max")
        .arg(value("price", "Price to check"))
        .arg(value("min", "Lower bound (inclusive)"))
        .arg(value("max", "Upper bound (inclusive)"))
}

fn cmd_username() -> Command {
    Command::new("username")
        .about("Check a username is 5-15 characters long")
        .arg(value("username", "Username to check"))
}

fn cmd_can_drive() -> Command {
    Command::new("can-drive")
        .about("Check driving eligibility by country")
        .arg(value("age", "Age in years"))
        .arg(value("country", "Country code, e.g. US or UK"))
}

fn cmd_fizzbuzz() -> Command {
    Command::new("fizzbuzz").about("Classify numbers").arg(
        Arg::new("numbers")
            .required(true)
            .num_args(1..)
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64))
            .help("Numbers to classify"),
    )
}

fn cmd_average() -> Command {
    Command::new("average")
        .about("Arithmetic mean (NaN for no input)")
        .arg(
            Arg::new("numbers")
                .num_args(0..)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .help("Numbers to average"),
        )
}

fn cmd_max() -> Command {
    Command::new("max")
        .about("The greater of two numbers")
        .arg(
            Arg::new("a")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("b")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
}

fn cmd_stack() -> Command {
    Command::new("stack")
        .about("Run a script of stack operations")
        .long_about(
            "Run a script of stack operations against an empty stack.\n\n\
             Operations: push:<value>, pop, peek, size, empty, clear. \
             Every operation that produces a value prints it on its own line.",
        )
        .arg(
            Arg::new("ops")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Operations, in order"),
        )
}

fn cmd_currency() -> Command {
    Command::new("currency")
        .about("Convert a USD price using a simulated exchange rate")
        .arg(
            Arg::new("price")
                .required(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(value("currency", "Target currency code"))
}

fn cmd_shipping() -> Command {
    Command::new("shipping")
        .about("Shipping cost and time for a destination")
        .arg(value("destination", "Destination city"))
}

fn cmd_order() -> Command {
    Command::new("order")
        .about("Submit an order through the simulated payment gateway")
        .arg(
            Arg::new("amount")
                .required(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("card")
                .long("card")
                .default_value("4111111111111111")
                .help("Credit card number"),
        )
}

fn cmd_signup() -> Command {
    Command::new("signup")
        .about("Sign up and send the welcome email")
        .arg(value("email", "Email address"))
}
