//! Argument helpers

use clap::ArgMatches;
use serde_json::Value;

use super::CliError;

/// Read a shell word as JSON, falling back to a plain string.
///
/// `10` becomes a number, `"10"` (with the quotes) a string, `null` null,
/// and `SAVE10` the string `SAVE10`.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// A required string argument.
pub fn required<'a>(matches: &'a ArgMatches, name: &'static str) -> Result<&'a str, CliError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or(CliError::MissingArgument(name))
}

/// A required argument, read with [`parse_value`].
pub fn required_value(matches: &ArgMatches, name: &'static str) -> Result<Value, CliError> {
    required(matches, name).map(parse_value)
}

/// A required argument with a typed value parser.
pub fn required_typed<T>(matches: &ArgMatches, name: &'static str) -> Result<T, CliError>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(name)
        .cloned()
        .ok_or(CliError::MissingArgument(name))
}
