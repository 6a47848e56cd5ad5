//! Process setup: tracing, configuration, exit codes

use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use drills_core::{
    config::{load_config, load_config_from},
    Config,
};
use tracing_subscriber::EnvFilter;

use super::CliError;

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - `RUST_LOG` filter, defaulting to WARN so drill output stays clean
/// - Stderr output (to avoid mixing with stdout)
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

/// Load configuration, honoring a global `--config <path>`.
///
/// # Errors
/// Returns an error if any config layer is unreadable or invalid
pub fn load(matches: &ArgMatches) -> Result<Config> {
    match matches.get_one::<String>("config") {
        Some(path) => load_config_from(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}")),
        None => load_config().context("Failed to load configuration"),
    }
}

/// Map an error to the process exit code.
///
/// Library and CLI errors carry their own codes; anything else is 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<drills_core::Error>()
                .map(drills_core::Error::exit_code)
                .or_else(|| cause.downcast_ref::<CliError>().map(CliError::exit_code))
        })
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_validation_error() {
        let err = anyhow::Error::new(drills_core::Error::InvalidPrice("-1".into()));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_for_empty_stack() {
        let err = anyhow::Error::new(drills_core::Error::EmptyStack).context("running script");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_for_config_error() {
        let err = anyhow::Error::new(drills_core::Error::InvalidConfig("empty".into()))
            .context("Failed to load configuration");
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
