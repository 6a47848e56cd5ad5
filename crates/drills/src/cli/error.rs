//! CLI-level errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input was checked and rejected; the message is the drill's own output
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid stack operation '{0}': expected push:<value>, pop, peek, size, empty or clear")]
    StackOperation(String),

    #[error("Missing required argument <{0}>")]
    MissingArgument(&'static str),
}

impl CliError {
    /// Process exit code: every CLI-level error is an input problem
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected(_) | Self::StackOperation(_) | Self::MissingArgument(_) => 1,
        }
    }
}
