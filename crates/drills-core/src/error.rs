//! Error types for drills-core
//!
//! Two families live here:
//!
//! - **Validation failures**: malformed calculator or validator input. Every
//!   message starts with `Invalid` so callers can match it case-insensitively.
//! - **Container failures**: `pop`/`peek` on an empty [`crate::Stack`].
//!
//! Configuration and IO problems are reported through the same enum so the
//! CLI has a single error type to render.

use thiserror::Error;

/// Core error type for drill operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Price was negative, NaN, infinite or not a number at all
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Coupon code was not a string
    #[error("Invalid coupon code: {0}")]
    InvalidCode(String),

    /// Username failed type or length checks
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Age failed type or range checks
    #[error("Invalid age: {0}")]
    InvalidAge(String),

    /// Country code has no driving-age entry
    #[error("Invalid country code: {0}")]
    InvalidCountry(String),

    /// `pop` or `peek` on an empty stack
    #[error("Stack is empty")]
    EmptyStack,

    /// Configuration values break an invariant
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration or input could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Create an IO error
    #[must_use]
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create a parse error
    #[must_use]
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Whether this is a reported input rejection rather than a fault.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPrice(_)
                | Self::InvalidCode(_)
                | Self::InvalidUsername(_)
                | Self::InvalidAge(_)
                | Self::InvalidCountry(_)
        )
    }

    /// Process exit code for this error.
    ///
    /// - 1: validation failure
    /// - 2: container precondition violated
    /// - 3: configuration or IO problem
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPrice(_)
            | Self::InvalidCode(_)
            | Self::InvalidUsername(_)
            | Self::InvalidAge(_)
            | Self::InvalidCountry(_) => 1,
            Self::EmptyStack => 2,
            Self::InvalidConfig(_) | Self::Parse(_) | Self::Io(_) => 3,
        }
    }
}

/// Result type alias for drills-core operations
pub type Result<T> = std::result::Result<T, Error>;
