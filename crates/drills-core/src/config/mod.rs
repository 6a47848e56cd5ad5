//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: ~/.config/drills/config.toml
//! 3. Project config: .drills/config.toml
//! 4. Environment: `DRILLS_CONFIG=<path>` names one more file to layer on top
//!
//! # Example Config
//!
//! ```toml
//! [[coupons]]
//! code = "SAVE10"
//! discount = 0.1
//!
//! [[coupons]]
//! code = "WINTER"
//! discount = 0.35
//!
//! [driving_ages]
//! US = 16
//! UK = 17
//! NZ = 16
//! ```
//!
//! # Module Structure
//!
//! - `types`: Configuration structure definitions
//! - `defaults`: Default value implementations
//! - `load`: Loading from files and environment
//! - `merge`: Configuration merging logic
//! - `validate`: Validation and conversion into drill components

// Module declarations
mod defaults;
mod load;
mod merge;
mod types;
mod validate;

// Test modules (organized by concern)
#[cfg(test)]
mod tests_loading;
#[cfg(test)]
mod tests_validation;

// Re-export public API
pub use load::{
    global_config_path, load_config, load_config_at, load_config_from, load_toml_file,
    project_config_path, ConfigPaths, CONFIG_ENV_VAR,
};
pub use types::Config;
