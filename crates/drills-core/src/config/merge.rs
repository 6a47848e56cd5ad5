//! Configuration merging logic (Immutable functional pattern)
//!
//! Later configs override earlier ones (defaults → global → project → env).

use super::types::Config;

impl Config {
    /// Merge another config into this one (other takes precedence)
    ///
    /// A non-empty `coupons` list replaces ours wholesale. `driving_ages` is
    /// merged per country.
    pub fn merge(self, other: Self) -> Self {
        let coupons = if other.coupons.is_empty() {
            self.coupons
        } else {
            other.coupons
        };

        let mut driving_ages = self.driving_ages;
        driving_ages.extend(other.driving_ages);

        Self {
            coupons,
            driving_ages,
        }
    }
}
