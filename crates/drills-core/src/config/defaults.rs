//! Default configuration values

use super::types::Config;
use crate::{catalog::default_coupons, driving::default_driving_ages};

impl Default for Config {
    fn default() -> Self {
        Self {
            coupons: default_coupons(),
            driving_ages: default_driving_ages(),
        }
    }
}
