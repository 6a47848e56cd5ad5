//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Coupon;

/// Root configuration structure
///
/// Loaded from defaults → global → project → `DRILLS_CONFIG` → `--config`.
///
/// A field missing from a file deserializes as empty, so a file layer only
/// overrides what it actually declares. [`Config::default`] carries the
/// built-in samples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Coupon catalog, in lookup order
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    /// Country code → minimum legal driving age
    #[serde(default)]
    pub driving_ages: BTreeMap<String, u32>,
}
