//! Time-dependent drills, driven by an injectable clock

use std::ops::Range;

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Hours of the day (local, 24h) during which the service is online
pub const AVAILABLE_HOURS: Range<u32> = 8..20;

/// Discount fraction granted on Christmas day
pub const HOLIDAY_DISCOUNT: f64 = 0.2;

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Whether the current hour falls inside [`AVAILABLE_HOURS`].
pub fn is_online(clock: &dyn Clock) -> bool {
    AVAILABLE_HOURS.contains(&clock.now().hour())
}

/// [`HOLIDAY_DISCOUNT`] on 25 December, zero otherwise.
pub fn get_discount(clock: &dyn Clock) -> f64 {
    let today = clock.now().date();
    if today.month() == 12 && today.day() == 25 {
        HOLIDAY_DISCOUNT
    } else {
        0.0
    }
}
