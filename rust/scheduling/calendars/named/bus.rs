//! A generic Western business week calendar without any specific holidays.
//!
//! Used for identifiers whose rule table is not implemented and for custom calendars
//! awaiting direct injection.

use chrono::{NaiveDate, Weekday};
use std::ops::RangeInclusive;

pub const WEEKEND: (Weekday, Weekday) = (Weekday::Sat, Weekday::Sun);

pub fn holidays(_years: RangeInclusive<i32>) -> Vec<NaiveDate> {
    vec![]
}
