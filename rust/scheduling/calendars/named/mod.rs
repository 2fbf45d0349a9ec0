//! Rule tables for pre-existing named holiday calendars.
//!
//! Each module defines a `WEEKEND` pair and a pure `holidays(years)` generator. Dispatch is
//! a match on [`CalendarId`], so adding a jurisdiction means adding a module and an arm.

pub mod bus;
pub mod euta;
pub mod gblo;

use chrono::{NaiveDate, Weekday};
use std::ops::RangeInclusive;

use crate::scheduling::CalendarId;

/// First year generated for a named calendar.
pub const FIRST_YEAR: i32 = 1950;

/// Last year generated for a named calendar.
pub const LAST_YEAR: i32 = 2099;

/// Return the weekend days of a named calendar.
pub fn get_weekend_by_id(id: CalendarId) -> (Weekday, Weekday) {
    match id {
        CalendarId::Gblo => gblo::WEEKEND,
        CalendarId::Euta => euta::WEEKEND,
        CalendarId::Nyse | CalendarId::Cust => bus::WEEKEND,
    }
}

/// Generate the holidays of a named calendar over a range of years, in rule order.
///
/// Identifiers without a rule table (`Nyse`) and custom calendars produce no holidays.
/// Years outside [`FIRST_YEAR`]`..=`[`LAST_YEAR`] are skipped.
pub fn generate_holidays(id: CalendarId, years: RangeInclusive<i32>) -> Vec<NaiveDate> {
    let start = (*years.start()).max(FIRST_YEAR);
    let end = (*years.end()).min(LAST_YEAR);
    let years = start..=end;
    match id {
        CalendarId::Gblo => gblo::holidays(years),
        CalendarId::Euta => euta::holidays(years),
        CalendarId::Nyse | CalendarId::Cust => bus::holidays(years),
    }
}
