//! Date arithmetic used by the holiday rule tables.

use chrono::prelude::*;
use chrono::Days;

/// Create a `NaiveDate` from year, month and day.
///
/// Panics if date values are invalid.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Return the date of Western (Gregorian) Easter Sunday in the given year.
///
/// Uses the anonymous Gregorian (Meeus/Jones/Butcher) algorithm. The truncating integer
/// divisions are part of the algorithm and must not be reordered.
///
/// # Examples
/// ```rust
/// # use busday::scheduling::{easter, ymd};
/// assert_eq!(easter(2023), ymd(2023, 4, 9));
/// assert_eq!(easter(2024), ymd(2024, 3, 31));
/// ```
pub fn easter(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;
    ymd(year, month as u32, day as u32)
}

/// Return the last calendar day of the given month.
pub fn end_of_month(year: i32, month: u32) -> NaiveDate {
    let mut day = 31;
    let mut date = NaiveDate::from_ymd_opt(year, month, day);
    while date.is_none() && day > 28 {
        day -= 1;
        date = NaiveDate::from_ymd_opt(year, month, day);
    }
    date.unwrap_or_else(|| ymd(year, month, 28))
}

/// The first date in a month that falls on the given day of the week.
pub fn first_in_month(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
    let mut date = ymd(year, month, 1);
    while date.weekday() != weekday {
        date = date + Days::new(1);
    }
    date
}

/// The last date in a month that falls on the given day of the week.
pub fn last_in_month(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
    let mut date = end_of_month(year, month);
    while date.weekday() != weekday {
        date = date - Days::new(1);
    }
    date
}

/// Move `date` forward one day if it lands on `weekday`.
///
/// London uses this with Sunday to shift New Year's Day to the Monday.
pub fn bump_forward_from(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    if date.weekday() == weekday {
        date + Days::new(1)
    } else {
        date
    }
}

/// A fixed-date holiday which moves to `makeup_day` of the same month when it falls on
/// either weekend day.
///
/// For consecutive fixed holidays (Christmas and Boxing Day) the makeup days are the two
/// weekdays immediately after the weekend, i.e. the 27th and 28th.
pub fn bump_fixed_holiday(
    year: i32,
    month: u32,
    day: u32,
    weekend: (Weekday, Weekday),
    makeup_day: u32,
) -> NaiveDate {
    let date = ymd(year, month, day);
    if date.weekday() == weekend.0 || date.weekday() == weekend.1 {
        ymd(year, month, makeup_day)
    } else {
        date
    }
}
