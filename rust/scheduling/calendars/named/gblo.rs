//! London (UK) bank holidays.
//!
//! Rules follow the statutory history of English bank holidays: New Year's Day from 1974,
//! the Early May holiday from 1978, Whit Monday replaced by the Spring holiday from 1971 and
//! the August holiday moved from the start to the end of the month from 1965.

use chrono::{Days, NaiveDate, Weekday};
use std::ops::RangeInclusive;

use crate::scheduling::calendars::datemath::{
    bump_forward_from, bump_fixed_holiday, easter, first_in_month, last_in_month, ymd,
};

pub const WEEKEND: (Weekday, Weekday) = (Weekday::Sat, Weekday::Sun);

// One-off holidays which are not derived from any yearly rule.
const ROYAL_WEDDING: (i32, u32, u32) = (2011, 4, 29);
const MILLENNIUM: (i32, u32, u32) = (1999, 12, 31);

pub fn holidays(years: RangeInclusive<i32>) -> Vec<NaiveDate> {
    let mut hols: Vec<NaiveDate> = Vec::new();
    for year in years.clone() {
        // New Year
        if year >= 1974 {
            hols.push(bump_forward_from(ymd(year, 1, 1), Weekday::Sun));
        }

        // Easter
        let easter_sunday = easter(year);
        hols.push(easter_sunday - Days::new(2));
        hols.push(easter_sunday + Days::new(1));

        // Early May
        if year == 1995 || year == 2020 {
            // VE day anniversaries
            hols.push(ymd(year, 5, 8));
        } else if year >= 1978 {
            hols.push(first_in_month(year, 5, Weekday::Mon));
        }

        // Spring. Golden, diamond and platinum jubilees replace the late May holiday.
        match year {
            2002 => {
                hols.push(ymd(2002, 6, 3));
                hols.push(ymd(2002, 6, 4));
            }
            2012 => {
                hols.push(ymd(2012, 6, 4));
                hols.push(ymd(2012, 6, 5));
            }
            2022 => {
                hols.push(ymd(2022, 6, 2));
                hols.push(ymd(2022, 6, 3));
            }
            1967 | 1970 => hols.push(last_in_month(year, 5, Weekday::Mon)),
            y if y < 1971 => hols.push(easter_sunday + Days::new(50)), // whit monday
            _ => hols.push(last_in_month(year, 5, Weekday::Mon)),
        }

        // Summer
        if year < 1965 {
            hols.push(first_in_month(year, 8, Weekday::Mon));
        } else if year < 1971 {
            hols.push(last_in_month(year, 8, Weekday::Sat) + Days::new(2));
        } else {
            hols.push(last_in_month(year, 8, Weekday::Mon));
        }

        // Christmas
        hols.push(bump_fixed_holiday(year, 12, 25, WEEKEND, 27));
        hols.push(bump_fixed_holiday(year, 12, 26, WEEKEND, 28));
    }

    for (y, m, d) in [ROYAL_WEDDING, MILLENNIUM] {
        if years.contains(&y) {
            hols.push(ymd(y, m, d));
        }
    }
    hols
}
