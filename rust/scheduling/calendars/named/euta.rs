//! TARGET interbank payment system closing days.

use chrono::{Days, NaiveDate, Weekday};
use std::ops::RangeInclusive;

use crate::scheduling::calendars::datemath::{easter, ymd};

pub const WEEKEND: (Weekday, Weekday) = (Weekday::Sat, Weekday::Sun);

pub fn holidays(years: RangeInclusive<i32>) -> Vec<NaiveDate> {
    let mut hols: Vec<NaiveDate> = Vec::new();
    for year in years {
        if year >= 2000 {
            let easter_sunday = easter(year);
            hols.push(ymd(year, 1, 1));
            hols.push(easter_sunday - Days::new(2));
            hols.push(easter_sunday + Days::new(1));
            hols.push(ymd(year, 5, 1)); // labour day
            hols.push(ymd(year, 12, 25));
            hols.push(ymd(year, 12, 26));
        }
        if matches!(year, 1998 | 1999 | 2001) {
            hols.push(ymd(year, 12, 31));
        }
    }
    hols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euta_2024() {
        let result = holidays(2024..=2024);
        assert_eq!(
            result,
            vec![
                ymd(2024, 1, 1),
                ymd(2024, 3, 29),
                ymd(2024, 4, 1),
                ymd(2024, 5, 1),
                ymd(2024, 12, 25),
                ymd(2024, 12, 26),
            ]
        );
    }

    #[test]
    fn test_euta_pre_2000_closures_only() {
        assert_eq!(holidays(1950..=1997), Vec::<NaiveDate>::new());
        assert_eq!(holidays(1998..=1999), vec![ymd(1998, 12, 31), ymd(1999, 12, 31)]);
        assert!(holidays(2001..=2001).contains(&ymd(2001, 12, 31)));
        assert!(!holidays(2002..=2002).contains(&ymd(2002, 12, 31)));
    }
}
