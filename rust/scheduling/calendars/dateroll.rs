use chrono::prelude::*;
use chrono::Days;

use crate::error::{CalendarError, Result};
use crate::scheduling::calendars::datemath::{end_of_month, ymd};

/// Maximum number of days a single roll may walk before giving up.
pub const MAX_ROLL_DAYS: u32 = 366;

/// Simple date adjustment defining business days and holidays, and rolling.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a non-business day of this calendar.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a business day, i.e. not a holiday.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        !self.is_holiday(date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    fn roll_forward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let mut new_date = *date;
        let mut steps: u32 = 0;
        while self.is_holiday(&new_date) {
            if steps == MAX_ROLL_DAYS {
                return Err(CalendarError::NoBusinessDay {
                    date: *date,
                    max_days: MAX_ROLL_DAYS,
                });
            }
            new_date = new_date + Days::new(1);
            steps += 1;
        }
        Ok(new_date)
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    fn roll_backward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let mut new_date = *date;
        let mut steps: u32 = 0;
        while self.is_holiday(&new_date) {
            if steps == MAX_ROLL_DAYS {
                return Err(CalendarError::NoBusinessDay {
                    date: *date,
                    max_days: MAX_ROLL_DAYS,
                });
            }
            new_date = new_date - Days::new(1);
            steps += 1;
        }
        Ok(new_date)
    }

    /// Return the `date`, if a business day, or get the proceeding business date, without rolling
    /// into a new month.
    ///
    /// Falls back to [`roll_backward_bus_day`](DateRoll::roll_backward_bus_day) of the original
    /// `date`, never to another modified roll.
    fn roll_mod_forward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let new_date = self.roll_forward_bus_day(date)?;
        if new_date.month() != date.month() {
            self.roll_backward_bus_day(date)
        } else {
            Ok(new_date)
        }
    }

    /// Return the `date`, if a business day, or get the preceding business date, without rolling
    /// into a previous month.
    fn roll_mod_backward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let new_date = self.roll_backward_bus_day(date)?;
        if new_date.month() != date.month() {
            self.roll_forward_bus_day(date)
        } else {
            Ok(new_date)
        }
    }

    /// Add a given number of business days to a `date`.
    ///
    /// *Note*: the input `date` must itself be a business day.
    fn add_bus_days(&self, date: &NaiveDate, days: i32) -> Result<NaiveDate> {
        if self.is_holiday(date) {
            return Err(CalendarError::NotBusinessDay(*date));
        }
        let mut new_date = *date;
        let mut counter: i32 = 0;
        if days < 0 {
            // then we subtract business days
            while counter > days {
                new_date = self.roll_backward_bus_day(&(new_date - Days::new(1)))?;
                counter -= 1;
            }
        } else {
            // add business days
            while counter < days {
                new_date = self.roll_forward_bus_day(&(new_date + Days::new(1)))?;
                counter += 1;
            }
        }
        Ok(new_date)
    }

    /// Return a vector of business dates between a start and end, inclusive.
    fn bus_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Vec<NaiveDate>> {
        if self.is_holiday(start) {
            return Err(CalendarError::NotBusinessDay(*start));
        }
        if self.is_holiday(end) {
            return Err(CalendarError::NotBusinessDay(*end));
        }
        let mut vec = Vec::new();
        let mut sample_date = *start;
        while sample_date <= *end {
            vec.push(sample_date);
            sample_date = self.add_bus_days(&sample_date, 1)?;
        }
        Ok(vec)
    }

    /// Return a vector of calendar dates between a start and end, inclusive.
    fn cal_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take_while(|d| d <= end).collect()
    }

    /// Print a representation of the month of the object.
    ///
    /// # Panics
    ///
    /// Panics if `month` is not in `1..=12` or the month is not representable by
    /// [`NaiveDate`].
    fn print_month(&self, year: i32, month: u32) -> String {
        let names = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        assert!((1..=12).contains(&month), "`month` must be in 1..=12, got {month}");
        let title = format!("{} {}", names[(month - 1) as usize], year);
        let mut output = format!("{:>20}\n", title);
        output += "Su Mo Tu We Th Fr Sa\n";

        let days: u32 = end_of_month(year, month).day();
        let idx_start: u32 = ymd(year, month, 1).weekday().num_days_from_sunday();

        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for i in 0..days {
            let date = ymd(year, month, i + 1);
            let s: String = if self.is_bus_day(&date) {
                format!("{:>2}", i + 1)
            } else if !self.is_weekday(&date) {
                " .".to_string()
            } else {
                " *".to_string()
            };
            arr[(i + idx_start) as usize] = s;
        }

        for row in arr.chunks(7) {
            output += &row.join(" ");
            output += "\n";
        }
        output
    }

    /// Print a representation of a year of the object.
    ///
    /// # Panics
    ///
    /// Panics if any day of `year` is not representable by [`NaiveDate`].
    fn print_year(&self, year: i32) -> String {
        let data: Vec<Vec<String>> = (1..13)
            .map(|m| {
                self.print_month(year, m)
                    .lines()
                    .map(|s| s.to_string())
                    .collect()
            })
            .collect();
        let mut output = "\n".to_string();
        for quarter_row in 0..3 {
            for i in 0..8 {
                output += &format!(
                    "{}   {}   {}   {}\n",
                    data[quarter_row][i],
                    data[quarter_row + 3][i],
                    data[quarter_row + 6][i],
                    data[quarter_row + 9][i]
                );
            }
        }
        output += "Legend:\n";
        output += "'1-31': Business day\n";
        output += "   '.': Non-business weekend            '*': Holiday\n";
        output
    }
}
