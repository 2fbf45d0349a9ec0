use chrono::prelude::*;

use crate::error::Result;
use crate::scheduling::{BusinessDayConvention, DateRoll};

/// Perform date adjustment according to calendar definitions, i.e. a known [`DateRoll`].
pub trait Adjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust<T: DateRoll>(&self, date: &NaiveDate, calendar: &T) -> Result<NaiveDate>;

    /// Adjust a slice of dates under an adjustment rule, failing on the first error.
    fn adjusts<T: DateRoll>(&self, dates: &[NaiveDate], calendar: &T) -> Result<Vec<NaiveDate>> {
        dates
            .iter()
            .map(|date| self.adjust(date, calendar))
            .collect()
    }
}

/// Perform date adjustment according to adjustment rules, i.e. a given [`BusinessDayConvention`].
pub trait CalendarAdjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust(&self, date: &NaiveDate, convention: &BusinessDayConvention) -> Result<NaiveDate>
    where
        Self: Sized + DateRoll,
    {
        convention.adjust(date, self)
    }

    /// Adjust a slice of dates under an adjustment rule.
    fn adjusts(
        &self,
        dates: &[NaiveDate],
        convention: &BusinessDayConvention,
    ) -> Result<Vec<NaiveDate>>
    where
        Self: Sized + DateRoll,
    {
        convention.adjusts(dates, self)
    }
}

impl Adjustment for BusinessDayConvention {
    fn adjust<T: DateRoll>(&self, date: &NaiveDate, calendar: &T) -> Result<NaiveDate> {
        match self {
            BusinessDayConvention::NoAdjust => Ok(*date),
            BusinessDayConvention::Following => calendar.roll_forward_bus_day(date),
            BusinessDayConvention::ModifiedFollowing => calendar.roll_mod_forward_bus_day(date),
            BusinessDayConvention::Preceding => calendar.roll_backward_bus_day(date),
            BusinessDayConvention::ModifiedPreceding => calendar.roll_mod_backward_bus_day(date),
        }
    }
}

/// Adjust `date` onto a business day of `calendar` under `convention`.
///
/// ```rust
/// # use busday::scheduling::{adjust, ymd, BusinessDayConvention, CalendarId, HolidayCalendar};
/// let ldn = HolidayCalendar::new(CalendarId::Gblo);
/// // Easter Saturday 2024: the next business day is in April, so roll back past Good Friday.
/// let result = adjust(ymd(2024, 3, 30), &ldn, BusinessDayConvention::ModifiedFollowing);
/// assert_eq!(result.unwrap(), ymd(2024, 3, 28));
/// ```
pub fn adjust<T: DateRoll>(
    date: NaiveDate,
    calendar: &T,
    convention: BusinessDayConvention,
) -> Result<NaiveDate> {
    convention.adjust(&date, calendar)
}
