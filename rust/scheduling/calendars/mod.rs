mod adjuster;
mod calendar_id;
mod convention;
pub(crate) mod datemath;
mod dateroll;
mod holiday_cal;
mod manager;
pub(crate) mod named;

pub use crate::scheduling::calendars::{
    adjuster::{adjust, Adjustment, CalendarAdjustment},
    calendar_id::CalendarId,
    convention::BusinessDayConvention,
    datemath::{
        bump_fixed_holiday, bump_forward_from, easter, end_of_month, first_in_month,
        last_in_month, ymd,
    },
    dateroll::{DateRoll, MAX_ROLL_DAYS},
    holiday_cal::{HolidayCalendar, HolidayPolicy},
    manager::CalendarManager,
    named::{generate_holidays, get_weekend_by_id, FIRST_YEAR, LAST_YEAR},
};
