//! Create a business day [`HolidayCalendar`] and perform financial date adjustment.
//!
//! # Calendars
//!
//! A [`HolidayCalendar`] is a two day weekend plus a materialized set of holiday dates. Named
//! calendars, identified by a [`CalendarId`], are generated from rule tables for every year
//! from [`FIRST_YEAR`] to [`LAST_YEAR`]. Custom calendars are built from a list of dates.
//!
//! All calendars implement the [`DateRoll`] trait which provides simple date adjustment, called
//! **rolling**. This involves moving forward or backward from non-business days to business days.
//! Every roll is bounded by [`MAX_ROLL_DAYS`] and returns an error rather than looping forever.
//!
//! ### Example
//! This example creates a business day calendar defining Saturday and Sunday weekends and a
//! specific holiday (the Early May UK Bank Holiday). It uses a date rolling method to
//! manipulate Saturday 29th April 2017 under the *'following'* and *'modified following'* rules.
//! ```rust
//! # use busday::scheduling::{HolidayCalendar, CalendarId, ymd, DateRoll};
//! # use chrono::Weekday;
//! let cal = HolidayCalendar::from_holidays(
//!     vec![ymd(2017, 5, 1)], Weekday::Sat, Weekday::Sun, CalendarId::Cust
//! );
//! assert_eq!(ymd(2017, 5, 2), cal.roll_forward_bus_day(&ymd(2017, 4, 29)).unwrap());
//! assert_eq!(ymd(2017, 4, 28), cal.roll_mod_forward_bus_day(&ymd(2017, 4, 29)).unwrap());
//! ```
//!
//! # Date Adjustment
//!
//! A [`BusinessDayConvention`] names the rule applied to a non-business day. It implements the
//! [`Adjustment`] trait requiring some object capable of performing [`DateRoll`]. Calendars
//! implement the [`CalendarAdjustment`] trait which permits the reverse call, and the free
//! function [`adjust`] takes the date, calendar and convention together.
//!
//! ### Example
//! ```rust
//! # use busday::scheduling::{CalendarManager, CalendarId, ymd, BusinessDayConvention, CalendarAdjustment};
//! let ldn = CalendarManager::new().get(CalendarId::Gblo);
//! let convention = BusinessDayConvention::parse("Following");
//! assert_eq!(ymd(2024, 12, 27), ldn.adjust(&ymd(2024, 12, 25), &convention).unwrap());
//! ```

mod calendars;

mod serde;

pub use crate::scheduling::calendars::{
    adjust, bump_fixed_holiday, bump_forward_from, easter, end_of_month, first_in_month,
    generate_holidays, get_weekend_by_id, last_in_month, ymd, Adjustment, BusinessDayConvention,
    CalendarAdjustment, CalendarId, CalendarManager, DateRoll, HolidayCalendar, HolidayPolicy,
    FIRST_YEAR, LAST_YEAR, MAX_ROLL_DAYS,
};
