use chrono::prelude::*;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::scheduling::calendars::named::{
    generate_holidays, get_weekend_by_id, FIRST_YEAR, LAST_YEAR,
};
use crate::scheduling::{CalendarAdjustment, CalendarId, DateRoll};

/// Which dates a [`HolidayCalendar`] treats as holidays.
#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HolidayPolicy {
    /// Weekend days and every listed holiday.
    #[default]
    WeekendsAndHolidays,
    /// Weekend days only. The listed holidays are retained but never consulted.
    WeekendsOnly,
}

/// A business day calendar with a named identity, a two day weekend and a list of holidays.
///
/// The holiday list is materialized once at construction, either by replaying the rule table
/// of a named calendar or by direct injection. It is never adjusted for weekends: weekend status
/// is always computed from the weekend days, not by membership of the list.
///
/// # Examples
/// ```rust
/// # use busday::scheduling::{HolidayCalendar, CalendarId, DateRoll, ymd};
/// let ldn = HolidayCalendar::new(CalendarId::Gblo);
/// assert!(ldn.is_holiday(&ymd(2024, 3, 29)));  // Good Friday
/// assert!(ldn.is_holiday(&ymd(2024, 3, 30)));  // Saturday
/// assert!(ldn.is_bus_day(&ymd(2024, 4, 2)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    pub(crate) id: CalendarId,
    pub(crate) first_weekend_day: Weekday,
    pub(crate) second_weekend_day: Weekday,
    pub(crate) holidays: IndexSet<NaiveDate>,
    #[serde(default)]
    pub(crate) policy: HolidayPolicy,
}

impl HolidayCalendar {
    /// Create a calendar by generating the holidays of a named calendar for every year from
    /// [`FIRST_YEAR`] to [`LAST_YEAR`].
    ///
    /// Identifiers without a rule table, and [`CalendarId::Cust`], yield no holidays.
    pub fn new(id: CalendarId) -> Self {
        let (first, second) = get_weekend_by_id(id);
        let holidays: IndexSet<NaiveDate> =
            IndexSet::from_iter(generate_holidays(id, FIRST_YEAR..=LAST_YEAR));
        debug!(calendar = %id, holidays = holidays.len(), "generated holiday calendar");
        HolidayCalendar {
            id,
            first_weekend_day: first,
            second_weekend_day: second,
            holidays,
            policy: HolidayPolicy::default(),
        }
    }

    /// Create a calendar from a caller supplied list of holidays. No generation is performed.
    pub fn from_holidays(
        holidays: Vec<NaiveDate>,
        first_weekend_day: Weekday,
        second_weekend_day: Weekday,
        id: CalendarId,
    ) -> Self {
        HolidayCalendar {
            id,
            first_weekend_day,
            second_weekend_day,
            holidays: IndexSet::from_iter(holidays),
            policy: HolidayPolicy::default(),
        }
    }

    /// Return the calendar with a different [`HolidayPolicy`].
    pub fn with_policy(mut self, policy: HolidayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The identifier of the calendar.
    pub fn id(&self) -> CalendarId {
        self.id
    }

    /// The first day of the weekend.
    pub fn first_weekend_day(&self) -> Weekday {
        self.first_weekend_day
    }

    /// The second day of the weekend.
    pub fn second_weekend_day(&self) -> Weekday {
        self.second_weekend_day
    }

    /// The policy deciding which dates are holidays.
    pub fn policy(&self) -> HolidayPolicy {
        self.policy
    }

    /// The holiday dates of the calendar, in generation order.
    pub fn holidays(&self) -> &IndexSet<NaiveDate> {
        &self.holidays
    }

    /// Returns whether the date falls on either weekend day.
    pub fn is_weekend(&self, date: &NaiveDate) -> bool {
        let weekday = date.weekday();
        weekday == self.first_weekend_day || weekday == self.second_weekend_day
    }

    /// Returns whether the date is in the holiday list, regardless of policy.
    pub fn is_listed_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    /// Returns whether the date is a business day under the calendar's policy.
    pub fn is_business_day(&self, date: &NaiveDate) -> bool {
        self.is_bus_day(date)
    }

    /// Remove every listed holiday that falls on a weekend day.
    pub fn remove_weekend_entries(&mut self) {
        let before = self.holidays.len();
        let (first, second) = (self.first_weekend_day, self.second_weekend_day);
        self.holidays
            .retain(|d| d.weekday() != first && d.weekday() != second);
        trace!(
            calendar = %self.id,
            removed = before - self.holidays.len(),
            "removed weekend holidays"
        );
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        HolidayCalendar::new(CalendarId::Cust)
    }
}

impl DateRoll for HolidayCalendar {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.is_weekend(date)
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        match self.policy {
            HolidayPolicy::WeekendsOnly => self.is_weekend(date),
            HolidayPolicy::WeekendsAndHolidays => {
                self.is_weekend(date) || self.is_listed_holiday(date)
            }
        }
    }
}

impl CalendarAdjustment for HolidayCalendar {}
