//! Error types returned by calendar construction, lookup and date adjustment.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Errors that can occur when building, looking up or rolling with a calendar.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    /// A roll walked past the iteration cap without reaching a business day.
    #[error("calendar has no business day within {max_days} days of {date}")]
    NoBusinessDay {
        /// The unadjusted date the walk started from.
        date: NaiveDate,
        /// The number of days walked before giving up.
        max_days: u32,
    },

    /// Business day arithmetic was requested from a date that is not a business day.
    #[error("{0} is not a business day")]
    NotBusinessDay(NaiveDate),

    /// Calendar code or custom calendar name not recognised.
    #[error("'{0}' is not found in list of existing calendars")]
    UnknownCalendar(String),

    /// Custom calendar name already registered.
    #[error("'{0}' already exists in calendars, first `pop` the existing calendar")]
    DuplicateCalendar(String),

    /// Convention label not recognised by the strict parser.
    #[error("unknown business day convention: '{0}'")]
    UnknownConvention(String),

    /// Input could not be read as a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
