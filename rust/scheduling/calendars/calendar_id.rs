use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A unique calendar identifier.
#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum CalendarId {
    /// London (UK) bank holidays.
    Gblo,
    /// New York Stock Exchange holidays.
    Nyse,
    /// TARGET interbank payment holidays.
    Euta,
    /// Custom calendar populated by direct injection.
    #[default]
    Cust,
}

impl CalendarId {
    /// All identifiers, in declaration order.
    pub const ALL: [CalendarId; 4] = [
        CalendarId::Gblo,
        CalendarId::Nyse,
        CalendarId::Euta,
        CalendarId::Cust,
    ];

    /// The four letter code of the calendar.
    pub fn code(&self) -> &'static str {
        match self {
            CalendarId::Gblo => "GBLO",
            CalendarId::Nyse => "NYSE",
            CalendarId::Euta => "EUTA",
            CalendarId::Cust => "CUST",
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CalendarId {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GBLO" => Ok(CalendarId::Gblo),
            "NYSE" => Ok(CalendarId::Nyse),
            "EUTA" => Ok(CalendarId::Euta),
            "CUST" => Ok(CalendarId::Cust),
            _ => Err(CalendarError::UnknownCalendar(s.to_string())),
        }
    }
}
