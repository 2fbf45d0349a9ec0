//! JSON persistence for calendars and their settings.
//!
//! A [`HolidayCalendar`](crate::scheduling::HolidayCalendar) round trips with its weekend,
//! holiday list in generation order and [`HolidayPolicy`](crate::scheduling::HolidayPolicy);
//! a missing policy reads back as the default. Calendar identifiers and business day
//! conventions are written as their variant names.
//!
//! ```rust
//! # use busday::json::JSON;
//! # use busday::scheduling::BusinessDayConvention;
//! let js = BusinessDayConvention::Following.to_json().unwrap();
//! assert_eq!(BusinessDayConvention::from_json(&js).unwrap(), BusinessDayConvention::Following);
//! ```

use serde::{Deserialize, Serialize};

/// Conversion of a serializable calendar type to and from a JSON string.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Serialize to a compact JSON string.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string, failing on unknown variants or malformed dates.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
