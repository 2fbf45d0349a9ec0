use crate::json::JSON;
use crate::scheduling::{BusinessDayConvention, CalendarId, HolidayCalendar, HolidayPolicy};

impl JSON for HolidayCalendar {}
impl JSON for CalendarId {}
impl JSON for BusinessDayConvention {}
impl JSON for HolidayPolicy {}
