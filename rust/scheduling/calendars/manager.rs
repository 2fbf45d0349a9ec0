use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use tracing::{debug, info};

use crate::error::{CalendarError, Result};
use crate::scheduling::{CalendarId, HolidayCalendar};

// Named calendars, built at most once per identifier on first request.
static NAMED_CALENDARS: LazyLock<RwLock<HashMap<CalendarId, Arc<HolidayCalendar>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

// User supplied calendars keyed by lower case name.
static CUSTOM_CALENDARS: LazyLock<RwLock<HashMap<String, Arc<HolidayCalendar>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// A manager giving shared, thread safe access to holiday calendars.
///
/// Named calendars are generated lazily and cached for the life of the process. Every caller
/// asking for the same [`CalendarId`] receives a pointer to the same [`HolidayCalendar`].
///
/// ```rust
/// # use busday::scheduling::{CalendarManager, CalendarId};
/// # use std::sync::Arc;
/// let manager = CalendarManager::new();
/// let a = manager.get(CalendarId::Gblo);
/// let b = manager.get(CalendarId::Gblo);
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CalendarManager;

impl CalendarManager {
    /// Create an instance of the [`CalendarManager`].
    pub fn new() -> Self {
        Self {}
    }

    /// Return the named calendar, generating it on first use.
    pub fn get(&self, id: CalendarId) -> Arc<HolidayCalendar> {
        {
            let r = NAMED_CALENDARS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cal) = r.get(&id) {
                return Arc::clone(cal);
            }
        }
        let mut w = NAMED_CALENDARS.write().unwrap_or_else(PoisonError::into_inner);
        // another thread may have built it while the write lock was awaited
        if let Some(cal) = w.get(&id) {
            return Arc::clone(cal);
        }
        info!(calendar = %id, "building named calendar");
        let cal = Arc::new(HolidayCalendar::new(id));
        w.insert(id, Arc::clone(&cal));
        cal
    }

    /// Returns *true* if the named calendar has already been generated.
    pub fn contains(&self, id: CalendarId) -> bool {
        let r = NAMED_CALENDARS.read().unwrap_or_else(PoisonError::into_inner);
        r.contains_key(&id)
    }

    /// Return the identifiers of generated named calendars, sorted.
    pub fn ids(&self) -> Vec<CalendarId> {
        let r = NAMED_CALENDARS.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<CalendarId> = r.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Add a custom calendar under a case insensitive name.
    ///
    /// Data will not be overwritten; first [`pop`](CalendarManager::pop) the existing calendar.
    pub fn add(&self, name: &str, calendar: HolidayCalendar) -> Result<()> {
        let k = clean_name(name);
        let mut w = CUSTOM_CALENDARS.write().unwrap_or_else(PoisonError::into_inner);
        if w.contains_key(&k) {
            return Err(CalendarError::DuplicateCalendar(k));
        }
        debug!(name = %k, holidays = calendar.holidays().len(), "adding custom calendar");
        w.insert(k, Arc::new(calendar));
        Ok(())
    }

    /// Return a custom calendar by name.
    pub fn get_custom(&self, name: &str) -> Result<Arc<HolidayCalendar>> {
        let k = clean_name(name);
        let r = CUSTOM_CALENDARS.read().unwrap_or_else(PoisonError::into_inner);
        r.get(&k)
            .cloned()
            .ok_or(CalendarError::UnknownCalendar(k))
    }

    /// Remove a custom calendar and return it.
    pub fn pop(&self, name: &str) -> Result<Arc<HolidayCalendar>> {
        let k = clean_name(name);
        let mut w = CUSTOM_CALENDARS.write().unwrap_or_else(PoisonError::into_inner);
        w.remove(&k).ok_or(CalendarError::UnknownCalendar(k))
    }
}

fn clean_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ymd, DateRoll};
    use chrono::Weekday;
    use std::thread;

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("  MyCal "), "mycal");
    }

    #[test]
    fn test_get_shares_memory() {
        let manager = CalendarManager::new();
        let a = manager.get(CalendarId::Gblo);
        let b = CalendarManager::new().get(CalendarId::Gblo);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(manager.contains(CalendarId::Gblo));
        assert!(manager.ids().contains(&CalendarId::Gblo));
        assert!(a.is_holiday(&ymd(2024, 12, 25)));
    }

    #[test]
    fn test_concurrent_get_builds_once() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| CalendarManager::new().get(CalendarId::Euta)))
            .collect();
        let cals: Vec<Arc<HolidayCalendar>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        for cal in cals.iter() {
            assert!(Arc::ptr_eq(cal, &cals[0]));
        }
    }

    #[test]
    fn test_add_get_pop_custom() {
        let manager = CalendarManager::new();
        let cal = HolidayCalendar::from_holidays(
            vec![ymd(2025, 7, 4)],
            Weekday::Sat,
            Weekday::Sun,
            CalendarId::Cust,
        );
        manager.add("Test_Add_Get_Pop", cal.clone()).unwrap();

        let result = manager.add("test_add_get_pop ", cal.clone());
        assert_eq!(
            result,
            Err(CalendarError::DuplicateCalendar("test_add_get_pop".to_string()))
        );

        let got = manager.get_custom("TEST_ADD_GET_POP").unwrap();
        assert_eq!(*got, cal);

        let popped = manager.pop("test_add_get_pop").unwrap();
        assert!(Arc::ptr_eq(&got, &popped));
        assert_eq!(
            manager.get_custom("test_add_get_pop"),
            Err(CalendarError::UnknownCalendar("test_add_get_pop".to_string()))
        );
    }

    #[test]
    fn test_pop_missing() {
        let manager = CalendarManager::new();
        let result = manager.pop("never_added");
        assert_eq!(
            result,
            Err(CalendarError::UnknownCalendar("never_added".to_string()))
        );
    }
}
