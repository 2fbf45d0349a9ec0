use crate::scheduling::{
    adjust, easter, generate_holidays, ymd, BusinessDayConvention, CalendarId, CalendarManager,
    DateRoll,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..54_700).prop_map(|n| ymd(1950, 1, 1) + Days::new(n))
}

fn convention_strategy() -> impl Strategy<Value = BusinessDayConvention> {
    prop::sample::select(BusinessDayConvention::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_adjustment_is_idempotent(date in date_strategy(), convention in convention_strategy()) {
        let ldn = CalendarManager::new().get(CalendarId::Gblo);
        let once = adjust(date, ldn.as_ref(), convention).unwrap();
        let twice = adjust(once, ldn.as_ref(), convention).unwrap();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(adjust(once, ldn.as_ref(), BusinessDayConvention::NoAdjust).unwrap(), once);
    }

    #[test]
    fn test_business_day_is_not_holiday(date in date_strategy()) {
        let ldn = CalendarManager::new().get(CalendarId::Gblo);
        prop_assert_eq!(ldn.is_business_day(&date), !ldn.is_holiday(&date));
    }

    #[test]
    fn test_rolls_reach_business_days(date in date_strategy()) {
        let ldn = CalendarManager::new().get(CalendarId::Gblo);
        let following = adjust(date, ldn.as_ref(), BusinessDayConvention::Following).unwrap();
        let preceding = adjust(date, ldn.as_ref(), BusinessDayConvention::Preceding).unwrap();
        prop_assert!(ldn.is_business_day(&following) && following >= date);
        prop_assert!(ldn.is_business_day(&preceding) && preceding <= date);
    }

    #[test]
    fn test_modified_stays_in_month(date in date_strategy()) {
        let ldn = CalendarManager::new().get(CalendarId::Gblo);
        for convention in [BusinessDayConvention::ModifiedFollowing, BusinessDayConvention::ModifiedPreceding] {
            let result = adjust(date, ldn.as_ref(), convention).unwrap();
            prop_assert_eq!(result.month(), date.month());
            prop_assert!(ldn.is_business_day(&result));
        }
    }

    #[test]
    fn test_new_year_never_sunday(year in 1974i32..=2099) {
        let result = generate_holidays(CalendarId::Gblo, year..=year);
        prop_assert_eq!(result[0].month(), 1);
        prop_assert_ne!(result[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn test_easter_is_spring_sunday(year in 1583i32..=4099) {
        let result = easter(year);
        prop_assert_eq!(result.weekday(), Weekday::Sun);
        prop_assert!(result >= ymd(year, 3, 22) && result <= ymd(year, 4, 25));
    }
}
