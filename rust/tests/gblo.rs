use crate::scheduling::{generate_holidays, ymd, CalendarId, CalendarManager, DateRoll};
use chrono::NaiveDate;

fn gblo_year(year: i32) -> Vec<NaiveDate> {
    generate_holidays(CalendarId::Gblo, year..=year)
}

#[test]
fn test_1967_late_may_and_late_august() {
    assert_eq!(
        gblo_year(1967),
        vec![
            ymd(1967, 3, 24),
            ymd(1967, 3, 27),
            ymd(1967, 5, 29),
            ymd(1967, 8, 28),
            ymd(1967, 12, 25),
            ymd(1967, 12, 26),
        ]
    );
}

#[test]
fn test_1968_whit_monday_and_saturday_rule() {
    let result = gblo_year(1968);
    // easter 14th April
    assert!(result.contains(&ymd(1968, 6, 3)));
    assert!(result.contains(&ymd(1968, 9, 2)));
}

#[test]
fn test_1970_boxing_day_on_saturday() {
    assert_eq!(
        gblo_year(1970),
        vec![
            ymd(1970, 3, 27),
            ymd(1970, 3, 30),
            ymd(1970, 5, 25),
            ymd(1970, 8, 31),
            ymd(1970, 12, 25),
            ymd(1970, 12, 28),
        ]
    );
}

#[test]
fn test_1971_modern_spring_and_summer() {
    assert_eq!(
        gblo_year(1971),
        vec![
            ymd(1971, 4, 9),
            ymd(1971, 4, 12),
            ymd(1971, 5, 31),
            ymd(1971, 8, 30),
            ymd(1971, 12, 27),
            ymd(1971, 12, 28),
        ]
    );
}

#[test]
fn test_1995_ve_day() {
    assert_eq!(
        gblo_year(1995),
        vec![
            ymd(1995, 1, 2),
            ymd(1995, 4, 14),
            ymd(1995, 4, 17),
            ymd(1995, 5, 8),
            ymd(1995, 5, 29),
            ymd(1995, 8, 28),
            ymd(1995, 12, 25),
            ymd(1995, 12, 26),
        ]
    );
}

#[test]
fn test_2002_golden_jubilee() {
    assert_eq!(
        gblo_year(2002),
        vec![
            ymd(2002, 1, 1),
            ymd(2002, 3, 29),
            ymd(2002, 4, 1),
            ymd(2002, 5, 6),
            ymd(2002, 6, 3),
            ymd(2002, 6, 4),
            ymd(2002, 8, 26),
            ymd(2002, 12, 25),
            ymd(2002, 12, 26),
        ]
    );
}

#[test]
fn test_2012_diamond_jubilee() {
    assert_eq!(
        gblo_year(2012),
        vec![
            ymd(2012, 1, 2),
            ymd(2012, 4, 6),
            ymd(2012, 4, 9),
            ymd(2012, 5, 7),
            ymd(2012, 6, 4),
            ymd(2012, 6, 5),
            ymd(2012, 8, 27),
            ymd(2012, 12, 25),
            ymd(2012, 12, 26),
        ]
    );
}

#[test]
fn test_2020_ve_day_replaces_early_may() {
    let result = gblo_year(2020);
    assert!(result.contains(&ymd(2020, 5, 8)));
    assert!(!result.contains(&ymd(2020, 5, 4)));
    assert!(result.contains(&ymd(2020, 5, 25)));
    assert!(result.contains(&ymd(2020, 8, 31)));
}

#[test]
fn test_2022_platinum_jubilee_and_saturday_new_year() {
    let result = gblo_year(2022);
    // only a Sunday New Year is bumped
    assert_eq!(result[0], ymd(2022, 1, 1));
    assert!(result.contains(&ymd(2022, 5, 2)));
    assert!(result.contains(&ymd(2022, 6, 2)));
    assert!(result.contains(&ymd(2022, 6, 3)));
    assert!(!result.contains(&ymd(2022, 5, 30)));
}

#[test]
fn test_2023_sunday_new_year() {
    let result = gblo_year(2023);
    assert_eq!(result[0], ymd(2023, 1, 2));
    assert!(result.contains(&ymd(2023, 4, 7)));
    assert!(result.contains(&ymd(2023, 4, 10)));
}

#[test]
fn test_one_off_dates_in_named_calendar() {
    let ldn = CalendarManager::new().get(CalendarId::Gblo);
    assert!(ldn.is_holiday(&ymd(2011, 4, 29)));
    assert!(ldn.is_holiday(&ymd(1999, 12, 31)));
    assert_eq!(
        ldn.add_bus_days(&ymd(2011, 4, 28), 1).unwrap(),
        ymd(2011, 5, 3)
    );
}

#[test]
fn test_named_calendar_range() {
    let ldn = CalendarManager::new().get(CalendarId::Gblo);
    assert_eq!(ldn.holidays().first(), Some(&ymd(1950, 4, 7)));
    assert!(ldn.holidays().iter().all(|d| *d >= ymd(1950, 1, 1) && *d <= ymd(2099, 12, 31)));
}

#[test]
fn test_print_month_gblo() {
    let ldn = CalendarManager::new().get(CalendarId::Gblo);
    let result = ldn.print_month(2024, 12);
    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(lines[0], "       December 2024");
    assert_eq!(lines[2], " .  2  3  4  5  6  .");
    // 25th and 26th are holidays on weekdays
    assert_eq!(lines[5], " . 23 24  *  * 27  .");
    assert!(lines[6].starts_with(" . 30 31"));
}
