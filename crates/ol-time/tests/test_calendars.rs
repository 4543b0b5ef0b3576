//! Holiday-calendar and business-day-count integration tests.

use ol_time::calendar::{non_business_days, Calendar, WeekendsOnly};
use ol_time::{Country, Date};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) && !cal.is_weekend(d) {
            holidays.push(d);
        }
        d += 1;
    }
    holidays
}

fn check_year(country: Country, year: u16, expected: &[Date]) {
    let cal = country.calendar();
    let calculated = holiday_list(&cal, date(year, 1, 1), date(year, 12, 31));
    assert_eq!(
        calculated,
        expected,
        "{} {year}: holiday list mismatch",
        cal.name()
    );
}

#[test]
fn test_us_holidays_2023() {
    check_year(
        Country::UnitedStates,
        2023,
        &[
            date(2023, 1, 2),   // New Year's Day (observed)
            date(2023, 1, 16),  // MLK
            date(2023, 2, 20),  // Washington's Birthday
            date(2023, 5, 29),  // Memorial Day
            date(2023, 6, 19),  // Juneteenth
            date(2023, 7, 4),   // Independence Day
            date(2023, 9, 4),   // Labor Day
            date(2023, 10, 9),  // Columbus Day
            date(2023, 11, 10), // Veterans Day (observed)
            date(2023, 11, 23), // Thanksgiving
            date(2023, 12, 25), // Christmas
        ],
    );
}

#[test]
fn test_us_new_year_observed_in_previous_year() {
    let cal = Country::UnitedStates.calendar();
    // 2022-01-01 is a Saturday
    assert!(cal.is_holiday(date(2021, 12, 31)));
    assert_eq!(cal.holiday_name(date(2021, 12, 31)), Some("New Year's Day"));
    assert!(cal.is_business_day(date(2021, 12, 30)));
}

#[test]
fn test_us_juneteenth_starts_2021() {
    let cal = Country::UnitedStates.calendar();
    assert!(cal.is_business_day(date(2020, 6, 19)));
    assert!(cal.is_holiday(date(2021, 6, 18)));
}

#[test]
fn test_canada_holidays_2023() {
    check_year(
        Country::Canada,
        2023,
        &[
            date(2023, 1, 2),
            date(2023, 4, 7),
            date(2023, 5, 22),
            date(2023, 7, 3),
            date(2023, 9, 4),
            date(2023, 10, 2),
            date(2023, 10, 9),
            date(2023, 12, 25),
            date(2023, 12, 26),
        ],
    );
}

#[test]
fn test_uk_holidays_2023() {
    check_year(
        Country::UnitedKingdom,
        2023,
        &[
            date(2023, 1, 2),
            date(2023, 4, 7),
            date(2023, 4, 10),
            date(2023, 5, 1),
            date(2023, 5, 29),
            date(2023, 8, 28),
            date(2023, 12, 25),
            date(2023, 12, 26),
        ],
    );
}

#[test]
fn test_uk_christmas_on_saturday() {
    let cal = Country::UnitedKingdom.calendar();
    // 2027-12-25 is a Saturday
    assert_eq!(cal.holiday_name(date(2027, 12, 27)), Some("Christmas Day"));
    assert_eq!(cal.holiday_name(date(2027, 12, 28)), Some("Boxing Day"));
}

#[test]
fn test_germany_holidays_2023() {
    check_year(
        Country::Germany,
        2023,
        &[
            date(2023, 4, 7),
            date(2023, 4, 10),
            date(2023, 5, 1),
            date(2023, 5, 18),
            date(2023, 5, 29),
            date(2023, 10, 3),
            date(2023, 12, 25),
            date(2023, 12, 26),
        ],
    );
}

#[test]
fn test_japan_holidays_2023() {
    check_year(
        Country::Japan,
        2023,
        &[
            date(2023, 1, 2),
            date(2023, 1, 3),
            date(2023, 1, 9),   // Coming of Age Day
            date(2023, 2, 23),  // Emperor's Birthday
            date(2023, 3, 21),  // Vernal Equinox Day
            date(2023, 5, 3),
            date(2023, 5, 4),
            date(2023, 5, 5),
            date(2023, 7, 17),  // Marine Day
            date(2023, 8, 11),  // Mountain Day
            date(2023, 9, 18),  // Respect for the Aged Day
            date(2023, 10, 9),  // Sports Day
            date(2023, 11, 3),  // Culture Day
            date(2023, 11, 23), // Labour Thanksgiving Day
        ],
    );
}

#[test]
fn test_japan_golden_week_substitute() {
    let cal = Country::Japan.calendar();
    // 2020-05-03 is a Sunday
    assert_eq!(cal.holiday_name(date(2020, 5, 6)), Some("Constitution Memorial Day"));
    assert!(cal.is_business_day(date(2020, 5, 7)));
}

#[test]
fn test_russia_holidays_2023() {
    check_year(
        Country::Russia,
        2023,
        &[
            date(2023, 1, 2),
            date(2023, 1, 3),
            date(2023, 1, 4),
            date(2023, 1, 5),
            date(2023, 1, 9), // Orthodox Christmas moved off Saturday
            date(2023, 2, 23),
            date(2023, 3, 8),
            date(2023, 5, 1),
            date(2023, 5, 9),
            date(2023, 6, 12),
            date(2023, 11, 6), // Unity Day moved off Saturday
        ],
    );
}

#[test]
fn test_india_good_friday() {
    let cal = Country::India.calendar();
    assert_eq!(cal.holiday_name(date(2023, 4, 7)), Some("Good Friday"));
    assert_eq!(cal.holiday_name(date(2023, 1, 26)), Some("Republic Day"));
}

#[test]
fn test_non_business_days_trading_horizon() {
    let cal = Country::UnitedStates.calendar();
    let start = date(2023, 1, 16);
    let target = date(2023, 2, 17);
    // 8 weekend days plus MLK day on the start date
    let n = non_business_days(&cal, start, target).unwrap();
    assert_eq!(n, 9);
    assert_eq!((target - start) - n, 23);
}

proptest! {
    #[test]
    fn holiday_calendar_never_fewer_closures_than_weekends(
        start in 0i32..30_000,
        span in 0i32..400,
    ) {
        let start = Date::from_serial(start);
        let end = start + span;
        let us = Country::UnitedStates.calendar();
        let weekends = non_business_days(&WeekendsOnly, start, end).unwrap();
        let all = non_business_days(&us, start, end).unwrap();
        prop_assert!(all >= weekends);
        prop_assert!(all <= span);
    }
}
