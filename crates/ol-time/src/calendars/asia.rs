//! Holiday tables for Asian countries.
//!
//! Holidays set by the lunar calendar (Lunar New Year, Chuseok, Diwali,
//! Dragon Boat, Mid-Autumn, …) move every year and are not listed; only
//! fixed-date, weekday-rule and Easter-relative holidays are.

use super::{fixed, nth, on, Holiday, HolidayCalendar, HolidayRule, Observance};
use crate::date::Weekday::Monday;

// ── China ─────────────────────────────────────────────────────────────────────

const CHINA: &[Holiday] = &[
    Holiday::new("New Year's Day", on(1, 1)),
    Holiday::new("Qingming Festival", on(4, 5)),
    Holiday::new("Labour Day", on(5, 1)),
    Holiday::new("National Day", on(10, 1)),
    Holiday::new("National Day Golden Week", on(10, 2)),
    Holiday::new("National Day Golden Week", on(10, 3)),
];

/// Chinese fixed-date public holidays.
pub const fn china() -> HolidayCalendar {
    HolidayCalendar::new("China", CHINA)
}

// ── India ─────────────────────────────────────────────────────────────────────

const INDIA: &[Holiday] = &[
    Holiday::new("Republic Day", on(1, 26)),
    Holiday::new("Good Friday", HolidayRule::Easter(-2)),
    Holiday::new("Dr. Ambedkar Jayanti", on(4, 14)),
    Holiday::new("Maharashtra Day", on(5, 1)),
    Holiday::new("Independence Day", on(8, 15)),
    Holiday::new("Gandhi Jayanti", on(10, 2)),
    Holiday::new("Christmas", on(12, 25)),
];

/// Indian exchange holidays with a fixed or Easter-relative date.
pub const fn india() -> HolidayCalendar {
    HolidayCalendar::new("India", INDIA)
}

// ── Japan ─────────────────────────────────────────────────────────────────────

const SUBSTITUTE: Observance = Observance::SundayForward(1);

const JAPAN: &[Holiday] = &[
    Holiday::new("New Year's Day", on(1, 1)),
    Holiday::new("Bank Holiday", on(1, 2)),
    Holiday::new("Bank Holiday", fixed(1, 3, SUBSTITUTE)),
    Holiday::since("Coming of Age Day", nth(2, Monday, 1), 2000),
    Holiday::new("National Foundation Day", fixed(2, 11, SUBSTITUTE)),
    Holiday::since("Emperor's Birthday", fixed(2, 23, SUBSTITUTE), 2020),
    Holiday::new(
        "Vernal Equinox Day",
        HolidayRule::Equinox {
            month: 3,
            observance: SUBSTITUTE,
        },
    ),
    Holiday::new("Showa Day", fixed(4, 29, SUBSTITUTE)),
    Holiday::new("Constitution Memorial Day", fixed(5, 3, Observance::SundayForward(3))),
    Holiday::new("Greenery Day", fixed(5, 4, Observance::SundayForward(2))),
    Holiday::new("Children's Day", fixed(5, 5, SUBSTITUTE)),
    Holiday::since("Marine Day", nth(3, Monday, 7), 2003),
    Holiday::since("Mountain Day", fixed(8, 11, SUBSTITUTE), 2016),
    Holiday::since("Respect for the Aged Day", nth(3, Monday, 9), 2003),
    Holiday::new(
        "Autumnal Equinox Day",
        HolidayRule::Equinox {
            month: 9,
            observance: SUBSTITUTE,
        },
    ),
    Holiday::since("Sports Day", nth(2, Monday, 10), 2000),
    Holiday::new("Culture Day", fixed(11, 3, SUBSTITUTE)),
    Holiday::new("Labour Thanksgiving Day", fixed(11, 23, SUBSTITUTE)),
    Holiday::between("Emperor's Birthday", fixed(12, 23, SUBSTITUTE), 1989, 2018),
];

/// Japanese national holidays with Sunday substitutes.
///
/// The one-off 2020 and 2021 Olympic moves of Marine, Sports and Mountain
/// Day are not modelled.
pub const fn japan() -> HolidayCalendar {
    HolidayCalendar::new("Japan", JAPAN)
}

// ── South Korea ───────────────────────────────────────────────────────────────

const SOUTH_KOREA: &[Holiday] = &[
    Holiday::new("New Year's Day", on(1, 1)),
    Holiday::new("Independence Movement Day", on(3, 1)),
    Holiday::new("Labour Day", on(5, 1)),
    Holiday::new("Children's Day", on(5, 5)),
    Holiday::new("Memorial Day", on(6, 6)),
    Holiday::new("Liberation Day", on(8, 15)),
    Holiday::new("National Foundation Day", on(10, 3)),
    Holiday::since("Hangul Day", on(10, 9), 2013),
    Holiday::new("Christmas Day", on(12, 25)),
];

/// South Korean fixed-date holidays.
pub const fn south_korea() -> HolidayCalendar {
    HolidayCalendar::new("South Korea", SOUTH_KOREA)
}
