//! Rule-based country holiday calendars.
//!
//! Each country calendar is a static table of [`Holiday`] entries. A holiday
//! is described by a [`HolidayRule`] (fixed date, n-th weekday, Easter
//! offset, …) and an optional first year. Weekends are always non-business
//! days.
//!
//! Fixed-date holidays may be moved off a weekend by an [`Observance`]; the
//! observed date may fall in the previous year (e.g. New Year's Day on a
//! Saturday observed on Friday December 31st).

/// Calendars of the Americas.
pub mod america;
/// Asian calendars (fixed-date and Easter holidays only).
pub mod asia;
/// European calendars.
pub mod europe;
/// Australian calendar.
pub mod oceania;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::date::Weekday;

/// How a fixed-date holiday falling on a weekend is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// Not moved.
    Actual,
    /// Saturday → preceding Friday, Sunday → following Monday.
    NearestWeekday,
    /// Saturday or Sunday → following Monday.
    NextMonday,
    /// Boxing-day rule: moved past a weekend and past an observed Christmas
    /// (Saturday/Sunday → +2 days, Monday → Tuesday).
    AfterChristmas,
    /// A Sunday holiday is observed the given number of days later
    /// (Japanese *furikae kyūjitsu*).
    SundayForward(u8),
}

/// Date rule of a holiday within a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// A fixed month/day, possibly moved off weekends.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of month.
        day: u8,
        /// Weekend observance.
        observance: Observance,
    },
    /// The n-th occurrence of a weekday in a month.
    NthWeekday {
        /// Month (1–12).
        month: u8,
        /// Weekday.
        weekday: Weekday,
        /// Occurrence (1-based).
        nth: u8,
    },
    /// The last occurrence of a weekday in a month.
    LastWeekday {
        /// Month (1–12).
        month: u8,
        /// Weekday.
        weekday: Weekday,
    },
    /// The last given weekday on or before a month/day (e.g. Victoria Day).
    WeekdayOnOrBefore {
        /// Month (1–12).
        month: u8,
        /// Day of month.
        day: u8,
        /// Weekday.
        weekday: Weekday,
    },
    /// Offset in days from Easter Sunday (Good Friday = −2).
    Easter(i32),
    /// The March (vernal) or September (autumnal) equinox day.
    Equinox {
        /// Month, 3 or 9.
        month: u8,
        /// Weekend observance.
        observance: Observance,
    },
}

/// A named holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    /// Holiday name.
    pub name: &'static str,
    /// Date rule.
    pub rule: HolidayRule,
    /// First year the holiday is observed, if not always.
    pub since: Option<u16>,
    /// Last year the holiday is observed, if it was discontinued.
    pub until: Option<u16>,
}

impl Holiday {
    /// A holiday observed in every year.
    pub const fn new(name: &'static str, rule: HolidayRule) -> Self {
        Self {
            name,
            rule,
            since: None,
            until: None,
        }
    }

    /// A holiday observed from `year` onwards.
    pub const fn since(name: &'static str, rule: HolidayRule, year: u16) -> Self {
        Self {
            name,
            rule,
            since: Some(year),
            until: None,
        }
    }

    /// A holiday observed from `first` through `last`.
    pub const fn between(name: &'static str, rule: HolidayRule, first: u16, last: u16) -> Self {
        Self {
            name,
            rule,
            since: Some(first),
            until: Some(last),
        }
    }

    /// The observed date of this holiday for `year`, if it exists that year.
    pub fn observed_in(&self, year: u16) -> Option<Date> {
        if self.since.is_some_and(|first| year < first)
            || self.until.is_some_and(|last| year > last)
        {
            return None;
        }
        match self.rule {
            HolidayRule::Fixed {
                month,
                day,
                observance,
            } => {
                let date = Date::from_ymd(year, month, day).ok()?;
                Some(observe(date, observance))
            }
            HolidayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => Date::nth_weekday(nth, weekday, year, month).ok(),
            HolidayRule::LastWeekday { month, weekday } => {
                Date::last_weekday(weekday, year, month).ok()
            }
            HolidayRule::WeekdayOnOrBefore {
                month,
                day,
                weekday,
            } => {
                let anchor = Date::from_ymd(year, month, day).ok()?;
                Some(anchor.weekday_on_or_before(weekday))
            }
            HolidayRule::Easter(offset) => easter_sunday(year).map(|e| e + offset),
            HolidayRule::Equinox { month, observance } => {
                let date = Date::from_ymd(year, month, equinox_day(year, month)?).ok()?;
                Some(observe(date, observance))
            }
        }
    }
}

// ── Table shorthands ─────────────────────────────────────────────────────────

pub(crate) const fn fixed(month: u8, day: u8, observance: Observance) -> HolidayRule {
    HolidayRule::Fixed {
        month,
        day,
        observance,
    }
}

pub(crate) const fn on(month: u8, day: u8) -> HolidayRule {
    fixed(month, day, Observance::Actual)
}

pub(crate) const fn nth(nth: u8, weekday: Weekday, month: u8) -> HolidayRule {
    HolidayRule::NthWeekday {
        month,
        weekday,
        nth,
    }
}

pub(crate) const fn last(weekday: Weekday, month: u8) -> HolidayRule {
    HolidayRule::LastWeekday { month, weekday }
}

fn observe(date: Date, observance: Observance) -> Date {
    let w = date.weekday();
    match observance {
        Observance::Actual => date,
        Observance::NearestWeekday => match w {
            Weekday::Saturday => date - 1,
            Weekday::Sunday => date + 1,
            _ => date,
        },
        Observance::NextMonday => match w {
            Weekday::Saturday => date + 2,
            Weekday::Sunday => date + 1,
            _ => date,
        },
        Observance::AfterChristmas => match w {
            Weekday::Saturday | Weekday::Sunday => date + 2,
            Weekday::Monday => date + 1,
            _ => date,
        },
        Observance::SundayForward(days) => match w {
            Weekday::Sunday => date + i32::from(days),
            _ => date,
        },
    }
}

/// Approximate equinox day of month, valid for 1980–2099.
fn equinox_day(year: u16, month: u8) -> Option<u8> {
    let base = match month {
        3 => 20.8431,
        9 => 23.2488,
        _ => return None,
    };
    let y = f64::from(year) - 1980.0;
    Some((base + 0.242194 * y - (y / 4.0).floor()) as u8)
}

/// Easter Sunday of `year` (anonymous Gregorian algorithm).
pub fn easter_sunday(year: u16) -> Option<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8).ok()
}

/// A country calendar made of weekend days plus a table of holidays.
#[derive(Debug, Clone, Copy)]
pub struct HolidayCalendar {
    name: &'static str,
    holidays: &'static [Holiday],
}

impl HolidayCalendar {
    /// Create a calendar from a static holiday table.
    pub const fn new(name: &'static str, holidays: &'static [Holiday]) -> Self {
        Self { name, holidays }
    }

    /// The holiday table.
    pub fn holidays(&self) -> &'static [Holiday] {
        self.holidays
    }

    /// Name of the holiday observed on `date`, if any.
    ///
    /// Observed dates of the following year are checked too, because a
    /// January 1st holiday may be observed on December 31st.
    pub fn holiday_name(&self, date: Date) -> Option<&'static str> {
        let year = date.year();
        self.holidays
            .iter()
            .find(|h| {
                h.observed_in(year) == Some(date)
                    || (year < 2199 && h.observed_in(year + 1) == Some(date))
            })
            .map(|h| h.name)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && self.holiday_name(date).is_none()
    }
}
