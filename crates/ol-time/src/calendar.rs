//! `Calendar` trait and the non-business-day count.
//!
//! A calendar knows which dates are business days. The strategy engine uses
//! it to turn a calendar-day span into a trading-day count when
//! non-business days are discarded.

use crate::date::Date;
use ol_core::errors::{Error, Result};

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }
}

/// Count the non-business days in `[start, end)`.
///
/// The start date is included and the end date excluded, so the number of
/// trading days in the span is `(end - start) - non_business_days(..)`.
///
/// # Errors
/// Returns [`Error::Date`] if `end < start`.
pub fn non_business_days(calendar: &dyn Calendar, start: Date, end: Date) -> Result<i32> {
    if end < start {
        return Err(Error::Date(format!(
            "end date {end} precedes start date {start}"
        )));
    }
    let mut count = 0;
    let mut d = start;
    while d < end {
        if calendar.is_holiday(d) {
            count += 1;
        }
        d += 1;
    }
    Ok(count)
}

/// A null calendar — treats every day as a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
