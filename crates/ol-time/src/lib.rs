//! # ol-time
//!
//! Dates, weekdays, holiday calendars, and the business-day count used to
//! convert calendar spans into trading-day horizons.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait, built-in calendars, and non-business-day counting.
pub mod calendar;

/// Rule-based country holiday calendars.
pub mod calendars;

/// Country codes accepted by the strategy inputs.
pub mod country;

/// `Date` and `Weekday` types.
pub mod date;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{non_business_days, Calendar, NullCalendar, WeekendsOnly};
pub use calendars::HolidayCalendar;
pub use country::Country;
pub use date::{Date, Weekday};
