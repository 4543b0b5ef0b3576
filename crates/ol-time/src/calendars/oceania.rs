//! Holiday table for Australia.

use super::{fixed, on, Holiday, HolidayCalendar, HolidayRule, Observance};

const AUSTRALIA: &[Holiday] = &[
    Holiday::new("New Year's Day", fixed(1, 1, Observance::NextMonday)),
    Holiday::new("Australia Day", fixed(1, 26, Observance::NextMonday)),
    Holiday::new("Good Friday", HolidayRule::Easter(-2)),
    Holiday::new("Easter Monday", HolidayRule::Easter(1)),
    Holiday::new("ANZAC Day", on(4, 25)),
    Holiday::new("Christmas Day", fixed(12, 25, Observance::NextMonday)),
    Holiday::new("Boxing Day", fixed(12, 26, Observance::AfterChristmas)),
];

/// Australian national public holidays (state holidays excluded).
pub const fn australia() -> HolidayCalendar {
    HolidayCalendar::new("Australia", AUSTRALIA)
}
