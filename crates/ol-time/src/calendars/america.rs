//! Holiday tables for the Americas.

use super::{fixed, last, nth, on, Holiday, HolidayCalendar, HolidayRule, Observance};
use crate::date::Weekday::{Monday, Thursday};

// ── United States ─────────────────────────────────────────────────────────────

const UNITED_STATES: &[Holiday] = &[
    Holiday::new("New Year's Day", fixed(1, 1, Observance::NearestWeekday)),
    Holiday::since("Martin Luther King Jr. Day", nth(3, Monday, 1), 1983),
    Holiday::new("Washington's Birthday", nth(3, Monday, 2)),
    Holiday::new("Memorial Day", last(Monday, 5)),
    Holiday::since(
        "Juneteenth National Independence Day",
        fixed(6, 19, Observance::NearestWeekday),
        2021,
    ),
    Holiday::new("Independence Day", fixed(7, 4, Observance::NearestWeekday)),
    Holiday::new("Labor Day", nth(1, Monday, 9)),
    Holiday::new("Columbus Day", nth(2, Monday, 10)),
    Holiday::new("Veterans Day", fixed(11, 11, Observance::NearestWeekday)),
    Holiday::new("Thanksgiving", nth(4, Thursday, 11)),
    Holiday::new("Christmas Day", fixed(12, 25, Observance::NearestWeekday)),
];

/// United States federal holidays.
pub const fn united_states() -> HolidayCalendar {
    HolidayCalendar::new("United States", UNITED_STATES)
}

// ── Canada ────────────────────────────────────────────────────────────────────

const CANADA: &[Holiday] = &[
    Holiday::new("New Year's Day", fixed(1, 1, Observance::NextMonday)),
    Holiday::new("Good Friday", HolidayRule::Easter(-2)),
    Holiday::new(
        "Victoria Day",
        HolidayRule::WeekdayOnOrBefore {
            month: 5,
            day: 24,
            weekday: Monday,
        },
    ),
    Holiday::new("Canada Day", fixed(7, 1, Observance::NextMonday)),
    Holiday::new("Labour Day", nth(1, Monday, 9)),
    Holiday::since(
        "National Day for Truth and Reconciliation",
        fixed(9, 30, Observance::NextMonday),
        2021,
    ),
    Holiday::new("Thanksgiving", nth(2, Monday, 10)),
    Holiday::new("Christmas Day", fixed(12, 25, Observance::NextMonday)),
    Holiday::new("Boxing Day", fixed(12, 26, Observance::AfterChristmas)),
];

/// Canadian federal statutory holidays.
pub const fn canada() -> HolidayCalendar {
    HolidayCalendar::new("Canada", CANADA)
}

// ── Mexico ────────────────────────────────────────────────────────────────────

const MEXICO: &[Holiday] = &[
    Holiday::new("Año Nuevo", on(1, 1)),
    Holiday::since("Día de la Constitución", nth(1, Monday, 2), 2006),
    Holiday::since("Natalicio de Benito Juárez", nth(3, Monday, 3), 2006),
    Holiday::new("Día del Trabajo", on(5, 1)),
    Holiday::new("Día de la Independencia", on(9, 16)),
    Holiday::since("Día de la Revolución", nth(3, Monday, 11), 2006),
    Holiday::new("Navidad", on(12, 25)),
];

/// Mexican statutory rest days.
pub const fn mexico() -> HolidayCalendar {
    HolidayCalendar::new("Mexico", MEXICO)
}

// ── Brazil ────────────────────────────────────────────────────────────────────

const BRAZIL: &[Holiday] = &[
    Holiday::new("Confraternização Universal", on(1, 1)),
    Holiday::new("Sexta-feira Santa", HolidayRule::Easter(-2)),
    Holiday::new("Tiradentes", on(4, 21)),
    Holiday::new("Dia do Trabalhador", on(5, 1)),
    Holiday::new("Independência do Brasil", on(9, 7)),
    Holiday::new("Nossa Senhora Aparecida", on(10, 12)),
    Holiday::new("Finados", on(11, 2)),
    Holiday::new("Proclamação da República", on(11, 15)),
    Holiday::since("Dia Nacional de Zumbi e da Consciência Negra", on(11, 20), 2024),
    Holiday::new("Natal", on(12, 25)),
];

/// Brazilian national holidays.
pub const fn brazil() -> HolidayCalendar {
    HolidayCalendar::new("Brazil", BRAZIL)
}
