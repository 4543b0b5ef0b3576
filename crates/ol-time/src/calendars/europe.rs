//! Holiday tables for European countries.

use super::{fixed, last, nth, on, Holiday, HolidayCalendar, HolidayRule, Observance};
use crate::date::Weekday::Monday;

const GOOD_FRIDAY: HolidayRule = HolidayRule::Easter(-2);
const EASTER_MONDAY: HolidayRule = HolidayRule::Easter(1);
const ASCENSION: HolidayRule = HolidayRule::Easter(39);
const WHIT_MONDAY: HolidayRule = HolidayRule::Easter(50);

// ── United Kingdom ────────────────────────────────────────────────────────────

const UNITED_KINGDOM: &[Holiday] = &[
    Holiday::new("New Year's Day", fixed(1, 1, Observance::NextMonday)),
    Holiday::new("Good Friday", GOOD_FRIDAY),
    Holiday::new("Easter Monday", EASTER_MONDAY),
    Holiday::new("May Day", nth(1, Monday, 5)),
    Holiday::new("Spring Bank Holiday", last(Monday, 5)),
    Holiday::new("Late Summer Bank Holiday", last(Monday, 8)),
    Holiday::new("Christmas Day", fixed(12, 25, Observance::NextMonday)),
    Holiday::new("Boxing Day", fixed(12, 26, Observance::AfterChristmas)),
];

/// England and Wales bank holidays (one-off royal holidays excluded).
pub const fn united_kingdom() -> HolidayCalendar {
    HolidayCalendar::new("United Kingdom", UNITED_KINGDOM)
}

// ── France ────────────────────────────────────────────────────────────────────

const FRANCE: &[Holiday] = &[
    Holiday::new("Jour de l'an", on(1, 1)),
    Holiday::new("Lundi de Pâques", EASTER_MONDAY),
    Holiday::new("Fête du Travail", on(5, 1)),
    Holiday::new("Fête de la Victoire", on(5, 8)),
    Holiday::new("Ascension", ASCENSION),
    Holiday::new("Lundi de Pentecôte", WHIT_MONDAY),
    Holiday::new("Fête nationale", on(7, 14)),
    Holiday::new("Assomption", on(8, 15)),
    Holiday::new("Toussaint", on(11, 1)),
    Holiday::new("Armistice", on(11, 11)),
    Holiday::new("Noël", on(12, 25)),
];

/// French public holidays.
pub const fn france() -> HolidayCalendar {
    HolidayCalendar::new("France", FRANCE)
}

// ── Germany ───────────────────────────────────────────────────────────────────

const GERMANY: &[Holiday] = &[
    Holiday::new("Neujahr", on(1, 1)),
    Holiday::new("Karfreitag", GOOD_FRIDAY),
    Holiday::new("Ostermontag", EASTER_MONDAY),
    Holiday::new("Erster Mai", on(5, 1)),
    Holiday::new("Christi Himmelfahrt", ASCENSION),
    Holiday::new("Pfingstmontag", WHIT_MONDAY),
    Holiday::since("Tag der Deutschen Einheit", on(10, 3), 1990),
    Holiday::new("Erster Weihnachtstag", on(12, 25)),
    Holiday::new("Zweiter Weihnachtstag", on(12, 26)),
];

/// German nationwide public holidays.
pub const fn germany() -> HolidayCalendar {
    HolidayCalendar::new("Germany", GERMANY)
}

// ── Italy ─────────────────────────────────────────────────────────────────────

const ITALY: &[Holiday] = &[
    Holiday::new("Capodanno", on(1, 1)),
    Holiday::new("Epifania", on(1, 6)),
    Holiday::new("Lunedì dell'Angelo", EASTER_MONDAY),
    Holiday::new("Festa della Liberazione", on(4, 25)),
    Holiday::new("Festa dei Lavoratori", on(5, 1)),
    Holiday::new("Festa della Repubblica", on(6, 2)),
    Holiday::new("Ferragosto", on(8, 15)),
    Holiday::new("Ognissanti", on(11, 1)),
    Holiday::new("Immacolata Concezione", on(12, 8)),
    Holiday::new("Natale", on(12, 25)),
    Holiday::new("Santo Stefano", on(12, 26)),
];

/// Italian national holidays.
pub const fn italy() -> HolidayCalendar {
    HolidayCalendar::new("Italy", ITALY)
}

// ── Russia ────────────────────────────────────────────────────────────────────

const TRANSFERRED: Observance = Observance::NextMonday;

const RUSSIA: &[Holiday] = &[
    Holiday::new("New Year Holidays", fixed(1, 1, TRANSFERRED)),
    Holiday::new("New Year Holidays", fixed(1, 2, TRANSFERRED)),
    Holiday::new("New Year Holidays", fixed(1, 3, TRANSFERRED)),
    Holiday::new("New Year Holidays", fixed(1, 4, TRANSFERRED)),
    Holiday::new("New Year Holidays", fixed(1, 5, TRANSFERRED)),
    Holiday::new("Orthodox Christmas", fixed(1, 7, TRANSFERRED)),
    Holiday::new("Defender of the Fatherland Day", fixed(2, 23, TRANSFERRED)),
    Holiday::new("International Women's Day", fixed(3, 8, TRANSFERRED)),
    Holiday::new("Spring and Labour Day", fixed(5, 1, TRANSFERRED)),
    Holiday::new("Victory Day", fixed(5, 9, TRANSFERRED)),
    Holiday::new("Russia Day", fixed(6, 12, TRANSFERRED)),
    Holiday::since("Unity Day", fixed(11, 4, TRANSFERRED), 2005),
];

/// Russian public holidays, moved to Monday when they fall on a weekend.
///
/// Government decrees that shuffle weekends each year are not modelled.
pub const fn russia() -> HolidayCalendar {
    HolidayCalendar::new("Russia", RUSSIA)
}
