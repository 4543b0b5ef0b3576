//! Country codes and their holiday calendars.
//!
//! Countries are written as ISO 3166 alpha-2 codes (`"US"`, `"GB"`, …) or
//! by English name (`"Canada"`, `"South Korea"`, …). `"UK"` is accepted as
//! an alias of `"GB"`. Parsing is case-insensitive; serialization writes the
//! ISO code.

use crate::calendars::{america, asia, europe, oceania, HolidayCalendar};
use ol_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A country whose public holidays are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Country {
    /// United States.
    #[default]
    UnitedStates,
    /// Canada.
    Canada,
    /// Mexico.
    Mexico,
    /// Brazil.
    Brazil,
    /// China.
    China,
    /// India.
    India,
    /// South Korea.
    SouthKorea,
    /// Russia.
    Russia,
    /// Japan.
    Japan,
    /// United Kingdom.
    UnitedKingdom,
    /// France.
    France,
    /// Germany.
    Germany,
    /// Italy.
    Italy,
    /// Australia.
    Australia,
}

impl Country {
    /// All supported countries.
    pub const ALL: [Country; 14] = [
        Country::UnitedStates,
        Country::Canada,
        Country::Mexico,
        Country::Brazil,
        Country::China,
        Country::India,
        Country::SouthKorea,
        Country::Russia,
        Country::Japan,
        Country::UnitedKingdom,
        Country::France,
        Country::Germany,
        Country::Italy,
        Country::Australia,
    ];

    /// ISO 3166 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::UnitedStates => "US",
            Country::Canada => "CA",
            Country::Mexico => "MX",
            Country::Brazil => "BR",
            Country::China => "CN",
            Country::India => "IN",
            Country::SouthKorea => "KR",
            Country::Russia => "RU",
            Country::Japan => "JP",
            Country::UnitedKingdom => "GB",
            Country::France => "FR",
            Country::Germany => "DE",
            Country::Italy => "IT",
            Country::Australia => "AU",
        }
    }

    /// English name, as written in strategy inputs.
    pub fn name(&self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::Canada => "Canada",
            Country::Mexico => "Mexico",
            Country::Brazil => "Brazil",
            Country::China => "China",
            Country::India => "India",
            Country::SouthKorea => "South Korea",
            Country::Russia => "Russia",
            Country::Japan => "Japan",
            Country::UnitedKingdom => "United Kingdom",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Italy => "Italy",
            Country::Australia => "Australia",
        }
    }

    /// The holiday calendar of this country.
    pub fn calendar(&self) -> HolidayCalendar {
        match self {
            Country::UnitedStates => america::united_states(),
            Country::Canada => america::canada(),
            Country::Mexico => america::mexico(),
            Country::Brazil => america::brazil(),
            Country::China => asia::china(),
            Country::India => asia::india(),
            Country::SouthKorea => asia::south_korea(),
            Country::Russia => europe::russia(),
            Country::Japan => asia::japan(),
            Country::UnitedKingdom => europe::united_kingdom(),
            Country::France => europe::france(),
            Country::Germany => europe::germany(),
            Country::Italy => europe::italy(),
            Country::Australia => oceania::australia(),
        }
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("UK") {
            return Ok(Country::UnitedKingdom);
        }
        Country::ALL
            .into_iter()
            .find(|c| key.eq_ignore_ascii_case(c.code()) || key.eq_ignore_ascii_case(c.name()))
            .ok_or_else(|| Error::Validation(format!("unsupported country '{s}'")))
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
