//! Option type and terminal payoff.

use ol_core::{Error, Price, Real};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Terminal payoff per share at underlying price `s` for strike `k`.
    ///
    /// Written as `(d + |d|) / 2` so that a whole price array evaluates
    /// without branching.
    #[inline]
    pub fn payoff(self, s: Price, k: Price) -> Price {
        match self {
            OptionType::Call => (s - k + (s - k).abs()) / 2.0,
            OptionType::Put => (k - s + (k - s).abs()) / 2.0,
        }
    }

    /// Whether an option with strike `k` is in the money at price `s`.
    pub fn is_in_the_money(self, s: Price, k: Price) -> bool {
        match self {
            OptionType::Call => s > k,
            OptionType::Put => s < k,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(Error::Validation(format!(
                "option type must be 'call' or 'put', got '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payoffs() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    }

    #[test]
    fn moneyness() {
        assert!(OptionType::Call.is_in_the_money(101.0, 100.0));
        assert!(!OptionType::Call.is_in_the_money(100.0, 100.0));
        assert!(OptionType::Put.is_in_the_money(99.0, 100.0));
    }

    #[test]
    fn parse_and_serde() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(Error::Validation(_))
        ));
        assert_eq!(serde_json::to_string(&OptionType::Put).unwrap(), "\"put\"");
        let t: OptionType = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(t, OptionType::Call);
    }
}
