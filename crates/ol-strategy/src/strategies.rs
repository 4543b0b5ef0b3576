//! Templates for common named strategies.

use crate::models::{Expiration, StrategyLeg};
use ol_core::{validate, Action, Error, Price, Result};
use ol_pricing::OptionType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A well-known option strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedStrategy {
    /// Long stock, short call.
    CoveredCall,
    /// Long stock, long put.
    MarriedPut,
    /// Long call, short call at a higher strike.
    BullCall,
    /// Long put, short call at a higher strike.
    ProtectiveCollar,
}

impl fmt::Display for NamedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NamedStrategy::CoveredCall => "covered-call",
            NamedStrategy::MarriedPut => "married-put",
            NamedStrategy::BullCall => "bull-call",
            NamedStrategy::ProtectiveCollar => "protective-collar",
        })
    }
}

impl FromStr for NamedStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "covered-call" => Ok(NamedStrategy::CoveredCall),
            "married-put" => Ok(NamedStrategy::MarriedPut),
            "bull-call" => Ok(NamedStrategy::BullCall),
            "protective-collar" => Ok(NamedStrategy::ProtectiveCollar),
            other => Err(Error::Validation(format!("strategy '{other}' is not defined"))),
        }
    }
}

fn default_quantity() -> u32 {
    100
}

/// Parameters shared by the named strategy templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyTemplate {
    /// Strike of the first option leg.
    pub strike: Price,
    /// Premium applied to every option leg.
    pub premium: Price,
    /// Expiration of every option leg.
    #[serde(default)]
    pub expiration: Option<Expiration>,
    /// Quantity of every leg.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Prior position applied to every leg.
    #[serde(default)]
    pub prior_position: Option<Price>,
    /// Strike of the short call in two-strike strategies.
    #[serde(default)]
    pub higher_strike: Option<Price>,
}

impl StrategyTemplate {
    /// A template with 100 shares per leg and no expiration, prior position
    /// or second strike.
    pub fn new(strike: Price, premium: Price) -> Self {
        Self {
            strike,
            premium,
            expiration: None,
            quantity: default_quantity(),
            prior_position: None,
            higher_strike: None,
        }
    }

    fn stock(&self, action: Action) -> StrategyLeg {
        self.finish(StrategyLeg::stock(action, self.quantity), false)
    }

    fn option(&self, option_type: OptionType, action: Action, strike: Price) -> StrategyLeg {
        let leg = StrategyLeg::option(option_type, action, strike, self.premium, self.quantity);
        self.finish(leg, true)
    }

    fn finish(&self, mut leg: StrategyLeg, is_option: bool) -> StrategyLeg {
        if let Some(prior) = self.prior_position {
            leg = leg.with_prior_position(prior);
        }
        match self.expiration {
            Some(expiration) if is_option => leg.with_expiration(expiration),
            _ => leg,
        }
    }

    fn higher_strike(&self, named: NamedStrategy) -> Result<Price> {
        match self.higher_strike {
            Some(k) => {
                validate!(
                    k >= self.strike,
                    "{named}: higher strike {k} is below strike {}",
                    self.strike
                );
                Ok(k)
            }
            None => Err(Error::Validation(format!(
                "{named}: a higher strike must be provided"
            ))),
        }
    }
}

/// Legs of a named strategy.
///
/// # Errors
/// [`Error::Validation`] if a two-strike strategy has no higher strike or
/// it lies below the strike.
pub fn generate_strategy(
    named: NamedStrategy,
    template: &StrategyTemplate,
) -> Result<Vec<StrategyLeg>> {
    let t = template;
    Ok(match named {
        NamedStrategy::CoveredCall => vec![
            t.stock(Action::Buy),
            t.option(OptionType::Call, Action::Sell, t.strike),
        ],
        NamedStrategy::MarriedPut => vec![
            t.stock(Action::Buy),
            t.option(OptionType::Put, Action::Buy, t.strike),
        ],
        NamedStrategy::BullCall => {
            let upper = t.higher_strike(named)?;
            vec![
                t.option(OptionType::Call, Action::Buy, t.strike),
                t.option(OptionType::Call, Action::Sell, upper),
            ]
        }
        NamedStrategy::ProtectiveCollar => {
            let upper = t.higher_strike(named)?;
            vec![
                t.option(OptionType::Put, Action::Buy, t.strike),
                t.option(OptionType::Call, Action::Sell, upper),
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionLeg;
    use ol_time::Date;

    fn option(leg: &StrategyLeg) -> &OptionLeg {
        match leg {
            StrategyLeg::Option(o) => o,
            other => panic!("expected an option leg, got {other:?}"),
        }
    }

    #[test]
    fn covered_call() {
        let expiration = Expiration::Date(Date::from_ymd(2023, 2, 17).unwrap());
        let template = StrategyTemplate {
            expiration: Some(expiration),
            ..StrategyTemplate::new(185.0, 4.1)
        };
        let legs = generate_strategy(NamedStrategy::CoveredCall, &template).unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0], StrategyLeg::stock(Action::Buy, 100));
        let call = option(&legs[1]);
        assert_eq!(call.option_type, OptionType::Call);
        assert_eq!(call.action, Action::Sell);
        assert_eq!(call.strike, 185.0);
        assert_eq!(call.expiration, Some(expiration));
    }

    #[test]
    fn married_put_carries_prior_position() {
        let template = StrategyTemplate {
            prior_position: Some(2.5),
            quantity: 10,
            ..StrategyTemplate::new(95.0, 1.8)
        };
        let legs = generate_strategy(NamedStrategy::MarriedPut, &template).unwrap();
        assert_eq!(legs[0], StrategyLeg::stock(Action::Buy, 10).with_prior_position(2.5));
        let put = option(&legs[1]);
        assert_eq!((put.option_type, put.action), (OptionType::Put, Action::Buy));
        assert_eq!(put.prior_position, Some(2.5));
        assert_eq!(put.quantity, 10);
    }

    #[test]
    fn two_strike_strategies() {
        let template = StrategyTemplate {
            higher_strike: Some(110.0),
            ..StrategyTemplate::new(100.0, 3.0)
        };
        let bull = generate_strategy(NamedStrategy::BullCall, &template).unwrap();
        assert_eq!(option(&bull[0]).strike, 100.0);
        assert_eq!(option(&bull[1]).strike, 110.0);
        assert_eq!(option(&bull[1]).action, Action::Sell);

        let collar = generate_strategy(NamedStrategy::ProtectiveCollar, &template).unwrap();
        assert_eq!(option(&collar[0]).option_type, OptionType::Put);
        assert_eq!(option(&collar[1]).option_type, OptionType::Call);
    }

    #[test]
    fn higher_strike_is_required() {
        let missing = StrategyTemplate::new(100.0, 3.0);
        let below = StrategyTemplate {
            higher_strike: Some(90.0),
            ..missing.clone()
        };
        for named in [NamedStrategy::BullCall, NamedStrategy::ProtectiveCollar] {
            assert!(matches!(generate_strategy(named, &missing), Err(Error::Validation(_))));
            assert!(matches!(generate_strategy(named, &below), Err(Error::Validation(_))));
        }
    }

    #[test]
    fn names() {
        assert_eq!(
            "protective-collar".parse::<NamedStrategy>().unwrap(),
            NamedStrategy::ProtectiveCollar
        );
        assert!("iron-condor".parse::<NamedStrategy>().is_err());
        assert_eq!(
            serde_json::to_string(&NamedStrategy::BullCall).unwrap(),
            "\"bull-call\""
        );
    }
}
