//! Strategy inputs, legs and results.
//!
//! Inputs deserialize from JSON. A leg is written with a `"type"` tag of
//! `"stock"`, `"call"`, `"put"` or `"closed"`:
//!
//! ```json
//! {"type": "call", "strike": 185.0, "premium": 4.1, "n": 100,
//!  "action": "sell", "expiration": "2023-02-17"}
//! ```
//!
//! The horizon is either a pair of dates (`start_date`, `target_date`) or a
//! plain trading-day count (`days_to_target`); option expirations must use
//! the same kind.

use ol_core::{validate, Action, Error, Price, Probability, Rate, Real, Result, Time, Volatility};
use ol_pricing::OptionType;
use ol_time::{Country, Date};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ── Distribution ─────────────────────────────────────────────────────────────

/// Statistical model of the terminal stock price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Lognormal prices (geometric Brownian motion).
    #[default]
    BlackScholes,
    /// Normally distributed simple return.
    Normal,
    /// Laplace-distributed log return.
    Laplace,
    /// Caller-supplied terminal price samples.
    Array,
}

impl Distribution {
    /// Whether probabilities come from a closed-form density.
    pub fn is_analytic(&self) -> bool {
        !matches!(self, Distribution::Array)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Distribution::BlackScholes => "black-scholes",
            Distribution::Normal => "normal",
            Distribution::Laplace => "laplace",
            Distribution::Array => "array",
        })
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black-scholes" => Ok(Distribution::BlackScholes),
            "normal" => Ok(Distribution::Normal),
            "laplace" => Ok(Distribution::Laplace),
            "array" => Ok(Distribution::Array),
            other => Err(Error::Validation(format!("unknown distribution '{other}'"))),
        }
    }
}

/// Market parameters shared by the sampler and the probability models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketModel {
    /// Spot price.
    pub spot: Price,
    /// Annualized volatility.
    pub volatility: Volatility,
    /// Annualized risk-free rate.
    pub rate: Rate,
    /// Annualized dividend yield.
    pub dividend_yield: Rate,
    /// Time to the target date in years.
    pub time: Time,
}

impl MarketModel {
    /// Log-space drift `(r − q − σ²/2)τ`.
    pub fn log_drift(&self) -> Real {
        (self.rate - self.dividend_yield - 0.5 * self.volatility * self.volatility) * self.time
    }

    /// Standard deviation of the log return, `σ√τ`.
    pub fn log_std_dev(&self) -> Real {
        self.volatility * self.time.sqrt()
    }
}

// ── Legs ──────────────────────────────────────────────────────────────────────

/// Option expiration: a date, or a number of trading days from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expiration {
    /// Expiration date.
    Date(Date),
    /// Trading days to maturity.
    Days(u32),
}

/// A stock position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLeg {
    /// Number of shares.
    #[serde(alias = "n")]
    pub quantity: u32,
    /// Buy or sell.
    pub action: Action,
    /// Price of a previously opened position. Positive: the position is
    /// still open at that price. Negative: the position is being closed.
    #[serde(
        default,
        alias = "prevpos",
        alias = "prev_pos",
        skip_serializing_if = "Option::is_none"
    )]
    pub prior_position: Option<Price>,
}

/// An option position.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionLeg {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Price,
    /// Current option premium per share.
    pub premium: Price,
    /// Number of contracts' underlying shares.
    pub quantity: u32,
    /// Buy or sell.
    pub action: Action,
    /// Expiration; defaults to the target date (or day count).
    pub expiration: Option<Expiration>,
    /// Premium of a previously opened position. Positive: the position is
    /// still open at that premium. Negative: the position is being closed.
    pub prior_position: Option<Price>,
}

/// A previously opened position of unspecified composition being closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedLeg {
    /// Total realized profit (positive) or loss (negative).
    #[serde(alias = "prevpos", alias = "prev_pos")]
    pub realized_value: Real,
}

/// One leg of a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LegRecord", into = "LegRecord")]
pub enum StrategyLeg {
    /// Stock.
    Stock(StockLeg),
    /// Call or put.
    Option(OptionLeg),
    /// Closed position with a fixed realized value.
    Closed(ClosedLeg),
}

impl StrategyLeg {
    /// A stock leg with no prior position.
    pub fn stock(action: Action, quantity: u32) -> Self {
        StrategyLeg::Stock(StockLeg {
            quantity,
            action,
            prior_position: None,
        })
    }

    /// An option leg expiring on the target, with no prior position.
    pub fn option(
        option_type: OptionType,
        action: Action,
        strike: Price,
        premium: Price,
        quantity: u32,
    ) -> Self {
        StrategyLeg::Option(OptionLeg {
            option_type,
            strike,
            premium,
            quantity,
            action,
            expiration: None,
            prior_position: None,
        })
    }

    /// A closed position.
    pub fn closed(realized_value: Real) -> Self {
        StrategyLeg::Closed(ClosedLeg { realized_value })
    }

    /// Set the prior position of a stock or option leg.
    pub fn with_prior_position(mut self, price: Price) -> Self {
        match &mut self {
            StrategyLeg::Stock(s) => s.prior_position = Some(price),
            StrategyLeg::Option(o) => o.prior_position = Some(price),
            StrategyLeg::Closed(_) => {}
        }
        self
    }

    /// Set the expiration of an option leg.
    pub fn with_expiration(mut self, expiration: Expiration) -> Self {
        if let StrategyLeg::Option(o) = &mut self {
            o.expiration = Some(expiration);
        }
        self
    }

    /// `true` for a [`StrategyLeg::Closed`] leg.
    pub fn is_closed(&self) -> bool {
        matches!(self, StrategyLeg::Closed(_))
    }
}

/// Wire form of an option leg; the option type lives in the `"type"` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OptionTerms {
    strike: Price,
    premium: Price,
    #[serde(alias = "n")]
    quantity: u32,
    action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiration: Option<Expiration>,
    #[serde(
        default,
        alias = "prevpos",
        alias = "prev_pos",
        skip_serializing_if = "Option::is_none"
    )]
    prior_position: Option<Price>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum LegRecord {
    Stock(StockLeg),
    Call(OptionTerms),
    Put(OptionTerms),
    Closed(ClosedLeg),
}

impl From<LegRecord> for StrategyLeg {
    fn from(record: LegRecord) -> Self {
        let option = |option_type, t: OptionTerms| {
            StrategyLeg::Option(OptionLeg {
                option_type,
                strike: t.strike,
                premium: t.premium,
                quantity: t.quantity,
                action: t.action,
                expiration: t.expiration,
                prior_position: t.prior_position,
            })
        };
        match record {
            LegRecord::Stock(s) => StrategyLeg::Stock(s),
            LegRecord::Call(t) => option(OptionType::Call, t),
            LegRecord::Put(t) => option(OptionType::Put, t),
            LegRecord::Closed(c) => StrategyLeg::Closed(c),
        }
    }
}

impl From<StrategyLeg> for LegRecord {
    fn from(leg: StrategyLeg) -> Self {
        match leg {
            StrategyLeg::Stock(s) => LegRecord::Stock(s),
            StrategyLeg::Option(o) => {
                let terms = OptionTerms {
                    strike: o.strike,
                    premium: o.premium,
                    quantity: o.quantity,
                    action: o.action,
                    expiration: o.expiration,
                    prior_position: o.prior_position,
                };
                match o.option_type {
                    OptionType::Call => LegRecord::Call(terms),
                    OptionType::Put => LegRecord::Put(terms),
                }
            }
            StrategyLeg::Closed(c) => LegRecord::Closed(c),
        }
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// Time horizon of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Horizon {
    /// Calendar dates; non-business days may be discarded.
    Dates {
        /// Start of the analysis.
        start_date: Date,
        /// Date at which the strategy is evaluated.
        target_date: Date,
    },
    /// A plain number of trading days to the target.
    Days {
        /// Days remaining to the target.
        #[serde(alias = "days_to_target_date")]
        days_to_target: u32,
    },
}

fn default_nmc_prices() -> usize {
    100_000
}

fn default_true() -> bool {
    true
}

/// All inputs of a strategy analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyInputs {
    /// Spot price of the underlying.
    #[serde(alias = "stockprice")]
    pub stock_price: Price,
    /// Annualized volatility.
    pub volatility: Volatility,
    /// Annualized risk-free rate, in `(0, 0.2]`.
    #[serde(alias = "interestrate")]
    pub interest_rate: Rate,
    /// Annualized dividend yield.
    #[serde(default)]
    pub dividend_yield: Rate,
    /// Lower bound of the stock price domain.
    #[serde(alias = "minstock")]
    pub min_stock: Price,
    /// Upper bound of the stock price domain.
    #[serde(alias = "maxstock")]
    pub max_stock: Price,
    /// Strategy legs, in order.
    #[serde(alias = "strategy")]
    pub legs: Vec<StrategyLeg>,
    /// Profit target whose probability is reported.
    #[serde(default)]
    pub profit_target: Option<Real>,
    /// Loss limit whose probability is reported.
    #[serde(default)]
    pub loss_limit: Option<Real>,
    /// Commission per option leg.
    #[serde(default, alias = "opt_commission")]
    pub option_commission: Real,
    /// Commission per stock leg.
    #[serde(default)]
    pub stock_commission: Real,
    /// Time horizon.
    #[serde(flatten)]
    pub horizon: Horizon,
    /// Terminal price model.
    #[serde(default)]
    pub distribution: Distribution,
    /// Number of Monte Carlo terminal prices.
    #[serde(default = "default_nmc_prices")]
    pub nmc_prices: usize,
    /// Seed of the Monte Carlo sampler; fresh entropy when absent.
    #[serde(default)]
    pub mc_seed: Option<u64>,
    /// Compute Monte Carlo expectation statistics.
    #[serde(default)]
    pub compute_expectation: bool,
    /// Count only business days (252-day year) instead of calendar days.
    #[serde(default = "default_true")]
    pub discard_nonbusiness_days: bool,
    /// Country whose holidays are discarded.
    #[serde(default)]
    pub country: Country,
}

impl StrategyInputs {
    /// Parse inputs from JSON and validate them.
    ///
    /// # Errors
    /// [`Error::Json`] for malformed JSON (including unsupported country
    /// codes and unknown distributions), [`Error::Validation`] for
    /// inconsistent inputs.
    pub fn from_json(json: &str) -> Result<Self> {
        let inputs: StrategyInputs =
            serde_json::from_str(json).map_err(|e| Error::Json(e.to_string()))?;
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check every structural constraint on the inputs.
    ///
    /// # Errors
    /// [`Error::Validation`] describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        validate!(!self.legs.is_empty(), "no strategy legs provided");
        validate!(
            self.legs.iter().filter(|l| l.is_closed()).count() <= 1,
            "only one closed position is allowed"
        );
        validate!(
            self.stock_price > 0.0 && self.stock_price.is_finite(),
            "stock price must be positive, got {}",
            self.stock_price
        );
        validate!(
            self.volatility >= 0.0 && self.volatility.is_finite(),
            "volatility must be non-negative, got {}",
            self.volatility
        );
        validate!(
            self.interest_rate > 0.0 && self.interest_rate <= 0.2,
            "interest rate must be in (0, 0.2], got {}",
            self.interest_rate
        );
        validate!(
            self.dividend_yield >= 0.0 && self.dividend_yield.is_finite(),
            "dividend yield must be non-negative, got {}",
            self.dividend_yield
        );
        validate!(
            self.min_stock.is_finite()
                && self.max_stock.is_finite()
                && self.min_stock < self.max_stock,
            "stock price domain [{}, {}] is empty",
            self.min_stock,
            self.max_stock
        );
        validate!(
            self.option_commission >= 0.0 && self.stock_commission >= 0.0,
            "commissions must be non-negative"
        );
        validate!(
            self.distribution == Distribution::Array
                || !self.compute_expectation
                || self.nmc_prices > 0,
            "nmc_prices must be positive to compute expectations"
        );
        for value in [self.profit_target, self.loss_limit].into_iter().flatten() {
            validate!(value.is_finite(), "profit target and loss limit must be finite");
        }

        match self.horizon {
            Horizon::Dates {
                start_date,
                target_date,
            } => validate!(
                start_date < target_date,
                "start date {start_date} must precede target date {target_date}"
            ),
            Horizon::Days { days_to_target } => validate!(
                days_to_target > 0,
                "days to target must be positive"
            ),
        }

        for (i, leg) in self.legs.iter().enumerate() {
            match leg {
                StrategyLeg::Stock(s) => {
                    validate!(s.quantity > 0, "leg {i}: quantity must be positive");
                    if let Some(p) = s.prior_position {
                        validate!(p.is_finite(), "leg {i}: prior position must be finite");
                    }
                }
                StrategyLeg::Option(o) => self.validate_option(i, o)?,
                StrategyLeg::Closed(c) => validate!(
                    c.realized_value.is_finite(),
                    "leg {i}: realized value must be finite"
                ),
            }
        }
        Ok(())
    }

    fn validate_option(&self, i: usize, o: &OptionLeg) -> Result<()> {
        validate!(o.quantity > 0, "leg {i}: quantity must be positive");
        validate!(o.strike > 0.0, "leg {i}: strike must be positive, got {}", o.strike);
        validate!(o.premium > 0.0, "leg {i}: premium must be positive, got {}", o.premium);
        if let Some(p) = o.prior_position {
            validate!(p.is_finite(), "leg {i}: prior position must be finite");
        }
        match (self.horizon, o.expiration) {
            (_, None) => {}
            (Horizon::Dates { target_date, .. }, Some(Expiration::Date(expiration))) => validate!(
                expiration >= target_date,
                "leg {i}: expiration {expiration} precedes target date {target_date}"
            ),
            (Horizon::Days { days_to_target }, Some(Expiration::Days(days))) => validate!(
                days >= days_to_target,
                "leg {i}: {days} days to maturity is fewer than {days_to_target} days to target"
            ),
            (Horizon::Dates { .. }, Some(Expiration::Days(_))) => {
                return Err(Error::Validation(format!(
                    "leg {i}: expiration must be a date when the horizon uses dates"
                )));
            }
            (Horizon::Days { .. }, Some(Expiration::Date(_))) => {
                return Err(Error::Validation(format!(
                    "leg {i}: expiration must be a day count when the horizon uses days"
                )));
            }
        }
        Ok(())
    }

    /// The market model for a horizon of `time` years.
    pub fn market_model(&self, time: Time) -> MarketModel {
        MarketModel {
            spot: self.stock_price,
            volatility: self.volatility,
            rate: self.interest_rate,
            dividend_yield: self.dividend_yield,
            time,
        }
    }
}

// ── Outputs ───────────────────────────────────────────────────────────────────

/// A closed interval of terminal stock prices.
///
/// `low = 0.0` means the interval extends to the bottom of the price domain
/// and `high = +∞` that it is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitRange {
    /// Lower bound.
    pub low: Price,
    /// Upper bound; may be infinite.
    pub high: Price,
}

impl ProfitRange {
    /// Create a range.
    pub fn new(low: Price, high: Price) -> Self {
        Self { low, high }
    }

    /// Whether `price` lies in the closed interval.
    pub fn contains(&self, price: Price) -> bool {
        self.low <= price && price <= self.high
    }
}

impl Serialize for ProfitRange {
    /// Serialized as `[low, high]`, with an unbounded high written as `null`.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.low)?;
        t.serialize_element(&self.high.is_finite().then_some(self.high))?;
        t.end()
    }
}

/// Results of a strategy analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outputs {
    /// Probability of making at least $0.01 at the target date.
    pub probability_of_profit: Probability,
    /// Price ranges where the strategy makes at least $0.01.
    pub profit_ranges: Vec<ProfitRange>,
    /// Cost of each leg (negative: paid).
    pub per_leg_cost: Vec<Real>,
    /// Total cost of the strategy.
    pub strategy_cost: Real,
    /// Lowest P/L over the price domain.
    pub minimum_return_in_the_domain: Real,
    /// Highest P/L over the price domain.
    pub maximum_return_in_the_domain: Real,
    /// Implied volatility of each leg.
    pub implied_volatility: Vec<Volatility>,
    /// In-the-money probability of each leg.
    pub in_the_money_probability: Vec<Probability>,
    /// Delta of each leg, signed by action.
    pub delta: Vec<Real>,
    /// Gamma of each leg.
    pub gamma: Vec<Real>,
    /// Theta of each leg per day, signed by action.
    pub theta: Vec<Real>,
    /// Vega of each leg per volatility point.
    pub vega: Vec<Real>,
    /// Probability of reaching the profit target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability_of_profit_target: Option<Probability>,
    /// Price ranges where the profit target is reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_target_ranges: Option<Vec<ProfitRange>>,
    /// Probability of losing at least the loss limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability_of_loss_limit: Option<Probability>,
    /// Price ranges where the loss stays within the loss limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_limit_ranges: Option<Vec<ProfitRange>>,
    /// Mean P/L of the profitable Monte Carlo samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_profit_from_mc: Option<Real>,
    /// Mean P/L of the losing Monte Carlo samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_loss_from_mc: Option<Real>,
    /// Fraction of profitable Monte Carlo samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability_of_profit_from_mc: Option<Probability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nvidia_json(legs: &str) -> String {
        format!(
            r#"{{
                "stock_price": 168.99,
                "volatility": 0.483,
                "interest_rate": 0.045,
                "min_stock": 68.99,
                "max_stock": 268.99,
                "start_date": "2023-01-16",
                "target_date": "2023-02-17",
                "legs": {legs}
            }}"#
        )
    }

    #[test]
    fn parses_legs_and_defaults() {
        let inputs = StrategyInputs::from_json(&nvidia_json(
            r#"[{"type": "stock", "n": 100, "action": "buy"},
                {"type": "call", "strike": 185.0, "premium": 4.1, "n": 100,
                 "action": "sell", "expiration": "2023-02-17"}]"#,
        ))
        .unwrap();
        assert_eq!(inputs.legs.len(), 2);
        assert_eq!(inputs.legs[0], StrategyLeg::stock(Action::Buy, 100));
        match &inputs.legs[1] {
            StrategyLeg::Option(o) => {
                assert_eq!(o.option_type, OptionType::Call);
                assert_eq!(o.action, Action::Sell);
                assert_eq!(
                    o.expiration,
                    Some(Expiration::Date(Date::from_ymd(2023, 2, 17).unwrap()))
                );
            }
            other => panic!("expected an option leg, got {other:?}"),
        }
        assert_eq!(inputs.distribution, Distribution::BlackScholes);
        assert_eq!(inputs.nmc_prices, 100_000);
        assert!(inputs.discard_nonbusiness_days);
        assert_eq!(inputs.country, Country::UnitedStates);
        assert_eq!(inputs.dividend_yield, 0.0);
        assert!(matches!(inputs.horizon, Horizon::Dates { .. }));
    }

    #[test]
    fn parses_day_horizon_and_closed_leg() {
        let json = r#"{
            "stock_price": 100.0, "volatility": 0.2, "interest_rate": 0.05,
            "min_stock": 50.0, "max_stock": 150.0, "days_to_target": 30,
            "distribution": "laplace", "country": "UK",
            "legs": [{"type": "put", "strike": 95.0, "premium": 1.5, "n": 10,
                      "action": "buy", "expiration": 45, "prevpos": 1.2},
                     {"type": "closed", "prevpos": -35.0}]
        }"#;
        let inputs = StrategyInputs::from_json(json).unwrap();
        assert_eq!(inputs.horizon, Horizon::Days { days_to_target: 30 });
        assert_eq!(inputs.distribution, Distribution::Laplace);
        assert_eq!(inputs.country, Country::UnitedKingdom);
        assert_eq!(inputs.legs[1], StrategyLeg::closed(-35.0));
        match &inputs.legs[0] {
            StrategyLeg::Option(o) => {
                assert_eq!(o.expiration, Some(Expiration::Days(45)));
                assert_eq!(o.prior_position, Some(1.2));
            }
            other => panic!("expected an option leg, got {other:?}"),
        }
    }

    #[test]
    fn leg_serialization_uses_type_tag() {
        let leg = StrategyLeg::option(OptionType::Put, Action::Buy, 90.0, 2.0, 5);
        let json = serde_json::to_value(&leg).unwrap();
        assert_eq!(json["type"], "put");
        assert_eq!(json["quantity"], 5);
        assert!(json.get("expiration").is_none());
        let back: StrategyLeg = serde_json::from_value(json).unwrap();
        assert_eq!(back, leg);
    }

    #[test]
    fn json_errors() {
        assert!(matches!(
            StrategyInputs::from_json("{not json"),
            Err(Error::Json(_))
        ));
        let bad_country = nvidia_json(r#"[{"type": "stock", "n": 1, "action": "buy"}]"#)
            .replace("\"legs\"", "\"country\": \"Narnia\", \"legs\"");
        assert!(matches!(
            StrategyInputs::from_json(&bad_country),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn validation_errors() {
        let cases = [
            r#"[]"#,
            r#"[{"type": "closed", "prevpos": 1.0}, {"type": "closed", "prevpos": 2.0}]"#,
            r#"[{"type": "call", "strike": 185.0, "premium": 4.1, "n": 100, "action": "sell",
                 "expiration": "2023-02-10"}]"#,
            r#"[{"type": "call", "strike": 185.0, "premium": 4.1, "n": 100, "action": "sell",
                 "expiration": 30}]"#,
            r#"[{"type": "stock", "n": 0, "action": "buy"}]"#,
        ];
        for legs in cases {
            let result = StrategyInputs::from_json(&nvidia_json(legs));
            assert!(
                matches!(result, Err(Error::Validation(_))),
                "{legs} gave {result:?}"
            );
        }
    }

    #[test]
    fn reversed_dates_are_rejected() {
        let json = nvidia_json(r#"[{"type": "stock", "n": 1, "action": "buy"}]"#)
            .replace("2023-01-16", "2023-03-01");
        assert!(matches!(
            StrategyInputs::from_json(&json),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn profit_range_serializes_unbounded_high_as_null() {
        let ranges = vec![ProfitRange::new(0.0, 120.5), ProfitRange::new(164.9, f64::INFINITY)];
        assert_eq!(
            serde_json::to_string(&ranges).unwrap(),
            "[[0.0,120.5],[164.9,null]]"
        );
        assert!(ranges[1].contains(1e9));
        assert!(!ranges[0].contains(121.0));
    }

    #[test]
    fn distribution_names() {
        assert_eq!(
            serde_json::to_string(&Distribution::BlackScholes).unwrap(),
            "\"black-scholes\""
        );
        assert_eq!("normal".parse::<Distribution>().unwrap(), Distribution::Normal);
        assert!("cauchy".parse::<Distribution>().is_err());
        assert!(!Distribution::Array.is_analytic());
    }
}
