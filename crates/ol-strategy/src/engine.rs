//! Strategy engine: drives the pricing, profile and probability modules.
//!
//! Construction validates the inputs and resolves every leg's horizon into
//! a [`LegPlan`]. [`StrategyEngine::run`] then builds the price grid (and
//! Monte Carlo samples when needed), evaluates each leg, and assembles an
//! [`Outputs`]. The arrays produced by a run stay cached in the engine and
//! are exposed through [`StrategyEngine::pl_curve`].

use crate::models::{
    Expiration, Horizon, OptionLeg, Outputs, ProfitRange, StrategyInputs, StrategyLeg,
};
use crate::price_domain::{price_grid, sample_terminal_prices};
use crate::probability::probability_of_ranges;
use crate::profile::{
    closing_value, constant_profile, option_mark_to_market_profile, option_payoff_profile,
    stock_profile, LegProfile, MarkToMarket,
};
use crate::profit_range::{find_ranges, PROFIT_THRESHOLD};
use ol_core::{validate, Error, Price, Probability, Real, Result, Time, Volatility};
use ol_math::{MersenneTwisterRng, Statistics};
use ol_pricing::{black_scholes, implied_volatility, BlackScholesInputs};
use ol_time::{non_business_days, Calendar, Date};
use tracing::debug;

/// Trading days per year when non-business days are discarded.
pub const BUSINESS_DAYS_PER_YEAR: u32 = 252;
/// Calendar days per year.
pub const CALENDAR_DAYS_PER_YEAR: u32 = 365;

/// A leg together with its resolved horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct LegPlan {
    /// The leg as given in the inputs.
    pub leg: StrategyLeg,
    /// Days from the start to expiration; equal to the days to target for
    /// legs without an expiration.
    pub days_to_maturity: u32,
    /// Whether the leg is an option still alive at the target date.
    pub mark_to_market: bool,
}

/// Risk metrics reported for one leg.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct LegMetrics {
    implied_volatility: Volatility,
    itm_probability: Probability,
    delta: Real,
    gamma: Real,
    theta: Real,
    vega: Real,
}

/// Arrays derived by a run.
#[derive(Debug, Clone, Default)]
struct EngineState {
    prices: Vec<Price>,
    terminal_prices: Vec<Price>,
    leg_pl: Vec<Vec<Real>>,
    strategy_pl: Vec<Real>,
    strategy_pl_mc: Vec<Real>,
}

/// Evaluates one strategy.
#[derive(Debug)]
pub struct StrategyEngine {
    inputs: StrategyInputs,
    calendar: Box<dyn Calendar>,
    days_in_year: u32,
    days_to_target: u32,
    plans: Vec<LegPlan>,
    state: EngineState,
}

impl StrategyEngine {
    /// Create an engine using the holiday calendar of the inputs' country.
    ///
    /// # Errors
    /// [`Error::Validation`] if the inputs are inconsistent.
    pub fn new(inputs: StrategyInputs) -> Result<Self> {
        let calendar = Box::new(inputs.country.calendar());
        Self::with_calendar(inputs, calendar)
    }

    /// Create an engine with an explicit business-day calendar.
    ///
    /// # Errors
    /// [`Error::Validation`] if the inputs are inconsistent.
    pub fn with_calendar(inputs: StrategyInputs, calendar: Box<dyn Calendar>) -> Result<Self> {
        inputs.validate()?;
        let days_in_year = if inputs.discard_nonbusiness_days {
            BUSINESS_DAYS_PER_YEAR
        } else {
            CALENDAR_DAYS_PER_YEAR
        };

        let mut engine = Self {
            inputs,
            calendar,
            days_in_year,
            days_to_target: 0,
            plans: Vec::new(),
            state: EngineState::default(),
        };
        engine.days_to_target = match engine.inputs.horizon {
            Horizon::Dates {
                start_date,
                target_date,
            } => engine.trading_days(start_date, target_date)?,
            Horizon::Days { days_to_target } => days_to_target,
        };
        engine.plans = engine
            .inputs
            .legs
            .iter()
            .map(|leg| engine.plan(leg))
            .collect::<Result<_>>()?;

        debug!(
            days_to_target = engine.days_to_target,
            days_in_year = engine.days_in_year,
            calendar = engine.calendar.name(),
            legs = engine.plans.len(),
            "strategy engine ready"
        );
        Ok(engine)
    }

    fn trading_days(&self, start: Date, end: Date) -> Result<u32> {
        let mut days = start.days_between(end);
        if self.inputs.discard_nonbusiness_days {
            days -= non_business_days(self.calendar.as_ref(), start, end)?;
        }
        u32::try_from(days)
            .map_err(|_| Error::Validation(format!("negative day count from {start} to {end}")))
    }

    fn plan(&self, leg: &StrategyLeg) -> Result<LegPlan> {
        let days_to_maturity = match (leg, self.inputs.horizon) {
            (StrategyLeg::Option(o), Horizon::Dates { start_date, .. }) => match o.expiration {
                Some(Expiration::Date(expiration)) => self.trading_days(start_date, expiration)?,
                _ => self.days_to_target,
            },
            (StrategyLeg::Option(o), Horizon::Days { .. }) => match o.expiration {
                Some(Expiration::Days(days)) => days,
                _ => self.days_to_target,
            },
            _ => self.days_to_target,
        };
        let mark_to_market = match (leg, self.inputs.horizon) {
            (
                StrategyLeg::Option(OptionLeg {
                    expiration: Some(Expiration::Date(expiration)),
                    ..
                }),
                Horizon::Dates { target_date, .. },
            ) => *expiration != target_date,
            (StrategyLeg::Option(_), _) => days_to_maturity != self.days_to_target,
            _ => false,
        };
        Ok(LegPlan {
            leg: leg.clone(),
            days_to_maturity,
            mark_to_market,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The validated inputs.
    pub fn inputs(&self) -> &StrategyInputs {
        &self.inputs
    }

    /// Days from the start to the target date.
    pub fn days_to_target(&self) -> u32 {
        self.days_to_target
    }

    /// Day-count basis: 252 or 365.
    pub fn days_in_year(&self) -> u32 {
        self.days_in_year
    }

    /// Resolved legs.
    pub fn legs(&self) -> &[LegPlan] {
        &self.plans
    }

    /// The stock price grid; empty until the first run unless set.
    pub fn price_grid(&self) -> &[Price] {
        &self.state.prices
    }

    /// Monte Carlo or caller-supplied terminal prices.
    pub fn terminal_prices(&self) -> &[Price] {
        &self.state.terminal_prices
    }

    /// Strategy P/L at each terminal price of the last run.
    pub fn terminal_pl(&self) -> &[Real] {
        &self.state.strategy_pl_mc
    }

    /// The price grid and the P/L of leg `leg`, or of the whole strategy
    /// when `leg` is `None` or out of range.
    pub fn pl_curve(&self, leg: Option<usize>) -> (&[Price], &[Real]) {
        let curve = leg
            .and_then(|i| self.state.leg_pl.get(i))
            .unwrap_or(&self.state.strategy_pl);
        (&self.state.prices, curve)
    }

    /// Replace the stock price grid.
    ///
    /// P/L curves of a previous run are discarded until the next run.
    ///
    /// # Errors
    /// [`Error::Validation`] if `prices` is empty or not strictly increasing.
    pub fn set_price_grid(&mut self, prices: Vec<Price>) -> Result<()> {
        validate!(!prices.is_empty(), "empty stock price array is not allowed");
        validate!(
            prices.windows(2).all(|w| w[0] < w[1]),
            "stock price array must be strictly increasing"
        );
        self.state.prices = prices;
        self.state.leg_pl.clear();
        self.state.strategy_pl.clear();
        Ok(())
    }

    /// Replace the terminal stock prices used by the array model and the
    /// Monte Carlo statistics. The terminal P/L of a previous run is
    /// discarded.
    ///
    /// # Errors
    /// [`Error::Validation`] if `prices` is empty.
    pub fn set_terminal_prices(&mut self, prices: Vec<Price>) -> Result<()> {
        validate!(
            !prices.is_empty(),
            "empty terminal stock price array is not allowed"
        );
        self.state.terminal_prices = prices;
        self.state.strategy_pl_mc.clear();
        Ok(())
    }

    // ── Run ───────────────────────────────────────────────────────────────────

    /// Evaluate the strategy.
    ///
    /// # Errors
    /// [`Error::Validation`] if the array model has no terminal prices.
    pub fn run(&mut self) -> Result<Outputs> {
        let distribution = self.inputs.distribution;
        validate!(
            distribution.is_analytic() || !self.state.terminal_prices.is_empty(),
            "no terminal stock prices supplied for the array distribution"
        );

        let time_to_target = self.years(self.days_to_target);
        let model = self.inputs.market_model(time_to_target);

        if self.state.prices.is_empty() {
            self.state.prices = price_grid(self.inputs.min_stock, self.inputs.max_stock);
        }
        if self.inputs.compute_expectation && self.state.terminal_prices.is_empty() {
            let mut rng = MersenneTwisterRng::from_optional_seed(self.inputs.mc_seed);
            self.state.terminal_prices = sample_terminal_prices(
                &model,
                distribution,
                self.inputs.nmc_prices,
                &mut rng,
            )
            .unwrap_or_default();
            debug!(seed = rng.seed(), %distribution, "sampled terminal prices");
        }
        let use_samples = self.inputs.compute_expectation || !distribution.is_analytic();
        debug!(
            grid = self.state.prices.len(),
            samples = self.state.terminal_prices.len(),
            time_to_target,
            "running strategy"
        );

        let n_legs = self.plans.len();
        let mut per_leg_cost = Vec::with_capacity(n_legs);
        let mut metrics = Vec::with_capacity(n_legs);
        let mut leg_pl = Vec::with_capacity(n_legs);
        let mut strategy_pl = vec![0.0; self.state.prices.len()];
        let mut strategy_pl_mc = if use_samples {
            vec![0.0; self.state.terminal_prices.len()]
        } else {
            Vec::new()
        };

        for plan in &self.plans {
            let profile = self.leg_profile(plan, &self.state.prices);
            for (total, pl) in strategy_pl.iter_mut().zip(&profile.pl) {
                *total += pl;
            }
            if use_samples {
                let mc = self.leg_profile(plan, &self.state.terminal_prices);
                for (total, pl) in strategy_pl_mc.iter_mut().zip(&mc.pl) {
                    *total += pl;
                }
            }
            per_leg_cost.push(profile.cost);
            metrics.push(self.leg_metrics(plan));
            leg_pl.push(profile.pl);
        }

        let prices = &self.state.prices;
        let samples = &self.state.terminal_prices;
        let probability = |ranges: &[ProfitRange]| -> Result<Probability> {
            if ranges.is_empty() {
                Ok(0.0)
            } else {
                probability_of_ranges(ranges, distribution, &model, samples)
            }
        };

        let profit_ranges = find_ranges(prices, &strategy_pl, PROFIT_THRESHOLD);
        let probability_of_profit = probability(&profit_ranges)?;

        let (probability_of_profit_target, profit_target_ranges) = match self.inputs.profit_target
        {
            Some(target) => {
                let ranges = find_ranges(prices, &strategy_pl, target);
                (Some(probability(&ranges)?), Some(ranges))
            }
            None => (None, None),
        };
        let (probability_of_loss_limit, loss_limit_ranges) = match self.inputs.loss_limit {
            Some(limit) => {
                let ranges = find_ranges(prices, &strategy_pl, limit + PROFIT_THRESHOLD);
                (Some(1.0 - probability(&ranges)?), Some(ranges))
            }
            None => (None, None),
        };

        let (average_profit_from_mc, average_loss_from_mc, probability_of_profit_from_mc) =
            if use_samples && !strategy_pl_mc.is_empty() {
                let profits: Statistics = strategy_pl_mc
                    .iter()
                    .copied()
                    .filter(|&pl| pl >= PROFIT_THRESHOLD)
                    .collect();
                let losses: Statistics =
                    strategy_pl_mc.iter().copied().filter(|&pl| pl < 0.0).collect();
                (
                    Some(profits.mean().unwrap_or(0.0)),
                    Some(losses.mean().unwrap_or(0.0)),
                    Some(profits.samples() as Real / strategy_pl_mc.len() as Real),
                )
            } else {
                (None, None, None)
            };

        let minimum = strategy_pl.iter().copied().fold(Real::INFINITY, Real::min);
        let maximum = strategy_pl.iter().copied().fold(Real::NEG_INFINITY, Real::max);

        let outputs = Outputs {
            probability_of_profit,
            profit_ranges,
            strategy_cost: per_leg_cost.iter().sum(),
            per_leg_cost,
            minimum_return_in_the_domain: minimum,
            maximum_return_in_the_domain: maximum,
            implied_volatility: metrics.iter().map(|m| m.implied_volatility).collect(),
            in_the_money_probability: metrics.iter().map(|m| m.itm_probability).collect(),
            delta: metrics.iter().map(|m| m.delta).collect(),
            gamma: metrics.iter().map(|m| m.gamma).collect(),
            theta: metrics.iter().map(|m| m.theta).collect(),
            vega: metrics.iter().map(|m| m.vega).collect(),
            probability_of_profit_target,
            profit_target_ranges,
            probability_of_loss_limit,
            loss_limit_ranges,
            average_profit_from_mc,
            average_loss_from_mc,
            probability_of_profit_from_mc,
        };

        self.state.leg_pl = leg_pl;
        self.state.strategy_pl = strategy_pl;
        self.state.strategy_pl_mc = strategy_pl_mc;
        debug!(
            probability_of_profit = outputs.probability_of_profit,
            strategy_cost = outputs.strategy_cost,
            "strategy evaluated"
        );
        Ok(outputs)
    }

    fn years(&self, days: u32) -> Time {
        Real::from(days) / Real::from(self.days_in_year)
    }

    fn leg_profile(&self, plan: &LegPlan, prices: &[Price]) -> LegProfile {
        let inputs = &self.inputs;
        match &plan.leg {
            StrategyLeg::Stock(s) => match s.prior_position {
                Some(prior) if prior < 0.0 => constant_profile(
                    closing_value(s.action, inputs.stock_price, prior, s.quantity),
                    prices.len(),
                ),
                prior => {
                    let reference = prior.filter(|&p| p > 0.0).unwrap_or(inputs.stock_price);
                    stock_profile(
                        s.action,
                        reference,
                        s.quantity,
                        inputs.stock_commission,
                        prices,
                    )
                }
            },
            StrategyLeg::Option(o) => match o.prior_position {
                Some(prior) if prior < 0.0 => constant_profile(
                    closing_value(o.action, o.premium, prior, o.quantity),
                    prices.len(),
                ),
                prior => {
                    let value = prior.filter(|&p| p > 0.0).unwrap_or(o.premium);
                    if plan.mark_to_market {
                        let market = MarkToMarket {
                            rate: inputs.interest_rate,
                            volatility: inputs.volatility,
                            dividend_yield: inputs.dividend_yield,
                            remaining_time: self
                                .years(plan.days_to_maturity.saturating_sub(self.days_to_target)),
                        };
                        option_mark_to_market_profile(
                            o.option_type,
                            o.action,
                            o.strike,
                            value,
                            o.quantity,
                            inputs.option_commission,
                            prices,
                            &market,
                        )
                    } else {
                        option_payoff_profile(
                            o.option_type,
                            o.action,
                            o.strike,
                            value,
                            o.quantity,
                            inputs.option_commission,
                            prices,
                        )
                    }
                }
            },
            StrategyLeg::Closed(c) => constant_profile(c.realized_value, prices.len()),
        }
    }

    fn leg_metrics(&self, plan: &LegPlan) -> LegMetrics {
        let inputs = &self.inputs;
        match &plan.leg {
            StrategyLeg::Stock(_) => LegMetrics {
                itm_probability: 1.0,
                delta: 1.0,
                ..LegMetrics::default()
            },
            StrategyLeg::Option(o) if o.prior_position.map_or(true, |p| p >= 0.0) => {
                let time = self.years(plan.days_to_maturity);
                let info = black_scholes(&BlackScholesInputs {
                    spot: inputs.stock_price,
                    strike: o.strike,
                    rate: inputs.interest_rate,
                    volatility: inputs.volatility,
                    time,
                    dividend_yield: inputs.dividend_yield,
                });
                let sign = o.action.sign();
                LegMetrics {
                    implied_volatility: implied_volatility(
                        o.option_type,
                        o.premium,
                        inputs.stock_price,
                        o.strike,
                        inputs.interest_rate,
                        time,
                        inputs.dividend_yield,
                    ),
                    itm_probability: info.itm_probability(o.option_type),
                    delta: sign * info.delta(o.option_type),
                    gamma: info.gamma,
                    theta: sign * info.theta(o.option_type) / Real::from(self.days_in_year),
                    vega: info.vega / 100.0,
                }
            }
            StrategyLeg::Option(_) | StrategyLeg::Closed(_) => LegMetrics::default(),
        }
    }
}
