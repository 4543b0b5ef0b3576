//! Profit/loss profiles of individual legs.
//!
//! Every profile is evaluated over a slice of terminal stock prices and
//! comes with the leg's cost (negative when paid). Commissions are charged
//! once per leg and reduce both.

use ol_core::{Action, Price, Rate, Real, Time, Volatility};
use ol_pricing::{option_price, BlackScholesInputs, OptionType};

/// P/L of one leg over a set of prices, together with its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct LegProfile {
    /// P/L at each price.
    pub pl: Vec<Real>,
    /// Cost of opening the leg.
    pub cost: Real,
}

/// Parameters for valuing an option that is still alive at the target date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkToMarket {
    /// Annualized risk-free rate.
    pub rate: Rate,
    /// Annualized volatility.
    pub volatility: Volatility,
    /// Annualized dividend yield.
    pub dividend_yield: Rate,
    /// Years from the target date to expiration.
    pub remaining_time: Time,
}

/// Cost of opening a position worth `value` per share.
pub fn position_cost(action: Action, value: Price, quantity: u32, commission: Real) -> Real {
    let n = Real::from(quantity);
    match action {
        Action::Buy => n * -value - commission,
        Action::Sell => n * value - commission,
    }
}

/// P/L of an option held to expiration.
pub fn option_payoff_profile(
    option_type: OptionType,
    action: Action,
    strike: Price,
    value: Price,
    quantity: u32,
    commission: Real,
    prices: &[Price],
) -> LegProfile {
    let n = Real::from(quantity);
    let pl = prices
        .iter()
        .map(|&s| {
            let payoff = option_type.payoff(s, strike);
            match action {
                Action::Buy => n * (payoff - value) - commission,
                Action::Sell => n * (value - payoff) - commission,
            }
        })
        .collect();
    LegProfile {
        pl,
        cost: position_cost(action, value, quantity, commission),
    }
}

/// P/L of an option valued with Black-Scholes at the target date.
///
/// Negative stock prices (possible under the normal model) are valued as
/// zero.
#[allow(clippy::too_many_arguments)]
pub fn option_mark_to_market_profile(
    option_type: OptionType,
    action: Action,
    strike: Price,
    value: Price,
    quantity: u32,
    commission: Real,
    prices: &[Price],
    market: &MarkToMarket,
) -> LegProfile {
    let n = Real::from(quantity);
    let pl = prices
        .iter()
        .map(|&s| {
            let inputs = BlackScholesInputs {
                spot: s.max(0.0),
                strike,
                rate: market.rate,
                volatility: market.volatility,
                time: market.remaining_time,
                dividend_yield: market.dividend_yield,
            };
            let price = option_price(option_type, &inputs);
            match action {
                Action::Buy => n * (price - value) - commission,
                Action::Sell => n * (value - price) - commission,
            }
        })
        .collect();
    LegProfile {
        pl,
        cost: position_cost(action, value, quantity, commission),
    }
}

/// P/L of a stock position opened at `reference`.
pub fn stock_profile(
    action: Action,
    reference: Price,
    quantity: u32,
    commission: Real,
    prices: &[Price],
) -> LegProfile {
    let n = Real::from(quantity);
    let pl = prices
        .iter()
        .map(|&s| match action {
            Action::Buy => n * (s - reference) - commission,
            Action::Sell => n * (reference - s) - commission,
        })
        .collect();
    LegProfile {
        pl,
        cost: position_cost(action, reference, quantity, commission),
    }
}

/// Flat value of a leg whose prior position (`prior < 0`) is being closed:
/// `(current + prior)·n`, negated for buy legs. No commission is charged.
pub fn closing_value(action: Action, current: Price, prior: Price, quantity: u32) -> Real {
    let value = (current + prior) * Real::from(quantity);
    match action {
        Action::Buy => -value,
        Action::Sell => value,
    }
}

/// A flat profile worth `value` everywhere.
pub fn constant_profile(value: Real, len: usize) -> LegProfile {
    LegProfile {
        pl: vec![value; len],
        cost: value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const PRICES: [f64; 5] = [160.0, 170.0, 180.0, 185.0, 200.0];

    #[test]
    fn short_call_payoff() {
        let p = option_payoff_profile(
            OptionType::Call,
            Action::Sell,
            185.0,
            4.1,
            100,
            0.0,
            &PRICES,
        );
        assert_eq!(p.cost, 409.99999999999994);
        assert_abs_diff_eq!(p.pl[0], 410.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.pl[3], 410.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.pl[4], -1090.0, epsilon = 1e-9);
    }

    #[test]
    fn long_put_payoff_with_commission() {
        let p = option_payoff_profile(OptionType::Put, Action::Buy, 170.0, 2.0, 10, 1.5, &PRICES);
        assert_eq!(p.cost, -21.5);
        assert_abs_diff_eq!(p.pl[0], 10.0 * (10.0 - 2.0) - 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.pl[2], -21.5, epsilon = 1e-12);
    }

    #[test]
    fn mark_to_market_converges_to_payoff() {
        let market = MarkToMarket {
            rate: 0.0,
            volatility: 0.3,
            dividend_yield: 0.0,
            remaining_time: 1e-12,
        };
        let mtm = option_mark_to_market_profile(
            OptionType::Call,
            Action::Buy,
            175.0,
            3.0,
            100,
            0.0,
            &PRICES,
            &market,
        );
        let payoff =
            option_payoff_profile(OptionType::Call, Action::Buy, 175.0, 3.0, 100, 0.0, &PRICES);
        for (a, b) in mtm.pl.iter().zip(&payoff.pl) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
        assert_eq!(mtm.cost, payoff.cost);
    }

    #[test]
    fn mark_to_market_keeps_time_value() {
        let market = MarkToMarket {
            rate: 0.045,
            volatility: 0.483,
            dividend_yield: 0.0,
            remaining_time: 20.0 / 252.0,
        };
        let mtm = option_mark_to_market_profile(
            OptionType::Put,
            Action::Buy,
            170.0,
            0.0,
            1,
            0.0,
            &[-5.0, 170.0, 400.0],
            &market,
        );
        // a negative price is valued like zero: the discounted strike
        assert_abs_diff_eq!(mtm.pl[0], 170.0 * (-0.045f64 * 20.0 / 252.0).exp(), epsilon = 1e-9);
        assert!(mtm.pl[1] > 0.0);
        assert!(mtm.pl[2] < 1e-9);
    }

    #[test]
    fn stock_profiles() {
        let long = stock_profile(Action::Buy, 168.99, 100, 0.0, &PRICES);
        assert_eq!(long.cost, -16899.0);
        assert_abs_diff_eq!(long.pl[1], 101.0, epsilon = 1e-9);
        let short = stock_profile(Action::Sell, 168.99, 100, 2.0, &PRICES);
        assert_eq!(short.cost, 16897.0);
        assert_abs_diff_eq!(short.pl[1], -103.0, epsilon = 1e-9);
    }

    #[test]
    fn closing_values() {
        assert_abs_diff_eq!(closing_value(Action::Buy, 12.65, -7.5, 100), -515.0, epsilon = 1e-9);
        assert_abs_diff_eq!(closing_value(Action::Sell, 9.9, -3.0, 10), 69.0, epsilon = 1e-9);
        let flat = constant_profile(-35.0, 3);
        assert_eq!(flat.pl, vec![-35.0; 3]);
        assert_eq!(flat.cost, -35.0);
    }
}
