//! Black-Scholes-Merton analytics for European options.
//!
//! With `s̃ = S·e^{-qτ}` and `K̃ = K·e^{-rτ}`:
//!
//! - `d1 = (ln(S/K) + (r − q + σ²/2)τ) / (σ√τ)`, `d2 = d1 − σ√τ`
//! - call `= s̃·N(d1) − K̃·N(d2)`, put `= K̃·N(−d2) − s̃·N(−d1)`
//! - `Δ_call = e^{-qτ}N(d1)`, `Δ_put = Δ_call − e^{-qτ}`
//! - `Γ = e^{-qτ}n(d1) / (Sσ√τ)`, `vega = s̃·n(d1)·√τ`
//!
//! Vega is per unit of volatility and theta is per year.

use crate::payoff::OptionType;
use ol_core::{Price, Probability, Rate, Real, Time, Volatility};
use ol_math::{normal_cdf, normal_pdf};

/// Market inputs of a single Black-Scholes evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesInputs {
    /// Spot price of the underlying.
    pub spot: Price,
    /// Strike price.
    pub strike: Price,
    /// Annualized risk-free rate.
    pub rate: Rate,
    /// Annualized volatility.
    pub volatility: Volatility,
    /// Time to maturity in years.
    pub time: Time,
    /// Annualized continuous dividend yield.
    pub dividend_yield: Rate,
}

impl BlackScholesInputs {
    /// Return the `(d1, d2)` pair, or `None` in the degenerate case
    /// (`τ ≤ 0` or `σ ≤ 0`).
    pub fn d1_d2(&self) -> Option<(Real, Real)> {
        if self.time <= 0.0 || self.volatility <= 0.0 {
            return None;
        }
        let std_dev = self.volatility * self.time.sqrt();
        let d1 = ((self.spot / self.strike).ln()
            + (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility)
                * self.time)
            / std_dev;
        Some((d1, d1 - std_dev))
    }
}

/// Prices, Greeks and in-the-money probabilities of a call and a put sharing
/// the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlackScholesInfo {
    /// Call price.
    pub call_price: Price,
    /// Put price.
    pub put_price: Price,
    /// Call delta.
    pub call_delta: Real,
    /// Put delta.
    pub put_delta: Real,
    /// Call theta, per year.
    pub call_theta: Real,
    /// Put theta, per year.
    pub put_theta: Real,
    /// Gamma (same for call and put).
    pub gamma: Real,
    /// Vega per unit of volatility (same for call and put).
    pub vega: Real,
    /// Risk-neutral probability that the call expires in the money.
    pub call_itm_prob: Probability,
    /// Risk-neutral probability that the put expires in the money.
    pub put_itm_prob: Probability,
    /// `d1`, or `±∞` in the degenerate case.
    pub d1: Real,
    /// `d2`, or `±∞` in the degenerate case.
    pub d2: Real,
}

impl BlackScholesInfo {
    /// Price of the given option type.
    pub fn price(&self, option_type: OptionType) -> Price {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }

    /// Delta of the given option type.
    pub fn delta(&self, option_type: OptionType) -> Real {
        match option_type {
            OptionType::Call => self.call_delta,
            OptionType::Put => self.put_delta,
        }
    }

    /// Annual theta of the given option type.
    pub fn theta(&self, option_type: OptionType) -> Real {
        match option_type {
            OptionType::Call => self.call_theta,
            OptionType::Put => self.put_theta,
        }
    }

    /// In-the-money probability of the given option type.
    pub fn itm_probability(&self, option_type: OptionType) -> Probability {
        match option_type {
            OptionType::Call => self.call_itm_prob,
            OptionType::Put => self.put_itm_prob,
        }
    }
}

/// Evaluate prices and Greeks.
///
/// In the degenerate case (`τ ≤ 0` or `σ ≤ 0`) prices are intrinsic values,
/// deltas and ITM probabilities are moneyness indicators, and gamma, vega
/// and theta are zero.
pub fn black_scholes(inputs: &BlackScholesInputs) -> BlackScholesInfo {
    let BlackScholesInputs {
        spot: s,
        strike: k,
        rate: r,
        volatility: sigma,
        time: t,
        dividend_yield: q,
    } = *inputs;

    let Some((d1, d2)) = inputs.d1_d2() else {
        return intrinsic_info(s, k);
    };

    let df_q = (-q * t).exp();
    let df_r = (-r * t).exp();
    let s_q = s * df_q;
    let k_r = k * df_r;
    let sqrt_t = t.sqrt();

    let nd1 = normal_cdf(d1);
    let nd2 = normal_cdf(d2);
    let n_md1 = normal_cdf(-d1);
    let n_md2 = normal_cdf(-d2);
    let pdf_d1 = normal_pdf(d1);

    let decay = s_q * sigma * pdf_d1 / (2.0 * sqrt_t);

    BlackScholesInfo {
        call_price: s_q * nd1 - k_r * nd2,
        put_price: k_r * n_md2 - s_q * n_md1,
        call_delta: df_q * nd1,
        put_delta: df_q * (nd1 - 1.0),
        call_theta: -(decay - q * s_q * nd1 + r * k_r * nd2),
        put_theta: -(decay + q * s_q * n_md1 - r * k_r * n_md2),
        gamma: df_q * pdf_d1 / (s * sigma * sqrt_t),
        vega: s_q * pdf_d1 * sqrt_t,
        call_itm_prob: nd2,
        put_itm_prob: n_md2,
        d1,
        d2,
    }
}

fn intrinsic_info(s: Price, k: Price) -> BlackScholesInfo {
    let call_itm = if s > k { 1.0 } else { 0.0 };
    let put_itm = if s < k { 1.0 } else { 0.0 };
    let (d1, d2) = if s >= k {
        (Real::INFINITY, Real::INFINITY)
    } else {
        (Real::NEG_INFINITY, Real::NEG_INFINITY)
    };
    BlackScholesInfo {
        call_price: OptionType::Call.payoff(s, k),
        put_price: OptionType::Put.payoff(s, k),
        call_delta: call_itm,
        put_delta: -put_itm,
        call_itm_prob: call_itm,
        put_itm_prob: put_itm,
        d1,
        d2,
        ..BlackScholesInfo::default()
    }
}

/// Price of a single option.
pub fn option_price(option_type: OptionType, inputs: &BlackScholesInputs) -> Price {
    black_scholes(inputs).price(option_type)
}
