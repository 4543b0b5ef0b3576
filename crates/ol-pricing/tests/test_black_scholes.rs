//! Property tests for the Black-Scholes analytics.

use ol_pricing::{black_scholes, implied_volatility, BlackScholesInputs, OptionType};
use proptest::prelude::*;

fn inputs(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    time: f64,
    q: f64,
) -> BlackScholesInputs {
    BlackScholesInputs {
        spot,
        strike,
        rate,
        volatility,
        time,
        dividend_yield: q,
    }
}

proptest! {
    #[test]
    fn put_call_parity(
        spot in 20.0f64..300.0,
        strike in 20.0f64..300.0,
        rate in 0.0f64..0.2,
        vol in 0.05f64..1.5,
        time in 0.01f64..3.0,
        q in 0.0f64..0.1,
    ) {
        let info = black_scholes(&inputs(spot, strike, rate, vol, time, q));
        let lhs = info.call_price - info.put_price;
        let rhs = spot * (-q * time).exp() - strike * (-rate * time).exp();
        prop_assert!((lhs - rhs).abs() < 1e-8 * spot.max(strike), "lhs {lhs} rhs {rhs}");
    }

    #[test]
    fn call_decreasing_in_strike(
        spot in 90.0f64..110.0,
        strike in 80.0f64..120.0,
        dk in 0.5f64..20.0,
        vol in 0.3f64..1.0,
        time in 0.25f64..2.0,
    ) {
        let lo = black_scholes(&inputs(spot, strike, 0.03, vol, time, 0.0));
        let hi = black_scholes(&inputs(spot, strike + dk, 0.03, vol, time, 0.0));
        prop_assert!(hi.call_price < lo.call_price);
    }

    #[test]
    fn prices_non_decreasing_in_volatility(
        spot in 50.0f64..150.0,
        strike in 50.0f64..150.0,
        vol in 0.05f64..1.0,
        dv in 0.01f64..0.5,
        time in 0.05f64..2.0,
    ) {
        let lo = black_scholes(&inputs(spot, strike, 0.03, vol, time, 0.01));
        let hi = black_scholes(&inputs(spot, strike, 0.03, vol + dv, time, 0.01));
        prop_assert!(hi.call_price >= lo.call_price - 1e-9);
        prop_assert!(hi.put_price >= lo.put_price - 1e-9);
    }

    #[test]
    fn greeks_are_bounded(
        spot in 20.0f64..300.0,
        strike in 20.0f64..300.0,
        vol in 0.05f64..1.5,
        time in 0.01f64..3.0,
    ) {
        let info = black_scholes(&inputs(spot, strike, 0.05, vol, time, 0.0));
        prop_assert!((0.0..=1.0).contains(&info.call_delta));
        prop_assert!((-1.0..=0.0).contains(&info.put_delta));
        prop_assert!(info.gamma >= 0.0);
        prop_assert!(info.vega >= 0.0);
        prop_assert!((info.call_itm_prob + info.put_itm_prob - 1.0).abs() < 1e-12);
    }

    #[test]
    fn implied_vol_roundtrip(
        strike in 90.0f64..110.0,
        vol in 0.2f64..0.9,
        time in 0.25f64..1.0,
    ) {
        let premium = black_scholes(&inputs(100.0, strike, 0.02, vol, time, 0.0)).call_price;
        let iv = implied_volatility(OptionType::Call, premium, 100.0, strike, 0.02, time, 0.0);
        prop_assert!((iv - vol).abs() < 1e-5, "iv {iv} vol {vol}");
    }
}
