use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ol_core::Action;
use ol_pricing::OptionType;
use ol_strategy::{Distribution, Horizon, StrategyEngine, StrategyInputs, StrategyLeg};
use ol_time::{Country, Date};
use std::hint::black_box;

fn covered_call(compute_expectation: bool, nmc_prices: usize) -> StrategyInputs {
    StrategyInputs {
        stock_price: 168.99,
        volatility: 0.483,
        interest_rate: 0.045,
        dividend_yield: 0.0,
        min_stock: 68.99,
        max_stock: 268.99,
        legs: vec![
            StrategyLeg::stock(Action::Buy, 100),
            StrategyLeg::option(OptionType::Call, Action::Sell, 185.0, 4.1, 100),
        ],
        profit_target: None,
        loss_limit: None,
        option_commission: 0.0,
        stock_commission: 0.0,
        horizon: Horizon::Dates {
            start_date: Date::from_ymd(2023, 1, 16).expect("valid date"),
            target_date: Date::from_ymd(2023, 2, 17).expect("valid date"),
        },
        distribution: Distribution::BlackScholes,
        nmc_prices,
        mc_seed: Some(42),
        compute_expectation,
        discard_nonbusiness_days: true,
        country: Country::UnitedStates,
    }
}

fn bench_analytic_run(c: &mut Criterion) {
    c.bench_function("covered_call_analytic", |b| {
        b.iter(|| {
            let mut engine =
                StrategyEngine::new(black_box(covered_call(false, 0))).expect("valid inputs");
            black_box(engine.run().expect("run should succeed").probability_of_profit)
        })
    });
}

fn bench_monte_carlo_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("covered_call_monte_carlo");
    for n in [10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut engine =
                    StrategyEngine::new(black_box(covered_call(true, n))).expect("valid inputs");
                let out = engine.run().expect("run should succeed");
                black_box(out.probability_of_profit_from_mc)
            })
        });
    }
    group.finish();
}

fn bench_mark_to_market_run(c: &mut Criterion) {
    let mut inputs = covered_call(false, 0);
    inputs.legs[1] = inputs.legs[1].clone().with_expiration(ol_strategy::Expiration::Date(
        Date::from_ymd(2023, 3, 17).expect("valid date"),
    ));
    c.bench_function("covered_call_mark_to_market", |b| {
        b.iter(|| {
            let mut engine = StrategyEngine::new(black_box(inputs.clone())).expect("valid inputs");
            black_box(engine.run().expect("run should succeed").maximum_return_in_the_domain)
        })
    });
}

criterion_group!(
    benches,
    bench_analytic_run,
    bench_monte_carlo_run,
    bench_mark_to_market_run
);
criterion_main!(benches);
