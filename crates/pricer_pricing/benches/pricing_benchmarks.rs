//! Criterion benchmarks for pricer_pricing.
//!
//! Benchmarks cover:
//! - Closed-form pricing per model
//! - Full Greeks set versus individual Greeks
//! - Implied volatility search per model and moneyness

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::{ContractTerms, OptionContract, OptionSide};
use pricer_models::models::{ModelKind, ValuationModel};
use pricer_pricing::greeks::GreeksEngine;
use pricer_pricing::implied::ImpliedVolSolver;

fn reference_contract(kind: ModelKind) -> OptionContract {
    match kind {
        ModelKind::Fx => OptionContract::new(OptionSide::Call, 1.25, 1.2, 0.5, 0.03, 0.01, 0.1),
        _ => OptionContract::new(OptionSide::Call, 100.0, 100.0, 0.5, 0.05, 0.02, 0.2),
    }
    .expect("reference contract is valid")
}

/// Benchmark closed-form pricing.
fn bench_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("price");

    for kind in ModelKind::ALL {
        let contract = reference_contract(kind);
        group.bench_with_input(BenchmarkId::new("model", kind), &contract, |b, contract| {
            b.iter(|| kind.price(black_box(contract)));
        });
    }

    group.finish();
}

/// Benchmark the shared-price Greeks set against five separate calls.
fn bench_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");

    for kind in ModelKind::ALL {
        let engine = GreeksEngine::with_defaults(kind);
        let contract = reference_contract(kind);

        group.bench_with_input(BenchmarkId::new("compute", kind), &contract, |b, contract| {
            b.iter(|| engine.compute(black_box(contract)));
        });

        group.bench_with_input(
            BenchmarkId::new("individual", kind),
            &contract,
            |b, contract| {
                b.iter(|| {
                    let contract = black_box(contract);
                    (
                        engine.delta(contract),
                        engine.gamma(contract),
                        engine.theta(contract),
                        engine.vega(contract),
                        engine.rho(contract),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark implied volatility recovery.
fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");

    for kind in ModelKind::ALL {
        let solver = ImpliedVolSolver::with_defaults(kind);
        let contract = reference_contract(kind);
        let target = kind.price(&contract).expect("reference price");
        let terms = contract.terms();

        group.bench_with_input(BenchmarkId::new("atm", kind), &terms, |b, terms| {
            b.iter(|| solver.solve(black_box(terms), black_box(target)));
        });
    }

    // Moneyness sweep on the equity model
    let solver = ImpliedVolSolver::with_defaults(ModelKind::EquityDividend);
    for strike in [95.0, 100.0, 105.0] {
        let terms = ContractTerms::new(OptionSide::Call, 100.0, strike, 1.0, 0.05, 0.0)
            .expect("valid terms");
        let contract = terms.with_volatility(0.3).expect("valid volatility");
        let target = ModelKind::EquityDividend
            .price(&contract)
            .expect("reference price");

        group.bench_with_input(BenchmarkId::new("strike", strike), &terms, |b, terms| {
            b.iter(|| solver.solve(black_box(terms), black_box(target)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_price,
    bench_greeks,
    bench_implied_volatility
);
criterion_main!(benches);
