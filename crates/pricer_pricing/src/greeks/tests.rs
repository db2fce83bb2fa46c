//! Tests for the Greeks engine and result types.

use super::*;
use approx::assert_relative_eq;
use pricer_core::types::{PricingError, SolverError};
use pricer_models::analytical::{norm_cdf, norm_pdf};
use pricer_models::instruments::{OptionContract, OptionSide};
use pricer_models::models::{EquityDividendModel, FuturesModel, FxModel, ModelKind, ValuationModel};

fn reference(side: OptionSide) -> OptionContract {
    OptionContract::new(side, 100.0, 100.0, 0.5, 0.05, 0.0, 0.2).unwrap()
}

// =============================================================================
// Greeks / GreekKind
// =============================================================================

mod greeks_result_tests {
    use super::*;

    #[test]
    fn test_map_has_exactly_five_ordered_keys() {
        let greeks = Greeks {
            delta: 1.0,
            gamma: 2.0,
            theta: 3.0,
            vega: 4.0,
            rho: 5.0,
        };
        let map = greeks.to_map();
        assert_eq!(map.len(), 5);
        let keys: Vec<GreekKind> = map.keys().copied().collect();
        assert_eq!(keys, GreekKind::ALL.to_vec());
        let values: Vec<f64> = map.values().copied().collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<String> = GreekKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["Delta", "Gamma", "Theta", "Vega", "Rho"]);
    }

    #[test]
    fn test_is_finite() {
        assert!(Greeks::default().is_finite());
        let bad = Greeks {
            gamma: f64::NAN,
            ..Default::default()
        };
        assert!(!bad.is_finite());
    }
}

// =============================================================================
// Engine construction
// =============================================================================

mod engine_config_tests {
    use super::*;

    #[test]
    fn test_with_defaults_uses_default_bump() {
        let engine = GreeksEngine::with_defaults(EquityDividendModel);
        assert_eq!(engine.config().bump, DEFAULT_BUMP);
        assert_eq!(*engine.model(), EquityDividendModel);
    }

    #[test]
    fn test_new_rejects_invalid_bump() {
        let err = GreeksEngine::new(FxModel, GreeksConfig::new().with_bump(0.0)).unwrap_err();
        assert!(matches!(
            err,
            PricingError::Solver(SolverError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_new_accepts_custom_bump() {
        let engine = GreeksEngine::new(FuturesModel, GreeksConfig::new().with_bump(1e-4)).unwrap();
        assert_eq!(engine.config().bump, 1e-4);
    }
}

// =============================================================================
// Accuracy against closed-form sensitivities
// =============================================================================

mod accuracy_tests {
    use super::*;

    #[test]
    fn test_call_greeks_match_analytical() {
        let engine = GreeksEngine::with_defaults(EquityDividendModel);
        let contract = reference(OptionSide::Call);
        let greeks = engine.compute(&contract).unwrap();

        let d1 = 0.24748737341529162_f64;
        let d2 = 0.10606601717798209_f64;
        let sqrt_t = 0.5_f64.sqrt();
        let discount = (-0.025_f64).exp();

        let delta = norm_cdf(d1);
        let gamma = norm_pdf(d1) / (100.0 * 0.2 * sqrt_t);
        let vega = 100.0 * sqrt_t * norm_pdf(d1) / 100.0;
        let theta =
            (-(100.0 * norm_pdf(d1) * 0.2) / (2.0 * sqrt_t) - 0.05 * 100.0 * discount * norm_cdf(d2))
                / 365.0;
        let rho = 100.0 * 0.5 * discount * norm_cdf(d2) / 100.0;

        assert_relative_eq!(greeks.delta, delta, epsilon = 1e-5);
        // second difference with ε = 1e-5 carries rounding noise of order 1e-4
        assert_relative_eq!(greeks.gamma, gamma, epsilon = 2e-3);
        assert_relative_eq!(greeks.theta, theta, epsilon = 1e-6);
        assert_relative_eq!(greeks.vega, vega, epsilon = 1e-5);
        assert_relative_eq!(greeks.rho, rho, epsilon = 1e-5);
    }

    #[test]
    fn test_put_greeks_signs() {
        let engine = GreeksEngine::with_defaults(EquityDividendModel);
        let greeks = engine.compute(&reference(OptionSide::Put)).unwrap();
        assert_relative_eq!(greeks.delta, -0.4022655310915617, epsilon = 1e-5);
        assert!(greeks.gamma > 0.0);
        assert!(greeks.vega > 0.0);
        assert!(greeks.rho < 0.0);
        assert!(greeks.theta < 0.0);
    }

    #[test]
    fn test_coarser_bump_still_close() {
        let fine = GreeksEngine::with_defaults(EquityDividendModel);
        let coarse =
            GreeksEngine::new(EquityDividendModel, GreeksConfig::new().with_bump(1e-3)).unwrap();
        let contract = reference(OptionSide::Call);
        assert_relative_eq!(
            fine.vega(&contract).unwrap(),
            coarse.vega(&contract).unwrap(),
            epsilon = 1e-4
        );
    }
}

// =============================================================================
// Internal consistency
// =============================================================================

mod consistency_tests {
    use super::*;

    #[test]
    fn test_individual_methods_match_compute() {
        for kind in ModelKind::ALL {
            let engine = GreeksEngine::with_defaults(kind);
            let contract =
                OptionContract::new(OptionSide::Call, 105.0, 100.0, 0.75, 0.03, 0.01, 0.25)
                    .unwrap();
            let all = engine.compute(&contract).unwrap();
            assert_eq!(all.delta, engine.delta(&contract).unwrap());
            assert_eq!(all.gamma, engine.gamma(&contract).unwrap());
            assert_eq!(all.theta, engine.theta(&contract).unwrap());
            assert_eq!(all.vega, engine.vega(&contract).unwrap());
            assert_eq!(all.rho, engine.rho(&contract).unwrap());
        }
    }

    #[test]
    fn test_gamma_is_difference_of_deltas() {
        let engine = GreeksEngine::with_defaults(FxModel);
        let contract = OptionContract::new(OptionSide::Put, 1.1, 1.12, 1.0, 0.03, 0.01, 0.15).unwrap();
        let eps = engine.config().bump;
        let bumped = contract.with_spot(contract.spot() + eps).unwrap();
        let expected =
            (engine.delta(&bumped).unwrap() - engine.delta(&contract).unwrap()) / eps;
        assert_eq!(engine.gamma(&contract).unwrap(), expected);
    }

    #[test]
    fn test_futures_rho_is_minus_t_times_price() {
        // Black-76 depends on r only through e^(-rT)
        let engine = GreeksEngine::with_defaults(FuturesModel);
        let contract =
            OptionContract::new(OptionSide::Call, 100.0, 95.0, 0.75, 0.04, 0.0, 0.3).unwrap();
        let price = FuturesModel.price(&contract).unwrap();
        assert_relative_eq!(
            engine.rho(&contract).unwrap(),
            -0.75 * price / 100.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_call_and_put_share_gamma_and_vega() {
        let engine = GreeksEngine::with_defaults(EquityDividendModel);
        let call = engine.compute(&reference(OptionSide::Call)).unwrap();
        let put = engine.compute(&reference(OptionSide::Put)).unwrap();
        assert_relative_eq!(call.vega, put.vega, epsilon = 1e-6);
        assert_relative_eq!(call.gamma, put.gamma, epsilon = 2e-3);
        assert_relative_eq!(call.delta - put.delta, 1.0, epsilon = 1e-5);
    }
}

// =============================================================================
// Overflow
// =============================================================================

mod overflow_tests {
    use super::*;

    /// Jumps from zero to the largest finite price once spot passes the strike.
    #[derive(Debug, Clone, Copy)]
    struct CliffModel;

    impl ValuationModel for CliffModel {
        fn name(&self) -> &'static str {
            "cliff"
        }

        fn carry_rate(&self, _contract: &OptionContract) -> f64 {
            0.0
        }

        fn price(&self, contract: &OptionContract) -> Result<f64, PricingError> {
            if contract.spot() > contract.strike() {
                Ok(f64::MAX)
            } else {
                Ok(0.0)
            }
        }
    }

    #[test]
    fn test_compute_rejects_overflowing_delta() {
        let engine = GreeksEngine::with_defaults(CliffModel);
        let err = engine.compute(&reference(OptionSide::Call)).unwrap_err();

        assert!(matches!(err, PricingError::NumericalInstability(_)));
        assert!(err.to_string().contains("cliff"));
    }

    #[test]
    fn test_compute_accepts_finite_prices_across_the_cliff() {
        // Both spot bumps land above the strike, so every quotient is finite
        let engine = GreeksEngine::with_defaults(CliffModel);
        let contract = OptionContract::new(OptionSide::Call, 101.0, 100.0, 0.5, 0.05, 0.0, 0.2)
            .unwrap();
        let greeks = engine.compute(&contract).unwrap();

        assert!(greeks.is_finite());
        assert_eq!(greeks.delta, 0.0);
    }
}
