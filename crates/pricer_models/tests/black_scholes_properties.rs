//! Property-based tests for the Black-Scholes pricer and Greeks.
//!
//! Verifies model-wide identities over randomly drawn parameter sets:
//! put-call parity, no-arbitrage bounds, delta and gamma/vega relations,
//! and domain rejection.

use approx::assert_relative_eq;
use pricer_core::types::PricingError;
use pricer_models::analytical::{greeks, price, sensitivity, GreekKind};
use pricer_models::instruments::{OptionParameters, OptionStyle};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = OptionParameters> {
    (
        10.0..500.0_f64,
        10.0..500.0_f64,
        0.01..5.0_f64,
        -0.05..0.15_f64,
        0.05..1.0_f64,
    )
        .prop_map(|(spot, strike, expiry, rate, volatility)| OptionParameters {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_put_call_parity(p in params_strategy()) {
        let call = price(&p, OptionStyle::Call).unwrap();
        let put = price(&p, OptionStyle::Put).unwrap();
        let forward = p.spot - p.strike * (-p.rate * p.expiry).exp();
        let tol = 1e-9 * p.spot.max(p.strike);
        prop_assert!((call - put - forward).abs() <= tol,
            "parity violated: C - P = {}, S - K e^-rT = {}", call - put, forward);
    }

    #[test]
    fn prop_price_bounds(p in params_strategy()) {
        let call = price(&p, OptionStyle::Call).unwrap();
        let put = price(&p, OptionStyle::Put).unwrap();
        let df = (-p.rate * p.expiry).exp();
        let tol = 1e-9 * p.spot.max(p.strike);

        prop_assert!(call >= (p.spot - p.strike * df).max(0.0) - tol);
        prop_assert!(call <= p.spot + tol);
        prop_assert!(put >= (p.strike * df - p.spot).max(0.0) - tol);
        prop_assert!(put <= p.strike * df + tol);
    }

    #[test]
    fn prop_delta_relation(p in params_strategy()) {
        let call = sensitivity(&p, OptionStyle::Call, GreekKind::Delta).unwrap();
        let put = sensitivity(&p, OptionStyle::Put, GreekKind::Delta).unwrap();
        prop_assert!((0.0..=1.0).contains(&call));
        prop_assert!((-1.0..=0.0).contains(&put));
        prop_assert!((call - put - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_gamma_vega_style_independent(p in params_strategy()) {
        for kind in [GreekKind::Gamma, GreekKind::Vega] {
            let call = sensitivity(&p, OptionStyle::Call, kind).unwrap();
            let put = sensitivity(&p, OptionStyle::Put, kind).unwrap();
            prop_assert_eq!(call, put);
            prop_assert!(call >= 0.0);
        }
    }

    #[test]
    fn prop_vega_gamma_identity(p in params_strategy()) {
        // Vega = Γ · S² · σ · T
        let g = greeks(&p, OptionStyle::Call).unwrap();
        let implied = g.gamma * p.spot * p.spot * p.volatility * p.expiry;
        prop_assert!((g.vega - implied).abs() <= 1e-9 * g.vega.max(1.0));
    }

    #[test]
    fn prop_rejects_non_positive_volatility(p in params_strategy(), vol in -1.0..=0.0_f64) {
        let bad = OptionParameters { volatility: vol, ..p };
        for kind in GreekKind::ALL {
            let is_domain_error = matches!(
                sensitivity(&bad, OptionStyle::Call, kind),
                Err(PricingError::InvalidDomain { .. })
            );
            prop_assert!(is_domain_error);
        }
    }
}

#[test]
fn test_reference_option_full_set() {
    let params = OptionParameters::default();

    let call = greeks(&params, OptionStyle::Call).unwrap();
    let put = greeks(&params, OptionStyle::Put).unwrap();

    assert_relative_eq!(price(&params, OptionStyle::Call).unwrap(), 10.4506, epsilon = 1e-2);
    assert_relative_eq!(price(&params, OptionStyle::Put).unwrap(), 5.5735, epsilon = 1e-2);
    assert_relative_eq!(call.delta, 0.6368, epsilon = 1e-2);
    assert_relative_eq!(call.gamma, 0.01876, epsilon = 1e-4);
    assert_relative_eq!(call.vega, 37.524, epsilon = 1e-2);
    assert_relative_eq!(call.theta, -6.414, epsilon = 1e-2);
    assert_relative_eq!(put.theta, -1.658, epsilon = 1e-2);
    assert_relative_eq!(call.rho, 53.232, epsilon = 1e-2);
    assert_relative_eq!(put.rho, -41.890, epsilon = 1e-2);
}

#[test]
fn test_unknown_selectors_are_invalid_argument() {
    assert!(matches!(
        "straddle".parse::<OptionStyle>(),
        Err(PricingError::InvalidArgument(_))
    ));
    assert!(matches!(
        "charm".parse::<GreekKind>(),
        Err(PricingError::InvalidArgument(_))
    ));
}
