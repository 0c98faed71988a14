use greeks_lib::{compute_option_prices, MarketParameters, PricingError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Helper to keep the parameter order readable at call sites
fn price_raw(
    spot: f64,
    strike: f64,
    rate_pct: f64,
    days: f64,
    vol_pct: f64,
) -> Result<greeks_lib::PricingResult, PricingError> {
    compute_option_prices(spot, strike, rate_pct, days, vol_pct)
}

/// Reference scenario: ATM 1800 strike, 1% rate, 30 days, 20% vol.
/// Values verified against an independent Black-Scholes implementation;
/// tolerance is 1% relative, generous next to the ~2e-7 CDF error.
#[test]
fn test_reference_scenario() {
    let result = price_raw(1800.0, 1800.0, 1.0, 30.0, 20.0).expect("reference scenario failed");

    let expectations = [
        ("call_price", result.call_price, 41.896),
        ("put_price", result.put_price, 40.417),
        ("call_delta", result.call_delta, 0.51715),
        ("put_delta", result.put_delta, -0.48285),
        ("gamma", result.gamma, 0.0038618),
        ("vega", result.vega, 2.05681),
        ("call_theta", result.call_theta, -0.70996),
        ("put_theta", result.put_theta, -0.66069),
        ("call_rho", result.call_rho, 0.73066),
        ("put_rho", result.put_rho, -0.74757),
    ];

    for (name, got, expected) in expectations {
        let rel_err = ((got - expected) / expected).abs();
        assert!(
            rel_err < 0.01,
            "{}: expected ~{}, got {} (rel err {:.2e})",
            name,
            expected,
            got,
            rel_err
        );
    }
}

/// Put-call parity C - P = S - K*e^(-rt) must hold within 1e-6 relative
/// for any valid parameter set; under the symmetric CDF approximation the
/// approximation errors cancel and the identity holds to float rounding.
#[test]
fn test_put_call_parity_fixed_cases() {
    let cases = [
        (1800.0, 1800.0, 1.0, 30.0, 20.0),  // ATM
        (1800.0, 1500.0, 1.0, 30.0, 20.0),  // deep ITM call
        (1800.0, 2100.0, 1.0, 30.0, 20.0),  // deep OTM call
        (100.0, 100.0, 5.0, 365.0, 40.0),   // long-dated, high vol
        (50.0, 55.0, 0.0, 7.0, 80.0),       // zero rate, short-dated
        (2500.0, 2400.0, -0.5, 90.0, 15.0), // negative rate
    ];

    for (spot, strike, rate, days, vol) in cases {
        let result = price_raw(spot, strike, rate, days, vol).expect("pricing failed");
        let lhs = result.call_price - result.put_price;
        let rhs = spot - strike * (-rate / 100.0 * days / 365.0_f64).exp();
        let scale = spot.max(strike);
        assert!(
            (lhs - rhs).abs() / scale < 1e-6,
            "parity violated for S={} K={}: C-P={}, S-K*df={}",
            spot,
            strike,
            lhs,
            rhs
        );
    }
}

/// Randomized parity sweep across a broad but sane parameter box.
#[test]
fn test_put_call_parity_randomized() {
    let mut rng = StdRng::seed_from_u64(20240612);

    for _ in 0..500 {
        let spot: f64 = rng.gen_range(1.0..5000.0);
        let strike: f64 = spot * rng.gen_range(0.5..1.5);
        let rate: f64 = rng.gen_range(-1.0..10.0);
        let days: f64 = rng.gen_range(1.0..730.0);
        let vol: f64 = rng.gen_range(1.0..150.0);

        let result = price_raw(spot, strike, rate, days, vol).expect("pricing failed");
        let lhs = result.call_price - result.put_price;
        let rhs = spot - strike * (-rate / 100.0 * days / 365.0_f64).exp();
        let scale = spot.max(strike);
        assert!(
            (lhs - rhs).abs() / scale < 1e-6,
            "parity violated for S={} K={} r={} d={} v={}",
            spot,
            strike,
            rate,
            days,
            vol
        );
    }
}

/// put_delta is defined as call_delta - 1 from the same N(d1) term, so the
/// relation is exact, not approximate.
#[test]
fn test_delta_parity_exact() {
    for strike in [1500.0, 1700.0, 1800.0, 1900.0, 2100.0] {
        let result = price_raw(1800.0, strike, 1.0, 30.0, 20.0).expect("pricing failed");
        assert_eq!(
            result.put_delta,
            result.call_delta - 1.0,
            "delta parity broken at strike {}",
            strike
        );
    }
}

/// Holding everything else fixed, call price is non-decreasing and put
/// price non-increasing in spot.
#[test]
fn test_monotonicity_in_spot() {
    let mut prev: Option<greeks_lib::PricingResult> = None;
    let mut spot = 1400.0;
    while spot <= 2200.0 {
        let result = price_raw(spot, 1800.0, 1.0, 30.0, 20.0).expect("pricing failed");
        if let Some(p) = prev {
            assert!(
                result.call_price >= p.call_price - 1e-9,
                "call price decreased at spot {}: {} -> {}",
                spot,
                p.call_price,
                result.call_price
            );
            assert!(
                result.put_price <= p.put_price + 1e-9,
                "put price increased at spot {}: {} -> {}",
                spot,
                p.put_price,
                result.put_price
            );
        }
        prev = Some(result);
        spot += 10.0;
    }
}

/// Zero volatility and zero days must surface as explicit errors, never as
/// NaN or Infinity in the results.
#[test]
fn test_degenerate_inputs_rejected() {
    let err = price_raw(1800.0, 1800.0, 1.0, 30.0, 0.0).unwrap_err();
    assert!(
        matches!(err, PricingError::DegenerateMarket { .. }),
        "zero vol should be degenerate, got {:?}",
        err
    );

    // Zero days fails positivity validation before reaching the engine.
    let err = price_raw(1800.0, 1800.0, 1.0, 0.0, 20.0).unwrap_err();
    assert!(
        matches!(err, PricingError::InvalidParameter { .. }),
        "zero days should be invalid, got {:?}",
        err
    );
}

/// Structurally invalid inputs fail with InvalidParameter.
#[test]
fn test_invalid_inputs_rejected() {
    for (spot, strike, rate, days, vol) in [
        (1800.0, 0.0, 1.0, 30.0, 20.0),      // zero strike
        (-5.0, 1800.0, 1.0, 30.0, 20.0),     // negative spot
        (1800.0, 1800.0, 1.0, -30.0, 20.0),  // negative days
        (1800.0, 1800.0, 1.0, 30.0, -20.0),  // negative vol
        (f64::NAN, 1800.0, 1.0, 30.0, 20.0), // NaN spot
        (1800.0, f64::INFINITY, 1.0, 30.0, 20.0),
    ] {
        let err = price_raw(spot, strike, rate, days, vol).unwrap_err();
        assert!(
            matches!(err, PricingError::InvalidParameter { .. }),
            "expected InvalidParameter for S={} K={} d={} v={}, got {:?}",
            spot,
            strike,
            days,
            vol,
            err
        );
    }
}

/// The flat boundary function and the structured path must agree exactly.
#[test]
fn test_boundary_matches_structured_api() {
    let flat = price_raw(1800.0, 1750.0, 1.5, 45.0, 25.0).expect("flat API failed");

    let params = MarketParameters::new(1800.0, 1750.0, 1.5, 45.0, 25.0).expect("invalid params");
    let norm = params.normalize().expect("normalization failed");
    let structured = greeks_lib::price(1800.0, 1750.0, &norm).expect("structured API failed");

    assert_eq!(flat, structured);
}

/// Intrinsic-value bounds: a call is worth at least S - K*df and never
/// more than S; a put at least K*df - S and never more than K*df.
#[test]
fn test_price_bounds() {
    for strike in [1500.0, 1800.0, 2100.0] {
        let result = price_raw(1800.0, strike, 1.0, 30.0, 20.0).expect("pricing failed");
        let df = (-0.01 * 30.0 / 365.0_f64).exp();
        assert!(result.call_price >= (1800.0 - strike * df).max(0.0) - 1e-9);
        assert!(result.call_price <= 1800.0 + 1e-9);
        assert!(result.put_price >= (strike * df - 1800.0).max(0.0) - 1e-9);
        assert!(result.put_price <= strike * df + 1e-9);
    }
}
