//! Closed-form Black-Scholes pricing and Greeks
//!
//! Single-pass evaluation: one call computes d1/d2 once and derives the
//! call and put prices plus all ten sensitivities from the same
//! intermediates. Conventions follow the usual trading-desk scaling:
//!
//! - vega and rho are per 1-percentage-point move in volatility / rate
//! - theta is per calendar day of decay
//! - gamma and delta are unscaled
//!
//! Prices inherit the ~2e-7 absolute error of the CDF approximation in
//! [`crate::normal`], amplified by the spot/strike magnitudes; treat the
//! results as model values, not exact quantities.

use crate::error::PricingError;
use crate::normal::{norm_cdf, norm_pdf};
use crate::params::{NormalizedParameters, DAYS_PER_YEAR};

/// Prices and sensitivities for one European call/put pair at a single
/// spot/strike, produced fresh by every [`price`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// European call price
    pub call_price: f64,
    /// European put price
    pub put_price: f64,
    /// Call delta, `N(d1)`
    pub call_delta: f64,
    /// Put delta, `N(d1) - 1`
    pub put_delta: f64,
    /// Gamma (identical for call and put)
    pub gamma: f64,
    /// Vega per 1-percentage-point volatility move (identical for call and put)
    pub vega: f64,
    /// Call theta per calendar day
    pub call_theta: f64,
    /// Put theta per calendar day
    pub put_theta: f64,
    /// Call rho per 1-percentage-point rate move
    pub call_rho: f64,
    /// Put rho per 1-percentage-point rate move
    pub put_rho: f64,
}

/// Prices a European call/put pair and computes all Greeks.
///
/// # Arguments
///
/// * `spot_price` - Current underlying price (> 0)
/// * `strike_price` - Option strike (> 0)
/// * `params` - Normalized rate, volatility, and time from
///   [`MarketParameters::normalize`](crate::params::MarketParameters::normalize)
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] for non-positive or non-finite
///   spot/strike, or non-finite normalized fields. The engine re-checks
///   these so it is safe to drive directly with raw floats.
/// * [`PricingError::DegenerateMarket`] when zero volatility or zero time
///   value makes `sigma * sqrt(t)` vanish. d1 would divide by zero, so the
///   engine rejects the state explicitly instead of letting NaN/Infinity
///   propagate into the results.
pub fn price(
    spot_price: f64,
    strike_price: f64,
    params: &NormalizedParameters,
) -> Result<PricingResult, PricingError> {
    if !(spot_price.is_finite() && spot_price > 0.0) {
        return Err(PricingError::invalid(
            "spot_price",
            spot_price,
            "must be > 0 and finite",
        ));
    }
    if !(strike_price.is_finite() && strike_price > 0.0) {
        return Err(PricingError::invalid(
            "strike_price",
            strike_price,
            "must be > 0 and finite",
        ));
    }

    let t = params.years_to_exp;
    let r = params.risk_free_rate;
    let sigma = params.volatility;

    for (name, value) in [
        ("years_to_exp", t),
        ("risk_free_rate", r),
        ("volatility", sigma),
    ] {
        if !value.is_finite() {
            return Err(PricingError::invalid(name, value, "must be finite"));
        }
    }
    if t <= 0.0 {
        return Err(PricingError::DegenerateMarket {
            reason: "zero time to expiry",
        });
    }
    if sigma <= 0.0 {
        return Err(PricingError::DegenerateMarket {
            reason: "zero volatility",
        });
    }

    let sqrt_t = t.sqrt();
    let sigma_sqrt_t = sigma * sqrt_t;

    let d1 = ((spot_price / strike_price).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;

    let nd1 = norm_cdf(d1);
    let nd2 = norm_cdf(d2);
    let nd1_neg = norm_cdf(-d1);
    let nd2_neg = norm_cdf(-d2);

    let discount = (-r * t).exp();
    let pdf_d1 = norm_pdf(d1);

    let call_price = spot_price * nd1 - strike_price * discount * nd2;
    let put_price = strike_price * discount * nd2_neg - spot_price * nd1_neg;

    let call_delta = nd1;
    let put_delta = call_delta - 1.0;

    let gamma = pdf_d1 / (spot_price * sigma_sqrt_t);
    let vega = spot_price * sqrt_t * pdf_d1 / 100.0;

    // Time-decay term shared by both thetas; the carry term flips sign.
    let decay = -spot_price * sigma * pdf_d1 / (2.0 * sqrt_t);
    let call_theta = (decay - r * strike_price * discount * nd2) / DAYS_PER_YEAR;
    let put_theta = (decay + r * strike_price * discount * nd2_neg) / DAYS_PER_YEAR;

    let call_rho = strike_price * t * discount * nd2 / 100.0;
    let put_rho = -strike_price * t * discount * nd2_neg / 100.0;

    Ok(PricingResult {
        call_price,
        put_price,
        call_delta,
        put_delta,
        gamma,
        vega,
        call_theta,
        put_theta,
        call_rho,
        put_rho,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MarketParameters;

    fn create_test_norm() -> NormalizedParameters {
        MarketParameters::new(1800.0, 1800.0, 1.0, 30.0, 20.0)
            .unwrap()
            .normalize()
            .unwrap()
    }

    #[test]
    fn test_degenerate_states_rejected() {
        let mut norm = create_test_norm();
        norm.volatility = 0.0;
        let err = price(1800.0, 1800.0, &norm).unwrap_err();
        assert!(matches!(err, PricingError::DegenerateMarket { .. }));

        let mut norm = create_test_norm();
        norm.years_to_exp = 0.0;
        let err = price(1800.0, 1800.0, &norm).unwrap_err();
        assert!(matches!(err, PricingError::DegenerateMarket { .. }));
    }

    #[test]
    fn test_invalid_direct_inputs_rejected() {
        let norm = create_test_norm();
        assert!(matches!(
            price(0.0, 1800.0, &norm).unwrap_err(),
            PricingError::InvalidParameter { .. }
        ));
        assert!(matches!(
            price(1800.0, -5.0, &norm).unwrap_err(),
            PricingError::InvalidParameter { .. }
        ));
        assert!(matches!(
            price(f64::NAN, 1800.0, &norm).unwrap_err(),
            PricingError::InvalidParameter { .. }
        ));

        let mut bad = create_test_norm();
        bad.volatility = f64::NAN;
        assert!(matches!(
            price(1800.0, 1800.0, &bad).unwrap_err(),
            PricingError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_all_outputs_finite() {
        let norm = create_test_norm();
        let result = price(1800.0, 1800.0, &norm).unwrap();
        for value in [
            result.call_price,
            result.put_price,
            result.call_delta,
            result.put_delta,
            result.gamma,
            result.vega,
            result.call_theta,
            result.put_theta,
            result.call_rho,
            result.put_rho,
        ] {
            assert!(value.is_finite(), "non-finite output: {}", value);
        }
    }

    #[test]
    fn test_theta_negative_for_atm_options() {
        // ATM options lose value as expiry approaches.
        let norm = create_test_norm();
        let result = price(1800.0, 1800.0, &norm).unwrap();
        assert!(result.call_theta < 0.0, "call theta {}", result.call_theta);
        assert!(result.put_theta < 0.0, "put theta {}", result.put_theta);
    }
}
