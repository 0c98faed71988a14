//! # Greeks-Lib: Black-Scholes Option Pricing and Sensitivity Curves
//!
//! `greeks-lib` is a small Rust library for pricing European options with
//! the closed-form Black-Scholes model. One call produces the call and put
//! prices together with all first-order Greeks (delta, gamma, vega, theta,
//! rho, with call and put variants where they differ), and a companion
//! routine samples a 21-point price-vs-spot curve for charting.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call/put prices and ten Greeks from a single
//!   d1/d2 evaluation
//! - **Explicit failure modes**: invalid and degenerate inputs are typed
//!   errors, never silent NaN/Infinity
//! - **Sensitivity curves**: fixed 21-point spot bump series, ready to plot
//! - **Pure functions**: no global state, no caching; every call is
//!   independent and safely parallelizable
//!
//! ## Quick Start
//!
//! ```rust
//! use greeks_lib::{compute_option_prices, compute_sensitivity_curve};
//!
//! // spot, strike, rate %, days to expiry, volatility %
//! let result = compute_option_prices(1800.0, 1800.0, 1.0, 30.0, 20.0)?;
//! println!("call: {:.2}  put: {:.2}", result.call_price, result.put_price);
//! println!("call delta: {:.4}  gamma: {:.6}", result.call_delta, result.gamma);
//!
//! let curve = compute_sensitivity_curve(1800.0, 1800.0, 1.0, 30.0, 20.0)?;
//! assert_eq!(curve.len(), 21);
//! # Ok::<(), greeks_lib::PricingError>(())
//! ```
//!
//! ## Units
//!
//! Inputs arrive in UI units: prices in currency, rate and volatility as
//! annualized percentages, expiry in calendar days (ACT/365). Vega and rho
//! are reported per 1-percentage-point move, theta per calendar day.
//!
//! ## Precision
//!
//! The normal CDF is the Abramowitz-Stegun polynomial approximation with
//! ~2e-7 maximum absolute error; prices and Greeks inherit that bound.
//! See [`normal`] for details.
//!
//! ## Model Scope
//!
//! European exercise only, constant rate and volatility, no dividend
//! yield, no implied-volatility inversion. Zero volatility or zero time to
//! expiry is rejected as a degenerate market state rather than priced at
//! intrinsic value.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod curve;
pub mod engine;
pub mod error;
pub mod normal;
pub mod params;
#[cfg(feature = "serde")]
pub mod scenario;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use curve::{generate_curve, CurvePoint, CURVE_POINTS};
pub use engine::{price, PricingResult};
pub use error::PricingError;
pub use params::{MarketParameters, NormalizedParameters, DAYS_PER_YEAR};
#[cfg(feature = "serde")]
pub use scenario::Scenario;

// ================================================================================================
// BOUNDARY API
// ================================================================================================

/// Prices a European call/put pair and computes all Greeks from raw inputs.
///
/// This is the flat-argument boundary consumed by presentation layers: it
/// validates, normalizes, and prices in one call. Structured callers can
/// use [`MarketParameters`] and [`engine::price`] directly.
///
/// # Arguments
///
/// * `spot_price` - Current underlying price (currency units, > 0)
/// * `strike_price` - Option strike (currency units, > 0)
/// * `risk_free_rate_percent` - Annualized rate in percent (e.g. 1.0 for 1%)
/// * `days_to_expiry` - Calendar days until expiry (> 0)
/// * `volatility_percent` - Annualized volatility in percent (> 0; zero is
///   rejected as degenerate)
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] for non-positive spot/strike/days,
///   negative volatility, or any non-finite input
/// * [`PricingError::DegenerateMarket`] for zero volatility
///
/// # Example
///
/// ```rust
/// use greeks_lib::compute_option_prices;
///
/// let result = compute_option_prices(1800.0, 1800.0, 1.0, 30.0, 20.0)?;
/// // Put-call parity: C - P = S - K*e^(-rt)
/// let parity = result.call_price - result.put_price;
/// let expected = 1800.0 - 1800.0 * (-0.01_f64 * 30.0 / 365.0).exp();
/// assert!((parity - expected).abs() < 1e-6);
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
pub fn compute_option_prices(
    spot_price: f64,
    strike_price: f64,
    risk_free_rate_percent: f64,
    days_to_expiry: f64,
    volatility_percent: f64,
) -> Result<PricingResult, PricingError> {
    let params = MarketParameters {
        spot_price,
        strike_price,
        risk_free_rate_percent,
        days_to_expiry,
        volatility_percent,
    };
    let norm = params.normalize()?;
    engine::price(spot_price, strike_price, &norm)
}

/// Generates the 21-point price-vs-spot sensitivity curve from raw inputs.
///
/// Strike, rate, expiry, and volatility stay fixed while the spot is
/// bumped across -10%..=+10% of its base value in 1-percentage-point
/// steps. The result is strictly ascending by spot and generated fresh on
/// every call; any pricing failure aborts the whole curve.
///
/// # Errors
///
/// Same conditions as [`compute_option_prices`]; no partial curve is ever
/// returned.
pub fn compute_sensitivity_curve(
    spot_price: f64,
    strike_price: f64,
    risk_free_rate_percent: f64,
    days_to_expiry: f64,
    volatility_percent: f64,
) -> Result<Vec<CurvePoint>, PricingError> {
    let params = MarketParameters {
        spot_price,
        strike_price,
        risk_free_rate_percent,
        days_to_expiry,
        volatility_percent,
    };
    curve::generate_curve(&params)
}
