//! Spot sensitivity curve generation
//!
//! Produces the price-vs-spot series a chart consumes: strike, rate,
//! expiry, and volatility held fixed while the spot is bumped across
//! [-10%, +10%] of its base value in 1-percentage-point steps. The result
//! is a fixed-length, ascending-by-spot sequence of call/put price pairs.

use crate::engine::price;
use crate::error::PricingError;
use crate::params::MarketParameters;

/// Number of points in a sensitivity curve (spot bumps -10%..=+10%).
pub const CURVE_POINTS: usize = 21;

/// Relative bump range, in percent of the base spot.
const BUMP_RANGE_PERCENT: i32 = 10;

/// One point of the price-vs-spot curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Bumped underlying price this point was priced at
    pub spot_price: f64,
    /// European call price at the bumped spot
    pub call_price: f64,
    /// European put price at the bumped spot
    pub put_price: f64,
}

/// Generates the 21-point spot sensitivity curve for a parameter set.
///
/// Normalization happens once; the engine is then invoked per bumped spot.
/// Fail-fast: the first pricing error aborts the whole curve, so callers
/// never observe a partial series. Since the bumped spots stay positive
/// whenever the base spot is valid, the only reachable per-point failure is
/// the zero-volatility degenerate state, which the first iteration hits
/// before any point is emitted.
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] if the base parameters fail
///   validation.
/// * [`PricingError::DegenerateMarket`] if zero volatility makes the
///   closed-form formula undefined.
pub fn generate_curve(params: &MarketParameters) -> Result<Vec<CurvePoint>, PricingError> {
    let norm = params.normalize()?;

    let mut points = Vec::with_capacity(CURVE_POINTS);
    for i in -BUMP_RANGE_PERCENT..=BUMP_RANGE_PERCENT {
        let spot_price = params.spot_price * (1.0 + f64::from(i) / 100.0);
        let result = price(spot_price, params.strike_price, &norm)?;
        points.push(CurvePoint {
            spot_price,
            call_price: result.call_price,
            put_price: result.put_price,
        });
    }

    Ok(points)
}
