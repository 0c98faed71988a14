//! Standard normal distribution helpers
//!
//! The CDF here is the Abramowitz-Stegun rational approximation (26.2.17):
//! a 5-term polynomial in `t = 1/(1 + 0.2316419*|x|)` scaled by the density
//! `0.3989423 * exp(-x^2/2)`. Maximum absolute error is on the order of
//! 1e-7, which bounds the precision of every price and Greek computed from
//! it; callers needing an exact CDF should use a dedicated statistics crate
//! instead. For `x > 0` the tail probability is complemented, so the
//! symmetry identity `cdf(-x) = 1 - cdf(x)` holds exactly under the
//! approximation.

use std::f64::consts::PI;

// Abramowitz-Stegun 26.2.17 coefficients.
const T_SCALE: f64 = 0.2316419;
const DENSITY_SCALE: f64 = 0.3989423; // ~ 1/sqrt(2*pi)
const B1: f64 = 0.3193815;
const B2: f64 = -0.3565638;
const B3: f64 = 1.781478;
const B4: f64 = -1.821256;
const B5: f64 = 1.330274;

/// Approximate standard normal CDF, accurate to ~2e-7 absolute.
///
/// Total for all finite inputs. Non-finite inputs are a caller bug: the
/// public pricing paths validate parameters before any CDF evaluation, so
/// this is only guarded with a debug assertion.
pub fn norm_cdf(x: f64) -> f64 {
    debug_assert!(x.is_finite(), "norm_cdf requires finite input, got {}", x);

    let t = 1.0 / (1.0 + T_SCALE * x.abs());
    let d = DENSITY_SCALE * (-x * x / 2.0).exp();
    let tail = d * t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));

    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Standard normal density, used by the Greeks.
pub fn norm_pdf(x: f64) -> f64 {
    (-x * x / 2.0).exp() / (2.0 * PI).sqrt()
}
