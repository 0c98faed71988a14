//! Error types for pricing and curve generation
//!
//! The library distinguishes two failure classes: structurally invalid
//! inputs (non-positive prices, non-finite values) and degenerate market
//! states where the closed-form formula itself breaks down (`sigma * sqrt(t)`
//! collapsing to zero). Callers can match on the variant to decide how to
//! surface the failure; the library never substitutes defaults or returns
//! NaN/Infinity in place of an error.

use thiserror::Error;

/// Failure modes of the pricing engine and curve generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A raw market input is structurally invalid: non-positive where
    /// positivity is required, negative volatility, or non-finite.
    #[error("invalid parameter {name}: {value} ({constraint})")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// The violated constraint, e.g. "must be > 0 and finite"
        constraint: &'static str,
    },

    /// The market state makes `sigma * sqrt(t)` zero, so d1 is undefined
    /// and the Black-Scholes formula has no finite value.
    #[error("degenerate market ({reason}): sigma * sqrt(t) is zero, d1 is undefined")]
    DegenerateMarket {
        /// What collapsed the formula, e.g. "zero volatility"
        reason: &'static str,
    },
}

impl PricingError {
    /// Shorthand used by the validation paths.
    pub(crate) fn invalid(name: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}
