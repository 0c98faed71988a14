//! Market parameter validation and normalization
//!
//! Raw inputs arrive in the units a trading UI works with: prices in
//! currency, rate and volatility as annualized percentages, expiry in
//! calendar days. The pricing formulas work in model units: years,
//! decimal rate, decimal volatility. [`MarketParameters::normalize`] is the
//! single place that conversion happens; it is recomputed on every pricing
//! call rather than cached, so a parameter set can never drift out of sync
//! with its normalized form.

use crate::error::PricingError;

/// Day count convention used to convert calendar days to year fractions (ACT/365).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Raw market inputs for a single European option, in UI units.
///
/// Immutable value object; construct with [`MarketParameters::new`] for
/// up-front validation, or build literally and let [`normalize`](Self::normalize)
/// reject invalid values at pricing time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Current underlying price (currency units, must be > 0)
    pub spot_price: f64,
    /// Option strike price (currency units, must be > 0)
    pub strike_price: f64,
    /// Annualized risk-free rate in percent (e.g. 1.0 for 1%)
    pub risk_free_rate_percent: f64,
    /// Calendar days until expiry (must be > 0)
    pub days_to_expiry: f64,
    /// Annualized volatility in percent (e.g. 20.0 for 20%, must be >= 0)
    pub volatility_percent: f64,
}

/// Model-unit parameters derived from [`MarketParameters`].
///
/// Never constructed from anything but a validated parameter set in normal
/// use; the fields stay public so the engine can be driven directly in
/// tests and batch code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedParameters {
    /// Time to expiry in years (`days_to_expiry / 365`)
    pub years_to_exp: f64,
    /// Risk-free rate as a decimal (`risk_free_rate_percent / 100`)
    pub risk_free_rate: f64,
    /// Volatility as a decimal (`volatility_percent / 100`)
    pub volatility: f64,
}

/// Helper function to validate a full parameter set.
///
/// Zero volatility passes here: it is structurally representable and the
/// degenerate-case rejection belongs to the pricing engine, which is where
/// `sigma * sqrt(t)` actually hits the denominator.
fn validate_market_parameters(p: &MarketParameters) -> Result<(), PricingError> {
    let finite_checks = [
        ("spot_price", p.spot_price),
        ("strike_price", p.strike_price),
        ("risk_free_rate_percent", p.risk_free_rate_percent),
        ("days_to_expiry", p.days_to_expiry),
        ("volatility_percent", p.volatility_percent),
    ];
    for (name, value) in finite_checks {
        if !value.is_finite() {
            return Err(PricingError::invalid(name, value, "must be finite"));
        }
    }

    if p.spot_price <= 0.0 {
        return Err(PricingError::invalid(
            "spot_price",
            p.spot_price,
            "must be > 0",
        ));
    }
    if p.strike_price <= 0.0 {
        return Err(PricingError::invalid(
            "strike_price",
            p.strike_price,
            "must be > 0",
        ));
    }
    if p.days_to_expiry <= 0.0 {
        return Err(PricingError::invalid(
            "days_to_expiry",
            p.days_to_expiry,
            "must be > 0",
        ));
    }
    if p.volatility_percent < 0.0 {
        return Err(PricingError::invalid(
            "volatility_percent",
            p.volatility_percent,
            "must be >= 0",
        ));
    }

    Ok(())
}

impl MarketParameters {
    /// Creates a new parameter set with validation.
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        risk_free_rate_percent: f64,
        days_to_expiry: f64,
        volatility_percent: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot_price,
            strike_price,
            risk_free_rate_percent,
            days_to_expiry,
            volatility_percent,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the current parameter set.
    pub fn validate(&self) -> Result<(), PricingError> {
        validate_market_parameters(self)
    }

    /// Validates and converts to model units.
    ///
    /// Pure unit conversion with no rounding beyond native floating point.
    pub fn normalize(&self) -> Result<NormalizedParameters, PricingError> {
        self.validate()?;
        Ok(NormalizedParameters {
            years_to_exp: self.days_to_expiry / DAYS_PER_YEAR,
            risk_free_rate: self.risk_free_rate_percent / 100.0,
            volatility: self.volatility_percent / 100.0,
        })
    }
}
