//! Scenario input loading
//!
//! A scenario is a full set of raw market inputs as found in a TOML file,
//! with per-field defaults so partial files work. The defaults match the
//! canonical at-the-money example used throughout the tests and demos:
//! spot 1800, strike 1800, 1% rate, 30 days, 20% volatility.
//!
//! File I/O and parse failures are reported through `anyhow` with context;
//! value-level validation stays with [`MarketParameters`] so there is a
//! single source of truth for what constitutes a valid input.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::params::MarketParameters;

/// Raw market inputs as read from a scenario TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_spot_price")]
    pub spot_price: f64,

    #[serde(default = "default_strike_price")]
    pub strike_price: f64,

    /// Annualized risk-free rate in percent
    #[serde(default = "default_risk_free_rate_percent")]
    pub risk_free_rate_percent: f64,

    /// Calendar days to expiry
    #[serde(default = "default_days_to_expiry")]
    pub days_to_expiry: f64,

    /// Annualized volatility in percent
    #[serde(default = "default_volatility_percent")]
    pub volatility_percent: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            spot_price: default_spot_price(),
            strike_price: default_strike_price(),
            risk_free_rate_percent: default_risk_free_rate_percent(),
            days_to_expiry: default_days_to_expiry(),
            volatility_percent: default_volatility_percent(),
        }
    }
}

impl Scenario {
    /// Parses a scenario from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse scenario TOML")
    }

    /// Loads a scenario from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}

impl From<Scenario> for MarketParameters {
    fn from(s: Scenario) -> Self {
        MarketParameters {
            spot_price: s.spot_price,
            strike_price: s.strike_price,
            risk_free_rate_percent: s.risk_free_rate_percent,
            days_to_expiry: s.days_to_expiry,
            volatility_percent: s.volatility_percent,
        }
    }
}

fn default_spot_price() -> f64 {
    1800.0
}

fn default_strike_price() -> f64 {
    1800.0
}

fn default_risk_free_rate_percent() -> f64 {
    1.0
}

fn default_days_to_expiry() -> f64 {
    30.0
}

fn default_volatility_percent() -> f64 {
    20.0
}
