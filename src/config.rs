//! Engine configuration
//!
//! All numeric knobs of an analysis live here so nothing is hard-coded per
//! fund. The struct deserializes with `#[serde(default)]`, so a caller can
//! load a partial TOML/JSON document and get the documented defaults for the
//! rest.

use serde::{Deserialize, Serialize};

use crate::data::ReturnKind;
use crate::error::{Result, RiskError};

/// Trading days per year for daily data
pub const DEFAULT_PERIODS_PER_YEAR: f64 = 252.0;

/// Trading days per month for daily data
pub const DEFAULT_PERIODS_PER_MONTH: f64 = 22.0;

/// Monte Carlo draw count when the caller does not choose one
pub const DEFAULT_NUM_SIMULATIONS: usize = 10_000;

/// Below this many draws the simulated percentile is too noisy to report
pub const MIN_SIMULATIONS: usize = 1_000;

/// Minimum number of returns an analysis accepts
pub const DEFAULT_MIN_OBSERVATIONS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Annualization factor (252 for daily, 52 for weekly, 12 for monthly)
    pub periods_per_year: f64,
    /// Scaling factor for the monthly mean/std
    pub periods_per_month: f64,
    /// Annualized risk-free rate used by the Sharpe ratio. Defaults to zero.
    pub risk_free_rate: f64,
    pub num_simulations: usize,
    /// `Some` makes Monte Carlo output reproducible, `None` seeds from entropy
    pub seed: Option<u64>,
    pub min_observations: usize,
    pub return_kind: ReturnKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            periods_per_month: DEFAULT_PERIODS_PER_MONTH,
            risk_free_rate: 0.0,
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            seed: None,
            min_observations: DEFAULT_MIN_OBSERVATIONS,
            return_kind: ReturnKind::Simple,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    pub fn with_num_simulations(mut self, n: usize) -> Self {
        self.num_simulations = n;
        self
    }

    pub fn with_min_observations(mut self, n: usize) -> Self {
        self.min_observations = n;
        self
    }

    pub fn with_return_kind(mut self, kind: ReturnKind) -> Self {
        self.return_kind = kind;
        self
    }

    /// Check every field against its documented range
    pub fn validate(&self) -> Result<()> {
        if !(self.periods_per_year.is_finite() && self.periods_per_year > 0.0) {
            return Err(RiskError::invalid_parameter(
                "periods_per_year",
                format!("must be finite and positive, got {}", self.periods_per_year),
            ));
        }
        if !(self.periods_per_month.is_finite() && self.periods_per_month > 0.0) {
            return Err(RiskError::invalid_parameter(
                "periods_per_month",
                format!("must be finite and positive, got {}", self.periods_per_month),
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(RiskError::invalid_parameter(
                "risk_free_rate",
                format!("must be finite, got {}", self.risk_free_rate),
            ));
        }
        validate_num_simulations(self.num_simulations)?;
        if self.min_observations < 2 {
            return Err(RiskError::invalid_parameter(
                "min_observations",
                format!("must be at least 2, got {}", self.min_observations),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_num_simulations(n: usize) -> Result<()> {
    if n < MIN_SIMULATIONS {
        return Err(RiskError::invalid_parameter(
            "num_simulations",
            format!("must be at least {MIN_SIMULATIONS}, got {n}"),
        ));
    }
    Ok(())
}
