//! Value-at-Risk models
//!
//! Every VaR method implements [`RiskModel`]: a VaR at a confidence level,
//! plus the expected shortfall computed from the same model or sample.
//! Adding a method (filtered historical, GARCH) means adding an
//! implementation, not extending a branch.
//!
//! # Sign convention
//!
//! VaR and CVaR are reported as losses: a positive number is a loss, a
//! negative one means even the tail quantile is a gain. No value is clamped
//! at zero.

mod backtest;
mod confidence;
pub mod cvar;
mod historical;
mod monte_carlo;
mod parametric;
mod portfolio;
mod sample;

pub use backtest::{backtest_var, BacktestReport, DEFAULT_SIGNIFICANCE};
pub use confidence::{confidence_levels, ConfidenceLevel};
pub use cvar::conditional_var;
pub use historical::HistoricalVaR;
pub use monte_carlo::MonteCarloVaR;
pub use parametric::ParametricVaR;
pub use portfolio::{portfolio_returns, portfolio_var};
pub use sample::EmpiricalSample;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarMethod {
    Parametric,
    Historical,
    MonteCarlo,
}

impl VarMethod {
    pub const ALL: [VarMethod; 3] = [
        VarMethod::Parametric,
        VarMethod::Historical,
        VarMethod::MonteCarlo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VarMethod::Parametric => "parametric",
            VarMethod::Historical => "historical",
            VarMethod::MonteCarlo => "monte_carlo",
        }
    }
}

/// One (method, confidence) result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskEstimate {
    pub method: VarMethod,
    pub confidence: ConfidenceLevel,
    pub var: f64,
    /// Absent only for models without a tail to average
    pub cvar: Option<f64>,
}

/// A fitted VaR model
pub trait RiskModel {
    fn method(&self) -> VarMethod;

    /// Loss at the given confidence
    fn value_at_risk(&self, confidence: ConfidenceLevel) -> f64;

    /// Expected shortfall paired with [`value_at_risk`](Self::value_at_risk)
    ///
    /// `Ok(None)` when the model has no notion of a tail.
    fn expected_shortfall(&self, confidence: ConfidenceLevel) -> Result<Option<f64>>;

    fn estimate(&self, confidence: ConfidenceLevel) -> Result<RiskEstimate> {
        Ok(RiskEstimate {
            method: self.method(),
            confidence,
            var: self.value_at_risk(confidence),
            cvar: self.expected_shortfall(confidence)?,
        })
    }
}
