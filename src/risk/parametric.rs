//! Parametric (variance-covariance) VaR under a normal return model
//!
//! `VaR = -(μ + z·σ)` with `z = Φ⁻¹(1 - confidence)`. Because `z < 0` for any
//! confidence above one half this is the familiar `|z|·σ - μ`. μ and σ are
//! taken from [`DescriptiveStats`] so the model never drifts from the
//! reported moments.

use crate::error::{Result, RiskError};
use crate::probability::utils::{normal_quantile, standard_normal_pdf};
use crate::risk::{ConfidenceLevel, RiskModel, VarMethod};
use crate::stats::DescriptiveStats;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricVaR {
    mean: f64,
    std_dev: f64,
}

impl ParametricVaR {
    /// Fit from precomputed statistics
    pub fn from_stats(stats: &DescriptiveStats) -> Self {
        Self {
            mean: stats.mean_daily,
            std_dev: stats.std_daily,
        }
    }

    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(RiskError::invalid_parameter(
                "mean",
                format!("must be finite, got {mean}"),
            ));
        }
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(RiskError::invalid_parameter(
                "std_dev",
                format!("must be finite and non-negative, got {std_dev}"),
            ));
        }
        Ok(Self { mean, std_dev })
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Left-tail critical value `Φ⁻¹(1 - confidence)`
    #[inline]
    pub fn z_score(confidence: ConfidenceLevel) -> f64 {
        normal_quantile(confidence.tail_probability())
    }
}

impl RiskModel for ParametricVaR {
    fn method(&self) -> VarMethod {
        VarMethod::Parametric
    }

    #[inline]
    fn value_at_risk(&self, confidence: ConfidenceLevel) -> f64 {
        let z = Self::z_score(confidence);
        -(self.mean + z * self.std_dev)
    }

    /// Closed-form normal expected shortfall `σ·φ(z)/α - μ`
    fn expected_shortfall(&self, confidence: ConfidenceLevel) -> Result<Option<f64>> {
        let alpha = confidence.tail_probability();
        let z = Self::z_score(confidence);
        Ok(Some(self.std_dev * standard_normal_pdf(z) / alpha - self.mean))
    }
}
