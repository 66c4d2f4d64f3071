use crate::error::{Result, RiskError};
use crate::risk::cvar::conditional_var_sorted;
use crate::risk::ConfidenceLevel;
use crate::stats::core::percentile_sorted;

/// Ascending sample of returns, observed or simulated
///
/// Both empirical VaR methods read their quantile and their tail from one
/// of these, so a VaR and its CVaR always come from the same draws.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalSample {
    sorted: Vec<f64>,
}

impl EmpiricalSample {
    pub fn from_unsorted(mut values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(RiskError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        values.sort_by(|a, b| a.total_cmp(b));
        Ok(Self { sorted: values })
    }

    /// Ascending values
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.sorted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Linear-interpolated quantile at probability `p`
    #[inline]
    pub fn quantile(&self, p: f64) -> f64 {
        percentile_sorted(&self.sorted, p)
    }

    /// Loss at the `1 - confidence` quantile
    #[inline]
    pub fn value_at_risk(&self, confidence: ConfidenceLevel) -> f64 {
        -self.quantile(confidence.tail_probability())
    }

    /// Tail average beyond `var`
    #[inline]
    pub fn conditional_var(&self, var: f64, confidence: ConfidenceLevel) -> Result<f64> {
        conditional_var_sorted(&self.sorted, var, confidence)
    }
}
