//! Historical-simulation VaR
//!
//! VaR is the empirical `1 - confidence` quantile of observed returns with
//! linear interpolation between the two bracketing order statistics (rank
//! `p · (n - 1)`). Works on a sorted copy; the series keeps its order.

use crate::data::ReturnSeries;
use crate::error::Result;
use crate::risk::sample::EmpiricalSample;
use crate::risk::{ConfidenceLevel, RiskModel, VarMethod};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalVaR {
    sample: EmpiricalSample,
}

impl HistoricalVaR {
    pub fn new(series: &ReturnSeries) -> Result<Self> {
        Ok(Self {
            sample: EmpiricalSample::from_unsorted(series.sorted())?,
        })
    }

    /// Raw returns without series validation, e.g. portfolio P&L
    pub fn from_returns(returns: &[f64]) -> Result<Self> {
        Ok(Self {
            sample: EmpiricalSample::from_unsorted(returns.to_vec())?,
        })
    }

    #[inline]
    pub fn sample(&self) -> &EmpiricalSample {
        &self.sample
    }
}

impl RiskModel for HistoricalVaR {
    fn method(&self) -> VarMethod {
        VarMethod::Historical
    }

    #[inline]
    fn value_at_risk(&self, confidence: ConfidenceLevel) -> f64 {
        self.sample.value_at_risk(confidence)
    }

    fn expected_shortfall(&self, confidence: ConfidenceLevel) -> Result<Option<f64>> {
        let var = self.value_at_risk(confidence);
        self.sample.conditional_var(var, confidence).map(Some)
    }
}
