use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

/// VaR/CVaR confidence level in the open interval (0, 1)
///
/// `0.95` is 95% VaR: the loss not exceeded on 95% of periods. The matching
/// left-tail probability is `1 - confidence`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    pub fn new(value: f64) -> Result<Self> {
        if !(value.is_finite() && value > 0.0 && value < 1.0) {
            return Err(RiskError::invalid_parameter(
                "confidence",
                format!("must lie strictly between 0 and 1, got {value}"),
            ));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Left-tail probability `1 - confidence`
    #[inline]
    pub fn tail_probability(self) -> f64 {
        1.0 - self.0
    }

    /// Percentage without trailing zeros, `.` replaced by `_`: "95", "97_5"
    pub fn label(self) -> String {
        let pct = (self.0 * 100.0 * 1e4).round() / 1e4;
        pct.to_string().replace('.', "_")
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = RiskError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.label().replace('_', "."))
    }
}

/// Validate a request's confidence levels, keeping caller order
///
/// The set must be non-empty and free of duplicates.
pub fn confidence_levels(values: &[f64]) -> Result<Vec<ConfidenceLevel>> {
    if values.is_empty() {
        return Err(RiskError::invalid_parameter(
            "confidence_levels",
            "at least one confidence level is required",
        ));
    }
    let mut levels: Vec<ConfidenceLevel> = Vec::with_capacity(values.len());
    for &value in values {
        let level = ConfidenceLevel::new(value)?;
        if levels.contains(&level) {
            return Err(RiskError::invalid_parameter(
                "confidence_levels",
                format!("duplicate confidence level {value}"),
            ));
        }
        levels.push(level);
    }
    Ok(levels)
}
