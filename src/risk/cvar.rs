//! Conditional VaR (expected shortfall)
//!
//! The tail average is always taken over the sample the paired VaR came
//! from: historical CVaR over observed returns, Monte Carlo CVaR over that
//! run's draws.

use crate::error::{Result, RiskError};
use crate::risk::ConfidenceLevel;

/// Average loss over observations at or below the VaR threshold
///
/// `var` uses the loss convention (positive = loss), so the tail is every
/// return `<= -var`. The result is reported with the same convention. An
/// empty tail is an error, never a zero.
pub fn conditional_var(sample: &[f64], var: f64, confidence: ConfidenceLevel) -> Result<f64> {
    let threshold = -var;
    let (sum, count) = sample
        .iter()
        .filter(|&&r| r <= threshold)
        .fold((0.0, 0usize), |(s, c), &r| (s + r, c + 1));

    if count == 0 {
        return Err(RiskError::EmptyTail {
            confidence: confidence.value(),
            threshold,
        });
    }
    Ok(-sum / count as f64)
}

/// Same as [`conditional_var`] for ascending data, without a full scan
pub(crate) fn conditional_var_sorted(
    sorted: &[f64],
    var: f64,
    confidence: ConfidenceLevel,
) -> Result<f64> {
    let threshold = -var;
    let count = sorted.partition_point(|&r| r <= threshold);
    if count == 0 {
        return Err(RiskError::EmptyTail {
            confidence: confidence.value(),
            threshold,
        });
    }
    let sum: f64 = sorted[..count].iter().sum();
    Ok(-sum / count as f64)
}
