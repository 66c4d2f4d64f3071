//! VaR backtesting with Kupiec's proportion-of-failures test
//!
//! A violation is a period whose return fell below `-VaR`, i.e. the realised
//! loss exceeded the forecast. Under a correct model violations arrive at
//! rate `1 - confidence`; the likelihood ratio
//!
//! ```text
//! LR = -2 ln[(1-p)^(n-x) p^x] + 2 ln[(1-x/n)^(n-x) (x/n)^x]
//! ```
//!
//! is asymptotically χ²(1). `0 · ln 0` is taken as 0, so zero violations
//! and all-violations both produce a finite statistic.

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, RiskError};
use crate::probability::utils::chi_squared_sf_df1;
use crate::risk::ConfidenceLevel;

/// Kupiec test significance used when the caller has no preference
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BacktestReport {
    pub observations: usize,
    pub violations: usize,
    pub violation_rate: f64,
    pub expected_violations: f64,
    pub kupiec_statistic: f64,
    pub kupiec_p_value: f64,
    /// The test does not reject correct coverage at the chosen significance
    pub model_adequate: bool,
}

/// Compare realised returns with the VaR forecast for each period
pub fn backtest_var(
    returns: &[f64],
    var_estimates: &[f64],
    confidence: ConfidenceLevel,
    significance: f64,
) -> Result<BacktestReport> {
    if returns.len() != var_estimates.len() {
        return Err(RiskError::invalid_parameter(
            "var_estimates",
            format!(
                "length {} does not match {} returns",
                var_estimates.len(),
                returns.len()
            ),
        ));
    }
    if returns.is_empty() {
        return Err(RiskError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if !(significance > 0.0 && significance < 1.0) {
        return Err(RiskError::invalid_parameter(
            "significance",
            format!("must lie strictly between 0 and 1, got {significance}"),
        ));
    }

    let n = returns.len();
    let violations = returns
        .iter()
        .zip(var_estimates)
        .filter(|(&r, &var)| r < -var)
        .count();

    let p = confidence.tail_probability();
    let kupiec_statistic = kupiec_lr(n, violations, p);
    let kupiec_p_value = chi_squared_sf_df1(kupiec_statistic);

    let report = BacktestReport {
        observations: n,
        violations,
        violation_rate: violations as f64 / n as f64,
        expected_violations: p * n as f64,
        kupiec_statistic,
        kupiec_p_value,
        model_adequate: kupiec_p_value > significance,
    };
    debug!(
        n,
        violations,
        lr = kupiec_statistic,
        p_value = kupiec_p_value,
        "VaR backtest"
    );
    Ok(report)
}

/// `x · ln(y)` with the `0 · ln 0 = 0` convention
#[inline]
fn xlogy(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * y.ln()
    }
}

fn kupiec_lr(n: usize, x: usize, p: f64) -> f64 {
    let nf = n as f64;
    let xf = x as f64;
    let observed = xf / nf;

    let log_null = xlogy(nf - xf, 1.0 - p) + xlogy(xf, p);
    let log_alt = xlogy(nf - xf, 1.0 - observed) + xlogy(xf, observed);
    (2.0 * (log_alt - log_null)).max(0.0)
}
