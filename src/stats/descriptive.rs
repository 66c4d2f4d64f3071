//! Descriptive statistics of a return series
//!
//! Computed once per analysis and shared by every VaR method, so parametric
//! and Monte Carlo VaR always see the same μ and σ that are reported here.
//!
//! # Estimators
//!
//! - mean: arithmetic mean
//! - std: sample standard deviation (divisor `n - 1`)
//! - skewness: adjusted Fisher–Pearson `G1 = g1 · √(n(n-1)) / (n-2)`
//! - excess kurtosis: bias-adjusted `G2 = ((n+1)·g2 + 6)·(n-1) / ((n-2)(n-3))`
//!
//! with `g1 = m3 / m2^1.5` and `g2 = m4 / m2² - 3` from population central
//! moments. These are the estimators Excel's `SKEW`/`KURT` report.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::data::{ReturnKind, ReturnSeries};
use crate::error::{Result, RiskError};
use crate::stats::core::{central_moments, minmax, CentralMoments};
use crate::stats::normality::{omnibus, MIN_NORMALITY_SAMPLE};

/// Population variance at or below this is treated as exactly zero
const VARIANCE_FLOOR: f64 = 1e-24;

#[inline]
pub(crate) fn is_degenerate_variance(m2: f64) -> bool {
    m2 <= VARIANCE_FLOOR
}

/// Summary statistics for one return series
///
/// `None` marks a statistic that is undefined for this series (zero
/// variance, or too few observations), never a numeric placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub sample_size: usize,
    pub mean_daily: f64,
    pub std_daily: f64,
    pub mean_monthly: f64,
    pub std_monthly: f64,
    pub mean_annualized: f64,
    pub std_annualized: f64,
    /// `(1 + mean)^P - 1` for simple returns, `exp(mean * P) - 1` for log
    pub compound_annual_return: f64,
    pub skewness: Option<f64>,
    pub excess_kurtosis: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub normality_statistic: Option<f64>,
    pub normality_p_value: Option<f64>,
    pub min_return: f64,
    pub max_return: f64,
}

impl DescriptiveStats {
    /// True when every return is identical
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.std_daily == 0.0
    }
}

/// Compute all descriptive statistics for a prepared series
pub fn compute_stats(series: &ReturnSeries, config: &EngineConfig) -> Result<DescriptiveStats> {
    let data = series.values();
    let n = data.len();
    if n < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            actual: n,
        });
    }

    let moments = central_moments(data);
    let degenerate = is_degenerate_variance(moments.m2);
    if degenerate {
        warn!(n, mean = moments.mean, "return series has zero variance");
    }

    let mean_daily = moments.mean;
    let std_daily = if degenerate {
        0.0
    } else {
        (moments.m2 * n as f64 / (n - 1) as f64).sqrt()
    };

    let mean_annualized = mean_daily * config.periods_per_year;
    let std_annualized = std_daily * config.periods_per_year.sqrt();

    let sharpe_ratio = if degenerate {
        None
    } else {
        Some(sharpe_ratio(mean_annualized, std_annualized, config.risk_free_rate))
    };

    let normality = if degenerate || n < MIN_NORMALITY_SAMPLE {
        debug!(n, "normality test not applicable");
        None
    } else {
        match omnibus(&moments) {
            Ok(test) => Some(test),
            Err(err) => {
                debug!(n, %err, "normality test undefined for this sample");
                None
            }
        }
    };

    let (min_return, max_return) = minmax(data);

    let stats = DescriptiveStats {
        sample_size: n,
        mean_daily,
        std_daily,
        mean_monthly: mean_daily * config.periods_per_month,
        std_monthly: std_daily * config.periods_per_month.sqrt(),
        mean_annualized,
        std_annualized,
        compound_annual_return: compound_annual_return(
            mean_daily,
            series.kind(),
            config.periods_per_year,
        ),
        skewness: adjusted_skewness(&moments).ok(),
        excess_kurtosis: adjusted_excess_kurtosis(&moments).ok(),
        sharpe_ratio,
        normality_statistic: normality.map(|t| t.statistic),
        normality_p_value: normality.map(|t| t.p_value),
        min_return,
        max_return,
    };

    debug!(
        n,
        mean = stats.mean_daily,
        std = stats.std_daily,
        skew = ?stats.skewness,
        kurt = ?stats.excess_kurtosis,
        "descriptive statistics"
    );
    Ok(stats)
}

/// Growth over one year of average periods, as a simple return
///
/// Simple returns compound as `(1 + r)^P - 1`; log returns add, giving
/// `exp(r * P) - 1`.
#[inline]
fn compound_annual_return(mean: f64, kind: ReturnKind, periods_per_year: f64) -> f64 {
    match kind {
        ReturnKind::Simple => (1.0 + mean).powf(periods_per_year) - 1.0,
        ReturnKind::Log => (mean * periods_per_year).exp_m1(),
    }
}

/// `(annual mean - risk free) / annual std`
#[inline]
pub fn sharpe_ratio(mean_annualized: f64, std_annualized: f64, risk_free_rate: f64) -> f64 {
    (mean_annualized - risk_free_rate) / std_annualized
}

/// Adjusted Fisher–Pearson sample skewness
pub fn skewness(data: &[f64]) -> Result<f64> {
    adjusted_skewness(&central_moments(data))
}

/// Bias-adjusted sample excess kurtosis (0 for a normal)
pub fn excess_kurtosis(data: &[f64]) -> Result<f64> {
    adjusted_excess_kurtosis(&central_moments(data))
}

fn adjusted_skewness(m: &CentralMoments) -> Result<f64> {
    if m.n < 3 {
        return Err(RiskError::precondition(
            "skewness",
            format!("requires at least 3 observations, got {}", m.n),
        ));
    }
    if is_degenerate_variance(m.m2) {
        return Err(RiskError::precondition("skewness", "sample variance is zero"));
    }
    let n = m.n as f64;
    Ok(m.g1() * (n * (n - 1.0)).sqrt() / (n - 2.0))
}

fn adjusted_excess_kurtosis(m: &CentralMoments) -> Result<f64> {
    if m.n < 4 {
        return Err(RiskError::precondition(
            "excess_kurtosis",
            format!("requires at least 4 observations, got {}", m.n),
        ));
    }
    if is_degenerate_variance(m.m2) {
        return Err(RiskError::precondition(
            "excess_kurtosis",
            "sample variance is zero",
        ));
    }
    let n = m.n as f64;
    let g2 = m.b2() - 3.0;
    Ok(((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0)))
}
