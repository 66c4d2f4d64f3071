//! D'Agostino–Pearson omnibus normality test
//!
//! K² = Z(√b1)² + Z(b2)², where Z(√b1) is D'Agostino's (1971) transform of
//! the sample skewness and Z(b2) is the Anscombe–Glynn (1983) transform of
//! the sample kurtosis. Under normality K² is approximately χ² with two
//! degrees of freedom, so the p-value is `exp(-K²/2)`.
//!
//! Both transforms take the *biased* moment ratios `g1 = m3/m2^1.5` and
//! `b2 = m4/m2²`, not the bias-adjusted estimators reported in
//! [`DescriptiveStats`](super::DescriptiveStats).

use serde::Serialize;

use crate::error::{Result, RiskError};
use crate::probability::utils::{chi_squared_sf_df2, normal_quantile};
use crate::stats::core::{central_moments, CentralMoments};
use crate::stats::descriptive::is_degenerate_variance;

/// The kurtosis transform is unreliable below this sample size
pub const MIN_NORMALITY_SAMPLE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalityTest {
    /// K² statistic
    pub statistic: f64,
    pub p_value: f64,
    pub skewness_z: f64,
    pub kurtosis_z: f64,
}

impl NormalityTest {
    /// Whether normality is rejected at the given significance level
    #[inline]
    pub fn rejects_normality(&self, significance: f64) -> bool {
        self.p_value < significance
    }
}

/// Run the omnibus test on raw returns
pub fn normality_test(data: &[f64]) -> Result<NormalityTest> {
    let n = data.len();
    if n < MIN_NORMALITY_SAMPLE {
        return Err(RiskError::precondition(
            "normality_test",
            format!("requires at least {MIN_NORMALITY_SAMPLE} observations, got {n}"),
        ));
    }
    let moments = central_moments(data);
    if is_degenerate_variance(moments.m2) {
        return Err(RiskError::precondition(
            "normality_test",
            "sample variance is zero",
        ));
    }
    omnibus(&moments)
}

pub(crate) fn omnibus(moments: &CentralMoments) -> Result<NormalityTest> {
    let skewness_z = skewness_z(moments.g1(), moments.n as f64);
    let kurtosis_z = kurtosis_z(moments.b2(), moments.n as f64)?;
    let statistic = skewness_z * skewness_z + kurtosis_z * kurtosis_z;

    Ok(NormalityTest {
        statistic,
        p_value: chi_squared_sf_df2(statistic),
        skewness_z,
        kurtosis_z,
    })
}

fn skewness_z(g1: f64, n: f64) -> f64 {
    let y = g1 * ((n + 1.0) * (n + 3.0) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    delta * (y / alpha).asinh()
}

fn kurtosis_z(b2: f64, n: f64) -> Result<f64> {
    let expected = 3.0 * (n - 1.0) / (n + 1.0);
    let var_b2 = 24.0 * n * (n - 2.0) * (n - 3.0)
        / ((n + 1.0) * (n + 1.0) * (n + 3.0) * (n + 5.0));
    let x = (b2 - expected) / var_b2.sqrt();

    let sqrt_beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
        * (6.0 * (n + 3.0) * (n + 5.0) / (n * (n - 2.0) * (n - 3.0))).sqrt();
    let a = 6.0
        + 8.0 / sqrt_beta1 * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());

    let term1 = 1.0 - 2.0 / (9.0 * a);
    let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
    if denom == 0.0 {
        return Err(RiskError::precondition(
            "kurtosis_test",
            "Anscombe-Glynn transform undefined for this kurtosis",
        ));
    }
    let term2 = denom.signum() * ((1.0 - 2.0 / a) / denom.abs()).cbrt();
    Ok((term1 - term2) / (2.0 / (9.0 * a)).sqrt())
}

/// Normal Q-Q plot coordinates
///
/// Pairs theoretical standard-normal quantiles at evenly spaced probabilities
/// in `[0.01, 0.99]` with the ascending sample. Useful for a caller that
/// charts distribution shape next to the test result.
pub fn normal_qq_points(data: &[f64]) -> Vec<(f64, f64)> {
    let n = data.len();
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let step = if n > 1 { 0.98 / (n - 1) as f64 } else { 0.0 };
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, v)| (normal_quantile(0.01 + step * i as f64), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::MonteCarloEngine;

    #[test]
    fn test_normal_sample_is_not_rejected() {
        let data = MonteCarloEngine::new(Some(3)).normal_draws(0.0, 1.0, 2_000);
        let test = normality_test(&data).unwrap();
        assert!(test.statistic >= 0.0);
        assert!(test.p_value > 0.001, "p={}", test.p_value);
        assert!((test.p_value - (-test.statistic / 2.0).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_heavy_tailed_sample_is_rejected() {
        // Mostly quiet days with a few large shocks
        let mut data = Vec::with_capacity(200);
        for i in 0..200 {
            let r = match i % 50 {
                0 => -0.15,
                25 => 0.12,
                _ => ((i as f64) * 0.7).sin() * 0.002,
            };
            data.push(r);
        }
        let test = normality_test(&data).unwrap();
        assert!(test.kurtosis_z > 3.0);
        assert!(test.rejects_normality(0.05));
    }

    #[test]
    fn test_requires_twenty_observations() {
        let data: Vec<f64> = (0..19).map(|i| (i as f64).sin()).collect();
        assert!(matches!(
            normality_test(&data),
            Err(RiskError::StatisticalPrecondition { statistic: "normality_test", .. })
        ));
    }

    #[test]
    fn test_rejects_constant_series() {
        assert!(matches!(
            normality_test(&[0.01; 40]),
            Err(RiskError::StatisticalPrecondition { .. })
        ));
    }

    #[test]
    fn test_symmetric_sample_has_zero_skew_z() {
        let mut data: Vec<f64> = (1..=15).map(|i| i as f64 * 0.001).collect();
        data.extend((1..=15).map(|i| -(i as f64) * 0.001));
        let moments = central_moments(&data);
        let test = omnibus(&moments).unwrap();
        assert!(test.skewness_z.abs() < 1e-9);
    }

    #[test]
    fn test_qq_points() {
        let points = normal_qq_points(&[0.03, -0.01, 0.0]);
        assert_eq!(points.len(), 3);
        assert!((points[0].0 - normal_quantile(0.01)).abs() < 1e-12);
        assert!(points[1].0.abs() < 1e-12);
        assert!((points[2].0 - normal_quantile(0.99)).abs() < 1e-12);
        assert_eq!(points[0].1, -0.01);
        assert_eq!(points[2].1, 0.03);
        assert!(normal_qq_points(&[]).is_empty());
    }
}
