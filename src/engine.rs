//! One analysis call, end to end
//!
//! The engine holds only its validated config. Every call builds its own
//! series, statistics, models and random generator, so a shared
//! `RiskEngine` is safe to use from many threads at once.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::EngineConfig;
use crate::data::{prepare, PricePoint, ReturnKind, ReturnSeries};
use crate::error::{Result, RiskError};
use crate::probability::MonteCarloEngine;
use crate::risk::{
    confidence_levels, HistoricalVaR, MonteCarloVaR, ParametricVaR, RiskEstimate, RiskModel,
    VarMethod,
};
use crate::stats::{compute_stats, DescriptiveStats};

/// Everything one analysis produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub stats: DescriptiveStats,
    /// Method-major (parametric, historical, Monte Carlo), then request order
    pub estimates: Vec<RiskEstimate>,
    pub return_kind: ReturnKind,
    pub num_simulations: usize,
    pub seed: Option<u64>,
}

impl RiskReport {
    pub fn estimate(&self, method: VarMethod, confidence: f64) -> Option<&RiskEstimate> {
        self.estimates
            .iter()
            .find(|e| e.method == method && e.confidence.value() == confidence)
    }

    pub fn estimates_for(&self, method: VarMethod) -> impl Iterator<Item = &RiskEstimate> {
        self.estimates.iter().filter(move |e| e.method == method)
    }

    /// Flat `(name, value)` rows for CSV-style export
    ///
    /// Names look like `historical_var_95` / `monte_carlo_cvar_99`. Statistics
    /// that are not applicable to the series are left out rather than
    /// written as zero.
    pub fn metric_rows(&self) -> Vec<(String, f64)> {
        let mut rows = Vec::with_capacity(self.estimates.len() * 2 + 16);
        for e in &self.estimates {
            let label = e.confidence.label();
            rows.push((format!("{}_var_{}", e.method.as_str(), label), e.var));
            if let Some(cvar) = e.cvar {
                rows.push((format!("{}_cvar_{}", e.method.as_str(), label), cvar));
            }
        }

        let s = &self.stats;
        let required = [
            ("daily_mean", s.mean_daily),
            ("daily_std", s.std_daily),
            ("monthly_mean", s.mean_monthly),
            ("monthly_std", s.std_monthly),
            ("annual_mean", s.mean_annualized),
            ("annual_std", s.std_annualized),
            ("annual_return", s.compound_annual_return),
            ("min_return", s.min_return),
            ("max_return", s.max_return),
            ("data_points", s.sample_size as f64),
        ];
        rows.extend(required.iter().map(|(k, v)| (k.to_string(), *v)));

        let optional = [
            ("skewness", s.skewness),
            ("excess_kurtosis", s.excess_kurtosis),
            ("sharpe_ratio", s.sharpe_ratio),
            ("normality_statistic", s.normality_statistic),
            ("normality_p_value", s.normality_p_value),
        ];
        rows.extend(
            optional
                .iter()
                .filter_map(|(k, v)| v.map(|v| (k.to_string(), v))),
        );
        rows
    }
}

#[derive(Debug, Clone)]
pub struct RiskEngine {
    config: EngineConfig,
}

impl RiskEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Turn prices into returns using the configured convention
    pub fn prepare(&self, prices: &[PricePoint]) -> Result<ReturnSeries> {
        prepare(prices, self.config.return_kind, self.config.min_observations)
    }

    #[instrument(level = "debug", skip_all, fields(prices = prices.len()))]
    pub fn analyze_prices(&self, prices: &[PricePoint], confidence: &[f64]) -> Result<RiskReport> {
        let series = self.prepare(prices)?;
        self.analyze_returns(&series, confidence)
    }

    /// Analyze with the configured seed (or entropy when unset)
    pub fn analyze_returns(&self, series: &ReturnSeries, confidence: &[f64]) -> Result<RiskReport> {
        let mut rng = MonteCarloEngine::new(self.config.seed).rng();
        let mut report = self.analyze_returns_with_rng(series, confidence, &mut rng)?;
        report.seed = self.config.seed;
        Ok(report)
    }

    /// Analyze with a caller-owned generator for the Monte Carlo step
    #[instrument(level = "debug", skip_all, fields(n = series.len()))]
    pub fn analyze_returns_with_rng<R: Rng + ?Sized>(
        &self,
        series: &ReturnSeries,
        confidence: &[f64],
        rng: &mut R,
    ) -> Result<RiskReport> {
        let started = Instant::now();

        if series.len() < self.config.min_observations {
            return Err(RiskError::InsufficientData {
                required: self.config.min_observations,
                actual: series.len(),
            });
        }
        let levels = confidence_levels(confidence)?;

        let stats = compute_stats(series, &self.config)?;
        let parametric = ParametricVaR::from_stats(&stats);
        let historical = HistoricalVaR::new(series)?;
        let monte_carlo = MonteCarloVaR::with_rng(&stats, self.config.num_simulations, rng)?;

        let models: [&dyn RiskModel; 3] = [&parametric, &historical, &monte_carlo];
        let mut estimates = Vec::with_capacity(models.len() * levels.len());
        for model in models {
            for &level in &levels {
                estimates.push(model.estimate(level)?);
            }
        }

        info!(
            n = stats.sample_size,
            levels = levels.len(),
            estimates = estimates.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "risk analysis complete"
        );

        Ok(RiskReport {
            stats,
            estimates,
            return_kind: series.kind(),
            num_simulations: self.config.num_simulations,
            seed: None,
        })
    }
}
