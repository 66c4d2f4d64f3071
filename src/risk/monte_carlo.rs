//! Monte Carlo VaR
//!
//! Draws `num_simulations` returns from N(μ, σ²) fitted by
//! [`DescriptiveStats`] and reads VaR and CVaR off that one simulated sample
//! with the same interpolation rule as historical VaR.
//!
//! Reproducibility: with a seed the draws (and therefore every estimate) are
//! bit-for-bit identical across runs of the same build. Without one the
//! generator is seeded from OS entropy and results vary between runs, within
//! sampling error of the parametric value.

use rand::Rng;
use tracing::debug;

use crate::config::validate_num_simulations;
use crate::error::Result;
use crate::probability::{normal_draws_with, MonteCarloEngine};
use crate::risk::sample::EmpiricalSample;
use crate::risk::{ConfidenceLevel, RiskModel, VarMethod};
use crate::stats::DescriptiveStats;

#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloVaR {
    draws: EmpiricalSample,
    seed: Option<u64>,
}

impl MonteCarloVaR {
    /// Simulate with a generator private to this call
    pub fn new(stats: &DescriptiveStats, num_simulations: usize, seed: Option<u64>) -> Result<Self> {
        validate_num_simulations(num_simulations)?;
        let mut rng = MonteCarloEngine::new(seed).rng();
        let mut model = Self::simulate(stats, num_simulations, &mut rng)?;
        model.seed = seed;
        Ok(model)
    }

    /// Simulate with a caller-owned generator
    pub fn with_rng<R: Rng + ?Sized>(
        stats: &DescriptiveStats,
        num_simulations: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate_num_simulations(num_simulations)?;
        Self::simulate(stats, num_simulations, rng)
    }

    fn simulate<R: Rng + ?Sized>(
        stats: &DescriptiveStats,
        num_simulations: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let draws = normal_draws_with(rng, stats.mean_daily, stats.std_daily, num_simulations);
        debug!(
            num_simulations,
            mean = stats.mean_daily,
            std = stats.std_daily,
            "simulated normal returns"
        );
        Ok(Self {
            draws: EmpiricalSample::from_unsorted(draws)?,
            seed: None,
        })
    }

    /// Simulated returns, ascending
    #[inline]
    pub fn draws(&self) -> &[f64] {
        self.draws.values()
    }

    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RiskModel for MonteCarloVaR {
    fn method(&self) -> VarMethod {
        VarMethod::MonteCarlo
    }

    #[inline]
    fn value_at_risk(&self, confidence: ConfidenceLevel) -> f64 {
        self.draws.value_at_risk(confidence)
    }

    fn expected_shortfall(&self, confidence: ConfidenceLevel) -> Result<Option<f64>> {
        let var = self.value_at_risk(confidence);
        self.draws.conditional_var(var, confidence).map(Some)
    }
}
