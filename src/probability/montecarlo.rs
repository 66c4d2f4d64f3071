//! Monte Carlo draws from a fitted normal return model
//!
//! The generator is always owned by the call that uses it: either a fresh
//! [`StdRng`] built from [`MonteCarloEngine::seed`], or a caller-supplied
//! `Rng` passed by mutable reference. Nothing is global, so concurrent
//! analyses never share random state.
//!
//! # Example
//!
//! ```
//! use fundrisk::probability::montecarlo::MonteCarloEngine;
//!
//! // Fixed seed: identical draws every run
//! let mc = MonteCarloEngine::new(Some(42));
//! let a = mc.normal_draws(0.0005, 0.012, 10_000);
//! let b = mc.normal_draws(0.0005, 0.012, 10_000);
//! assert_eq!(a, b);
//! ```

use rand::prelude::*;
use rand_distr::StandardNormal;

/// Monte Carlo simulation engine
///
/// # Fields
///
/// - `seed`: Optional seed for reproducible simulations. `None` seeds from
///   OS entropy, so repeated runs differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarloEngine {
    pub seed: Option<u64>,
}

impl MonteCarloEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Fresh generator for one simulation run
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }

    /// `n` independent draws from N(mean, std²)
    pub fn normal_draws(&self, mean: f64, std: f64, n: usize) -> Vec<f64> {
        let mut rng = self.rng();
        normal_draws_with(&mut rng, mean, std, n)
    }
}

/// `n` independent draws from N(mean, std²) using the caller's generator
pub fn normal_draws_with<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64, n: usize) -> Vec<f64> {
    let mut draws = Vec::with_capacity(n);
    for _ in 0..n {
        let z: f64 = StandardNormal.sample(rng);
        draws.push(mean + std * z);
    }
    draws
}
