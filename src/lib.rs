//! # Fundrisk
//!
//! Value-at-Risk and Conditional VaR for a single fund's daily price history.
//!
//! ## Design Philosophy
//!
//! - **f64 only**: Financial precision is non-negotiable
//! - **Losses are positive**: VaR/CVaR are signed losses, never clamped
//! - **Fail loudly**: bad prices, short series and degenerate statistics are errors
//! - **Reproducible**: Monte Carlo draws come from a seed or an injected generator
//!
//! ## Modules
//!
//! - `data`: Price validation and return construction
//! - `stats`: Moments, annualization, Sharpe, D'Agostino-Pearson normality
//! - `probability`: Normal pdf/cdf/quantile, seeded normal draws
//! - `risk`: Parametric, historical and Monte Carlo VaR, CVaR, Kupiec backtest
//! - `engine`: One call from prices to a full [`RiskReport`](engine::RiskReport)
//! - `config` / `error` / `logging`: Ambient plumbing
//!
//! ## Example
//!
//! ```rust
//! use fundrisk::prelude::*;
//!
//! let returns: Vec<f64> = (0..250)
//!     .map(|i| 0.0004 + ((i as f64) * 0.7).sin() * 0.01)
//!     .collect();
//! let series = ReturnSeries::new(returns, 30).unwrap();
//!
//! let engine = RiskEngine::new(EngineConfig::default().with_seed(7)).unwrap();
//! let report = engine.analyze_returns(&series, &[0.95, 0.99]).unwrap();
//!
//! let hist = report.estimate(VarMethod::Historical, 0.99).unwrap();
//! assert!(hist.cvar.unwrap() >= hist.var);
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod logging;
pub mod probability;
pub mod risk;
pub mod stats;

/// Common imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::data::{prepare, PricePoint, ReturnKind, ReturnSeries};
    pub use crate::engine::{RiskEngine, RiskReport};
    pub use crate::error::{Result, RiskError};

    pub use crate::stats::{compute_stats, normality_test, DescriptiveStats, NormalityTest};

    pub use crate::risk::{
        backtest_var,
        conditional_var,
        confidence_levels,
        portfolio_var,
        BacktestReport,
        ConfidenceLevel,
        HistoricalVaR,
        MonteCarloVaR,
        ParametricVaR,
        RiskEstimate,
        RiskModel,
        VarMethod,
    };
}
