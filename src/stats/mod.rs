//! Sample statistics of a return series
//!
//! # Examples
//!
//! ```
//! use fundrisk::stats::{mean, percentile, stddev};
//!
//! let returns = [0.01, -0.02, 0.015, -0.005, 0.02];
//! let m = mean(&returns);
//! let s = stddev(&returns);
//! let p5 = percentile(&returns, 0.05);
//! assert!(p5 < m && s > 0.0);
//! ```

pub mod core;
mod descriptive;
pub mod normality;

pub use self::core::{central_moments, mean, minmax, percentile, percentile_sorted, stddev, variance};
pub use descriptive::{compute_stats, excess_kurtosis, sharpe_ratio, skewness, DescriptiveStats};
pub use normality::{normal_qq_points, normality_test, NormalityTest, MIN_NORMALITY_SAMPLE};
