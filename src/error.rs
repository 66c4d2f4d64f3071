//! Error types for the risk engine
//!
//! Every failure is local to a single analysis call. Nothing here is ever
//! turned into a default numeric value: a VaR of `0.0` always means a
//! computed zero, never "could not compute".

use thiserror::Error;

/// Errors produced by the risk engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Non-positive, non-finite or out-of-order price data
    #[error("invalid price at index {index}: {reason}")]
    InvalidPrice { index: usize, reason: String },

    /// Sample below the engine's minimum size
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A statistic was requested where it is undefined
    #[error("statistical precondition failed for {statistic}: {reason}")]
    StatisticalPrecondition {
        statistic: &'static str,
        reason: String,
    },

    /// Out-of-range confidence level, simulation count or config value
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// No observations fell at or beyond the VaR threshold
    #[error("empty tail at confidence {confidence}: no observations at or below {threshold}")]
    EmptyTail { confidence: f64, threshold: f64 },
}

impl RiskError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        RiskError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(statistic: &'static str, reason: impl Into<String>) -> Self {
        RiskError::StatisticalPrecondition {
            statistic,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
