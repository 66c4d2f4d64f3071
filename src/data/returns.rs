//! Price series to return series conversion
//!
//! A [`ReturnSeries`] is the only input every risk method accepts. It is
//! built once per analysis, validated on construction and never mutated
//! afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RiskError};

/// One closing-price observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Period-over-period return convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    /// `(P_t - P_{t-1}) / P_{t-1}`
    #[default]
    Simple,
    /// `ln(P_t / P_{t-1})`
    Log,
}

impl ReturnKind {
    #[inline]
    fn compute(self, prev: f64, curr: f64) -> f64 {
        match self {
            ReturnKind::Simple => (curr - prev) / prev,
            ReturnKind::Log => (curr / prev).ln(),
        }
    }
}

/// Chronologically ordered periodic returns
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    returns: Vec<f64>,
    kind: ReturnKind,
}

impl ReturnSeries {
    /// Wrap pre-computed simple returns
    ///
    /// Fails with `InsufficientData` below `min_observations` and with
    /// `InvalidParameter` if any return is NaN or infinite.
    pub fn new(returns: Vec<f64>, min_observations: usize) -> Result<Self> {
        Self::with_kind(returns, ReturnKind::Simple, min_observations)
    }

    pub fn with_kind(returns: Vec<f64>, kind: ReturnKind, min_observations: usize) -> Result<Self> {
        if returns.len() < min_observations {
            return Err(RiskError::InsufficientData {
                required: min_observations,
                actual: returns.len(),
            });
        }
        if let Some(pos) = returns.iter().position(|r| !r.is_finite()) {
            return Err(RiskError::invalid_parameter(
                "returns",
                format!("non-finite return {} at index {}", returns[pos], pos),
            ));
        }
        Ok(Self { returns, kind })
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.returns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    #[inline]
    pub fn kind(&self) -> ReturnKind {
        self.kind
    }

    /// Ascending copy of the returns; the series itself keeps its order
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.returns.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }
}

/// Build a return series from closing prices
///
/// `min_observations` counts returns, so `min_observations + 1` prices are
/// required. Prices must be strictly positive and finite, and dates strictly
/// increasing.
pub fn prepare(
    prices: &[PricePoint],
    kind: ReturnKind,
    min_observations: usize,
) -> Result<ReturnSeries> {
    let required_prices = min_observations + 1;
    if prices.len() < required_prices {
        return Err(RiskError::InsufficientData {
            required: required_prices,
            actual: prices.len(),
        });
    }

    for (index, point) in prices.iter().enumerate() {
        if !point.close.is_finite() || point.close <= 0.0 {
            return Err(RiskError::InvalidPrice {
                index,
                reason: format!("closing price must be positive and finite, got {}", point.close),
            });
        }
    }

    for (index, pair) in prices.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(RiskError::InvalidPrice {
                index: index + 1,
                reason: format!(
                    "dates not strictly increasing: {} follows {}",
                    pair[1].date, pair[0].date
                ),
            });
        }
    }

    let returns: Vec<f64> = prices
        .windows(2)
        .map(|pair| kind.compute(pair[0].close, pair[1].close))
        .collect();

    debug!(
        prices = prices.len(),
        returns = returns.len(),
        ?kind,
        "prepared return series"
    );

    ReturnSeries::with_kind(returns, kind, min_observations)
}
