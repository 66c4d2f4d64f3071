use crate::error::{Result, RiskError};
use crate::risk::{ConfidenceLevel, HistoricalVaR, RiskModel};

/// Weighted portfolio return for each period
///
/// `asset_returns` is period-major: one row per period, one column per
/// asset, matching `weights`.
pub fn portfolio_returns(weights: &[f64], asset_returns: &[Vec<f64>]) -> Result<Vec<f64>> {
    if weights.is_empty() {
        return Err(RiskError::invalid_parameter(
            "weights",
            "at least one asset weight is required",
        ));
    }
    asset_returns
        .iter()
        .enumerate()
        .map(|(period, row)| {
            if row.len() != weights.len() {
                return Err(RiskError::invalid_parameter(
                    "asset_returns",
                    format!(
                        "period {period} has {} assets, expected {}",
                        row.len(),
                        weights.len()
                    ),
                ));
            }
            Ok(row.iter().zip(weights).map(|(r, w)| r * w).sum())
        })
        .collect()
}

/// Historical VaR of a weighted portfolio
pub fn portfolio_var(
    weights: &[f64],
    asset_returns: &[Vec<f64>],
    confidence: ConfidenceLevel,
) -> Result<f64> {
    let returns = portfolio_returns(weights, asset_returns)?;
    Ok(HistoricalVaR::from_returns(&returns)?.value_at_risk(confidence))
}
