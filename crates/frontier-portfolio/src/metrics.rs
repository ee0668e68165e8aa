//! Portfolio metrics.
//!
//! Pure functions over asset assumptions, a correlation matrix and a
//! weight vector aligned with the asset list:
//!
//! - `expected_return = Σ wᵢ·rᵢ`
//! - `covariance(i, j) = σᵢ·σⱼ·ρᵢⱼ`
//! - `variance = Σᵢ Σⱼ wᵢ·wⱼ·covariance(i, j)`
//! - `volatility = √variance`
//! - `sharpe = (return − rf) / volatility`, or zero when volatility is zero
//!
//! Every operation is checked: an intermediate that leaves the `Decimal`
//! range surfaces as [`OptimizerError::Math`] rather than a panic.

use frontier_math::{
    checked_add, checked_div, checked_mul, checked_product, checked_sub, sqrt_decimal, MathError,
};
use rust_decimal::Decimal;

use crate::error::{OptimizerError, OptimizerResult};
use crate::types::{Asset, CorrelationMatrix};

/// Return, variance and volatility of one weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioMetrics {
    /// Portfolio expected return.
    pub expected_return: Decimal,
    /// Portfolio variance.
    pub variance: Decimal,
    /// Portfolio volatility.
    pub volatility: Decimal,
}

impl PortfolioMetrics {
    /// Sharpe ratio of these metrics against `risk_free_rate`.
    pub fn sharpe(&self, risk_free_rate: Decimal) -> OptimizerResult<Decimal> {
        sharpe_ratio(self.expected_return, self.volatility, risk_free_rate)
    }
}

fn check_weights(assets: &[Asset], weights: &[Decimal]) -> OptimizerResult<()> {
    if assets.len() != weights.len() {
        return Err(OptimizerError::WeightCountMismatch {
            expected: assets.len(),
            actual: weights.len(),
        });
    }
    Ok(())
}

fn check_matrix(assets: &[Asset], correlation: &CorrelationMatrix) -> OptimizerResult<()> {
    if correlation.size() != assets.len() {
        return Err(OptimizerError::MismatchedMatrixSize {
            expected: assets.len(),
            actual: correlation.size(),
        });
    }
    Ok(())
}

/// Weighted expected return.
pub fn expected_return(assets: &[Asset], weights: &[Decimal]) -> OptimizerResult<Decimal> {
    check_weights(assets, weights)?;
    let mut total = Decimal::ZERO;
    for (asset, w) in assets.iter().zip(weights) {
        total = checked_add(total, checked_mul(*w, asset.expected_return)?)?;
    }
    Ok(total)
}

/// Covariance between assets `i` and `j`.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] when `i` or `j` is not an asset
/// index, [`OptimizerError::InvalidCorrelationMatrix`] when the matrix has
/// no `(i, j)` entry and [`MathError::Overflow`] when the product does not
/// fit.
pub fn covariance(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    i: usize,
    j: usize,
) -> OptimizerResult<Decimal> {
    let (Some(a), Some(b)) = (assets.get(i), assets.get(j)) else {
        return Err(MathError::invalid_input(format!(
            "asset index ({i}, {j}) out of range for {} assets",
            assets.len()
        ))
        .into());
    };
    let rho = correlation.get(i, j).ok_or_else(|| {
        OptimizerError::invalid_matrix(format!("missing entry at ({i}, {j})"))
    })?;
    Ok(checked_product(&[a.volatility, b.volatility, rho])?)
}

/// Full NxN covariance matrix.
pub fn covariance_matrix(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
) -> OptimizerResult<Vec<Vec<Decimal>>> {
    check_matrix(assets, correlation)?;
    let n = assets.len();
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| covariance(assets, correlation, i, j))
                .collect::<OptimizerResult<Vec<_>>>()
        })
        .collect()
}

/// Portfolio variance via the full covariance double sum.
pub fn portfolio_variance(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    weights: &[Decimal],
) -> OptimizerResult<Decimal> {
    check_weights(assets, weights)?;
    check_matrix(assets, correlation)?;
    let n = assets.len();
    let mut variance = Decimal::ZERO;
    for i in 0..n {
        for j in 0..n {
            let cov = covariance(assets, correlation, i, j)?;
            variance = checked_add(variance, checked_product(&[weights[i], weights[j], cov])?)?;
        }
    }
    Ok(variance)
}

/// Square root of a variance.
///
/// Decimal rounding can leave a perfectly hedged variance a hair below
/// zero; such values are floored at zero before the root is taken.
pub fn volatility_from_variance(variance: Decimal) -> OptimizerResult<Decimal> {
    Ok(sqrt_decimal(variance.max(Decimal::ZERO))?)
}

/// Portfolio volatility.
pub fn portfolio_volatility(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    weights: &[Decimal],
) -> OptimizerResult<Decimal> {
    volatility_from_variance(portfolio_variance(assets, correlation, weights)?)
}

/// Sharpe ratio, or zero when `volatility` is not positive.
pub fn sharpe_ratio(
    expected_return: Decimal,
    volatility: Decimal,
    risk_free_rate: Decimal,
) -> OptimizerResult<Decimal> {
    if volatility > Decimal::ZERO {
        Ok(checked_div(
            checked_sub(expected_return, risk_free_rate)?,
            volatility,
        )?)
    } else {
        Ok(Decimal::ZERO)
    }
}

/// Return, variance and volatility in one pass.
pub fn evaluate(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    weights: &[Decimal],
) -> OptimizerResult<PortfolioMetrics> {
    let expected_return = expected_return(assets, weights)?;
    let variance = portfolio_variance(assets, correlation, weights)?;
    let volatility = volatility_from_variance(variance)?;
    Ok(PortfolioMetrics {
        expected_return,
        variance,
        volatility,
    })
}
