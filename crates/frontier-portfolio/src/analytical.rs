//! Exact N-asset solutions from the inverse covariance matrix.
//!
//! - Minimum variance: `w = Σ⁻¹·1 / (1ᵀ·Σ⁻¹·1)`
//! - Tangency: `w = Σ⁻¹·(μ − rf·1) / (1ᵀ·Σ⁻¹·(μ − rf·1))`
//!
//! Both are unconstrained, so weights can be negative. These paths are
//! opt-in through [`crate::OptimizerConfig`].
//!
//! The tangency normalizer `1ᵀ·Σ⁻¹·(μ − rf·1)` must be positive. At or
//! below zero, `rf` sits at or above the minimum-variance return and the
//! formula yields the minimum-Sharpe point on the lower branch of the
//! frontier, so no tangency portfolio is reported.

use frontier_math::linear_algebra::{invert, mat_vec_multiply};
use frontier_math::{checked_div, checked_sum, MathError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::OptimizerResult;
use crate::metrics::covariance_matrix;
use crate::types::{Asset, CorrelationMatrix};

/// Normalizing sums smaller than this are treated as degenerate.
pub const DEGENERATE_TOLERANCE: Decimal = dec!(0.0000000001);

fn normalize(raw: Vec<Decimal>, total: Decimal) -> OptimizerResult<Vec<Decimal>> {
    Ok(raw
        .into_iter()
        .map(|w| checked_div(w, total))
        .collect::<Result<Vec<_>, _>>()?)
}

/// Minimum-variance weights for any number of assets.
///
/// # Errors
///
/// Fails with a math error when the covariance matrix is singular, e.g.
/// two assets perfectly correlated with equal volatility.
pub fn minimum_variance_weights(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
) -> OptimizerResult<Vec<Decimal>> {
    let inverse = invert(&covariance_matrix(assets, correlation)?)?;
    let ones = vec![Decimal::ONE; assets.len()];
    let raw = mat_vec_multiply(&inverse, &ones)?;

    // 1ᵀΣ⁻¹1 is positive for a positive-definite Σ; a vanishing sum means
    // the matrix was numerically indefinite.
    let total = checked_sum(raw.iter().copied())?;
    if total.abs() < DEGENERATE_TOLERANCE {
        return Err(MathError::SingularMatrix.into());
    }
    normalize(raw, total)
}

/// Tangency weights, or `None` when the excess-return normalizer is not
/// above [`DEGENERATE_TOLERANCE`].
///
/// # Errors
///
/// Fails with a math error when the covariance matrix is singular.
pub fn tangency_weights(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    risk_free_rate: Decimal,
) -> OptimizerResult<Option<Vec<Decimal>>> {
    let inverse = invert(&covariance_matrix(assets, correlation)?)?;
    let excess = assets
        .iter()
        .map(|a| a.excess_return(risk_free_rate))
        .collect::<Result<Vec<_>, _>>()?;
    let raw = mat_vec_multiply(&inverse, &excess)?;

    let total = checked_sum(raw.iter().copied())?;
    if total <= DEGENERATE_TOLERANCE {
        log::debug!("tangency normalizer {total} is not positive at rf {risk_free_rate}");
        return Ok(None);
    }
    normalize(raw, total).map(Some)
}
