//! Closed-form two-asset solutions.
//!
//! With weights `w_A + w_B = 1` the portfolio variance is
//!
//! `σp² = w_A²σ_A² + w_B²σ_B² + 2·w_A·w_B·σ_A·σ_B·ρ`
//!
//! and the minimum-variance, tangency and target-return portfolios all
//! have explicit solutions. Weights are unconstrained: a solution may be
//! short one asset.

use frontier_math::{
    checked_add, checked_div, checked_mul, checked_product, checked_sub, checked_sum,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{OptimizerError, OptimizerResult};
use crate::metrics::{sharpe_ratio, volatility_from_variance};
use crate::types::Asset;

const TWO: Decimal = dec!(2);

/// Output of the two-asset variance minimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoAssetMinimum {
    /// Weight of the first asset.
    pub weight_a: Decimal,
    /// Weight of the second asset.
    pub weight_b: Decimal,
    /// Volatility at the minimum.
    pub portfolio_volatility: Decimal,
}

/// A fully evaluated two-asset portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoAssetPortfolio {
    /// Weight of the first asset.
    pub weight_a: Decimal,
    /// Weight of the second asset.
    pub weight_b: Decimal,
    /// Portfolio expected return.
    pub expected_return: Decimal,
    /// Portfolio volatility.
    pub volatility: Decimal,
    /// Sharpe ratio, when a risk-free rate was involved.
    pub sharpe_ratio: Option<Decimal>,
}

impl TwoAssetPortfolio {
    /// The weights as a slice-friendly array `[w_A, w_B]`.
    #[must_use]
    pub fn weights(&self) -> [Decimal; 2] {
        [self.weight_a, self.weight_b]
    }
}

/// Two-asset portfolio variance.
pub fn two_asset_variance(
    a: &Asset,
    b: &Asset,
    rho: Decimal,
    weight_a: Decimal,
) -> OptimizerResult<Decimal> {
    let weight_b = checked_sub(Decimal::ONE, weight_a)?;
    Ok(checked_sum([
        checked_product(&[weight_a, weight_a, a.variance()?])?,
        checked_product(&[weight_b, weight_b, b.variance()?])?,
        checked_product(&[TWO, weight_a, weight_b, a.volatility, b.volatility, rho])?,
    ])?)
}

/// Two-asset portfolio expected return.
pub fn two_asset_return(a: &Asset, b: &Asset, weight_a: Decimal) -> OptimizerResult<Decimal> {
    let weight_b = checked_sub(Decimal::ONE, weight_a)?;
    Ok(checked_add(
        checked_mul(weight_a, a.expected_return)?,
        checked_mul(weight_b, b.expected_return)?,
    )?)
}

fn evaluate(
    a: &Asset,
    b: &Asset,
    rho: Decimal,
    weight_a: Decimal,
    risk_free_rate: Option<Decimal>,
) -> OptimizerResult<TwoAssetPortfolio> {
    let expected_return = two_asset_return(a, b, weight_a)?;
    let volatility = volatility_from_variance(two_asset_variance(a, b, rho, weight_a)?)?;
    let sharpe_ratio = risk_free_rate
        .map(|rf| sharpe_ratio(expected_return, volatility, rf))
        .transpose()?;
    Ok(TwoAssetPortfolio {
        weight_a,
        weight_b: checked_sub(Decimal::ONE, weight_a)?,
        expected_return,
        volatility,
        sharpe_ratio,
    })
}

/// Minimizes two-asset variance.
///
/// `w_A = (σ_B² − σ_A·σ_B·ρ) / (σ_A² + σ_B² − 2·σ_A·σ_B·ρ)`
///
/// The denominator is the variance of `A − B` and vanishes only when the
/// assets have equal volatility and `ρ = 1`; every mix then has the same
/// variance and the split is even.
pub fn minimize_variance(a: &Asset, b: &Asset, rho: Decimal) -> OptimizerResult<TwoAssetMinimum> {
    let cross = checked_product(&[a.volatility, b.volatility, rho])?;
    let (variance_a, variance_b) = (a.variance()?, b.variance()?);
    let denominator = checked_sub(
        checked_add(variance_a, variance_b)?,
        checked_mul(TWO, cross)?,
    )?;

    let weight_a = if denominator.is_zero() {
        log::warn!("two-asset variance is flat in the weights; splitting evenly");
        dec!(0.5)
    } else {
        checked_div(checked_sub(variance_b, cross)?, denominator)?
    };

    let portfolio_volatility =
        volatility_from_variance(two_asset_variance(a, b, rho, weight_a)?)?;

    Ok(TwoAssetMinimum {
        weight_a,
        weight_b: checked_sub(Decimal::ONE, weight_a)?,
        portfolio_volatility,
    })
}

/// Minimum-variance portfolio. No Sharpe ratio is reported.
pub fn minimum_variance(a: &Asset, b: &Asset, rho: Decimal) -> OptimizerResult<TwoAssetPortfolio> {
    let minimum = minimize_variance(a, b, rho)?;
    Ok(TwoAssetPortfolio {
        weight_a: minimum.weight_a,
        weight_b: minimum.weight_b,
        expected_return: two_asset_return(a, b, minimum.weight_a)?,
        volatility: minimum.portfolio_volatility,
        sharpe_ratio: None,
    })
}

/// Tangency (maximum Sharpe) portfolio.
///
/// With `e_A = r_A − rf` and `e_B = r_B − rf`:
///
/// `w_A = (e_A·σ_B² − e_B·σ_A·σ_B·ρ) / (e_A·σ_B² + e_B·σ_A² − (e_A + e_B)·σ_A·σ_B·ρ)`
///
/// A zero denominator falls back to the minimum-variance weights; the
/// Sharpe ratio is still reported against `risk_free_rate`.
pub fn tangency(
    a: &Asset,
    b: &Asset,
    rho: Decimal,
    risk_free_rate: Decimal,
) -> OptimizerResult<TwoAssetPortfolio> {
    let excess_a = a.excess_return(risk_free_rate)?;
    let excess_b = b.excess_return(risk_free_rate)?;
    let cross = checked_product(&[a.volatility, b.volatility, rho])?;

    let scaled_a = checked_mul(excess_a, b.variance()?)?;
    let numerator = checked_sub(scaled_a, checked_mul(excess_b, cross)?)?;
    let denominator = checked_sub(
        checked_add(scaled_a, checked_mul(excess_b, a.variance()?)?)?,
        checked_mul(checked_add(excess_a, excess_b)?, cross)?,
    )?;

    let weight_a = if denominator.is_zero() {
        log::warn!(
            "tangency denominator is zero for {}/{}; using minimum-variance weights",
            a.identifier,
            b.identifier
        );
        minimize_variance(a, b, rho)?.weight_a
    } else {
        checked_div(numerator, denominator)?
    };

    evaluate(a, b, rho, weight_a, Some(risk_free_rate))
}

/// Portfolio on the two-asset line with the given expected return.
///
/// `w_A = (R − r_B) / (r_A − r_B)` for `min(r_A, r_B) ≤ R ≤ max(r_A, r_B)`.
/// Equal asset returns make every mix hit the target, so the
/// minimum-variance portfolio is returned.
pub fn target_return(
    a: &Asset,
    b: &Asset,
    rho: Decimal,
    target: Decimal,
) -> OptimizerResult<TwoAssetPortfolio> {
    let min = a.expected_return.min(b.expected_return);
    let max = a.expected_return.max(b.expected_return);

    if target < min || target > max {
        return Err(OptimizerError::UnattainableReturn {
            target: target.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }

    if a.expected_return == b.expected_return {
        log::warn!(
            "{} and {} have equal expected returns; target {} met by the minimum-variance mix",
            a.identifier,
            b.identifier,
            target
        );
        return minimum_variance(a, b, rho);
    }

    let weight_a = checked_div(
        checked_sub(target, b.expected_return)?,
        checked_sub(a.expected_return, b.expected_return)?,
    )?;
    evaluate(a, b, rho, weight_a, None)
}
