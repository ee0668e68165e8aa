//! Two-asset efficient frontier sampling.

use frontier_math::{checked_add, checked_div, checked_mul, checked_sub};
use rust_decimal::Decimal;

use crate::error::{OptimizerError, OptimizerResult};
use crate::optimizer::{prepare_two_asset, PortfolioOptimizer};
use crate::types::{Asset, CorrelationMatrix, OptimizationResult};

impl PortfolioOptimizer {
    /// Samples `points` portfolios along the two-asset line.
    ///
    /// Target returns are spaced evenly from `min(r_A, r_B)` to
    /// `max(r_A, r_B)` inclusive, so the output is ordered by ascending
    /// expected return and its endpoints are the two corner portfolios.
    /// When both assets share one expected return the line collapses and
    /// only the minimum-variance portfolio is returned.
    pub fn efficient_frontier(
        &self,
        assets: &[Asset],
        correlation: &CorrelationMatrix,
        points: usize,
    ) -> OptimizerResult<Vec<OptimizationResult>> {
        if points < 2 {
            return Err(OptimizerError::InvalidFrontierPoints { points });
        }
        let (a, b, _) = prepare_two_asset(assets, correlation)?;

        let min = a.expected_return.min(b.expected_return);
        let max = a.expected_return.max(b.expected_return);
        if min == max {
            return Ok(vec![self.optimize_two_asset(assets, correlation)?]);
        }

        let span = checked_sub(max, min)?;
        let steps = Decimal::from(points - 1);
        (0..points)
            .map(|k| {
                let offset = checked_div(checked_mul(span, Decimal::from(k))?, steps)?;
                let target = checked_add(min, offset)?;
                self.optimize_target_return(assets, correlation, target)
            })
            .collect()
    }
}

/// Two-asset efficient frontier with the default configuration.
pub fn efficient_frontier(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    points: usize,
) -> OptimizerResult<Vec<OptimizationResult>> {
    PortfolioOptimizer::default().efficient_frontier(assets, correlation, points)
}
