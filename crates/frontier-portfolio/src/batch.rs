//! Batch optimization.
//!
//! Optimizer calls share no state, so a batch of requests can run on
//! rayon's pool when the `parallel` feature is enabled and the batch is at
//! least [`OptimizerConfig::parallel_threshold`] long. Output order always
//! matches input order and is identical in both modes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::OptimizerResult;
use crate::optimizer::PortfolioOptimizer;
use crate::types::{Asset, CorrelationMatrix, OptimizationResult, OptimizerConfig};

/// What a request optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Objective {
    /// Lowest-variance portfolio.
    MinimumVariance,
    /// Highest Sharpe ratio against `risk_free_rate`.
    MaxSharpe {
        /// Risk-free rate.
        risk_free_rate: Decimal,
    },
    /// Two-asset portfolio with the given expected return.
    TargetReturn {
        /// Required expected return.
        target_return: Decimal,
    },
}

/// One independent optimization problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Asset assumptions.
    pub assets: Vec<Asset>,
    /// Correlations between the assets.
    pub correlation: CorrelationMatrix,
    /// Objective to optimize.
    pub objective: Objective,
}

impl OptimizationRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(assets: Vec<Asset>, correlation: CorrelationMatrix, objective: Objective) -> Self {
        Self {
            assets,
            correlation,
            objective,
        }
    }
}

impl PortfolioOptimizer {
    /// Runs a single request.
    pub fn optimize(&self, request: &OptimizationRequest) -> OptimizerResult<OptimizationResult> {
        let OptimizationRequest {
            assets,
            correlation,
            objective,
        } = request;
        match *objective {
            Objective::MinimumVariance => self.find_minimum_variance(assets, correlation),
            Objective::MaxSharpe { risk_free_rate } => {
                self.maximize_sharpe(assets, correlation, risk_free_rate)
            }
            Objective::TargetReturn { target_return } => {
                self.optimize_target_return(assets, correlation, target_return)
            }
        }
    }

    /// Runs every request, in parallel when configured to.
    pub fn optimize_batch(
        &self,
        requests: &[OptimizationRequest],
    ) -> Vec<OptimizerResult<OptimizationResult>> {
        log::debug!("optimizing batch of {} requests", requests.len());
        maybe_parallel_map(requests, self.config(), |request| {
            self.optimize(request)
        })
    }
}

/// Runs every request with the given configuration.
pub fn optimize_batch(
    requests: &[OptimizationRequest],
    config: &OptimizerConfig,
) -> Vec<OptimizerResult<OptimizationResult>> {
    PortfolioOptimizer::new(config.clone()).optimize_batch(requests)
}

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &OptimizerConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
