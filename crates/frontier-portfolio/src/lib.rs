//! # Frontier Portfolio
//!
//! Markowitz mean-variance portfolio optimization over decimal inputs.
//!
//! Given expected returns, volatilities and a correlation matrix for a set of
//! assets, this crate computes capital allocation weights that either
//! minimize portfolio variance, maximize the Sharpe ratio, or hit a target
//! expected return.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every optimization is stateless with explicit inputs
//! - **Decimal throughout**: Returns, volatilities and weights are `Decimal`
//! - **Closed forms first**: Two-asset problems use exact formulas
//! - **Bounded work**: N-asset Sharpe search scores a fixed candidate set
//! - **Config-driven parallelism**: Optional rayon support for batches
//!
//! ## Features
//!
//! - **Two-Asset**: Minimum variance, tangency and target-return portfolios
//! - **N-Asset Sharpe**: Candidate search, or an exact inverse-covariance
//!   solution when configured
//! - **Efficient Frontier**: Evenly spaced two-asset frontier points
//! - **Batch**: Many independent requests, order preserving
//!
//! ## Quick Start
//!
//! ```rust
//! use frontier_portfolio::prelude::*;
//!
//! let assets = vec![
//!     Asset::new("AAPL", dec!(0.12), dec!(0.25)),
//!     Asset::new("BND", dec!(0.03), dec!(0.05)),
//! ];
//! let correlation = CorrelationMatrix::two_asset(dec!(-0.1));
//!
//! let result = maximize_sharpe(&assets, &correlation, dec!(0.03)).unwrap();
//! assert!(result.weight("aapl").is_some());
//! assert!(result.sharpe_ratio.is_some());
//! ```
//!
//! ## Module Overview
//!
//! - [`types`] - Assets, correlation matrices, results and configuration
//! - [`validation`] - Input checks run before every optimization
//! - [`metrics`] - Portfolio return, variance, volatility and Sharpe ratio
//! - [`two_asset`] - Two-asset closed forms
//! - [`candidates`] - N-asset maximum-Sharpe candidate search
//! - [`analytical`] - Exact N-asset solutions via the inverse covariance
//! - [`optimizer`] - Entry points and method dispatch
//! - [`frontier`] - Two-asset efficient frontier
//! - [`batch`] - Batch optimization
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel batch optimization

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytical;
pub mod batch;
pub mod candidates;
pub mod error;
pub mod frontier;
pub mod metrics;
pub mod optimizer;
pub mod two_asset;
pub mod types;
pub mod validation;

// Re-export error types at crate root
pub use error::{OptimizerError, OptimizerResult};

// Re-export main types
pub use types::{
    Asset, CorrelationMatrix, NAssetMinVarianceMethod, NAssetSharpeMethod, OptimizationResult,
    OptimizerConfig,
};

// Re-export entry points
pub use batch::{maybe_parallel_map, optimize_batch, Objective, OptimizationRequest};
pub use frontier::efficient_frontier;
pub use metrics::PortfolioMetrics;
pub use optimizer::{
    find_minimum_variance, maximize_sharpe, optimize_target_return, optimize_two_asset,
    PortfolioOptimizer,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{optimize_batch, Objective, OptimizationRequest};
    pub use crate::error::{OptimizerError, OptimizerResult};
    pub use crate::frontier::efficient_frontier;
    pub use crate::optimizer::{
        find_minimum_variance, maximize_sharpe, optimize_target_return, optimize_two_asset,
        PortfolioOptimizer,
    };
    pub use crate::types::{
        Asset, CorrelationMatrix, NAssetMinVarianceMethod, NAssetSharpeMethod,
        OptimizationResult, OptimizerConfig,
    };

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
