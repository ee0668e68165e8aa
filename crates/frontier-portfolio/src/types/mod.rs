//! Core types for portfolio optimization.
//!
//! This module contains the fundamental types used throughout the crate:
//!
//! - [`Asset`]: Return and volatility assumptions for one instrument
//! - [`CorrelationMatrix`]: Pairwise correlations between assets
//! - [`OptimizationResult`]: Weights and portfolio metrics
//! - [`OptimizerConfig`]: Method selection and batch settings

mod asset;
mod config;
mod correlation;
mod result;

pub use asset::Asset;
pub use config::{NAssetMinVarianceMethod, NAssetSharpeMethod, OptimizerConfig};
pub use correlation::CorrelationMatrix;
pub use result::OptimizationResult;
