//! Error types for portfolio optimization.
//!
//! Every failure is returned as a value; nothing in the optimizer panics on
//! caller input and no partial result accompanies an error.

use frontier_math::MathError;
use thiserror::Error;

/// Result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

/// Errors that can occur during portfolio optimization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizerError {
    /// No assets were supplied.
    #[error("No assets supplied")]
    NoAssets,

    /// Fewer assets than the operation needs.
    #[error("Insufficient assets: need at least {required}, got {actual}")]
    InsufficientAssets {
        /// Minimum number of assets required.
        required: usize,
        /// Number of assets supplied.
        actual: usize,
    },

    /// More assets than the operation supports.
    #[error("Too many assets: at most {max} supported, got {actual}")]
    TooManyAssets {
        /// Maximum number of assets supported.
        max: usize,
        /// Number of assets supplied.
        actual: usize,
    },

    /// The correlation matrix has a different row count than the asset list.
    #[error("Correlation matrix has {actual} rows but {expected} assets were supplied")]
    MismatchedMatrixSize {
        /// Number of assets.
        expected: usize,
        /// Number of matrix rows.
        actual: usize,
    },

    /// The correlation matrix is structurally invalid.
    ///
    /// Ragged rows, asymmetry, a diagonal other than one and out-of-range
    /// entries all collapse into this single kind; `reason` is diagnostic.
    #[error("Invalid correlation matrix: {reason}")]
    InvalidCorrelationMatrix {
        /// What the validator rejected.
        reason: String,
    },

    /// An asset is unusable (non-positive volatility, blank or duplicate id).
    #[error("Invalid asset '{id}': {reason}")]
    InvalidAsset {
        /// The asset identifier as supplied.
        id: String,
        /// The reason the asset is invalid.
        reason: String,
    },

    /// A weight vector does not line up with the asset list.
    #[error("Weight count mismatch: expected {expected}, got {actual}")]
    WeightCountMismatch {
        /// Number of assets.
        expected: usize,
        /// Number of weights.
        actual: usize,
    },

    /// The target return lies outside the attainable range.
    #[error("Target return {target} is outside the attainable range [{min}, {max}]")]
    UnattainableReturn {
        /// Requested target return.
        target: String,
        /// Lowest attainable return.
        min: String,
        /// Highest attainable return.
        max: String,
    },

    /// Every candidate portfolio was filtered out.
    #[error("No valid portfolios: every candidate had non-positive return or volatility")]
    NoValidPortfolios,

    /// The operation has no implementation for this many assets.
    #[error("{operation} is not implemented for {assets} assets")]
    NotImplementedForNAssets {
        /// The operation requested.
        operation: String,
        /// Number of assets supplied.
        assets: usize,
    },

    /// An efficient frontier needs at least two sample points.
    #[error("Efficient frontier needs at least 2 points, got {points}")]
    InvalidFrontierPoints {
        /// Number of points requested.
        points: usize,
    },

    /// Optimizer configuration is invalid or unparseable.
    #[error("Invalid optimizer config: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// Underlying numerical failure.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl OptimizerError {
    /// Create an invalid correlation matrix error.
    #[must_use]
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        Self::InvalidCorrelationMatrix {
            reason: reason.into(),
        }
    }

    /// Create an invalid asset error.
    #[must_use]
    pub fn invalid_asset(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a not-implemented error for the given operation and asset count.
    #[must_use]
    pub fn not_implemented(operation: impl Into<String>, assets: usize) -> Self {
        Self::NotImplementedForNAssets {
            operation: operation.into(),
            assets,
        }
    }
}
