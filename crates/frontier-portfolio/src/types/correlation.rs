//! Correlation matrix container.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::OptimizerResult;
use crate::validation::validate_correlation_matrix;

/// An NxN matrix of pairwise return correlations, stored row-major.
///
/// Construction does not validate; every optimizer entry point re-runs
/// [`validate_correlation_matrix`] against its asset count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationMatrix {
    rows: Vec<Vec<Decimal>>,
}

impl CorrelationMatrix {
    /// Wraps the given rows.
    #[must_use]
    pub fn new(rows: Vec<Vec<Decimal>>) -> Self {
        Self { rows }
    }

    /// The NxN identity matrix (uncorrelated assets).
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::uniform(n, Decimal::ZERO)
    }

    /// An NxN matrix with `rho` everywhere off the diagonal.
    #[must_use]
    pub fn uniform(n: usize, rho: Decimal) -> Self {
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { Decimal::ONE } else { rho })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// A 2x2 matrix with correlation `rho` between the two assets.
    #[must_use]
    pub fn two_asset(rho: Decimal) -> Self {
        Self::uniform(2, rho)
    }

    /// Number of rows.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The underlying rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Decimal>] {
        &self.rows
    }

    /// Entry at `(i, j)`, if present.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<Decimal> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Validates the matrix against the expected dimension.
    pub fn validate(&self, size: usize) -> OptimizerResult<()> {
        validate_correlation_matrix(self, size)
    }
}

impl From<Vec<Vec<Decimal>>> for CorrelationMatrix {
    fn from(rows: Vec<Vec<Decimal>>) -> Self {
        Self::new(rows)
    }
}
