//! Input validation.
//!
//! Both checks run on every optimizer call; nothing is cached between calls.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{OptimizerError, OptimizerResult};
use crate::types::{Asset, CorrelationMatrix};

/// Validates a correlation matrix against the number of assets.
///
/// Checks run in order and stop at the first failure:
///
/// 1. row count equals `size` ([`OptimizerError::MismatchedMatrixSize`])
/// 2. every row has `size` entries
/// 3. `m[i][j] == m[j][i]` for all `i, j`
/// 4. every diagonal entry is exactly one
/// 5. every entry lies in `[-1, 1]`
///
/// Failures 2-5 all report [`OptimizerError::InvalidCorrelationMatrix`].
pub fn validate_correlation_matrix(matrix: &CorrelationMatrix, size: usize) -> OptimizerResult<()> {
    let rows = matrix.rows();

    if rows.len() != size {
        return Err(OptimizerError::MismatchedMatrixSize {
            expected: size,
            actual: rows.len(),
        });
    }

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
        return Err(OptimizerError::invalid_matrix(format!(
            "row {i} has {} entries, expected {size}",
            row.len()
        )));
    }

    for i in 0..size {
        for j in (i + 1)..size {
            if rows[i][j] != rows[j][i] {
                return Err(OptimizerError::invalid_matrix(format!(
                    "not symmetric at ({i}, {j}): {} != {}",
                    rows[i][j], rows[j][i]
                )));
            }
        }
    }

    for (i, row) in rows.iter().enumerate() {
        if row[i] != Decimal::ONE {
            return Err(OptimizerError::invalid_matrix(format!(
                "diagonal entry ({i}, {i}) is {}, expected 1",
                row[i]
            )));
        }
    }

    for (i, row) in rows.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            if *value < Decimal::NEGATIVE_ONE || *value > Decimal::ONE {
                return Err(OptimizerError::invalid_matrix(format!(
                    "entry ({i}, {j}) = {value} lies outside [-1, 1]"
                )));
            }
        }
    }

    Ok(())
}

/// Validates individual assets.
///
/// Rejects non-positive volatility (which would otherwise surface as a
/// division by zero), blank identifiers, and identifiers that collide once
/// normalized.
pub fn validate_assets(assets: &[Asset]) -> OptimizerResult<()> {
    let mut seen = HashSet::with_capacity(assets.len());

    for asset in assets {
        let id = asset.normalized_id();
        if id.is_empty() {
            return Err(OptimizerError::invalid_asset(
                asset.identifier.clone(),
                "identifier is blank",
            ));
        }
        if asset.volatility <= Decimal::ZERO {
            return Err(OptimizerError::invalid_asset(
                asset.identifier.clone(),
                format!("volatility must be positive, got {}", asset.volatility),
            ));
        }
        if !seen.insert(id) {
            return Err(OptimizerError::invalid_asset(
                asset.identifier.clone(),
                "duplicate identifier",
            ));
        }
    }

    Ok(())
}
