//! Linear algebra utilities.
//!
//! Small dense decimal matrices, stored row-major as `Vec<Vec<Decimal>>`.
//! Portfolio problems here involve a handful of assets, so the routines
//! favour clarity over blocking or vectorisation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::arithmetic::{checked_div, checked_mul, checked_sub, checked_sum};
use crate::error::{MathError, MathResult};

/// Pivot magnitude below which a matrix is treated as singular.
pub const PIVOT_TOLERANCE: Decimal = dec!(0.0000000001);

/// Dot product of two equal-length vectors.
pub fn dot(a: &[Decimal], b: &[Decimal]) -> MathResult<Decimal> {
    if a.len() != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: a.len(),
            cols1: 1,
            rows2: b.len(),
            cols2: 1,
        });
    }
    checked_sum(
        a.iter()
            .zip(b)
            .map(|(x, y)| checked_mul(*x, *y))
            .collect::<MathResult<Vec<_>>>()?,
    )
}

/// Multiplies a square matrix by a vector.
pub fn mat_vec_multiply(matrix: &[Vec<Decimal>], v: &[Decimal]) -> MathResult<Vec<Decimal>> {
    matrix.iter().map(|row| dot(row, v)).collect()
}

/// Inverts a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] for a ragged or non-square matrix,
/// [`MathError::SingularMatrix`] when no pivot exceeds [`PIVOT_TOLERANCE`]
/// and [`MathError::Overflow`] when an eliminated entry leaves the
/// `Decimal` range.
pub fn invert(matrix: &[Vec<Decimal>]) -> MathResult<Vec<Vec<Decimal>>> {
    let n = matrix.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if matrix.iter().any(|row| row.len() != n) {
        return Err(MathError::invalid_input(
            "Matrix must be square for inversion",
        ));
    }

    // Augment [A | I]
    let mut aug: Vec<Vec<Decimal>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut r = Vec::with_capacity(2 * n);
            r.extend_from_slice(row);
            r.extend((0..n).map(|j| if i == j { Decimal::ONE } else { Decimal::ZERO }));
            r
        })
        .collect();

    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_abs = aug[col][col].abs();
        for row in (col + 1)..n {
            let candidate = aug[row][col].abs();
            if candidate > pivot_abs {
                pivot_abs = candidate;
                pivot_row = row;
            }
        }

        if pivot_abs < PIVOT_TOLERANCE {
            return Err(MathError::SingularMatrix);
        }
        aug.swap(col, pivot_row);

        let pivot = aug[col][col];
        for cell in &mut aug[col] {
            *cell = checked_div(*cell, pivot)?;
        }

        let pivot_values = aug[col].clone();
        for (row, values) in aug.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = values[col];
            if factor.is_zero() {
                continue;
            }
            for (cell, pv) in values.iter_mut().zip(&pivot_values) {
                *cell = checked_sub(*cell, checked_mul(factor, *pv)?)?;
            }
        }
    }

    Ok(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}
