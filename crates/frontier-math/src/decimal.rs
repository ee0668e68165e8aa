//! Decimal square root.
//!
//! Portfolio volatility is the square root of a decimal variance. Rather
//! than round-tripping through `f64`, the root is found with the
//! Newton-Raphson iteration
//!
//! `x_{n+1} = (x_n + target / x_n) / 2`
//!
//! seeded at `target / 2` (or `target` itself when `target < 1`). The
//! iteration stops once successive iterates differ by less than
//! [`SQRT_TOLERANCE`] or after [`SQRT_MAX_ITERATIONS`] steps, whichever
//! comes first. Both bounds are fixed so that results are reproducible
//! bit-for-bit across runs and platforms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{MathError, MathResult};

/// Maximum number of Newton steps taken by [`sqrt_decimal`].
pub const SQRT_MAX_ITERATIONS: u32 = 20;

/// Step size below which [`sqrt_decimal`] is considered converged.
pub const SQRT_TOLERANCE: Decimal = dec!(0.00000000001);

const TWO: Decimal = dec!(2);

/// Outcome of a Newton square-root iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewtonSqrt {
    /// The approximated square root.
    pub root: Decimal,
    /// Number of Newton steps performed.
    pub iterations: u32,
    /// Whether the step tolerance was reached before the iteration cap.
    pub converged: bool,
}

/// Runs the Newton square-root iteration and reports its statistics.
///
/// Returns an error for negative input. Zero short-circuits to an exact
/// zero root without iterating.
pub fn newton_sqrt(target: Decimal) -> MathResult<NewtonSqrt> {
    if target.is_sign_negative() && !target.is_zero() {
        return Err(MathError::invalid_input(format!(
            "cannot take the square root of negative value {target}"
        )));
    }

    if target.is_zero() {
        return Ok(NewtonSqrt {
            root: Decimal::ZERO,
            iterations: 0,
            converged: true,
        });
    }

    let mut x = if target < Decimal::ONE {
        target
    } else {
        target / TWO
    };

    for iteration in 1..=SQRT_MAX_ITERATIONS {
        let next = (x + target / x) / TWO;
        let step = (next - x).abs();
        x = next;

        if step < SQRT_TOLERANCE {
            return Ok(NewtonSqrt {
                root: x,
                iterations: iteration,
                converged: true,
            });
        }
    }

    log::debug!(
        "sqrt_decimal({}) hit the {}-step cap without reaching tolerance",
        target,
        SQRT_MAX_ITERATIONS
    );

    Ok(NewtonSqrt {
        root: x,
        iterations: SQRT_MAX_ITERATIONS,
        converged: false,
    })
}

/// Square root of a non-negative decimal via Newton-Raphson.
///
/// # Example
///
/// ```rust
/// use frontier_math::sqrt_decimal;
/// use rust_decimal_macros::dec;
///
/// let root = sqrt_decimal(dec!(4)).unwrap();
/// assert!((root - dec!(2)).abs() < dec!(0.0000000001));
/// ```
pub fn sqrt_decimal(target: Decimal) -> MathResult<Decimal> {
    newton_sqrt(target).map(|result| result.root)
}
