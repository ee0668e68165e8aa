//! # Frontier Math
//!
//! Decimal numerics for the Frontier portfolio optimization library.
//!
//! This crate provides:
//!
//! - **Checked Arithmetic**: `Decimal` operations that report overflow as
//!   an error instead of panicking
//! - **Square Root**: Newton-Raphson square root over [`rust_decimal::Decimal`]
//!   with fixed, reproducible iteration bounds
//! - **Linear Algebra**: Dot products, matrix-vector products and a
//!   Gauss-Jordan inverse for small dense decimal matrices
//!
//! ## Design Philosophy
//!
//! - **No binary floating point**: Financial quantities stay in `Decimal`
//!   end to end so results do not drift with `f64` rounding
//! - **Bounded work**: Every iterative routine has a hard iteration cap
//! - **Deterministic**: Identical inputs always produce identical outputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::doc_markdown)]

pub mod arithmetic;
pub mod decimal;
pub mod error;
pub mod linear_algebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::arithmetic::{
        checked_add, checked_div, checked_mul, checked_product, checked_sub, checked_sum,
    };
    pub use crate::decimal::{newton_sqrt, sqrt_decimal, NewtonSqrt};
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{dot, invert, mat_vec_multiply};
}

pub use arithmetic::{
    checked_add, checked_div, checked_mul, checked_product, checked_sub, checked_sum,
};
pub use decimal::sqrt_decimal;
pub use error::{MathError, MathResult};
