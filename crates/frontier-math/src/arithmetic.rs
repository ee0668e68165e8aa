//! Checked decimal arithmetic.
//!
//! `Decimal` operators panic when a result leaves the 96-bit mantissa
//! range. These helpers return [`MathError::Overflow`] instead, so callers
//! can propagate the failure with `?`.

use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};

/// `a + b`, or an overflow error.
pub fn checked_add(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    a.checked_add(b).ok_or_else(|| MathError::overflow("addition"))
}

/// `a - b`, or an overflow error.
pub fn checked_sub(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    a.checked_sub(b)
        .ok_or_else(|| MathError::overflow("subtraction"))
}

/// `a * b`, or an overflow error.
pub fn checked_mul(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| MathError::overflow("multiplication"))
}

/// `a / b`.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] for a zero divisor and
/// [`MathError::Overflow`] when the quotient does not fit.
pub fn checked_div(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    if b.is_zero() {
        return Err(MathError::invalid_input("division by zero"));
    }
    a.checked_div(b).ok_or_else(|| MathError::overflow("division"))
}

/// Sum of `values`, failing on the first overflowing partial sum.
pub fn checked_sum<I>(values: I) -> MathResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, checked_add)
}

/// Product of `factors`, failing on the first overflowing partial product.
pub fn checked_product(factors: &[Decimal]) -> MathResult<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| checked_mul(acc, *factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_range() {
        assert_eq!(checked_add(dec!(1.5), dec!(2)).unwrap(), dec!(3.5));
        assert_eq!(checked_sub(dec!(1.5), dec!(2)).unwrap(), dec!(-0.5));
        assert_eq!(checked_mul(dec!(0.2), dec!(0.3)).unwrap(), dec!(0.06));
        assert_eq!(checked_div(dec!(1), dec!(4)).unwrap(), dec!(0.25));
        assert_eq!(
            checked_sum([dec!(0.1), dec!(0.2), dec!(0.7)]).unwrap(),
            dec!(1.0)
        );
        assert_eq!(
            checked_product(&[dec!(2), dec!(0.25), dec!(0.5)]).unwrap(),
            dec!(0.25)
        );
    }

    #[test]
    fn test_empty_sum_and_product() {
        assert_eq!(checked_sum(Vec::<Decimal>::new()).unwrap(), Decimal::ZERO);
        assert_eq!(checked_product(&[]).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let big = Decimal::MAX;
        assert_eq!(
            checked_add(big, big).unwrap_err(),
            MathError::overflow("addition")
        );
        assert_eq!(
            checked_sub(Decimal::MIN, big).unwrap_err(),
            MathError::overflow("subtraction")
        );

        // Squaring a volatility of 1e15 exceeds the ~7.9e28 ceiling.
        let vol = dec!(1_000_000_000_000_000);
        assert_eq!(
            checked_mul(vol, vol).unwrap_err(),
            MathError::overflow("multiplication")
        );
        assert!(checked_product(&[vol, vol, dec!(0.5)]).is_err());
        assert!(checked_sum([big, dec!(1), dec!(-1)]).is_err());
        assert_eq!(
            checked_div(big, dec!(0.1)).unwrap_err(),
            MathError::overflow("division")
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            checked_div(dec!(1), Decimal::ZERO),
            Err(MathError::InvalidInput { .. })
        ));
    }
}
