//! Asset assumptions supplied per optimization call.

use frontier_math::{checked_mul, checked_sub, MathResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Return and risk assumptions for a single instrument.
///
/// Assets carry no identity beyond one optimization call. Returns and
/// volatilities are annualized fractions (`0.12` is 12%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Instrument identifier, e.g. a ticker symbol.
    pub identifier: String,
    /// Annualized expected return.
    pub expected_return: Decimal,
    /// Annualized standard deviation of returns. Must be positive.
    pub volatility: Decimal,
}

impl Asset {
    /// Creates a new asset.
    #[must_use]
    pub fn new(identifier: impl Into<String>, expected_return: Decimal, volatility: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            expected_return,
            volatility,
        }
    }

    /// Identifier as used for weight-map keys: trimmed and lower-cased.
    #[must_use]
    pub fn normalized_id(&self) -> String {
        self.identifier.trim().to_lowercase()
    }

    /// Return in excess of the given risk-free rate.
    pub fn excess_return(&self, risk_free_rate: Decimal) -> MathResult<Decimal> {
        checked_sub(self.expected_return, risk_free_rate)
    }

    /// Variance of returns (`volatility²`).
    pub fn variance(&self) -> MathResult<Decimal> {
        checked_mul(self.volatility, self.volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normalized_id() {
        let asset = Asset::new("  AAPL ", dec!(0.12), dec!(0.25));
        assert_eq!(asset.normalized_id(), "aapl");
    }

    #[test]
    fn test_derived_values() {
        let asset = Asset::new("BND", dec!(0.03), dec!(0.05));
        assert_eq!(asset.variance().unwrap(), dec!(0.0025));
        assert_eq!(asset.excess_return(dec!(0.01)).unwrap(), dec!(0.02));
    }

    #[test]
    fn test_huge_volatility_variance_overflows() {
        let asset = Asset::new("HUGE", dec!(0.05), dec!(1_000_000_000_000_000));
        assert!(matches!(
            asset.variance(),
            Err(frontier_math::MathError::Overflow { .. })
        ));
        assert!(Asset::new("X", Decimal::MIN, dec!(0.1))
            .excess_return(dec!(1))
            .is_err());
    }

    #[test]
    fn test_serde() {
        let asset = Asset::new("SPY", dec!(0.08), dec!(0.16));
        let json = serde_json::to_string(&asset).unwrap();
        let parsed: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.identifier, "SPY");
        assert_eq!(parsed.volatility, dec!(0.16));
    }
}
