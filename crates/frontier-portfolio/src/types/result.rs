//! Optimization output.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Asset;

/// The allocation produced by an optimizer entry point.
///
/// Weights are keyed by lower-cased asset identifier and sum to one.
/// `sharpe_ratio` is present only for objectives that take a risk-free rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Allocation weight per normalized identifier.
    pub weights: BTreeMap<String, Decimal>,
    /// Portfolio expected return.
    pub expected_return: Decimal,
    /// Portfolio volatility (never negative).
    pub volatility: Decimal,
    /// Sharpe ratio against the supplied risk-free rate, if any.
    pub sharpe_ratio: Option<Decimal>,
}

impl OptimizationResult {
    /// Builds a result from weights aligned with `assets`.
    pub(crate) fn from_weights(
        assets: &[Asset],
        weights: &[Decimal],
        expected_return: Decimal,
        volatility: Decimal,
        sharpe_ratio: Option<Decimal>,
    ) -> Self {
        let weights = assets
            .iter()
            .zip(weights)
            .map(|(asset, w)| (asset.normalized_id(), *w))
            .collect();
        Self {
            weights,
            expected_return,
            volatility,
            sharpe_ratio,
        }
    }

    /// Weight of the given asset; lookup is case-insensitive.
    #[must_use]
    pub fn weight(&self, identifier: &str) -> Option<Decimal> {
        self.weights
            .get(&identifier.trim().to_lowercase())
            .copied()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> Decimal {
        self.weights.values().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> OptimizationResult {
        let assets = vec![
            Asset::new("AAPL", dec!(0.12), dec!(0.25)),
            Asset::new("BND", dec!(0.03), dec!(0.05)),
        ];
        OptimizationResult::from_weights(
            &assets,
            &[dec!(0.4), dec!(0.6)],
            dec!(0.066),
            dec!(0.1),
            None,
        )
    }

    #[test]
    fn test_keys_are_lowercase() {
        let result = sample();
        let keys: Vec<_> = result.weights.keys().cloned().collect();
        assert_eq!(keys, vec!["aapl".to_string(), "bnd".to_string()]);
    }

    #[test]
    fn test_weight_lookup() {
        let result = sample();
        assert_eq!(result.weight("AAPL"), Some(dec!(0.4)));
        assert_eq!(result.weight("bnd"), Some(dec!(0.6)));
        assert_eq!(result.weight("msft"), None);
        assert_eq!(result.total_weight(), dec!(1.0));
    }
}
