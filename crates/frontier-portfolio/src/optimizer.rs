//! Optimizer entry points.
//!
//! Each call validates its inputs, picks the two-asset closed form or an
//! N-asset path, and assembles an [`OptimizationResult`]. Nothing is kept
//! between calls, so a single [`PortfolioOptimizer`] can be shared freely
//! across threads.

use frontier_math::MathError;
use rust_decimal::Decimal;

use crate::analytical;
use crate::candidates::{self, equal_weights};
use crate::error::{OptimizerError, OptimizerResult};
use crate::metrics::{self, PortfolioMetrics};
use crate::two_asset::{self, TwoAssetPortfolio};
use crate::types::{
    Asset, CorrelationMatrix, NAssetMinVarianceMethod, NAssetSharpeMethod, OptimizationResult,
    OptimizerConfig,
};
use crate::validation::{validate_assets, validate_correlation_matrix};

/// Mean-variance optimizer carrying its configuration.
#[derive(Debug, Clone, Default)]
pub struct PortfolioOptimizer {
    config: OptimizerConfig,
}

impl PortfolioOptimizer {
    /// Creates an optimizer with the given configuration.
    #[must_use]
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Minimum-variance portfolio of exactly two assets.
    pub fn optimize_two_asset(
        &self,
        assets: &[Asset],
        correlation: &CorrelationMatrix,
    ) -> OptimizerResult<OptimizationResult> {
        let (a, b, rho) = prepare_two_asset(assets, correlation)?;
        let portfolio = two_asset::minimum_variance(a, b, rho)?;
        Ok(from_two_asset(assets, &portfolio))
    }

    /// Minimum-variance portfolio of two or more assets.
    ///
    /// Two assets use the closed form. Larger sets follow
    /// [`OptimizerConfig::n_asset_min_variance`]: by default three assets
    /// receive equal weights and four or more are rejected with
    /// [`OptimizerError::NotImplementedForNAssets`].
    pub fn find_minimum_variance(
        &self,
        assets: &[Asset],
        correlation: &CorrelationMatrix,
    ) -> OptimizerResult<OptimizationResult> {
        prepare_many(assets, correlation)?;
        let n = assets.len();

        if n == 2 {
            return self.optimize_two_asset(assets, correlation);
        }

        let weights = match self.config.n_asset_min_variance {
            NAssetMinVarianceMethod::EqualWeightPlaceholder if n == 3 => {
                log::warn!("three-asset minimum variance uses equal weights, not a true minimum");
                equal_weights(n)
            }
            NAssetMinVarianceMethod::EqualWeightPlaceholder => {
                return Err(OptimizerError::not_implemented("minimum variance", n));
            }
            NAssetMinVarianceMethod::Analytical => {
                log::debug!("solving {n}-asset minimum variance analytically");
                analytical::minimum_variance_weights(assets, correlation)?
            }
        };

        let metrics = metrics::evaluate(assets, correlation, &weights)?;
        Ok(assemble(assets, &weights, &metrics, None))
    }

    /// Maximum-Sharpe portfolio of two or more assets.
    ///
    /// Two assets use the closed-form tangency portfolio. Larger sets follow
    /// [`OptimizerConfig::n_asset_sharpe`].
    pub fn maximize_sharpe(
        &self,
        assets: &[Asset],
        correlation: &CorrelationMatrix,
        risk_free_rate: Decimal,
    ) -> OptimizerResult<OptimizationResult> {
        prepare_many(assets, correlation)?;

        if assets.len() == 2 {
            log::debug!("two-asset tangency portfolio");
            let rho = correlation_at(correlation, 0, 1)?;
            let portfolio = two_asset::tangency(&assets[0], &assets[1], rho, risk_free_rate)?;
            return Ok(from_two_asset(assets, &portfolio));
        }

        match self.config.n_asset_sharpe {
            NAssetSharpeMethod::CandidateSearch => {
                self.candidate_search(assets, correlation, risk_free_rate)
            }
            NAssetSharpeMethod::Analytical => {
                match analytical::tangency_weights(assets, correlation, risk_free_rate) {
                    Ok(Some(weights)) => {
                        let metrics = metrics::evaluate(assets, correlation, &weights)?;
                        let sharpe = metrics.sharpe(risk_free_rate)?;
                        Ok(assemble(assets, &weights, &metrics, Some(sharpe)))
                    }
                    Ok(None) | Err(OptimizerError::Math(MathError::SingularMatrix)) => {
                        log::warn!(
                            "analytical tangency undefined for {} assets; using candidate search",
                            assets.len()
                        );
                        self.candidate_search(assets, correlation, risk_free_rate)
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Portfolio of exactly two assets with the given expected return.
    pub fn optimize_target_return(
        &self,
        assets: &[Asset],
        correlation: &CorrelationMatrix,
        target_return: Decimal,
    ) -> OptimizerResult<OptimizationResult> {
        let (a, b, rho) = prepare_two_asset(assets, correlation)?;
        let portfolio = two_asset::target_return(a, b, rho, target_return)?;
        Ok(from_two_asset(assets, &portfolio))
    }

    fn candidate_search(
        &self,
        assets: &[Asset],
        correlation: &CorrelationMatrix,
        risk_free_rate: Decimal,
    ) -> OptimizerResult<OptimizationResult> {
        self.config.validate()?;
        let best = candidates::search(
            assets,
            correlation,
            risk_free_rate,
            self.config.blend_equal_share,
        )?;
        Ok(assemble(
            assets,
            &best.candidate.weights,
            &best.metrics,
            Some(best.sharpe_ratio),
        ))
    }
}

/// Checks asset count, asset values and matrix shape for two-asset calls.
pub(crate) fn prepare_two_asset<'a>(
    assets: &'a [Asset],
    correlation: &CorrelationMatrix,
) -> OptimizerResult<(&'a Asset, &'a Asset, Decimal)> {
    match assets {
        [a, b] => {
            validate_assets(assets)?;
            validate_correlation_matrix(correlation, 2)?;
            Ok((a, b, correlation_at(correlation, 0, 1)?))
        }
        _ if assets.len() < 2 => Err(OptimizerError::InsufficientAssets {
            required: 2,
            actual: assets.len(),
        }),
        _ => Err(OptimizerError::TooManyAssets {
            max: 2,
            actual: assets.len(),
        }),
    }
}

fn prepare_many(assets: &[Asset], correlation: &CorrelationMatrix) -> OptimizerResult<()> {
    match assets.len() {
        0 => return Err(OptimizerError::NoAssets),
        1 => {
            return Err(OptimizerError::InsufficientAssets {
                required: 2,
                actual: 1,
            })
        }
        _ => {}
    }
    validate_assets(assets)?;
    validate_correlation_matrix(correlation, assets.len())
}

fn correlation_at(correlation: &CorrelationMatrix, i: usize, j: usize) -> OptimizerResult<Decimal> {
    correlation
        .get(i, j)
        .ok_or_else(|| OptimizerError::invalid_matrix(format!("missing entry ({i}, {j})")))
}

fn from_two_asset(assets: &[Asset], portfolio: &TwoAssetPortfolio) -> OptimizationResult {
    OptimizationResult::from_weights(
        assets,
        &portfolio.weights(),
        portfolio.expected_return,
        portfolio.volatility,
        portfolio.sharpe_ratio,
    )
}

fn assemble(
    assets: &[Asset],
    weights: &[Decimal],
    metrics: &PortfolioMetrics,
    sharpe_ratio: Option<Decimal>,
) -> OptimizationResult {
    OptimizationResult::from_weights(
        assets,
        weights,
        metrics.expected_return,
        metrics.volatility,
        sharpe_ratio,
    )
}

/// Minimum-variance portfolio of exactly two assets, default configuration.
pub fn optimize_two_asset(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
) -> OptimizerResult<OptimizationResult> {
    PortfolioOptimizer::default().optimize_two_asset(assets, correlation)
}

/// Minimum-variance portfolio, default configuration.
pub fn find_minimum_variance(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
) -> OptimizerResult<OptimizationResult> {
    PortfolioOptimizer::default().find_minimum_variance(assets, correlation)
}

/// Maximum-Sharpe portfolio, default configuration.
pub fn maximize_sharpe(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    risk_free_rate: Decimal,
) -> OptimizerResult<OptimizationResult> {
    PortfolioOptimizer::default().maximize_sharpe(assets, correlation, risk_free_rate)
}

/// Two-asset portfolio with the given expected return, default configuration.
pub fn optimize_target_return(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    target_return: Decimal,
) -> OptimizerResult<OptimizationResult> {
    PortfolioOptimizer::default().optimize_target_return(assets, correlation, target_return)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const EPS: Decimal = dec!(0.000000001);

    fn pair() -> Vec<Asset> {
        vec![
            Asset::new("AAPL", dec!(0.12), dec!(0.25)),
            Asset::new("BND", dec!(0.03), dec!(0.05)),
        ]
    }

    fn trio() -> Vec<Asset> {
        vec![
            Asset::new("SPY", dec!(0.08), dec!(0.16)),
            Asset::new("TLT", dec!(0.04), dec!(0.12)),
            Asset::new("GLD", dec!(0.06), dec!(0.18)),
        ]
    }

    fn quartet() -> Vec<Asset> {
        let mut assets = trio();
        assets.push(Asset::new("EEM", dec!(0.10), dec!(0.24)));
        assets
    }

    #[test]
    fn test_two_asset_min_variance() {
        let result = optimize_two_asset(&pair(), &CorrelationMatrix::two_asset(dec!(-0.1))).unwrap();
        assert!((result.total_weight() - Decimal::ONE).abs() < EPS);
        assert!(result.sharpe_ratio.is_none());
        assert!(result.volatility > Decimal::ZERO);
        assert!(result.volatility < dec!(0.05));
    }

    #[test]
    fn test_two_asset_counts() {
        let corr = CorrelationMatrix::two_asset(dec!(0));
        assert_eq!(
            optimize_two_asset(&pair()[..1], &corr).unwrap_err(),
            OptimizerError::InsufficientAssets {
                required: 2,
                actual: 1
            }
        );
        assert_eq!(
            optimize_two_asset(&trio(), &CorrelationMatrix::identity(3)).unwrap_err(),
            OptimizerError::TooManyAssets { max: 2, actual: 3 }
        );
    }

    #[test]
    fn test_matrix_size_mismatch() {
        let err = maximize_sharpe(&trio(), &CorrelationMatrix::identity(2), dec!(0.01)).unwrap_err();
        assert_eq!(
            err,
            OptimizerError::MismatchedMatrixSize {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_zero_volatility_rejected() {
        let assets = vec![
            Asset::new("CASH", dec!(0.02), dec!(0)),
            Asset::new("SPY", dec!(0.08), dec!(0.16)),
        ];
        let err = find_minimum_variance(&assets, &CorrelationMatrix::identity(2)).unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidAsset { .. }));
    }

    #[test]
    fn test_min_variance_counts() {
        let corr = CorrelationMatrix::identity(2);
        assert_eq!(
            find_minimum_variance(&[], &corr).unwrap_err(),
            OptimizerError::NoAssets
        );
        assert!(matches!(
            find_minimum_variance(&pair()[..1], &corr).unwrap_err(),
            OptimizerError::InsufficientAssets { .. }
        ));
    }

    #[test]
    fn test_three_asset_min_variance_placeholder() {
        let result = find_minimum_variance(&trio(), &CorrelationMatrix::identity(3)).unwrap();
        let third = Decimal::ONE / dec!(3);
        for w in result.weights.values() {
            assert_eq!(*w, third);
        }
        assert!(result.sharpe_ratio.is_none());
    }

    #[test]
    fn test_four_asset_min_variance_not_implemented() {
        let err = find_minimum_variance(&quartet(), &CorrelationMatrix::identity(4)).unwrap_err();
        assert_eq!(err, OptimizerError::not_implemented("minimum variance", 4));
    }

    #[test]
    fn test_four_asset_min_variance_analytical() {
        let optimizer = PortfolioOptimizer::new(OptimizerConfig::analytical());
        let corr = CorrelationMatrix::uniform(4, dec!(0.2));
        let result = optimizer.find_minimum_variance(&quartet(), &corr).unwrap();
        assert!((result.total_weight() - Decimal::ONE).abs() < EPS);

        let equal =
            metrics::portfolio_volatility(&quartet(), &corr, &equal_weights(4)).unwrap();
        assert!(result.volatility > Decimal::ZERO);
        assert!(result.volatility <= equal);
    }

    #[test]
    fn test_two_asset_sharpe_uses_tangency() {
        let corr = CorrelationMatrix::two_asset(dec!(-0.1));
        let result = maximize_sharpe(&pair(), &corr, dec!(0.02)).unwrap();
        let closed = two_asset::tangency(&pair()[0], &pair()[1], dec!(-0.1), dec!(0.02)).unwrap();
        assert_eq!(result.weight("aapl"), Some(closed.weight_a));
        assert_eq!(result.sharpe_ratio, closed.sharpe_ratio);
    }

    #[test]
    fn test_three_asset_sharpe_candidate_search() {
        let corr = CorrelationMatrix::identity(3);
        let result = maximize_sharpe(&trio(), &corr, dec!(0.01)).unwrap();
        assert!((result.total_weight() - Decimal::ONE).abs() < EPS);
        assert!(result.sharpe_ratio.unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_analytical_sharpe_at_least_candidate_search() {
        let corr = CorrelationMatrix::new(vec![
            vec![dec!(1), dec!(-0.2), dec!(0.1)],
            vec![dec!(-0.2), dec!(1), dec!(0.3)],
            vec![dec!(0.1), dec!(0.3), dec!(1)],
        ]);
        let heuristic = maximize_sharpe(&trio(), &corr, dec!(0.01)).unwrap();
        let exact = PortfolioOptimizer::new(OptimizerConfig::analytical())
            .maximize_sharpe(&trio(), &corr, dec!(0.01))
            .unwrap();
        assert!(exact.sharpe_ratio.unwrap() >= heuristic.sharpe_ratio.unwrap() - EPS);
    }

    #[test]
    fn test_analytical_sharpe_with_rf_above_every_return() {
        let assets = vec![
            Asset::new("A", dec!(0.02), dec!(0.10)),
            Asset::new("B", dec!(0.03), dec!(0.15)),
            Asset::new("C", dec!(0.04), dec!(0.20)),
        ];
        let corr = CorrelationMatrix::identity(3);
        let rf = dec!(0.05);

        let heuristic = maximize_sharpe(&assets, &corr, rf).unwrap();
        let exact = PortfolioOptimizer::new(OptimizerConfig::analytical())
            .maximize_sharpe(&assets, &corr, rf)
            .unwrap();
        assert!(exact.sharpe_ratio.unwrap() >= heuristic.sharpe_ratio.unwrap() - EPS);
        assert_eq!(exact, heuristic);
    }

    #[test]
    fn test_analytical_sharpe_falls_back() {
        // Singular covariance: every asset identical and perfectly correlated.
        let assets: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|id| Asset::new(*id, dec!(0.07), dec!(0.15)))
            .collect();
        let corr = CorrelationMatrix::uniform(3, Decimal::ONE);
        let result = PortfolioOptimizer::new(OptimizerConfig::analytical())
            .maximize_sharpe(&assets, &corr, dec!(0.02))
            .unwrap();
        let third = Decimal::ONE / dec!(3);
        assert_eq!(result.weight("a"), Some(third));
    }

    #[test]
    fn test_target_return() {
        let corr = CorrelationMatrix::two_asset(dec!(0.1));
        let result = optimize_target_return(&pair(), &corr, dec!(0.12)).unwrap();
        assert_eq!(result.weight("AAPL"), Some(Decimal::ONE));
        assert_eq!(result.weight("BND"), Some(Decimal::ZERO));

        let err = optimize_target_return(&pair(), &corr, dec!(0.2)).unwrap_err();
        assert!(matches!(err, OptimizerError::UnattainableReturn { .. }));
    }

    #[test]
    fn test_out_of_range_blend_share_rejected() {
        let optimizer =
            PortfolioOptimizer::new(OptimizerConfig::new().with_blend_equal_share(dec!(1.5)));
        let err = optimizer
            .maximize_sharpe(&trio(), &CorrelationMatrix::identity(3), dec!(0.01))
            .unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidConfig { .. }));

        // The two-asset closed form never reads the blend share.
        assert!(optimizer
            .maximize_sharpe(&pair(), &CorrelationMatrix::two_asset(dec!(0)), dec!(0.01))
            .is_ok());
    }

    #[test]
    fn test_huge_volatility_is_an_error() {
        let huge = Asset::new("HUGE", dec!(0.05), dec!(1_000_000_000_000_000));
        let pair = vec![huge.clone(), Asset::new("BND", dec!(0.03), dec!(0.05))];
        let corr = CorrelationMatrix::two_asset(dec!(0.2));
        for result in [
            optimize_two_asset(&pair, &corr),
            maximize_sharpe(&pair, &corr, dec!(0.01)),
            find_minimum_variance(&pair, &corr),
        ] {
            assert!(matches!(
                result,
                Err(OptimizerError::Math(MathError::Overflow { .. }))
            ));
        }

        let mut assets = trio();
        assets.push(huge);
        let corr = CorrelationMatrix::identity(4);
        assert!(matches!(
            maximize_sharpe(&assets, &corr, dec!(0.01)),
            Err(OptimizerError::Math(MathError::Overflow { .. }))
        ));
        assert!(matches!(
            PortfolioOptimizer::new(OptimizerConfig::analytical())
                .maximize_sharpe(&assets, &corr, dec!(0.01)),
            Err(OptimizerError::Math(MathError::Overflow { .. }))
        ));
    }

    #[test]
    fn test_invalid_matrix_surfaces() {
        let corr = CorrelationMatrix::new(vec![
            vec![dec!(1), dec!(0.5)],
            vec![dec!(0.5), dec!(2)],
        ]);
        assert!(matches!(
            optimize_two_asset(&pair(), &corr).unwrap_err(),
            OptimizerError::InvalidCorrelationMatrix { .. }
        ));
    }
}
