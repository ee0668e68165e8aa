//! Configuration for the optimizer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{OptimizerError, OptimizerResult};

/// How the maximum-Sharpe portfolio is found for three or more assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum NAssetSharpeMethod {
    /// Score a fixed set of heuristic candidates and keep the best.
    #[default]
    CandidateSearch,

    /// Exact tangency weights from the inverse covariance matrix.
    Analytical,
}

/// How the minimum-variance portfolio is found for three or more assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum NAssetMinVarianceMethod {
    /// Equal weights for exactly three assets; larger sets are rejected.
    #[default]
    EqualWeightPlaceholder,

    /// Exact minimum-variance weights from the inverse covariance matrix.
    Analytical,
}

impl NAssetSharpeMethod {
    /// Returns a human-readable name for the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CandidateSearch => "Candidate Search",
            Self::Analytical => "Analytical",
        }
    }
}

impl NAssetMinVarianceMethod {
    /// Returns a human-readable name for the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::EqualWeightPlaceholder => "Equal Weight Placeholder",
            Self::Analytical => "Analytical",
        }
    }
}

impl std::fmt::Display for NAssetSharpeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for NAssetMinVarianceMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Optimizer configuration.
///
/// The default uses candidate search for N-asset Sharpe maximization and
/// the equal-weight placeholder for three-asset minimum variance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Method for N-asset Sharpe maximization.
    pub n_asset_sharpe: NAssetSharpeMethod,

    /// Method for N-asset minimum variance.
    pub n_asset_min_variance: NAssetMinVarianceMethod,

    /// Share of the equal-weight vector in the blended candidate.
    /// The remainder goes to the return-weighted vector.
    pub blend_equal_share: Decimal,

    /// Enable parallel batch optimization (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum batch size to trigger parallel processing.
    pub parallel_threshold: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            n_asset_sharpe: NAssetSharpeMethod::CandidateSearch,
            n_asset_min_variance: NAssetMinVarianceMethod::EqualWeightPlaceholder,
            blend_equal_share: dec!(0.7),
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

impl OptimizerConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that solves every N-asset problem exactly.
    #[must_use]
    pub fn analytical() -> Self {
        Self {
            n_asset_sharpe: NAssetSharpeMethod::Analytical,
            n_asset_min_variance: NAssetMinVarianceMethod::Analytical,
            ..Self::default()
        }
    }

    /// Parses a config from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> OptimizerResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| OptimizerError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the numeric settings are in range.
    pub fn validate(&self) -> OptimizerResult<()> {
        if self.blend_equal_share < Decimal::ZERO || self.blend_equal_share > Decimal::ONE {
            return Err(OptimizerError::invalid_config(format!(
                "blend_equal_share must lie in [0, 1], got {}",
                self.blend_equal_share
            )));
        }
        Ok(())
    }

    /// Sets the N-asset Sharpe method.
    #[must_use]
    pub fn with_sharpe_method(mut self, method: NAssetSharpeMethod) -> Self {
        self.n_asset_sharpe = method;
        self
    }

    /// Sets the N-asset minimum-variance method.
    #[must_use]
    pub fn with_min_variance_method(mut self, method: NAssetMinVarianceMethod) -> Self {
        self.n_asset_min_variance = method;
        self
    }

    /// Sets the equal-weight share of the blended candidate.
    #[must_use]
    pub fn with_blend_equal_share(mut self, share: Decimal) -> Self {
        self.blend_equal_share = share;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = OptimizerConfig::default();
        assert_eq!(config.n_asset_sharpe, NAssetSharpeMethod::CandidateSearch);
        assert_eq!(
            config.n_asset_min_variance,
            NAssetMinVarianceMethod::EqualWeightPlaceholder
        );
        assert_eq!(config.blend_equal_share, dec!(0.7));
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_builder_pattern() {
        let config = OptimizerConfig::new()
            .with_sharpe_method(NAssetSharpeMethod::Analytical)
            .with_blend_equal_share(dec!(0.5))
            .with_parallel(false)
            .with_threshold(8);

        assert_eq!(config.n_asset_sharpe, NAssetSharpeMethod::Analytical);
        assert_eq!(
            config.n_asset_min_variance,
            NAssetMinVarianceMethod::EqualWeightPlaceholder
        );
        assert_eq!(config.blend_equal_share, dec!(0.5));
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_analytical() {
        let config = OptimizerConfig::analytical();
        assert_eq!(config.n_asset_sharpe, NAssetSharpeMethod::Analytical);
        assert_eq!(config.n_asset_min_variance, NAssetMinVarianceMethod::Analytical);
    }

    #[test]
    fn test_should_parallelize() {
        let config = OptimizerConfig::new().with_threshold(10);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(5));
            assert!(config.should_parallelize(10));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(5));
            assert!(!config.should_parallelize(10));
        }

        assert!(!config.with_parallel(false).should_parallelize(100));
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            OptimizerConfig::from_json_str(r#"{"n_asset_sharpe": "Analytical"}"#).unwrap();
        assert_eq!(config.n_asset_sharpe, NAssetSharpeMethod::Analytical);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_from_json_rejects_bad_blend() {
        let err = OptimizerConfig::from_json_str(r#"{"blend_equal_share": 1.5}"#).unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(OptimizerConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = OptimizerConfig::analytical().with_threshold(16);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: OptimizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_display() {
        assert_eq!(NAssetSharpeMethod::CandidateSearch.to_string(), "Candidate Search");
        assert_eq!(
            NAssetMinVarianceMethod::EqualWeightPlaceholder.to_string(),
            "Equal Weight Placeholder"
        );
    }
}
