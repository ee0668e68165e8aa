//! Candidate search for N-asset Sharpe maximization.
//!
//! Rather than solving the tangency problem exactly, a fixed set of
//! weight vectors is generated and the best-scoring one is kept:
//!
//! 1. equal weight, `1/N` each
//! 2. return-proportional, `rᵢ / Σr`
//! 3. inverse volatility, `(1/σᵢ) / Σ(1/σⱼ)`
//! 4. one corner portfolio per asset (100% in that asset)
//! 5. a blend of equal and return-proportional weights
//!
//! Every candidate sums to one by construction. Cost is fixed at `N + 4`
//! evaluations, so the search cannot run away on any input.

use std::fmt;

use frontier_math::{checked_add, checked_div, checked_mul, checked_sub, checked_sum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{OptimizerError, OptimizerResult};
use crate::metrics::{self, PortfolioMetrics};
use crate::types::{Asset, CorrelationMatrix};

/// Sharpe ratios closer than this to the incumbent count as a tie.
pub const SHARPE_TIE_TOLERANCE: Decimal = dec!(0.000000000001);

/// Which heuristic produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// `1/N` in every asset.
    EqualWeight,
    /// Proportional to expected return.
    ReturnWeighted,
    /// Proportional to inverse volatility.
    InverseVolatility,
    /// Fully invested in the asset at this index.
    Corner(usize),
    /// Equal-weight and return-weighted mix.
    Blend,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualWeight => write!(f, "equal weight"),
            Self::ReturnWeighted => write!(f, "return weighted"),
            Self::InverseVolatility => write!(f, "inverse volatility"),
            Self::Corner(i) => write!(f, "corner {i}"),
            Self::Blend => write!(f, "blend"),
        }
    }
}

/// A candidate weight vector, aligned with the asset list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Heuristic that produced the weights.
    pub kind: CandidateKind,
    /// One weight per asset.
    pub weights: Vec<Decimal>,
}

/// A candidate together with its metrics and Sharpe ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    /// The candidate.
    pub candidate: Candidate,
    /// Return, variance and volatility.
    pub metrics: PortfolioMetrics,
    /// Sharpe ratio against the risk-free rate used for scoring.
    pub sharpe_ratio: Decimal,
}

/// `1/N` in every asset.
#[must_use]
pub fn equal_weights(n: usize) -> Vec<Decimal> {
    if n == 0 {
        return Vec::new();
    }
    let w = Decimal::ONE / Decimal::from(n);
    vec![w; n]
}

/// Weights proportional to expected return, or `None` if returns sum to zero.
pub fn return_weights(assets: &[Asset]) -> OptimizerResult<Option<Vec<Decimal>>> {
    let total = checked_sum(assets.iter().map(|a| a.expected_return))?;
    if total.is_zero() {
        return Ok(None);
    }
    let weights = assets
        .iter()
        .map(|a| checked_div(a.expected_return, total))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(weights))
}

/// Weights proportional to inverse volatility.
///
/// Volatilities must be positive; callers validate assets first.
pub fn inverse_volatility_weights(assets: &[Asset]) -> OptimizerResult<Vec<Decimal>> {
    let inverses = assets
        .iter()
        .map(|a| checked_div(Decimal::ONE, a.volatility))
        .collect::<Result<Vec<_>, _>>()?;
    let total = checked_sum(inverses.iter().copied())?;
    Ok(inverses
        .into_iter()
        .map(|inv| checked_div(inv, total))
        .collect::<Result<Vec<_>, _>>()?)
}

/// 100% in asset `index`.
#[must_use]
pub fn corner_weights(n: usize, index: usize) -> Vec<Decimal> {
    (0..n)
        .map(|i| if i == index { Decimal::ONE } else { Decimal::ZERO })
        .collect()
}

/// `share·a + (1 − share)·b`, element-wise.
pub fn blend_weights(a: &[Decimal], b: &[Decimal], share: Decimal) -> OptimizerResult<Vec<Decimal>> {
    let rest = checked_sub(Decimal::ONE, share)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| checked_add(checked_mul(share, *x)?, checked_mul(rest, *y)?))
        .collect::<Result<Vec<_>, _>>()?)
}

/// Generates the candidate set in a fixed order.
///
/// `blend_equal_share` is the equal-weight share of the blended candidate.
/// When expected returns sum to zero the return-weighted and blended
/// candidates are undefined and omitted.
pub fn generate_candidates(
    assets: &[Asset],
    blend_equal_share: Decimal,
) -> OptimizerResult<Vec<Candidate>> {
    let n = assets.len();
    let equal = equal_weights(n);
    let by_return = return_weights(assets)?;

    let mut candidates = Vec::with_capacity(n + 4);
    candidates.push(Candidate {
        kind: CandidateKind::EqualWeight,
        weights: equal.clone(),
    });
    if let Some(weights) = &by_return {
        candidates.push(Candidate {
            kind: CandidateKind::ReturnWeighted,
            weights: weights.clone(),
        });
    }
    candidates.push(Candidate {
        kind: CandidateKind::InverseVolatility,
        weights: inverse_volatility_weights(assets)?,
    });
    candidates.extend((0..n).map(|i| Candidate {
        kind: CandidateKind::Corner(i),
        weights: corner_weights(n, i),
    }));
    if let Some(weights) = &by_return {
        candidates.push(Candidate {
            kind: CandidateKind::Blend,
            weights: blend_weights(&equal, weights, blend_equal_share)?,
        });
    }

    Ok(candidates)
}

/// Scores candidates and returns the highest Sharpe ratio.
///
/// Candidates with non-positive volatility or non-positive expected return
/// are discarded. A later candidate replaces the incumbent only if its
/// Sharpe ratio is higher by more than [`SHARPE_TIE_TOLERANCE`], so ties
/// (including decimal rounding noise) keep the earliest candidate.
pub fn select_max_sharpe(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    candidates: Vec<Candidate>,
    risk_free_rate: Decimal,
) -> OptimizerResult<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for candidate in candidates {
        let metrics = metrics::evaluate(assets, correlation, &candidate.weights)?;
        if metrics.volatility <= Decimal::ZERO || metrics.expected_return <= Decimal::ZERO {
            log::debug!("discarding {} candidate", candidate.kind);
            continue;
        }

        let sharpe_ratio = metrics.sharpe(risk_free_rate)?;
        let better = match &best {
            None => true,
            Some(current) => {
                checked_sub(sharpe_ratio, current.sharpe_ratio)? > SHARPE_TIE_TOLERANCE
            }
        };
        if better {
            best = Some(ScoredCandidate {
                candidate,
                metrics,
                sharpe_ratio,
            });
        }
    }

    best.ok_or(OptimizerError::NoValidPortfolios)
}

/// Generates candidates and selects the maximum-Sharpe one.
pub fn search(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    risk_free_rate: Decimal,
    blend_equal_share: Decimal,
) -> OptimizerResult<ScoredCandidate> {
    let candidates = generate_candidates(assets, blend_equal_share)?;
    log::debug!(
        "scoring {} candidates for {} assets",
        candidates.len(),
        assets.len()
    );
    let best = select_max_sharpe(assets, correlation, candidates, risk_free_rate)?;
    log::debug!(
        "selected {} candidate with sharpe {}",
        best.candidate.kind,
        best.sharpe_ratio
    );
    Ok(best)
}
