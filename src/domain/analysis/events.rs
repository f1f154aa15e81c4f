//! Analysis result records.
//!
//! Published by the application layer when a computation completes. They
//! carry the ranking, the advisory checks, and the method-specific chain of
//! intermediate results so callers can explain each score.

use serde::Serialize;

use super::{
    AhpBreakdown, PairwiseWeights, RankingMethod, RankingResult, SawBreakdown, TopsisBreakdown,
    WeightSumCheck, WeightedProductBreakdown,
};
use crate::domain::foundation::{ComputationId, Timestamp};

/// Method-specific intermediate results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MethodBreakdown {
    Saw(SawBreakdown),
    WeightedProduct(WeightedProductBreakdown),
    Ahp(AhpBreakdown),
    Topsis(TopsisBreakdown),
}

/// Published when a set of alternatives has been ranked.
#[derive(Debug, Clone, Serialize)]
pub struct RankingComputed {
    /// Unique identifier of this computation.
    pub computation_id: ComputationId,
    /// Method used to rank.
    pub method: RankingMethod,
    /// Alternatives best-first.
    pub ranking: RankingResult,
    /// Name of the rank-1 alternative.
    pub best_alternative: Option<String>,
    /// Weight-sum advisory (matrix methods only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_check: Option<WeightSumCheck>,
    /// Whether every pairwise matrix was consistent (AHP only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,
    /// Caller-facing warnings derived from the advisory checks.
    pub warnings: Vec<String>,
    /// Intermediate results of the method.
    pub breakdown: MethodBreakdown,
    /// When the computation finished.
    pub computed_at: Timestamp,
}

/// Published when weights are extracted from a standalone pairwise matrix.
#[derive(Debug, Clone, Serialize)]
pub struct PairwiseWeightsComputed {
    /// Unique identifier of this computation.
    pub computation_id: ComputationId,
    /// Compared entities, in weight order.
    pub labels: Vec<String>,
    /// Weights, λmax, CI, CR and classification.
    pub result: PairwiseWeights,
    /// When the computation finished.
    pub computed_at: Timestamp,
}
