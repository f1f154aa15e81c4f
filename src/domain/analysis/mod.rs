//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless computations that rank alternatives
//! scored against multiple criteria.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated alternatives x criteria grid with weights and directions
//! - `Normalizer` - Linear (SAW) and vector (TOPSIS) column normalization
//! - `SawRanker` - Simple Additive Weighting
//! - `WeightedProductRanker` - Weighted Product with negated cost exponents
//! - `PairwiseWeightEngine` - Priority weights and consistency ratio from pairwise judgments
//! - `AhpRanker` - Criteria weights combined with per-criterion alternative priorities
//! - `TopsisRanker` - Closeness to the ideal solution
//! - `Ranker` - The capability every method implements; shared stable ranking
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and re-entrant. Structural
//! problems are rejected when inputs are constructed; arithmetic
//! degeneracies inside the methods collapse to 0 instead of failing.

mod ahp;
mod decision_matrix;
mod errors;
mod events;
mod normalizer;
mod pairwise;
mod ranker;
mod ranking;
mod saw;
mod topsis;
mod weight_check;
mod weighted_product;

// Re-export all public types
pub use ahp::{AhpBreakdown, AhpProblem, AhpRanker};
pub use decision_matrix::{
    Criterion, CriterionDirection, DecisionMatrix, DecisionMatrixBuilder, MIN_ALTERNATIVES,
    MIN_CRITERIA,
};
pub use errors::AnalysisError;
pub use events::{MethodBreakdown, PairwiseWeightsComputed, RankingComputed};
pub use normalizer::Normalizer;
pub use pairwise::{
    random_index, ConsistencyStatus, PairwiseComparisonMatrix, PairwiseWeightEngine,
    PairwiseWeights, CONSISTENCY_RATIO_THRESHOLD, RANDOM_INDEX,
};
pub use ranker::{AlternativeSet, Ranked, Ranker, RankingMethod, Scored};
pub use ranking::{RankedAlternative, RankingResult};
pub use saw::{SawBreakdown, SawRanker};
pub use topsis::{TopsisBreakdown, TopsisRanker};
pub use weight_check::{WeightSumCheck, DEFAULT_WEIGHT_SUM_TOLERANCE};
pub use weighted_product::{WeightedProductBreakdown, WeightedProductRanker};
