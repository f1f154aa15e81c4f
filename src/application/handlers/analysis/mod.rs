//! Analysis handlers.
//!
//! Synchronous command handlers that run ranking computations and attach
//! the advisory checks callers see alongside the scores.

mod extract_pairwise_weights;
mod rank_alternatives;

pub use extract_pairwise_weights::{ExtractPairwiseWeightsCommand, ExtractPairwiseWeightsHandler};
pub use rank_alternatives::{RankAlternativesCommand, RankAlternativesHandler, RankingPolicy};
