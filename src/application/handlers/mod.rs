//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    ExtractPairwiseWeightsCommand, ExtractPairwiseWeightsHandler, RankAlternativesCommand,
    RankAlternativesHandler, RankingPolicy,
};
