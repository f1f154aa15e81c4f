//! Application layer - Commands and Handlers.
//!
//! This layer enforces request limits, runs the domain rankers, and turns
//! their output into published result records.

pub mod handlers;

pub use handlers::{
    ExtractPairwiseWeightsCommand, ExtractPairwiseWeightsHandler, RankAlternativesCommand,
    RankAlternativesHandler, RankingPolicy,
};
