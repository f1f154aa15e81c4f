//! HTTP routes for analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    extract_pairwise_weights, health, rank_ahp, rank_saw, rank_topsis, rank_weighted_product,
    AnalysisAppState,
};

/// Creates the analysis router with all routes.
pub fn analysis_routes(state: AnalysisAppState) -> Router {
    Router::new()
        .route("/api/analysis/saw", post(rank_saw))
        .route("/api/analysis/wp", post(rank_weighted_product))
        .route("/api/analysis/topsis", post(rank_topsis))
        .route("/api/analysis/ahp", post(rank_ahp))
        .route("/api/analysis/pairwise-weights", post(extract_pairwise_weights))
        .route("/health", get(health))
        .with_state(state)
}
