//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    ExtractPairwiseWeightsCommand, ExtractPairwiseWeightsHandler, RankAlternativesCommand,
    RankAlternativesHandler, RankingPolicy,
};
use crate::config::AnalysisConfig;
use crate::domain::analysis::PairwiseWeightEngine;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::dto::{
    AhpRankingRequest, ErrorResponse, HealthResponse, MatrixRankingRequest,
    PairwiseWeightsComputed, PairwiseWeightsRequest, RankingComputed,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalysisApiError {
    /// Body could not be parsed.
    BadRequest(String),
    /// Structural or domain failure from the handlers.
    Domain(DomainError),
}

impl AnalysisApiError {
    fn status(code: ErrorCode) -> StatusCode {
        match code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::DimensionMismatch => StatusCode::BAD_REQUEST,
            ErrorCode::NonPositiveValue | ErrorCode::LimitExceeded => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalysisApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalysisApiError::Domain(err) => (Self::status(err.code), ErrorResponse::from(err)),
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for AnalysisApiError {
    fn from(error: DomainError) -> Self {
        AnalysisApiError::Domain(error)
    }
}

impl From<ValidationError> for AnalysisApiError {
    fn from(error: ValidationError) -> Self {
        AnalysisApiError::Domain(error.into())
    }
}

impl From<JsonRejection> for AnalysisApiError {
    fn from(rejection: JsonRejection) -> Self {
        AnalysisApiError::BadRequest(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analysis handlers.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub rank_handler: Arc<RankAlternativesHandler>,
    pub pairwise_handler: Arc<ExtractPairwiseWeightsHandler>,
}

impl AnalysisAppState {
    pub fn new(config: &AnalysisConfig) -> Self {
        let policy = RankingPolicy::from(config);
        Self {
            rank_handler: Arc::new(RankAlternativesHandler::new(policy)),
            pairwise_handler: Arc::new(ExtractPairwiseWeightsHandler::new(
                PairwiseWeightEngine::new(config.consistency_threshold),
                config.max_criteria,
            )),
        }
    }
}

impl Default for AnalysisAppState {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analysis/saw
pub async fn rank_saw(
    State(state): State<AnalysisAppState>,
    body: Result<Json<MatrixRankingRequest>, JsonRejection>,
) -> Result<Json<RankingComputed>, AnalysisApiError> {
    let Json(request) = body?;
    let cmd = RankAlternativesCommand::Saw(request.into_matrix()?);
    Ok(Json(state.rank_handler.handle(cmd)?))
}

/// POST /api/analysis/wp
pub async fn rank_weighted_product(
    State(state): State<AnalysisAppState>,
    body: Result<Json<MatrixRankingRequest>, JsonRejection>,
) -> Result<Json<RankingComputed>, AnalysisApiError> {
    let Json(request) = body?;
    let cmd = RankAlternativesCommand::WeightedProduct(request.into_matrix()?);
    Ok(Json(state.rank_handler.handle(cmd)?))
}

/// POST /api/analysis/topsis
pub async fn rank_topsis(
    State(state): State<AnalysisAppState>,
    body: Result<Json<MatrixRankingRequest>, JsonRejection>,
) -> Result<Json<RankingComputed>, AnalysisApiError> {
    let Json(request) = body?;
    let cmd = RankAlternativesCommand::Topsis(request.into_matrix()?);
    Ok(Json(state.rank_handler.handle(cmd)?))
}

/// POST /api/analysis/ahp
///
/// Inconsistent judgments still produce a ranking; the response flags them.
pub async fn rank_ahp(
    State(state): State<AnalysisAppState>,
    body: Result<Json<AhpRankingRequest>, JsonRejection>,
) -> Result<Json<RankingComputed>, AnalysisApiError> {
    let Json(request) = body?;
    let cmd = RankAlternativesCommand::Ahp(request.into_problem()?);
    Ok(Json(state.rank_handler.handle(cmd)?))
}

/// POST /api/analysis/pairwise-weights
pub async fn extract_pairwise_weights(
    State(state): State<AnalysisAppState>,
    body: Result<Json<PairwiseWeightsRequest>, JsonRejection>,
) -> Result<Json<PairwiseWeightsComputed>, AnalysisApiError> {
    let Json(request) = body?;
    let cmd = ExtractPairwiseWeightsCommand {
        matrix: request.into_matrix()?,
    };
    Ok(Json(state.pairwise_handler.handle(cmd)?))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_codes_map_to_bad_request() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::EmptyField,
            ErrorCode::OutOfRange,
            ErrorCode::InvalidFormat,
            ErrorCode::DimensionMismatch,
        ] {
            assert_eq!(AnalysisApiError::status(code), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn unprocessable_codes() {
        assert_eq!(
            AnalysisApiError::status(ErrorCode::NonPositiveValue),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AnalysisApiError::status(ErrorCode::LimitExceeded),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AnalysisApiError::status(ErrorCode::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_error_response_status() {
        let response =
            AnalysisApiError::from(ValidationError::empty_field("alternatives[0]")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn state_follows_config_limits() {
        let config = AnalysisConfig {
            max_alternatives: 3,
            ..Default::default()
        };
        let state = AnalysisAppState::new(&config);
        assert_eq!(state.rank_handler.policy().max_alternatives, 3);
    }
}
