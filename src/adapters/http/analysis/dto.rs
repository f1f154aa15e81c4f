//! HTTP DTOs for analysis endpoints.
//!
//! Request bodies are plain data; `into_*` conversions run them through
//! the domain constructors so every structural rule is checked once.
//! Response bodies are the domain result records, re-exported as-is.

pub use crate::domain::analysis::{PairwiseWeightsComputed, RankingComputed};

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AhpProblem, Criterion, CriterionDirection, DecisionMatrix, PairwiseComparisonMatrix,
};
use crate::domain::foundation::{DomainError, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A criterion as submitted by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CriterionRequest {
    pub name: String,
    pub weight: f64,
    pub direction: CriterionDirection,
}

/// Request body for SAW, WP and TOPSIS.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRankingRequest {
    pub alternatives: Vec<String>,
    pub criteria: Vec<CriterionRequest>,
    /// `scores[i][j]` is alternative i's raw score on criterion j.
    pub scores: Vec<Vec<f64>>,
}

impl MatrixRankingRequest {
    pub fn into_matrix(self) -> Result<DecisionMatrix, ValidationError> {
        let criteria = self
            .criteria
            .into_iter()
            .map(|c| Criterion::new(c.name, c.weight, c.direction))
            .collect();
        DecisionMatrix::new(self.alternatives, criteria, self.scores)
    }
}

/// Request body for AHP.
#[derive(Debug, Clone, Deserialize)]
pub struct AhpRankingRequest {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    /// Upper-triangle judgments between criteria, row-major.
    pub criteria_comparisons: Vec<f64>,
    /// Upper-triangle judgments between alternatives, one list per criterion.
    pub alternative_comparisons: Vec<Vec<f64>>,
}

impl AhpRankingRequest {
    pub fn into_problem(self) -> Result<AhpProblem, ValidationError> {
        AhpProblem::from_judgments(
            self.criteria,
            self.alternatives,
            &self.criteria_comparisons,
            &self.alternative_comparisons,
        )
    }
}

/// Request body for standalone pairwise weighting.
#[derive(Debug, Clone, Deserialize)]
pub struct PairwiseWeightsRequest {
    pub labels: Vec<String>,
    /// Upper-triangle judgments, row-major.
    pub comparisons: Vec<f64>,
}

impl PairwiseWeightsRequest {
    pub fn into_matrix(self) -> Result<PairwiseComparisonMatrix, ValidationError> {
        PairwiseComparisonMatrix::from_upper_triangle(self.labels, &self.comparisons)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message,
            details,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn matrix_request_deserializes_and_converts() {
        let body = r#"{
            "alternatives": ["A", "B"],
            "criteria": [
                { "name": "Quality", "weight": 0.7, "direction": "benefit" },
                { "name": "Price", "weight": 0.3, "direction": "cost" }
            ],
            "scores": [[8, 100], [6, 80]]
        }"#;
        let request: MatrixRankingRequest = serde_json::from_str(body).unwrap();
        let matrix = request.into_matrix().unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criteria()[1].direction, CriterionDirection::Cost);
        assert_eq!(matrix.value(1, 1), 80.0);
    }

    #[test]
    fn matrix_request_with_short_row_fails_validation() {
        let request = MatrixRankingRequest {
            alternatives: vec!["A".into(), "B".into()],
            criteria: vec![
                CriterionRequest {
                    name: "C1".into(),
                    weight: 0.5,
                    direction: CriterionDirection::Benefit,
                },
                CriterionRequest {
                    name: "C2".into(),
                    weight: 0.5,
                    direction: CriterionDirection::Benefit,
                },
            ],
            scores: vec![vec![1.0, 2.0], vec![1.0]],
        };
        assert!(matches!(
            request.into_matrix(),
            Err(ValidationError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn unknown_direction_is_rejected_by_serde() {
        let body = r#"{ "name": "C", "weight": 1.0, "direction": "sideways" }"#;
        assert!(serde_json::from_str::<CriterionRequest>(body).is_err());
    }

    #[test]
    fn ahp_request_converts() {
        let request = AhpRankingRequest {
            alternatives: vec!["X".into(), "Y".into()],
            criteria: vec!["C1".into(), "C2".into()],
            criteria_comparisons: vec![3.0],
            alternative_comparisons: vec![vec![2.0], vec![0.5]],
        };
        let problem = request.into_problem().unwrap();
        assert_eq!(problem.criterion_count(), 2);
        assert_eq!(problem.alternative_count(), 2);
    }

    #[test]
    fn error_response_carries_domain_details() {
        let error = DomainError::new(ErrorCode::LimitExceeded, "too many")
            .with_detail("field", "alternatives");
        let response = ErrorResponse::from(error);

        assert_eq!(response.code, "LIMIT_EXCEEDED");
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "field": "alternatives" }))
        );
    }

    #[test]
    fn error_response_omits_empty_details() {
        let response = ErrorResponse::from(DomainError::new(ErrorCode::InternalError, "boom"));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }
}
