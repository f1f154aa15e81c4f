//! Analysis-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised before or during a ranking computation.
///
/// Arithmetic degeneracies (zero columns, zero totals) are never errors;
/// they collapse to 0 inside the rankers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Input failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Weighted product received a value it cannot raise to a real power.
    #[error("Weighted product requires positive values: '{alternative}' on '{criterion}' is {value}")]
    NonPositiveValue {
        alternative: String,
        criterion: String,
        value: f64,
    },
}

impl AnalysisError {
    /// Creates a non-positive value error.
    pub fn non_positive(
        alternative: impl Into<String>,
        criterion: impl Into<String>,
        value: f64,
    ) -> Self {
        AnalysisError::NonPositiveValue {
            alternative: alternative.into(),
            criterion: criterion.into(),
            value,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Validation(_) => ErrorCode::ValidationFailed,
            AnalysisError::NonPositiveValue { .. } => ErrorCode::NonPositiveValue,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Validation(inner) => inner.into(),
            AnalysisError::NonPositiveValue {
                ref alternative,
                ref criterion,
                ..
            } => DomainError::new(ErrorCode::NonPositiveValue, err.to_string())
                .with_detail("alternative", alternative.clone())
                .with_detail("criterion", criterion.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_displays_location() {
        let err = AnalysisError::non_positive("Vendor B", "Lead time", 0.0);
        assert_eq!(
            err.to_string(),
            "Weighted product requires positive values: 'Vendor B' on 'Lead time' is 0"
        );
        assert_eq!(err.code(), ErrorCode::NonPositiveValue);
    }

    #[test]
    fn validation_is_transparent() {
        let err: AnalysisError = ValidationError::empty_field("alternatives[0]").into();
        assert_eq!(err.to_string(), "Field 'alternatives[0]' cannot be empty");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err: DomainError = AnalysisError::non_positive("A", "Cost", -1.0).into();
        assert_eq!(err.code, ErrorCode::NonPositiveValue);
        assert_eq!(err.details.get("alternative"), Some(&"A".to_string()));
        assert_eq!(err.details.get("criterion"), Some(&"Cost".to_string()));
    }
}
