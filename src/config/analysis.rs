//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{CONSISTENCY_RATIO_THRESHOLD, DEFAULT_WEIGHT_SUM_TOLERANCE};

/// Advisory thresholds and request size limits for ranking computations
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Allowed drift of the weight total from 1.0 before warning
    #[serde(default = "default_weight_sum_tolerance")]
    pub weight_sum_tolerance: f64,

    /// Largest consistency ratio still classified as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Maximum alternatives per request
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Maximum criteria per SAW/WP/TOPSIS request
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,

    /// Maximum criteria per AHP request
    #[serde(default = "default_max_ahp_criteria")]
    pub max_ahp_criteria: usize,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.weight_sum_tolerance.is_finite() || self.weight_sum_tolerance <= 0.0 {
            return Err(ValidationError::InvalidWeightSumTolerance);
        }
        if !self.consistency_threshold.is_finite() || self.consistency_threshold <= 0.0 {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if self.max_alternatives < 2 {
            return Err(ValidationError::LimitTooSmall("max_alternatives"));
        }
        if self.max_criteria < 2 {
            return Err(ValidationError::LimitTooSmall("max_criteria"));
        }
        if self.max_ahp_criteria < 2 {
            return Err(ValidationError::LimitTooSmall("max_ahp_criteria"));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weight_sum_tolerance: default_weight_sum_tolerance(),
            consistency_threshold: default_consistency_threshold(),
            max_alternatives: default_max_alternatives(),
            max_criteria: default_max_criteria(),
            max_ahp_criteria: default_max_ahp_criteria(),
        }
    }
}

fn default_weight_sum_tolerance() -> f64 {
    DEFAULT_WEIGHT_SUM_TOLERANCE
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_RATIO_THRESHOLD
}

fn default_max_alternatives() -> usize {
    10
}

fn default_max_criteria() -> usize {
    10
}

fn default_max_ahp_criteria() -> usize {
    7
}
