//! Weight sum advisory check.

use serde::{Deserialize, Serialize};

/// How far the weight total may drift from 1.0 before callers are warned.
pub const DEFAULT_WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Advisory classification of a criterion weight vector.
///
/// Never blocks computation; rankers accept any non-negative weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeightSumCheck {
    Balanced { total: f64 },
    Unbalanced { total: f64 },
}

impl WeightSumCheck {
    /// Classifies `weights` as balanced when |Σw − 1| ≤ tolerance.
    pub fn evaluate(weights: &[f64], tolerance: f64) -> Self {
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > tolerance {
            WeightSumCheck::Unbalanced { total }
        } else {
            WeightSumCheck::Balanced { total }
        }
    }

    /// Returns the weight total.
    pub fn total(&self) -> f64 {
        match self {
            WeightSumCheck::Balanced { total } | WeightSumCheck::Unbalanced { total } => *total,
        }
    }

    /// Returns true if the weights sum to 1 within tolerance.
    pub fn is_balanced(&self) -> bool {
        matches!(self, WeightSumCheck::Balanced { .. })
    }

    /// Caller-facing warning, present only when unbalanced.
    pub fn warning(&self) -> Option<String> {
        match self {
            WeightSumCheck::Balanced { .. } => None,
            WeightSumCheck::Unbalanced { total } => Some(format!(
                "Total weight = {:.2}. Weights should sum to 1.0",
                total
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_sum_is_balanced() {
        let check = WeightSumCheck::evaluate(&[0.25, 0.25, 0.5], DEFAULT_WEIGHT_SUM_TOLERANCE);
        assert!(check.is_balanced());
        assert!(check.warning().is_none());
    }

    #[test]
    fn drift_within_tolerance_is_balanced() {
        let check = WeightSumCheck::evaluate(&[0.333, 0.333, 0.333], DEFAULT_WEIGHT_SUM_TOLERANCE);
        assert!(check.is_balanced());
    }

    #[test]
    fn drift_beyond_tolerance_is_unbalanced() {
        let check = WeightSumCheck::evaluate(&[0.25, 0.25, 0.25], DEFAULT_WEIGHT_SUM_TOLERANCE);
        assert!(!check.is_balanced());
        assert!((check.total() - 0.75).abs() < 1e-12);
        assert_eq!(
            check.warning().as_deref(),
            Some("Total weight = 0.75. Weights should sum to 1.0")
        );
    }

    #[test]
    fn serializes_with_status_tag() {
        let check = WeightSumCheck::evaluate(&[0.6, 0.6], DEFAULT_WEIGHT_SUM_TOLERANCE);
        let json = serde_json::to_value(check).unwrap();
        assert_eq!(json["status"], "unbalanced");
    }
}
