//! TOPSIS Ranker - Closeness to the ideal solution.

use serde::{Deserialize, Serialize};

use super::normalizer::{column_max, column_min};
use super::{
    AnalysisError, CriterionDirection, DecisionMatrix, Normalizer, Ranker, RankingMethod, Scored,
};

/// The full TOPSIS computation chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisBreakdown {
    /// Vector-normalized matrix N.
    pub normalized: Vec<Vec<f64>>,
    /// W_ij = N_ij × w_j.
    pub weighted: Vec<Vec<f64>>,
    /// A+ per criterion.
    pub ideal_positive: Vec<f64>,
    /// A− per criterion.
    pub ideal_negative: Vec<f64>,
    /// D+ per alternative.
    pub distance_positive: Vec<f64>,
    /// D− per alternative.
    pub distance_negative: Vec<f64>,
    /// Closeness coefficient D− / (D+ + D−).
    pub scores: Vec<f64>,
}

impl Scored for TopsisBreakdown {
    fn scores(&self) -> &[f64] {
        &self.scores
    }
}

/// Ideal-solution distance ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisRanker;

impl TopsisRanker {
    /// Computes TOPSIS preferences.
    ///
    /// # Edge Cases
    /// - Column with zero sum of squares: normalized entries are 0
    /// - D+ + D− = 0 (alternative equals both ideals): preference is 0
    pub fn compute(matrix: &DecisionMatrix) -> TopsisBreakdown {
        let normalized = Normalizer::vector(matrix);
        let weights = matrix.weights();

        let weighted: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| row.iter().zip(&weights).map(|(n, w)| n * w).collect())
            .collect();

        let mut ideal_positive = Vec::with_capacity(weights.len());
        let mut ideal_negative = Vec::with_capacity(weights.len());
        for (j, criterion) in matrix.criteria().iter().enumerate() {
            let max = column_max(weighted.iter().map(|row| row[j]));
            let min = column_min(weighted.iter().map(|row| row[j]));
            let (best, worst) = match criterion.direction {
                CriterionDirection::Benefit => (max, min),
                CriterionDirection::Cost => (min, max),
            };
            ideal_positive.push(best);
            ideal_negative.push(worst);
        }

        let distance_positive: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean_distance(row, &ideal_positive))
            .collect();
        let distance_negative: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean_distance(row, &ideal_negative))
            .collect();

        let scores = distance_positive
            .iter()
            .zip(&distance_negative)
            .map(|(&dp, &dn)| {
                let total = dp + dn;
                if total > 0.0 {
                    dn / total
                } else {
                    0.0
                }
            })
            .collect();

        TopsisBreakdown {
            normalized,
            weighted,
            ideal_positive,
            ideal_negative,
            distance_positive,
            distance_negative,
            scores,
        }
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

impl Ranker for TopsisRanker {
    type Input = DecisionMatrix;
    type Breakdown = TopsisBreakdown;

    fn method(&self) -> RankingMethod {
        RankingMethod::Topsis
    }

    fn evaluate(&self, input: &DecisionMatrix) -> Result<TopsisBreakdown, AnalysisError> {
        Ok(Self::compute(input))
    }
}
