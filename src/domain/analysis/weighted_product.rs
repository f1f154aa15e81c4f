//! Weighted Product Ranker - Multiplicative preference scoring.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, DecisionMatrix, Ranker, RankingMethod, Scored};

/// Intermediate and final results of a weighted product computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedProductBreakdown {
    /// Weights with cost criteria negated.
    pub adjusted_weights: Vec<f64>,
    /// S_i = Π_j x_ij ^ w'_j.
    pub products: Vec<f64>,
    /// V_i = S_i / Σ_k S_k.
    pub scores: Vec<f64>,
}

impl Scored for WeightedProductBreakdown {
    fn scores(&self) -> &[f64] {
        &self.scores
    }
}

/// Weighted-product preference scoring with cost exponents negated.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedProductRanker;

impl WeightedProductRanker {
    /// Computes weighted product scores.
    ///
    /// # Errors
    /// Any value ≤ 0 is rejected: fractional and negative exponents are
    /// undefined for such bases.
    ///
    /// # Edge Cases
    /// - Scores are normalized in log space, so V stays finite when a raw
    ///   product S_i overflows (`products` then holds infinity)
    /// - Σ S_k = 0: every V_i is 0
    pub fn compute(matrix: &DecisionMatrix) -> Result<WeightedProductBreakdown, AnalysisError> {
        Self::ensure_positive(matrix)?;

        let adjusted_weights: Vec<f64> = matrix
            .criteria()
            .iter()
            .map(|c| if c.direction.is_cost() { -c.weight } else { c.weight })
            .collect();

        // ln S_i = Σ_j w'_j · ln x_ij keeps large inputs from overflowing
        let log_products: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&adjusted_weights)
                    .map(|(&x, &w)| w * x.ln())
                    .sum::<f64>()
            })
            .collect();
        let products: Vec<f64> = log_products.iter().map(|l| l.exp()).collect();

        let max_log = log_products
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let shifted: Vec<f64> = log_products
            .iter()
            .map(|&l| if l == max_log { 1.0 } else { (l - max_log).exp() })
            .collect();

        let total: f64 = shifted.iter().sum();
        let scores = shifted
            .iter()
            .map(|&s| if total > 0.0 { s / total } else { 0.0 })
            .collect();

        Ok(WeightedProductBreakdown {
            adjusted_weights,
            products,
            scores,
        })
    }

    fn ensure_positive(matrix: &DecisionMatrix) -> Result<(), AnalysisError> {
        for (i, row) in matrix.rows().iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value <= 0.0 {
                    return Err(AnalysisError::non_positive(
                        matrix.alternatives()[i].clone(),
                        matrix.criteria()[j].name.clone(),
                        value,
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Ranker for WeightedProductRanker {
    type Input = DecisionMatrix;
    type Breakdown = WeightedProductBreakdown;

    fn method(&self) -> RankingMethod {
        RankingMethod::WeightedProduct
    }

    fn evaluate(&self, input: &DecisionMatrix) -> Result<WeightedProductBreakdown, AnalysisError> {
        Self::compute(input)
    }
}
