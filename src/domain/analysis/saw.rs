//! SAW Ranker - Simple Additive Weighting.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, DecisionMatrix, Normalizer, Ranker, RankingMethod, Scored};

/// Intermediate and final results of a SAW computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SawBreakdown {
    /// Linear-normalized matrix R.
    pub normalized: Vec<Vec<f64>>,
    /// w_j × r_ij for every cell, the terms summed into each score.
    pub weighted_terms: Vec<Vec<f64>>,
    /// V_i = Σ_j w_j × r_ij.
    pub scores: Vec<f64>,
}

impl Scored for SawBreakdown {
    fn scores(&self) -> &[f64] {
        &self.scores
    }
}

/// Weighted-sum preference scoring over linear-normalized values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SawRanker;

impl SawRanker {
    /// Computes SAW scores.
    ///
    /// Weights are used as given; a total other than 1 only scales scores.
    pub fn compute(matrix: &DecisionMatrix) -> SawBreakdown {
        let normalized = Normalizer::linear(matrix);
        let weights = matrix.weights();

        let weighted_terms: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| row.iter().zip(&weights).map(|(r, w)| w * r).collect())
            .collect();

        let scores = weighted_terms.iter().map(|terms| terms.iter().sum::<f64>()).collect();

        SawBreakdown {
            normalized,
            weighted_terms,
            scores,
        }
    }
}

impl Ranker for SawRanker {
    type Input = DecisionMatrix;
    type Breakdown = SawBreakdown;

    fn method(&self) -> RankingMethod {
        RankingMethod::Saw
    }

    fn evaluate(&self, input: &DecisionMatrix) -> Result<SawBreakdown, AnalysisError> {
        Ok(Self::compute(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::CriterionDirection;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn symmetric_scores_tie_and_first_alternative_wins() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["Alternative 1", "Alternative 2"])
            .benefit("C1", 0.5)
            .benefit("C2", 0.5)
            .row(vec![10.0, 5.0])
            .row(vec![5.0, 10.0])
            .build()
            .unwrap();

        let ranked = SawRanker.rank(&matrix).unwrap();
        let breakdown = &ranked.breakdown;

        assert_eq!(breakdown.normalized, vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
        assert!((breakdown.scores[0] - 0.75).abs() < EPSILON);
        assert!((breakdown.scores[1] - 0.75).abs() < EPSILON);
        assert_eq!(ranked.ranking.best().unwrap().alternative, "Alternative 1");
        assert_eq!(ranked.ranking.rank_of(1), Some(2));
    }

    #[test]
    fn cost_criterion_favours_lower_values() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["Cheap", "Pricey"])
            .cost("Price", 0.7)
            .benefit("Quality", 0.3)
            .row(vec![100.0, 6.0])
            .row(vec![200.0, 8.0])
            .build()
            .unwrap();

        let breakdown = SawRanker::compute(&matrix);
        // Cheap: 0.7*1 + 0.3*0.75 = 0.925, Pricey: 0.7*0.5 + 0.3*1 = 0.65
        assert!((breakdown.scores[0] - 0.925).abs() < EPSILON);
        assert!((breakdown.scores[1] - 0.65).abs() < EPSILON);
    }

    #[test]
    fn weighted_terms_sum_to_scores() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["A", "B", "C"])
            .benefit("C1", 0.2)
            .cost("C2", 0.3)
            .benefit("C3", 0.5)
            .row(vec![3.0, 4.0, 5.0])
            .row(vec![6.0, 2.0, 1.0])
            .row(vec![1.0, 8.0, 9.0])
            .build()
            .unwrap();

        let breakdown = SawRanker::compute(&matrix);
        for (terms, score) in breakdown.weighted_terms.iter().zip(&breakdown.scores) {
            assert!((terms.iter().sum::<f64>() - score).abs() < EPSILON);
        }
    }

    #[test]
    fn unbalanced_weights_still_compute() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["A", "B"])
            .benefit("C1", 1.0)
            .benefit("C2", 1.0)
            .row(vec![2.0, 2.0])
            .row(vec![1.0, 1.0])
            .build()
            .unwrap();

        let breakdown = SawRanker::compute(&matrix);
        assert!((breakdown.scores[0] - 2.0).abs() < EPSILON);
        assert!((breakdown.scores[1] - 1.0).abs() < EPSILON);
    }

    fn matrix_strategy() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<bool>)> {
        (2usize..6, 2usize..6).prop_flat_map(|(alternatives, criteria)| {
            (
                prop::collection::vec(
                    prop::collection::vec(0.0f64..100.0, criteria),
                    alternatives,
                ),
                prop::collection::vec(0.0f64..1.0, criteria),
                prop::collection::vec(any::<bool>(), criteria),
            )
        })
    }

    fn build(values: &[Vec<f64>], weights: &[f64], costs: &[bool]) -> DecisionMatrix {
        let mut builder = DecisionMatrix::builder()
            .alternatives((0..values.len()).map(|i| format!("A{}", i)).collect::<Vec<String>>());
        for (j, (&weight, &cost)) in weights.iter().zip(costs).enumerate() {
            let direction = if cost {
                CriterionDirection::Cost
            } else {
                CriterionDirection::Benefit
            };
            builder = builder.criterion(format!("C{}", j), weight, direction);
        }
        for row in values {
            builder = builder.row(row.clone());
        }
        builder.build().unwrap()
    }

    proptest! {
        #[test]
        fn scores_invariant_under_criteria_permutation(
            (values, weights, costs) in matrix_strategy()
        ) {
            let original = SawRanker::compute(&build(&values, &weights, &costs));

            let reversed_values: Vec<Vec<f64>> = values
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect();
            let reversed_weights: Vec<f64> = weights.iter().rev().copied().collect();
            let reversed_costs: Vec<bool> = costs.iter().rev().copied().collect();
            let permuted =
                SawRanker::compute(&build(&reversed_values, &reversed_weights, &reversed_costs));

            for (a, b) in original.scores.iter().zip(&permuted.scores) {
                prop_assert!((a - b).abs() < EPSILON);
            }
        }

        #[test]
        fn best_value_normalizes_to_one(
            (values, weights, costs) in matrix_strategy()
        ) {
            let matrix = build(&values, &weights, &costs);
            let breakdown = SawRanker::compute(&matrix);

            for j in 0..matrix.criterion_count() {
                let column: Vec<f64> = matrix.column(j).collect();
                let (best, target) = if costs[j] {
                    let min = column.iter().copied().fold(f64::INFINITY, f64::min);
                    (min, min > 0.0)
                } else {
                    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    (max, max > 0.0)
                };
                if target {
                    let i = column.iter().position(|&x| x == best).unwrap();
                    prop_assert!((breakdown.normalized[i][j] - 1.0).abs() < EPSILON);
                }
            }
        }
    }
}
