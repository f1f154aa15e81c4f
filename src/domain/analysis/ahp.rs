//! AHP Ranker - Single-level Analytic Hierarchy Process.

use serde::{Deserialize, Serialize};

use super::decision_matrix::{MIN_ALTERNATIVES, MIN_CRITERIA};
use super::{
    AlternativeSet, AnalysisError, PairwiseComparisonMatrix, PairwiseWeightEngine,
    PairwiseWeights, Ranker, RankingMethod, Scored,
};
use crate::domain::foundation::ValidationError;

/// Criteria judgments plus one alternative judgment matrix per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AhpProblem {
    alternatives: Vec<String>,
    criteria: PairwiseComparisonMatrix,
    alternative_comparisons: Vec<PairwiseComparisonMatrix>,
}

impl AhpProblem {
    /// Assembles an AHP problem from already-built comparison matrices.
    ///
    /// # Errors
    /// - Fewer than 2 criteria or 2 alternatives
    /// - Alternative matrix count different from the criteria count
    /// - An alternative matrix not labelled with the alternatives, in order
    pub fn new(
        criteria: PairwiseComparisonMatrix,
        alternative_comparisons: Vec<PairwiseComparisonMatrix>,
    ) -> Result<Self, ValidationError> {
        if criteria.size() < MIN_CRITERIA {
            return Err(ValidationError::invalid_format(
                "criteria",
                format!("at least {} are required, got {}", MIN_CRITERIA, criteria.size()),
            ));
        }
        if alternative_comparisons.len() != criteria.size() {
            return Err(ValidationError::dimension_mismatch(
                "alternative_comparisons",
                criteria.size(),
                alternative_comparisons.len(),
            ));
        }

        let alternatives = alternative_comparisons[0].labels().to_vec();
        if alternatives.len() < MIN_ALTERNATIVES {
            return Err(ValidationError::invalid_format(
                "alternatives",
                format!(
                    "at least {} are required, got {}",
                    MIN_ALTERNATIVES,
                    alternatives.len()
                ),
            ));
        }

        for (k, matrix) in alternative_comparisons.iter().enumerate().skip(1) {
            if matrix.size() != alternatives.len() {
                return Err(ValidationError::dimension_mismatch(
                    format!("alternative_comparisons[{}]", k),
                    alternatives.len(),
                    matrix.size(),
                ));
            }
            if matrix.labels() != alternatives.as_slice() {
                return Err(ValidationError::invalid_format(
                    format!("alternative_comparisons[{}]", k),
                    "must compare the same alternatives in the same order",
                ));
            }
        }

        Ok(Self {
            alternatives,
            criteria,
            alternative_comparisons,
        })
    }

    /// Builds an AHP problem from upper-triangle judgments.
    ///
    /// `criteria_judgments` compares criteria; `alternative_judgments[k]`
    /// compares alternatives under criterion k.
    pub fn from_judgments(
        criteria: Vec<String>,
        alternatives: Vec<String>,
        criteria_judgments: &[f64],
        alternative_judgments: &[Vec<f64>],
    ) -> Result<Self, ValidationError> {
        let criteria_matrix =
            PairwiseComparisonMatrix::from_upper_triangle(criteria, criteria_judgments)?;

        let alternative_matrices = alternative_judgments
            .iter()
            .map(|judgments| {
                PairwiseComparisonMatrix::from_upper_triangle(alternatives.clone(), judgments)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if alternative_matrices.is_empty() {
            return Err(ValidationError::dimension_mismatch(
                "alternative_comparisons",
                criteria_matrix.size(),
                0,
            ));
        }

        Self::new(criteria_matrix, alternative_matrices)
    }

    /// Criterion names.
    pub fn criteria(&self) -> &[String] {
        self.criteria.labels()
    }

    /// Criteria comparison matrix.
    pub fn criteria_matrix(&self) -> &PairwiseComparisonMatrix {
        &self.criteria
    }

    /// Alternative comparison matrices, one per criterion.
    pub fn alternative_matrices(&self) -> &[PairwiseComparisonMatrix] {
        &self.alternative_comparisons
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.size()
    }
}

impl AlternativeSet for AhpProblem {
    fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

/// Intermediate and final results of an AHP computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpBreakdown {
    /// Weights and consistency of the criteria matrix.
    pub criteria: PairwiseWeights,
    /// Alternative priorities under each criterion.
    pub alternative_priorities: Vec<PairwiseWeights>,
    /// P_ik = priority of alternative i under criterion k.
    pub priority_matrix: Vec<Vec<f64>>,
    /// P_ik × criteria weight k.
    pub weighted_terms: Vec<Vec<f64>>,
    /// Σ_k P_ik × criteria weight k.
    pub scores: Vec<f64>,
}

impl AhpBreakdown {
    /// True when the criteria matrix and every alternative matrix are consistent.
    pub fn all_consistent(&self) -> bool {
        self.criteria.is_consistent()
            && self
                .alternative_priorities
                .iter()
                .all(PairwiseWeights::is_consistent)
    }
}

impl Scored for AhpBreakdown {
    fn scores(&self) -> &[f64] {
        &self.scores
    }
}

/// Combines criteria weights with per-criterion alternative priorities.
#[derive(Debug, Clone, Copy, Default)]
pub struct AhpRanker {
    engine: PairwiseWeightEngine,
}

impl AhpRanker {
    /// Creates a ranker that uses `engine` for every comparison matrix.
    pub fn new(engine: PairwiseWeightEngine) -> Self {
        Self { engine }
    }

    /// Computes AHP scores.
    ///
    /// Inconsistent matrices are reported in the breakdown, never rejected.
    pub fn compute(&self, problem: &AhpProblem) -> AhpBreakdown {
        let criteria = self.engine.extract(&problem.criteria);

        let alternative_priorities: Vec<PairwiseWeights> = problem
            .alternative_comparisons
            .iter()
            .map(|matrix| self.engine.extract(matrix))
            .collect();

        let priority_matrix: Vec<Vec<f64>> = (0..problem.alternative_count())
            .map(|i| {
                alternative_priorities
                    .iter()
                    .map(|priorities| priorities.weights[i])
                    .collect()
            })
            .collect();

        let weighted_terms: Vec<Vec<f64>> = priority_matrix
            .iter()
            .map(|row| row.iter().zip(&criteria.weights).map(|(p, w)| p * w).collect())
            .collect();

        let scores = weighted_terms.iter().map(|terms| terms.iter().sum::<f64>()).collect();

        AhpBreakdown {
            criteria,
            alternative_priorities,
            priority_matrix,
            weighted_terms,
            scores,
        }
    }
}

impl Ranker for AhpRanker {
    type Input = AhpProblem;
    type Breakdown = AhpBreakdown;

    fn method(&self) -> RankingMethod {
        RankingMethod::Ahp
    }

    fn evaluate(&self, input: &AhpProblem) -> Result<AhpBreakdown, AnalysisError> {
        Ok(self.compute(input))
    }
}
