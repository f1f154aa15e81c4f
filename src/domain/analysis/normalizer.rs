//! Normalizer - Direction-aware column normalization.

use super::{CriterionDirection, DecisionMatrix};

/// Column normalization strategies shared by the matrix-based rankers.
pub struct Normalizer;

impl Normalizer {
    /// Linear max/min normalization used by SAW.
    ///
    /// # Algorithm
    /// - Benefit: r_ij = x_ij / max_i(x_ij)
    /// - Cost: r_ij = min_i(x_ij) / x_ij
    ///
    /// # Edge Cases
    /// - Benefit column whose maximum is 0: every entry is 0
    /// - Cost cell whose value is 0: that cell is 0
    pub fn linear(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let mut normalized = vec![vec![0.0; matrix.criterion_count()]; matrix.alternative_count()];

        for (j, criterion) in matrix.criteria().iter().enumerate() {
            match criterion.direction {
                CriterionDirection::Benefit => {
                    let max = column_max(matrix.column(j));
                    for (i, row) in normalized.iter_mut().enumerate() {
                        row[j] = if max > 0.0 { matrix.value(i, j) / max } else { 0.0 };
                    }
                }
                CriterionDirection::Cost => {
                    let min = column_min(matrix.column(j));
                    for (i, row) in normalized.iter_mut().enumerate() {
                        let value = matrix.value(i, j);
                        row[j] = if value > 0.0 { min / value } else { 0.0 };
                    }
                }
            }
        }

        normalized
    }

    /// Euclidean vector normalization used by TOPSIS.
    ///
    /// n_ij = x_ij / sqrt(Σ_i x_ij²), or 0 when the column's sum of squares is 0.
    /// Direction is not applied here; it only matters when ideals are chosen.
    ///
    /// The norm is taken as max · sqrt(Σ (x / max)²) so squaring large
    /// finite values cannot overflow.
    pub fn vector(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let norms: Vec<f64> = (0..matrix.criterion_count())
            .map(|j| {
                let max = column_max(matrix.column(j));
                if max > 0.0 {
                    max * matrix
                        .column(j)
                        .map(|x| (x / max) * (x / max))
                        .sum::<f64>()
                        .sqrt()
                } else {
                    0.0
                }
            })
            .collect();

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&norms)
                    .map(|(&x, &norm)| if norm > 0.0 { x / norm } else { 0.0 })
                    .collect()
            })
            .collect()
    }
}

/// Largest value in a column (NEG_INFINITY when empty).
pub(crate) fn column_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest value in a column (INFINITY when empty).
pub(crate) fn column_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}
