//! Pairwise Weight Engine - Priority extraction and consistency checking.
//!
//! Weights come from the column-normalized row-average approximation of the
//! principal eigenvector. The random index table is calibrated against this
//! approximation, so it must not be swapped for an exact eigen solver.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Largest consistency ratio still accepted as consistent (inclusive).
pub const CONSISTENCY_RATIO_THRESHOLD: f64 = 0.10;

/// Saaty random index for matrix sizes 1 through 10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Relative tolerance for the reciprocal and unit-diagonal checks.
const RECIPROCAL_TOLERANCE: f64 = 1e-9;

/// Random index for a matrix of size `n`.
///
/// Sizes beyond the table reuse the last entry.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
        _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
    }
}

/// Square reciprocal matrix of judgments over one set of entities.
///
/// Invariants: unit diagonal, m[j][i] = 1 / m[i][j], every entry > 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseComparisonMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl PairwiseComparisonMatrix {
    /// Builds a matrix from its strict upper triangle.
    ///
    /// `upper` lists m[i][j] for i < j in row-major order, so a matrix of
    /// size n needs n(n−1)/2 judgments. The diagonal is set to 1 and the
    /// lower triangle to reciprocals.
    pub fn from_upper_triangle(
        labels: Vec<String>,
        upper: &[f64],
    ) -> Result<Self, ValidationError> {
        Self::check_labels(&labels)?;

        let n = labels.len();
        let expected = n * (n - 1) / 2;
        if upper.len() != expected {
            return Err(ValidationError::dimension_mismatch(
                "comparisons",
                expected,
                upper.len(),
            ));
        }

        let mut values = vec![vec![1.0; n]; n];
        let mut judgments = upper.iter().copied().enumerate();
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some((k, value)) = judgments.next() {
                    if !value.is_finite() || value <= 0.0 {
                        return Err(ValidationError::invalid_format(
                            format!("comparisons[{}]", k),
                            format!("must be a finite positive number, got {}", value),
                        ));
                    }
                    values[i][j] = value;
                    values[j][i] = 1.0 / value;
                }
            }
        }

        Ok(Self { labels, values })
    }

    /// Builds a matrix from full rows, checking every invariant.
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        Self::check_labels(&labels)?;

        let n = labels.len();
        if rows.len() != n {
            return Err(ValidationError::dimension_mismatch("rows", n, rows.len()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ValidationError::dimension_mismatch(
                    format!("rows[{}]", i),
                    n,
                    row.len(),
                ));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ValidationError::invalid_format(
                        format!("rows[{}][{}]", i, j),
                        format!("must be a finite positive number, got {}", value),
                    ));
                }
            }
        }

        for i in 0..n {
            if (rows[i][i] - 1.0).abs() > RECIPROCAL_TOLERANCE {
                return Err(ValidationError::invalid_format(
                    format!("rows[{}][{}]", i, i),
                    format!("diagonal must be 1, got {}", rows[i][i]),
                ));
            }
            for j in (i + 1)..n {
                if (rows[i][j] * rows[j][i] - 1.0).abs() > RECIPROCAL_TOLERANCE {
                    return Err(ValidationError::invalid_format(
                        format!("rows[{}][{}]", j, i),
                        format!("must be the reciprocal of {}, got {}", rows[i][j], rows[j][i]),
                    ));
                }
            }
        }

        Ok(Self {
            labels,
            values: rows,
        })
    }

    fn check_labels(labels: &[String]) -> Result<(), ValidationError> {
        if labels.is_empty() {
            return Err(ValidationError::empty_field("labels"));
        }
        for (i, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("labels[{}]", i)));
            }
        }
        Ok(())
    }

    /// Entity labels in row/column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Matrix rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Judgment of entity `i` over entity `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Number of compared entities.
    pub fn size(&self) -> usize {
        self.labels.len()
    }
}

/// Caller-facing consistency classification. Never blocks computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyStatus {
    Consistent,
    Inconsistent,
}

impl ConsistencyStatus {
    /// Consistent when `ratio` ≤ `threshold`.
    pub fn classify(ratio: f64, threshold: f64) -> Self {
        if ratio <= threshold {
            ConsistencyStatus::Consistent
        } else {
            ConsistencyStatus::Inconsistent
        }
    }

    /// Returns true if consistent.
    pub fn is_consistent(&self) -> bool {
        matches!(self, ConsistencyStatus::Consistent)
    }
}

/// Everything extracted from one pairwise comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseWeights {
    /// N_ij = M_ij / colSum_j.
    pub normalized: Vec<Vec<f64>>,
    /// Row averages of N.
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
    pub consistency: ConsistencyStatus,
}

impl PairwiseWeights {
    /// Returns true if the source matrix was acceptably consistent.
    pub fn is_consistent(&self) -> bool {
        self.consistency.is_consistent()
    }
}

/// Eigenvector-approximation weight extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseWeightEngine {
    consistency_threshold: f64,
}

impl Default for PairwiseWeightEngine {
    fn default() -> Self {
        Self::new(CONSISTENCY_RATIO_THRESHOLD)
    }
}

impl PairwiseWeightEngine {
    /// Creates an engine that classifies CR against `consistency_threshold`.
    pub fn new(consistency_threshold: f64) -> Self {
        Self {
            consistency_threshold,
        }
    }

    /// Returns the consistency threshold in use.
    pub fn consistency_threshold(&self) -> f64 {
        self.consistency_threshold
    }

    /// Extracts priority weights and consistency measures.
    ///
    /// # Algorithm
    /// 1. Normalize each column by its sum
    /// 2. Weight_i = mean of row i of the normalized matrix
    /// 3. λ_i = (M · w)_i / w_i, λmax = mean λ_i
    /// 4. CI = (λmax − n) / (n − 1), CR = CI / RI(n)
    ///
    /// # Edge Cases
    /// - Zero column sum: that column normalizes to 0
    /// - Zero weight: its λ_i is 0
    /// - n = 1: CI is 0
    /// - RI = 0 (n ≤ 2): CR is 0
    pub fn extract(&self, matrix: &PairwiseComparisonMatrix) -> PairwiseWeights {
        let n = matrix.size();
        let m = matrix.rows();

        let column_sums: Vec<f64> = (0..n)
            .map(|j| m.iter().map(|row| row[j]).sum::<f64>())
            .collect();

        let normalized: Vec<Vec<f64>> = m
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(&x, &sum)| if sum > 0.0 { x / sum } else { 0.0 })
                    .collect()
            })
            .collect();

        let weights: Vec<f64> = normalized
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect();

        let lambdas = m.iter().zip(&weights).map(|(row, &weight)| {
            let weighted_sum: f64 = row.iter().zip(&weights).map(|(x, w)| x * w).sum();
            if weight > 0.0 {
                weighted_sum / weight
            } else {
                0.0
            }
        });
        let lambda_max = lambdas.sum::<f64>() / n as f64;

        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };
        let random_index = random_index(n);
        let consistency_ratio = if random_index > 0.0 {
            consistency_index / random_index
        } else {
            0.0
        };

        PairwiseWeights {
            normalized,
            weights,
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
            consistency: ConsistencyStatus::classify(
                consistency_ratio,
                self.consistency_threshold,
            ),
        }
    }
}
