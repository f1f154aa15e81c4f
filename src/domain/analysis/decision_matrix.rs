//! Decision Matrix - Alternatives scored against weighted, directed criteria.

use serde::{Deserialize, Serialize};

use super::AlternativeSet;
use crate::domain::foundation::ValidationError;

/// Minimum number of alternatives a ranking needs.
pub const MIN_ALTERNATIVES: usize = 2;

/// Minimum number of criteria a ranking needs.
pub const MIN_CRITERIA: usize = 2;

/// Whether higher or lower raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    /// Higher is better.
    Benefit,
    /// Lower is better.
    Cost,
}

impl CriterionDirection {
    /// Returns the display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionDirection::Benefit => "Benefit",
            CriterionDirection::Cost => "Cost",
        }
    }

    /// Returns true for cost criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, CriterionDirection::Cost)
    }
}

/// A dimension of evaluation with its weight and direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub direction: CriterionDirection,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, weight: f64, direction: CriterionDirection) -> Self {
        Self {
            name: name.into(),
            weight,
            direction,
        }
    }

    /// Creates a benefit criterion.
    pub fn benefit(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, CriterionDirection::Benefit)
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, CriterionDirection::Cost)
    }
}

/// Validated alternatives x criteria grid of raw, non-negative scores.
///
/// Rows follow the order of `alternatives`, columns the order of `criteria`.
/// Every output vector produced from a matrix is indexed the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a decision matrix, checking shape and value invariants.
    ///
    /// # Errors
    /// - Fewer than 2 alternatives or criteria
    /// - Empty alternative or criterion name
    /// - Row count or row length not matching the alternatives/criteria
    /// - Negative or non-finite scores or weights
    pub fn new(
        alternatives: Vec<String>,
        criteria: Vec<Criterion>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, ValidationError> {
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
        if criteria.len() < MIN_CRITERIA {
            return Err(ValidationError::invalid_format(
                "criteria",
                format!("at least {} are required, got {}", MIN_CRITERIA, criteria.len()),
            ));
        }

        for (i, name) in alternatives.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("alternatives[{}]", i)));
            }
        }

        for (j, criterion) in criteria.iter().enumerate() {
            if criterion.name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("criteria[{}].name", j)));
            }
            if !criterion.weight.is_finite() || criterion.weight < 0.0 {
                return Err(ValidationError::invalid_format(
                    format!("criteria[{}].weight", j),
                    format!("must be a finite non-negative number, got {}", criterion.weight),
                ));
            }
        }

        if values.len() != alternatives.len() {
            return Err(ValidationError::dimension_mismatch(
                "scores",
                alternatives.len(),
                values.len(),
            ));
        }

        for (i, row) in values.iter().enumerate() {
            if row.len() != criteria.len() {
                return Err(ValidationError::dimension_mismatch(
                    format!("scores[{}]", i),
                    criteria.len(),
                    row.len(),
                ));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ValidationError::invalid_format(
                        format!("scores[{}][{}]", i, j),
                        format!("must be a finite non-negative number, got {}", value),
                    ));
                }
            }
        }

        Ok(Self {
            alternatives,
            criteria,
            values,
        })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Alternative names in input order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Criteria in column order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Raw score rows, one per alternative.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Raw score of alternative `i` on criterion `j`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Raw scores of every alternative on criterion `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(move |row| row[j])
    }

    /// Criterion weights in column order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    /// Criterion directions in column order.
    pub fn directions(&self) -> Vec<CriterionDirection> {
        self.criteria.iter().map(|c| c.direction).collect()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

impl AlternativeSet for DecisionMatrix {
    fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    values: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternatives.
    pub fn alternatives(mut self, names: Vec<impl Into<String>>) -> Self {
        self.alternatives = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends a criterion.
    pub fn criterion(
        mut self,
        name: impl Into<String>,
        weight: f64,
        direction: CriterionDirection,
    ) -> Self {
        self.criteria.push(Criterion::new(name, weight, direction));
        self
    }

    /// Appends a benefit criterion.
    pub fn benefit(self, name: impl Into<String>, weight: f64) -> Self {
        self.criterion(name, weight, CriterionDirection::Benefit)
    }

    /// Appends a cost criterion.
    pub fn cost(self, name: impl Into<String>, weight: f64) -> Self {
        self.criterion(name, weight, CriterionDirection::Cost)
    }

    /// Appends the score row for the next alternative.
    pub fn row(mut self, values: Vec<f64>) -> Self {
        self.values.push(values);
        self
    }

    /// Builds and validates the decision matrix.
    pub fn build(self) -> Result<DecisionMatrix, ValidationError> {
        DecisionMatrix::new(self.alternatives, self.criteria, self.values)
    }
}
