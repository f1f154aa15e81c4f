//! Ranker - The capability shared by every ranking method.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AnalysisError, RankingResult};

/// The supported ranking methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMethod {
    /// Simple Additive Weighting.
    Saw,
    /// Weighted Product.
    WeightedProduct,
    /// Analytic Hierarchy Process.
    Ahp,
    /// Technique for Order Preference by Similarity to Ideal Solution.
    Topsis,
}

impl RankingMethod {
    /// Returns the short display label for this method.
    pub fn label(&self) -> &'static str {
        match self {
            RankingMethod::Saw => "SAW",
            RankingMethod::WeightedProduct => "WP",
            RankingMethod::Ahp => "AHP",
            RankingMethod::Topsis => "TOPSIS",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Input that names the alternatives being ranked, in positional order.
pub trait AlternativeSet {
    fn alternatives(&self) -> &[String];
}

/// Method output that carries one preference score per alternative.
pub trait Scored {
    fn scores(&self) -> &[f64];
}

/// A ranking together with the method-specific intermediate results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<B> {
    pub method: RankingMethod,
    pub ranking: RankingResult,
    pub breakdown: B,
}

/// A multi-criteria ranking method.
///
/// Implementors only compute scores; ordering and tie-breaking are shared
/// through [`Ranker::rank`].
pub trait Ranker {
    type Input: AlternativeSet;
    type Breakdown: Scored;

    /// Which method this ranker implements.
    fn method(&self) -> RankingMethod;

    /// Computes the method's intermediate results and preference scores.
    fn evaluate(&self, input: &Self::Input) -> Result<Self::Breakdown, AnalysisError>;

    /// Evaluates the input and orders the alternatives best-first.
    fn rank(&self, input: &Self::Input) -> Result<Ranked<Self::Breakdown>, AnalysisError> {
        let breakdown = self.evaluate(input)?;
        let ranking = RankingResult::from_scores(input.alternatives(), breakdown.scores());
        Ok(Ranked {
            method: self.method(),
            ranking,
            breakdown,
        })
    }
}
