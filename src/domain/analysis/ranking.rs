//! Ranking - Ordering alternatives by preference score.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An alternative with its score and final rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// Alternative name.
    pub alternative: String,
    /// Position of the alternative in the original input.
    pub index: usize,
    /// Preference score (higher is better).
    pub score: f64,
    /// 1 = best.
    pub rank: usize,
}

/// Alternatives ordered best-first by preference score.
///
/// Ordering is a stable descending sort: equal scores keep input order,
/// so the earlier alternative receives the better rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingResult {
    entries: Vec<RankedAlternative>,
}

impl RankingResult {
    /// Ranks alternatives by their positional scores.
    ///
    /// `alternatives` and `scores` are zipped positionally; any excess on
    /// either side is ignored.
    pub fn from_scores(alternatives: &[String], scores: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..alternatives.len().min(scores.len())).collect();
        // Vec::sort_by is stable, which keeps ties in input order
        order.sort_by(|&a, &b| descending(scores[a], scores[b]));

        let entries = order
            .into_iter()
            .enumerate()
            .map(|(position, index)| RankedAlternative {
                alternative: alternatives[index].clone(),
                index,
                score: scores[index],
                rank: position + 1,
            })
            .collect();

        Self { entries }
    }

    /// Entries from best to worst.
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    /// The rank-1 alternative, if any.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Rank of the alternative at input position `index`.
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.index == index)
            .map(|entry| entry.rank)
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Descending score order with NaN always last.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // + 0.0 folds -0.0 into 0.0 so signed zeros tie
        (false, false) => (b + 0.0).total_cmp(&(a + 0.0)),
    }
}
