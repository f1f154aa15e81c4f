//! RankAlternativesHandler - Command handler for ranking a set of alternatives.
//!
//! Runs one MCDA method over a validated input and assembles the
//! `RankingComputed` record with its advisory checks:
//! - SAW / WP / TOPSIS: weight-sum advisory
//! - AHP: consistency of every pairwise matrix

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    AhpProblem, AhpRanker, DecisionMatrix, MethodBreakdown, PairwiseWeightEngine, Ranked, Ranker,
    RankingComputed, RankingMethod, RankingResult, SawRanker, TopsisRanker, WeightSumCheck,
    WeightedProductRanker, CONSISTENCY_RATIO_THRESHOLD, DEFAULT_WEIGHT_SUM_TOLERANCE,
};
use crate::domain::foundation::{ComputationId, DomainError, ErrorCode, Timestamp};

/// Command to rank alternatives with a single method.
#[derive(Debug, Clone)]
pub enum RankAlternativesCommand {
    Saw(DecisionMatrix),
    WeightedProduct(DecisionMatrix),
    Topsis(DecisionMatrix),
    Ahp(AhpProblem),
}

impl RankAlternativesCommand {
    /// The method this command runs.
    pub fn method(&self) -> RankingMethod {
        match self {
            RankAlternativesCommand::Saw(_) => RankingMethod::Saw,
            RankAlternativesCommand::WeightedProduct(_) => RankingMethod::WeightedProduct,
            RankAlternativesCommand::Topsis(_) => RankingMethod::Topsis,
            RankAlternativesCommand::Ahp(_) => RankingMethod::Ahp,
        }
    }

    fn alternative_count(&self) -> usize {
        match self {
            RankAlternativesCommand::Saw(m)
            | RankAlternativesCommand::WeightedProduct(m)
            | RankAlternativesCommand::Topsis(m) => m.alternative_count(),
            RankAlternativesCommand::Ahp(p) => p.alternative_count(),
        }
    }

    fn criterion_count(&self) -> usize {
        match self {
            RankAlternativesCommand::Saw(m)
            | RankAlternativesCommand::WeightedProduct(m)
            | RankAlternativesCommand::Topsis(m) => m.criterion_count(),
            RankAlternativesCommand::Ahp(p) => p.criterion_count(),
        }
    }
}

/// Thresholds and size limits applied around every computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingPolicy {
    pub weight_sum_tolerance: f64,
    pub consistency_threshold: f64,
    pub max_alternatives: usize,
    pub max_criteria: usize,
    pub max_ahp_criteria: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            weight_sum_tolerance: DEFAULT_WEIGHT_SUM_TOLERANCE,
            consistency_threshold: CONSISTENCY_RATIO_THRESHOLD,
            max_alternatives: 10,
            max_criteria: 10,
            max_ahp_criteria: 7,
        }
    }
}

impl From<&AnalysisConfig> for RankingPolicy {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            weight_sum_tolerance: config.weight_sum_tolerance,
            consistency_threshold: config.consistency_threshold,
            max_alternatives: config.max_alternatives,
            max_criteria: config.max_criteria,
            max_ahp_criteria: config.max_ahp_criteria,
        }
    }
}

impl RankingPolicy {
    /// Rejects inputs larger than the configured limits.
    pub fn check_limits(&self, cmd: &RankAlternativesCommand) -> Result<(), DomainError> {
        let alternatives = cmd.alternative_count();
        if alternatives > self.max_alternatives {
            return Err(limit_exceeded("alternatives", self.max_alternatives, alternatives));
        }

        let max_criteria = match cmd.method() {
            RankingMethod::Ahp => self.max_ahp_criteria,
            _ => self.max_criteria,
        };
        let criteria = cmd.criterion_count();
        if criteria > max_criteria {
            return Err(limit_exceeded("criteria", max_criteria, criteria));
        }

        Ok(())
    }
}

fn limit_exceeded(field: &str, max: usize, actual: usize) -> DomainError {
    DomainError::new(
        ErrorCode::LimitExceeded,
        format!("At most {} {} are allowed, got {}", max, field, actual),
    )
    .with_detail("field", field)
    .with_detail("max", max.to_string())
    .with_detail("actual", actual.to_string())
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    policy: RankingPolicy,
}

impl RankAlternativesHandler {
    pub fn new(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankingComputed, DomainError> {
        // 1. Enforce request limits
        self.policy.check_limits(&cmd)?;

        let method = cmd.method();
        let alternatives = cmd.alternative_count();
        let criteria = cmd.criterion_count();
        let computation_id = ComputationId::new();

        // 2. Run the method
        let computed = match cmd {
            RankAlternativesCommand::Saw(matrix) => {
                let check = self.check_weights(computation_id, &matrix);
                let ranked = SawRanker.rank(&matrix)?;
                Computed::from_ranked(ranked, MethodBreakdown::Saw).with_weight_check(check)
            }
            RankAlternativesCommand::WeightedProduct(matrix) => {
                let check = self.check_weights(computation_id, &matrix);
                let ranked = WeightedProductRanker.rank(&matrix)?;
                Computed::from_ranked(ranked, MethodBreakdown::WeightedProduct)
                    .with_weight_check(check)
            }
            RankAlternativesCommand::Topsis(matrix) => {
                let check = self.check_weights(computation_id, &matrix);
                let ranked = TopsisRanker.rank(&matrix)?;
                Computed::from_ranked(ranked, MethodBreakdown::Topsis).with_weight_check(check)
            }
            RankAlternativesCommand::Ahp(problem) => {
                let ranker =
                    AhpRanker::new(PairwiseWeightEngine::new(self.policy.consistency_threshold));
                let ranked = ranker.rank(&problem)?;
                let consistent = ranked.breakdown.all_consistent();
                if !consistent {
                    warn!(
                        computation_id = %computation_id,
                        criteria_cr = ranked.breakdown.criteria.consistency_ratio,
                        "AHP judgments are inconsistent"
                    );
                }
                let mut computed = Computed::from_ranked(ranked, MethodBreakdown::Ahp);
                computed.consistent = Some(consistent);
                computed
            }
        };

        // 3. Assemble the record
        let best_alternative = computed
            .ranking
            .best()
            .map(|best| best.alternative.clone());

        let mut warnings = Vec::new();
        if let Some(message) = computed.weight_check.as_ref().and_then(WeightSumCheck::warning) {
            warnings.push(message);
        }
        if computed.consistent == Some(false) {
            warnings.push(format!(
                "Consistency ratio exceeds {:.2}. Review the pairwise judgments",
                self.policy.consistency_threshold
            ));
        }

        debug!(
            computation_id = %computation_id,
            method = %method,
            alternatives = alternatives,
            criteria = criteria,
            best = best_alternative.as_deref().unwrap_or(""),
            "Ranked alternatives"
        );

        Ok(RankingComputed {
            computation_id,
            method,
            ranking: computed.ranking,
            best_alternative,
            weight_check: computed.weight_check,
            consistent: computed.consistent,
            warnings,
            breakdown: computed.breakdown,
            computed_at: Timestamp::now(),
        })
    }

    fn check_weights(
        &self,
        computation_id: ComputationId,
        matrix: &DecisionMatrix,
    ) -> WeightSumCheck {
        let check = WeightSumCheck::evaluate(&matrix.weights(), self.policy.weight_sum_tolerance);
        if !check.is_balanced() {
            warn!(
                computation_id = %computation_id,
                total = check.total(),
                "Criterion weights do not sum to 1.0"
            );
        }
        check
    }
}

impl Default for RankAlternativesHandler {
    fn default() -> Self {
        Self::new(RankingPolicy::default())
    }
}

/// Method-independent view of a finished computation.
struct Computed {
    ranking: RankingResult,
    breakdown: MethodBreakdown,
    weight_check: Option<WeightSumCheck>,
    consistent: Option<bool>,
}

impl Computed {
    fn from_ranked<B>(ranked: Ranked<B>, wrap: impl FnOnce(B) -> MethodBreakdown) -> Self {
        Self {
            ranking: ranked.ranking,
            breakdown: wrap(ranked.breakdown),
            weight_check: None,
            consistent: None,
        }
    }

    fn with_weight_check(mut self, check: WeightSumCheck) -> Self {
        self.weight_check = Some(check);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(weights: (f64, f64)) -> DecisionMatrix {
        DecisionMatrix::builder()
            .alternatives(vec!["Laptop A", "Laptop B", "Laptop C"])
            .benefit("Performance", weights.0)
            .cost("Price", weights.1)
            .row(vec![8.0, 1200.0])
            .row(vec![6.0, 800.0])
            .row(vec![9.0, 1500.0])
            .build()
            .unwrap()
    }

    fn ahp_problem(criteria_judgment: f64) -> AhpProblem {
        AhpProblem::from_judgments(
            vec!["Cost".to_string(), "Quality".to_string(), "Speed".to_string()],
            vec!["X".to_string(), "Y".to_string()],
            &[3.0, criteria_judgment, 2.0],
            &[vec![2.0], vec![0.5], vec![1.0]],
        )
        .unwrap()
    }

    #[test]
    fn saw_command_produces_ranking_and_balanced_check() {
        let handler = RankAlternativesHandler::default();
        let result = handler
            .handle(RankAlternativesCommand::Saw(matrix((0.6, 0.4))))
            .unwrap();

        assert_eq!(result.method, RankingMethod::Saw);
        assert_eq!(result.ranking.len(), 3);
        assert!(result.best_alternative.is_some());
        assert_eq!(
            result.best_alternative.as_deref(),
            Some(result.ranking.entries()[0].alternative.as_str())
        );
        assert!(result.weight_check.as_ref().unwrap().is_balanced());
        assert!(result.warnings.is_empty());
        assert!(result.consistent.is_none());
        assert!(matches!(result.breakdown, MethodBreakdown::Saw(_)));
    }

    #[test]
    fn unbalanced_weights_warn_but_still_rank() {
        let handler = RankAlternativesHandler::default();
        let result = handler
            .handle(RankAlternativesCommand::Topsis(matrix((0.5, 0.3))))
            .unwrap();

        assert_eq!(result.ranking.len(), 3);
        assert!(!result.weight_check.as_ref().unwrap().is_balanced());
        assert_eq!(
            result.warnings,
            vec!["Total weight = 0.80. Weights should sum to 1.0".to_string()]
        );
    }

    #[test]
    fn weighted_product_rejects_zero_value() {
        let matrix = DecisionMatrix::builder()
            .alternatives(vec!["A", "B"])
            .benefit("C1", 0.5)
            .benefit("C2", 0.5)
            .row(vec![0.0, 3.0])
            .row(vec![2.0, 3.0])
            .build()
            .unwrap();

        let err = RankAlternativesHandler::default()
            .handle(RankAlternativesCommand::WeightedProduct(matrix))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NonPositiveValue);
    }

    #[test]
    fn ahp_consistent_problem_has_no_warnings() {
        // 3 x 2 = 6 ≈ 5 keeps CR small
        let result = RankAlternativesHandler::default()
            .handle(RankAlternativesCommand::Ahp(ahp_problem(5.0)))
            .unwrap();

        assert_eq!(result.method, RankingMethod::Ahp);
        assert_eq!(result.consistent, Some(true));
        assert!(result.weight_check.is_none());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn ahp_inconsistent_problem_warns() {
        // Cost > Quality, Quality > Speed, but Speed >> Cost
        let result = RankAlternativesHandler::default()
            .handle(RankAlternativesCommand::Ahp(ahp_problem(1.0 / 9.0)))
            .unwrap();

        assert_eq!(result.consistent, Some(false));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("0.10"));
        assert_eq!(result.ranking.len(), 2);
    }

    #[test]
    fn too_many_alternatives_is_rejected() {
        let policy = RankingPolicy {
            max_alternatives: 2,
            ..Default::default()
        };
        let err = RankAlternativesHandler::new(policy)
            .handle(RankAlternativesCommand::Saw(matrix((0.5, 0.5))))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::LimitExceeded);
        assert_eq!(err.details.get("field").map(String::as_str), Some("alternatives"));
        assert_eq!(err.details.get("actual").map(String::as_str), Some("3"));
    }

    #[test]
    fn ahp_uses_its_own_criteria_limit() {
        let policy = RankingPolicy {
            max_ahp_criteria: 2,
            ..Default::default()
        };
        let handler = RankAlternativesHandler::new(policy);

        let err = handler
            .handle(RankAlternativesCommand::Ahp(ahp_problem(5.0)))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::LimitExceeded);
        assert_eq!(err.details.get("field").map(String::as_str), Some("criteria"));

        // Two criteria still fit the matrix-method limit
        assert!(handler
            .handle(RankAlternativesCommand::Saw(matrix((0.5, 0.5))))
            .is_ok());
    }

    #[test]
    fn policy_follows_config() {
        let config = AnalysisConfig {
            consistency_threshold: 0.2,
            max_criteria: 4,
            ..Default::default()
        };
        let policy = RankingPolicy::from(&config);
        assert_eq!(policy.consistency_threshold, 0.2);
        assert_eq!(policy.max_criteria, 4);
        assert_eq!(policy.max_ahp_criteria, 7);
    }

    #[test]
    fn command_reports_method() {
        assert_eq!(
            RankAlternativesCommand::WeightedProduct(matrix((0.5, 0.5))).method(),
            RankingMethod::WeightedProduct
        );
        assert_eq!(
            RankAlternativesCommand::Ahp(ahp_problem(5.0)).method(),
            RankingMethod::Ahp
        );
    }
}
