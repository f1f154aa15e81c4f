//! ExtractPairwiseWeightsHandler - Command handler for standalone pairwise weighting.

use tracing::{debug, warn};

use crate::domain::analysis::{
    PairwiseComparisonMatrix, PairwiseWeightEngine, PairwiseWeightsComputed,
};
use crate::domain::foundation::{ComputationId, DomainError, ErrorCode, Timestamp};

/// Command to derive priority weights from one pairwise comparison matrix.
#[derive(Debug, Clone)]
pub struct ExtractPairwiseWeightsCommand {
    pub matrix: PairwiseComparisonMatrix,
}

/// Handler for extracting pairwise weights.
pub struct ExtractPairwiseWeightsHandler {
    engine: PairwiseWeightEngine,
    max_size: usize,
}

impl ExtractPairwiseWeightsHandler {
    pub fn new(engine: PairwiseWeightEngine, max_size: usize) -> Self {
        Self { engine, max_size }
    }

    pub fn handle(
        &self,
        cmd: ExtractPairwiseWeightsCommand,
    ) -> Result<PairwiseWeightsComputed, DomainError> {
        let size = cmd.matrix.size();
        if size > self.max_size {
            return Err(DomainError::new(
                ErrorCode::LimitExceeded,
                format!("At most {} compared items are allowed, got {}", self.max_size, size),
            )
            .with_detail("field", "labels")
            .with_detail("max", self.max_size.to_string())
            .with_detail("actual", size.to_string()));
        }

        let computation_id = ComputationId::new();
        let result = self.engine.extract(&cmd.matrix);

        if !result.is_consistent() {
            warn!(
                computation_id = %computation_id,
                consistency_ratio = result.consistency_ratio,
                "Pairwise judgments are inconsistent"
            );
        }
        debug!(
            computation_id = %computation_id,
            size = size,
            lambda_max = result.lambda_max,
            "Extracted pairwise weights"
        );

        Ok(PairwiseWeightsComputed {
            computation_id,
            labels: cmd.matrix.labels().to_vec(),
            result,
            computed_at: Timestamp::now(),
        })
    }
}

impl Default for ExtractPairwiseWeightsHandler {
    fn default() -> Self {
        Self::new(PairwiseWeightEngine::default(), 10)
    }
}
