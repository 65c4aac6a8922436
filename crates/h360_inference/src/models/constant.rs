use std::fmt;
use h360_core::{FeatureVector, Result, RiskModel};

/// Returns the same score for every input. Used for smoke runs and tests.
pub struct ConstantModel {
    score: f32,
}

impl fmt::Debug for ConstantModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstantModel").field("score", &self.score).finish()
    }
}

impl ConstantModel {
    pub fn new(score: f32) -> Self {
        Self { score }
    }
}

#[async_trait::async_trait]
impl RiskModel for ConstantModel {
    fn name(&self) -> &str {
        "constant"
    }

    async fn predict_score(&self, _features: &FeatureVector) -> Result<f32> {
        Ok(self.score)
    }
}
