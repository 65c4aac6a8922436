use async_trait::async_trait;
use std::fmt;
use crate::types::FeatureVector;
use crate::Result;

#[async_trait]
pub trait RiskModel: Send + Sync + fmt::Debug {
    /// Short name used in logs and the health endpoint
    fn name(&self) -> &str;

    /// Run the forward pass on an already-scaled feature row
    async fn predict_score(&self, features: &FeatureVector) -> Result<f32>;

    /// Per-column (mean, scale) learned at training time, if the model carries them
    fn training_stats(&self) -> Option<(&FeatureVector, &FeatureVector)> {
        None
    }
}
