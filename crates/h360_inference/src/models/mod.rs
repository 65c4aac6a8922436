use std::sync::Arc;
use tracing::info;
use h360_core::{Result, RiskModel};
use crate::artifact::ModelArtifact;
use crate::{Config, ModelKind, ModelSource};

pub mod constant;
pub mod dense;

pub use constant::ConstantModel;
pub use dense::DenseModel;

/// Build the process-wide model handle. Called once at startup; any error
/// here means the prediction view cannot be served.
pub async fn create_model(config: &Config) -> Result<Arc<dyn RiskModel>> {
    match config.model_kind {
        ModelKind::Dense => {
            let artifact = match &config.source {
                ModelSource::Path(path) => ModelArtifact::from_path(path).await?,
                ModelSource::Url(url) => ModelArtifact::from_url(url).await?,
            };
            let model = DenseModel::from_artifact(artifact)?;
            info!("🧠 Dense model {} ready ({} layers)", model.name(), model.layer_count());
            Ok(Arc::new(model))
        }
        ModelKind::Constant(score) => {
            info!("🧠 Using constant model (score {})", score);
            Ok(Arc::new(ConstantModel::new(score)))
        }
    }
}
