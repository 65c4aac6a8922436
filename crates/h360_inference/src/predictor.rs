//! Inference adapter: scale, run the model, threshold.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};
use h360_core::{
    Error, PredictionOutcome, PredictionRequest, Result, RiskLevel, RiskModel, ScalingMode,
    FEATURE_NAMES,
};
use crate::scaling::StandardScaler;
use crate::{create_model, Config};

#[derive(Debug, Clone)]
pub struct RiskPredictor {
    model: Arc<dyn RiskModel>,
    scaling: ScalingMode,
    training_scaler: Option<StandardScaler>,
}

impl RiskPredictor {
    /// Fails when `Training` scaling is requested but the model carries no
    /// persisted statistics.
    pub fn new(model: Arc<dyn RiskModel>, scaling: ScalingMode) -> Result<Self> {
        let training_scaler = match scaling {
            ScalingMode::PerRequest => {
                warn!(
                    "⚠️ Per-request scaling is active: every input row is standardized against itself, \
                     so {} receives an all-zero row and returns the same score for every request",
                    model.name()
                );
                None
            }
            ScalingMode::Training => {
                let (mean, scale) = model.training_stats().ok_or_else(|| {
                    Error::Config(format!(
                        "model {} has no persisted scaler statistics; training scaling is unavailable",
                        model.name()
                    ))
                })?;
                Some(StandardScaler::new(mean, scale)?)
            }
        };

        Ok(Self {
            model,
            scaling,
            training_scaler,
        })
    }

    pub async fn from_config(config: &Config) -> Result<Self> {
        let model = create_model(config).await?;
        Self::new(model, config.scaling)
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn scaling(&self) -> ScalingMode {
        self.scaling
    }

    pub async fn score(&self, request: &PredictionRequest) -> Result<f32> {
        let raw = request.to_features();
        let scaled = match &self.training_scaler {
            Some(scaler) => scaler.transform(&raw),
            None => StandardScaler::fit_transform_row(&raw)?,
        };
        let columns: Vec<String> = FEATURE_NAMES
            .iter()
            .zip(&scaled)
            .map(|(name, value)| format!("{}={:.3}", name, value))
            .collect();
        debug!("Scaled features ({}): {}", self.scaling, columns.join(" "));

        let score = self.model.predict_score(&scaled).await?;
        if !score.is_finite() {
            return Err(Error::Inference(format!("model returned non-finite score {}", score)));
        }
        Ok(score)
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionOutcome> {
        let score = self.score(request).await?;
        let risk = RiskLevel::from_score(score);
        debug!("Scored request {:?}: {} ({})", request, score, risk);

        Ok(PredictionOutcome {
            score,
            risk,
            scaling: self.scaling,
            evaluated_at: Utc::now(),
        })
    }
}
