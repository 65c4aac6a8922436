use std::path::PathBuf;
use h360_core::ScalingMode;

pub mod artifact;
pub mod models;
pub mod predictor;
pub mod scaling;

/// Relative path the artifact is loaded from when nothing else is given
pub const DEFAULT_MODEL_PATH: &str = "heart_disease_model.json";

#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    Path(PathBuf),
    Url(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelKind {
    Dense,
    Constant(f32),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: ModelSource,
    pub model_kind: ModelKind,
    pub scaling: ScalingMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: ModelSource::Path(PathBuf::from(DEFAULT_MODEL_PATH)),
            model_kind: ModelKind::Dense,
            scaling: ScalingMode::default(),
        }
    }
}

pub mod prelude {
    pub use super::{Config, ModelKind, ModelSource};
    pub use super::models::create_model;
    pub use super::predictor::RiskPredictor;
    pub use h360_core::{PredictionOutcome, PredictionRequest, Result, Error, RiskLevel, ScalingMode};
}

pub use models::create_model;
pub use predictor::RiskPredictor;
