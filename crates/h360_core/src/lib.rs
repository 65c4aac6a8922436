pub mod content;
pub mod error;
pub mod models;
pub mod types;
pub mod widgets;

pub use content::{Recommendation, View};
pub use error::{Error, Result};
pub use models::RiskModel;
pub use types::{
    FeatureVector, PredictionOutcome, PredictionRequest, RiskLevel, ScalingMode, Sex, YesNo,
    FEATURE_COUNT, FEATURE_NAMES, RISK_THRESHOLD,
};
