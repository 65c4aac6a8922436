//! On-disk description of a trained feed-forward network.

use serde::{Deserialize, Serialize};
use std::path::Path;
use h360_core::{Error, Result, FEATURE_COUNT};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub units: usize,
    pub activation: Activation,
    /// `[inputs][units]`
    pub kernel: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerStats {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub input_dim: usize,
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub scaler: Option<ScalerStats>,
}

impl ModelArtifact {
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let artifact = Self::from_json(&json)?;
        info!("📦 Loaded model artifact {} from {}", artifact.name, path.display());
        Ok(artifact)
    }

    pub async fn from_url(url: &str) -> Result<Self> {
        let url = url::Url::parse(url)?;
        let json = reqwest::get(url.clone())
            .await?
            .error_for_status()?
            .text()
            .await?;
        let artifact = Self::from_json(&json)?;
        info!("📦 Loaded model artifact {} from {}", artifact.name, url);
        Ok(artifact)
    }

    /// Check that the network is shaped for our six inputs and one score.
    pub fn validate(&self) -> Result<()> {
        if self.input_dim != FEATURE_COUNT {
            return Err(Error::Model(format!(
                "expected input_dim {}, artifact declares {}",
                FEATURE_COUNT, self.input_dim
            )));
        }
        if self.layers.is_empty() {
            return Err(Error::Model("artifact has no layers".to_string()));
        }

        let mut width = self.input_dim;
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.units == 0 {
                return Err(Error::Model(format!("layer {} has zero units", index)));
            }
            if layer.kernel.len() != width {
                return Err(Error::Model(format!(
                    "layer {} kernel has {} rows, expected {}",
                    index,
                    layer.kernel.len(),
                    width
                )));
            }
            if let Some(row) = layer.kernel.iter().find(|row| row.len() != layer.units) {
                return Err(Error::Model(format!(
                    "layer {} kernel row has {} columns, expected {}",
                    index,
                    row.len(),
                    layer.units
                )));
            }
            if layer.bias.len() != layer.units {
                return Err(Error::Model(format!(
                    "layer {} bias has {} values, expected {}",
                    index,
                    layer.bias.len(),
                    layer.units
                )));
            }
            let finite = layer.kernel.iter().flatten().chain(&layer.bias).all(|v| v.is_finite());
            if !finite {
                return Err(Error::Model(format!("layer {} has non-finite weights", index)));
            }
            width = layer.units;
        }

        if width != 1 {
            return Err(Error::Model(format!(
                "final layer must produce a single score, produces {}",
                width
            )));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != FEATURE_COUNT || scaler.scale.len() != FEATURE_COUNT {
                return Err(Error::Model(format!(
                    "scaler statistics must have {} columns",
                    FEATURE_COUNT
                )));
            }
            if !scaler.mean.iter().chain(&scaler.scale).all(|v| v.is_finite()) {
                return Err(Error::Model("scaler statistics are not finite".to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// 6 -> 2 (relu) -> 1 (sigmoid)
    pub(crate) fn sample_artifact() -> ModelArtifact {
        ModelArtifact {
            name: "test_model".to_string(),
            input_dim: 6,
            layers: vec![
                LayerSpec {
                    units: 2,
                    activation: Activation::Relu,
                    kernel: vec![
                        vec![0.5, -0.2],
                        vec![0.3, 0.1],
                        vec![0.4, 0.0],
                        vec![0.2, 0.2],
                        vec![-0.6, 0.3],
                        vec![0.7, -0.1],
                    ],
                    bias: vec![0.1, 0.05],
                },
                LayerSpec {
                    units: 1,
                    activation: Activation::Sigmoid,
                    kernel: vec![vec![1.2], vec![-0.8]],
                    bias: vec![-0.3],
                },
            ],
            scaler: Some(ScalerStats {
                mean: vec![54.4, 0.68, 246.3, 131.6, 149.6, 0.33],
                scale: vec![9.0, 0.47, 51.8, 17.5, 22.9, 0.47],
            }),
        }
    }

    #[test]
    fn test_sample_artifact_is_valid() {
        assert!(sample_artifact().validate().is_ok());
    }

    #[test]
    fn test_rejects_wrong_input_dim() {
        let mut artifact = sample_artifact();
        artifact.input_dim = 13;
        assert!(matches!(artifact.validate(), Err(Error::Model(_))));
    }

    #[test]
    fn test_rejects_kernel_shape_mismatch() {
        let mut artifact = sample_artifact();
        artifact.layers[1].kernel.push(vec![0.0]);
        assert!(matches!(artifact.validate(), Err(Error::Model(_))));

        let mut artifact = sample_artifact();
        artifact.layers[0].bias.pop();
        assert!(matches!(artifact.validate(), Err(Error::Model(_))));
    }

    #[test]
    fn test_rejects_multi_unit_head() {
        let mut artifact = sample_artifact();
        artifact.layers.truncate(1);
        assert!(matches!(artifact.validate(), Err(Error::Model(_))));
    }

    #[test]
    fn test_rejects_short_scaler() {
        let mut artifact = sample_artifact();
        if let Some(scaler) = artifact.scaler.as_mut() {
            scaler.mean.pop();
        }
        assert!(matches!(artifact.validate(), Err(Error::Model(_))));
    }

    #[test]
    fn test_activations() {
        assert_eq!(Activation::Relu.apply(-2.0), 0.0);
        assert_eq!(Activation::Linear.apply(-2.0), -2.0);
        assert!((Activation::Sigmoid.apply(0.0) - 0.5).abs() < f32::EPSILON);
        assert!((Activation::Tanh.apply(0.0)).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_from_path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_artifact()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let artifact = ModelArtifact::from_path(file.path()).await.unwrap();
        assert_eq!(artifact.name, "test_model");
        assert_eq!(artifact.layers.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ModelArtifact::from_path(dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_invalid_json_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"name\": 3}").unwrap();
        let result = ModelArtifact::from_path(file.path()).await;
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[tokio::test]
    async fn test_from_url_fetch() {
        let json = serde_json::to_string(&sample_artifact()).unwrap();
        let mut wrong_shape = sample_artifact();
        wrong_shape.input_dim = 13;
        let wrong_shape = serde_json::to_string(&wrong_shape).unwrap();

        let app = axum::Router::new()
            .route("/heart_disease_model.json", axum::routing::get(move || async move { json }))
            .route("/wrong_shape.json", axum::routing::get(move || async move { wrong_shape }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let artifact = ModelArtifact::from_url(&format!("http://{}/heart_disease_model.json", addr))
            .await
            .unwrap();
        assert_eq!(artifact.name, "test_model");

        let missing = ModelArtifact::from_url(&format!("http://{}/gone.json", addr)).await;
        assert!(matches!(missing, Err(Error::Http(_))));

        let invalid = ModelArtifact::from_url(&format!("http://{}/wrong_shape.json", addr)).await;
        assert!(matches!(invalid, Err(Error::Model(_))));
    }

    #[tokio::test]
    async fn test_bad_url_is_rejected() {
        let result = ModelArtifact::from_url("not a url").await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
