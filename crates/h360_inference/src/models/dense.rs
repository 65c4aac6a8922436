use async_trait::async_trait;
use ndarray::{Array1, Array2};
use std::fmt;
use h360_core::{Error, FeatureVector, Result, RiskModel, FEATURE_COUNT};
use crate::artifact::{Activation, ModelArtifact};

struct DenseLayer {
    kernel: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

/// Feed-forward network restored from a [`ModelArtifact`].
pub struct DenseModel {
    name: String,
    layers: Vec<DenseLayer>,
    stats: Option<(FeatureVector, FeatureVector)>,
}

impl DenseModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;

        let mut layers = Vec::with_capacity(artifact.layers.len());
        for layer in artifact.layers {
            let rows = layer.kernel.len();
            let flat: Vec<f32> = layer.kernel.into_iter().flatten().collect();
            let kernel = Array2::from_shape_vec((rows, layer.units), flat)
                .map_err(|e| Error::Model(e.to_string()))?;
            layers.push(DenseLayer {
                kernel,
                bias: Array1::from_vec(layer.bias),
                activation: layer.activation,
            });
        }

        let stats = match artifact.scaler {
            Some(scaler) => Some((to_features(&scaler.mean)?, to_features(&scaler.scale)?)),
            None => None,
        };

        Ok(Self {
            name: artifact.name,
            layers,
            stats,
        })
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn forward(&self, features: &FeatureVector) -> Array1<f32> {
        self.layers.iter().fold(Array1::from_vec(features.to_vec()), |x, layer| {
            let activation = layer.activation;
            (x.dot(&layer.kernel) + &layer.bias).mapv(|v| activation.apply(v))
        })
    }
}

fn to_features(values: &[f32]) -> Result<FeatureVector> {
    values
        .try_into()
        .map_err(|_| Error::Model(format!("expected {} scaler columns", FEATURE_COUNT)))
}

impl fmt::Debug for DenseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseModel")
            .field("name", &self.name)
            .field("layers", &self.layers.len())
            .field("has_training_stats", &self.stats.is_some())
            .finish()
    }
}

#[async_trait]
impl RiskModel for DenseModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn predict_score(&self, features: &FeatureVector) -> Result<f32> {
        let output = self.forward(features);
        output
            .first()
            .copied()
            .ok_or_else(|| Error::Inference("network produced no output".to_string()))
    }

    fn training_stats(&self) -> Option<(&FeatureVector, &FeatureVector)> {
        self.stats.as_ref().map(|(mean, scale)| (mean, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::tests::sample_artifact;
    use crate::artifact::LayerSpec;

    #[tokio::test]
    async fn test_forward_pass_matches_hand_computation() {
        let model = DenseModel::from_artifact(sample_artifact()).unwrap();
        assert_eq!(model.layer_count(), 2);

        // zero input: hidden = relu(bias) = [0.1, 0.05]
        // logit = 0.1 * 1.2 + 0.05 * -0.8 - 0.3 = -0.22
        let score = model.predict_score(&[0.0; FEATURE_COUNT]).await.unwrap();
        let expected = 1.0 / (1.0 + 0.22f32.exp());
        assert!((score - expected).abs() < 1e-6, "{} != {}", score, expected);
    }

    #[tokio::test]
    async fn test_score_is_probability() {
        let model = DenseModel::from_artifact(sample_artifact()).unwrap();
        for features in [
            [3.0, 1.0, -2.0, 0.5, 1.0, 1.0],
            [-3.0, -1.0, 2.0, -0.5, -1.0, -1.0],
            [60.0, 1.0, 280.0, 150.0, 100.0, 1.0],
        ] {
            let score = model.predict_score(&features).await.unwrap();
            assert!(score.is_finite());
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_training_stats_exposed() {
        let model = DenseModel::from_artifact(sample_artifact()).unwrap();
        let (mean, scale) = model.training_stats().unwrap();
        assert_eq!(mean[0], 54.4);
        assert_eq!(scale[2], 51.8);

        let mut artifact = sample_artifact();
        artifact.scaler = None;
        let model = DenseModel::from_artifact(artifact).unwrap();
        assert!(model.training_stats().is_none());
    }

    #[test]
    fn test_invalid_artifact_rejected() {
        let mut artifact = sample_artifact();
        artifact.layers.push(LayerSpec {
            units: 1,
            activation: Activation::Linear,
            kernel: vec![vec![1.0], vec![1.0]],
            bias: vec![0.0],
        });
        assert!(DenseModel::from_artifact(artifact).is_err());
    }
}
