use ndarray::{Array1, Array2, Axis};
use h360_core::{Error, FeatureVector, Result, FEATURE_COUNT, FEATURE_NAMES};

/// Column-wise standardization `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f32>,
    scale: Array1<f32>,
}

impl StandardScaler {
    pub fn new(mean: &[f32], scale: &[f32]) -> Result<Self> {
        if mean.len() != FEATURE_COUNT || scale.len() != FEATURE_COUNT {
            return Err(Error::Model(format!(
                "scaler needs {} columns ({}), got mean={} scale={}",
                FEATURE_COUNT,
                FEATURE_NAMES.join(", "),
                mean.len(),
                scale.len()
            )));
        }
        Ok(Self {
            mean: Array1::from_vec(mean.to_vec()),
            scale: Array1::from_vec(scale.iter().map(|&s| non_zero(s)).collect()),
        })
    }

    /// Learn mean and population standard deviation from `rows`.
    pub fn fit(rows: &[FeatureVector]) -> Result<Self> {
        let flat: Vec<f32> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((rows.len(), FEATURE_COUNT), flat)
            .map_err(|e| Error::Inference(e.to_string()))?;
        let mean = data
            .mean_axis(Axis(0))
            .ok_or_else(|| Error::Inference("cannot fit a scaler on zero rows".to_string()))?;
        let scale = data.var_axis(Axis(0), 0.0).mapv(|v| non_zero(v.sqrt()));
        Ok(Self { mean, scale })
    }

    pub fn transform(&self, row: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, value) in row.iter().enumerate() {
            out[i] = (value - self.mean[i]) / self.scale[i];
        }
        out
    }

    /// Fit on the row itself, then transform it.
    ///
    /// With a single sample every column has its own value as mean and zero
    /// variance, so the result is always the zero vector.
    pub fn fit_transform_row(row: &FeatureVector) -> Result<FeatureVector> {
        Ok(Self::fit(std::slice::from_ref(row))?.transform(row))
    }
}

// zero-variance columns are left unscaled
fn non_zero(scale: f32) -> f32 {
    if scale == 0.0 {
        1.0
    } else {
        scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_fit_collapses_to_zero() {
        let rows: [FeatureVector; 3] = [
            [60.0, 1.0, 280.0, 150.0, 100.0, 1.0],
            [0.0, 0.0, 100.0, 50.0, 50.0, 0.0],
            [100.0, 1.0, 300.0, 200.0, 220.0, 0.0],
        ];
        for row in rows {
            assert_eq!(StandardScaler::fit_transform_row(&row).unwrap(), [0.0; FEATURE_COUNT]);
        }
    }

    #[test]
    fn test_fit_on_many_rows() {
        let rows: [FeatureVector; 2] = [
            [40.0, 0.0, 200.0, 120.0, 150.0, 0.0],
            [60.0, 1.0, 200.0, 140.0, 170.0, 1.0],
        ];
        let scaler = StandardScaler::fit(&rows).unwrap();
        let scaled = scaler.transform(&rows[1]);
        assert!((scaled[0] - 1.0).abs() < 1e-6);
        // constant column stays centred and unscaled
        assert_eq!(scaled[2], 0.0);
        assert!((scaler.transform(&rows[0])[0] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_persisted_stats() {
        let scaler = StandardScaler::new(
            &[50.0, 0.5, 200.0, 120.0, 150.0, 0.5],
            &[10.0, 0.5, 50.0, 0.0, 25.0, 0.5],
        )
        .unwrap();
        let scaled = scaler.transform(&[60.0, 1.0, 250.0, 130.0, 100.0, 0.0]);
        assert_eq!(scaled, [1.0, 1.0, 1.0, 10.0, -2.0, -1.0]);
    }

    #[test]
    fn test_wrong_width_rejected() {
        match StandardScaler::new(&[0.0; 5], &[1.0; 6]) {
            Err(Error::Model(message)) => {
                assert!(message.contains("age, sex, cholesterol, blood_pressure, max_heart_rate, exercise_angina"));
                assert!(message.contains("mean=5"));
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(StandardScaler::fit(&[]).is_err());
    }
}
