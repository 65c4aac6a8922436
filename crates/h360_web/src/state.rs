use h360_inference::RiskPredictor;

/// Shared, read-only for the lifetime of the server.
pub struct AppState {
    pub predictor: RiskPredictor,
}

impl AppState {
    pub fn new(predictor: RiskPredictor) -> Self {
        Self { predictor }
    }
}
