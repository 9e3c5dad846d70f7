use std::sync::Arc;

use tracing::debug;

use tdp_model::{ClientProfile, FeatureVector, PredictionResult, encode};

use crate::classifier::Classifier;

/// Runs encode → predict → predict_probability for one profile.
///
/// Cloning shares the underlying classifier.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Score a profile.
    ///
    /// # Errors
    ///
    /// Fails with [`tdp_model::ModelError::InvalidSelection`] when a
    /// categorical field is outside its table; nothing reaches the model then.
    pub fn predict(&self, profile: &ClientProfile) -> tdp_model::Result<PredictionResult> {
        let features = encode(profile)?;
        Ok(self.predict_features(&features))
    }

    /// Score an already encoded vector.
    pub fn predict_features(&self, features: &FeatureVector) -> PredictionResult {
        let label = self.classifier.predict(features);
        let probability = self.classifier.predict_probability(features);
        debug!(
            backend = self.classifier.backend(),
            label = label.class(),
            probability,
            "prediction"
        );
        PredictionResult::new(label, probability)
    }
}
