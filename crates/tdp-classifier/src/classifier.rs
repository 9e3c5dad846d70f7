use tdp_model::{FeatureVector, Label};

/// Decision threshold on the positive-class probability.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// A loaded binary classifier over the 19-column feature vector.
///
/// Implementations are immutable after loading and shared across callers.
pub trait Classifier: Send + Sync {
    /// Short name of the backend, e.g. `xgboost-json`.
    fn backend(&self) -> &'static str;

    /// Probability of [`Label::Subscription`], in `[0, 1]`.
    fn predict_probability(&self, features: &FeatureVector) -> f64;

    /// Predicted class.
    fn predict(&self, features: &FeatureVector) -> Label {
        if self.predict_probability(features) > DECISION_THRESHOLD {
            Label::Subscription
        } else {
            Label::NoSubscription
        }
    }
}
