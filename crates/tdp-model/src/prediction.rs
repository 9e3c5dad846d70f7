//! Prediction outcome and its rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary outcome of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    /// Class 0.
    NoSubscription,
    /// Class 1.
    Subscription,
}

impl Label {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Label::NoSubscription),
            1 => Some(Label::Subscription),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Label::NoSubscription => 0,
            Label::Subscription => 1,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Label::Subscription)
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.class()
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        Label::from_class(class).ok_or_else(|| format!("Unknown class label: {class}"))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// Label and positive-class probability for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Label,
    /// Probability of [`Label::Subscription`], in `[0, 1]`.
    pub probability: f64,
}

impl PredictionResult {
    pub fn new(label: Label, probability: f64) -> Self {
        Self { label, probability }
    }

    /// Probability of the predicted label.
    pub fn confidence(&self) -> f64 {
        if self.label.is_positive() {
            self.probability
        } else {
            1.0 - self.probability
        }
    }

    /// Result headline shown to the user.
    pub fn message(&self) -> String {
        let confidence = format_percent(self.confidence());
        if self.label.is_positive() {
            format!("Likely to SUBSCRIBE (Confidence: {confidence})")
        } else {
            format!("Not likely to subscribe (Confidence: {confidence})")
        }
    }
}

/// Format a ratio as a percentage with two decimals (`0.8581` -> `85.81%`).
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}
