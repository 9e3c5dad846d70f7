//! Core types of the term deposit predictor.
//!
//! A [`ClientProfile`] is encoded into a [`FeatureVector`] in the fixed
//! [`Feature::ALL`] order, with categorical values replaced by their
//! [`CategoryTable`] code. The classifier's answer comes back as a
//! [`PredictionResult`].

pub mod category;
pub mod encode;
pub mod error;
pub mod feature;
pub mod insights;
pub mod prediction;
pub mod profile;

pub use category::CategoryTable;
pub use encode::{FeatureValue, FeatureVector, encode};
pub use error::{ModelError, Result};
pub use feature::{FEATURE_COUNT, Feature, FeatureKind, IntBounds, normalize_feature_name};
pub use insights::{INSIGHTS_CAPTION, INSIGHTS_HEADING, Insight, MODEL_INSIGHTS};
pub use prediction::{Label, PredictionResult, format_percent};
pub use profile::{ClientProfile, FieldMut, FieldRef, choice_code};
