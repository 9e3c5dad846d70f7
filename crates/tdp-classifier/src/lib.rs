//! Classifier adapter for the term deposit predictor.
//!
//! [`load_model`] reads the model artifact once at startup and checks it
//! against the feature schema; [`Predictor`] then scores profiles against the
//! shared, read-only [`Classifier`].

pub mod artifact;
pub mod classifier;
pub mod error;
pub mod predictor;
pub mod xgboost;

pub use artifact::{DEFAULT_MODEL_FILE, LoadedModel, ModelSummary, check_schema, load_model};
pub use classifier::{Classifier, DECISION_THRESHOLD};
pub use error::{LoadError, Result};
pub use predictor::Predictor;
pub use xgboost::{Objective, XgbBooster};
