//! Loading the model artifact at startup.
//!
//! The artifact is read once, checked against the encoder's feature schema and
//! then only shared read-only. Any mismatch is a startup failure: a model that
//! sees columns in a different order would score every profile wrongly
//! without raising an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, info_span};

use tdp_model::{FEATURE_COUNT, Feature, normalize_feature_name};

use crate::classifier::Classifier;
use crate::error::{LoadError, Result};
use crate::xgboost::{BoosterError, XgbBooster};

/// Default artifact file name, looked up in the working directory.
pub const DEFAULT_MODEL_FILE: &str = "xgboost_model.json";

/// Extensions of Python-only serializations that cannot be scored here.
const PICKLE_EXTENSIONS: &[&str] = &["pkl", "pickle", "joblib"];

/// Descriptive facts about a loaded artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub path: PathBuf,
    pub backend: &'static str,
    pub objective: &'static str,
    /// Trees used for scoring, after early-stopping truncation.
    pub trees: usize,
    pub best_iteration: Option<usize>,
    pub features: usize,
    pub base_score: f32,
    /// Hex SHA-256 of the artifact bytes.
    pub sha256: String,
}

/// A classifier loaded from disk, ready to be shared.
#[derive(Clone)]
pub struct LoadedModel {
    classifier: Arc<dyn Classifier>,
    summary: ModelSummary,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

impl LoadedModel {
    pub fn classifier(&self) -> &Arc<dyn Classifier> {
        &self.classifier
    }

    pub fn summary(&self) -> &ModelSummary {
        &self.summary
    }
}

/// Load and check the model artifact at `path`.
///
/// # Errors
///
/// Returns a [`LoadError`] when the file cannot be read, is a Python pickle,
/// is not a valid XGBoost JSON model, or does not take exactly the encoder's
/// 19 columns in the encoder's order.
pub fn load_model(path: &Path) -> Result<LoadedModel> {
    let span = info_span!("load_model", path = %path.display());
    let _guard = span.enter();

    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        let extension = extension.to_ascii_lowercase();
        if PICKLE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(LoadError::UnsupportedFormat { extension });
        }
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sha256 = sha256_hex(&bytes);
    debug!(bytes = bytes.len(), %sha256, "read model artifact");

    let booster = XgbBooster::from_slice(&bytes).map_err(|error| match error {
        BoosterError::Json(source) => LoadError::Parse {
            path: path.to_path_buf(),
            source,
        },
        BoosterError::Invalid(reason) => LoadError::Incompatible(reason),
    })?;
    check_schema(booster.num_features(), booster.feature_names())?;

    let summary = ModelSummary {
        path: path.to_path_buf(),
        backend: booster.backend(),
        objective: booster.objective().as_str(),
        trees: booster.num_trees(),
        best_iteration: booster.best_iteration(),
        features: booster.num_features(),
        base_score: booster.base_score(),
        sha256,
    };
    info!(
        objective = summary.objective,
        trees = summary.trees,
        best_iteration = ?summary.best_iteration,
        sha256 = %summary.sha256,
        "model loaded"
    );

    Ok(LoadedModel {
        classifier: Arc::new(booster),
        summary,
    })
}

/// Check a model's input shape against [`Feature::ALL`].
///
/// Names are only compared when the model carries them.
///
/// # Errors
///
/// [`LoadError::FeatureCount`] or [`LoadError::FeatureName`] on mismatch.
pub fn check_schema(num_features: usize, feature_names: &[String]) -> Result<()> {
    if num_features != FEATURE_COUNT {
        return Err(LoadError::FeatureCount {
            expected: FEATURE_COUNT,
            found: num_features,
        });
    }
    if feature_names.is_empty() {
        debug!("model has no feature names; checking column count only");
        return Ok(());
    }
    if feature_names.len() != FEATURE_COUNT {
        return Err(LoadError::FeatureCount {
            expected: FEATURE_COUNT,
            found: feature_names.len(),
        });
    }
    for (position, (feature, found)) in Feature::ALL.iter().zip(feature_names).enumerate() {
        if normalize_feature_name(found) != feature.name() {
            return Err(LoadError::FeatureName {
                position,
                expected: feature.name(),
                found: found.clone(),
            });
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
