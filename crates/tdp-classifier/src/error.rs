//! Errors raised while loading a model artifact.

use std::path::PathBuf;

use thiserror::Error;

/// The model could not be loaded or does not fit the feature schema.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "unsupported model format `.{extension}`; export the booster with \
         `save_model(\"xgboost_model.json\")` and load the JSON file"
    )]
    UnsupportedFormat { extension: String },
    #[error("model expects {found} features, the encoder produces {expected}")]
    FeatureCount { expected: usize, found: usize },
    #[error("model feature {position} is `{found}`, the encoder places `{expected}` there")]
    FeatureName {
        position: usize,
        expected: &'static str,
        found: String,
    },
    #[error("incompatible model: {0}")]
    Incompatible(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;
