//! Client profile input for the CLI commands.
//!
//! Profiles come from a JSON file or from the field flags. Either way they are
//! checked against the category tables before anything is scored, and their
//! values only reach the logs through [`redact_value`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use tdp_model::{ClientProfile, Feature, FeatureKind, FeatureVector, encode};

use crate::logging::redact_value;

/// Read a profile from a JSON file. Every field is required, unknown fields
/// are rejected.
pub fn read_profile(path: &Path) -> Result<ClientProfile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read profile {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse profile {}", path.display()))
}

/// Validate categorical fields; out-of-bounds integers pass through with a
/// `debug` note.
pub fn check_profile(profile: ClientProfile) -> Result<ClientProfile> {
    profile.validate().context("invalid client profile")?;

    for (feature, value) in profile.out_of_bounds() {
        debug!(
            feature = feature.name(),
            bounds = %feature_bounds(feature),
            "value outside form bounds; passing through"
        );
        trace!(feature = feature.name(), value = redact_value(&value.to_string()));
    }
    if let Ok(json) = serde_json::to_string(&profile) {
        trace!(profile = redact_value(&json), "resolved profile");
    }
    Ok(profile)
}

/// Encode a checked profile.
pub fn encode_profile(profile: &ClientProfile) -> Result<FeatureVector> {
    let features = encode(profile).context("encode profile")?;
    trace!(
        features = redact_value(&features.to_string()),
        "encoded profile"
    );
    Ok(features)
}

fn feature_bounds(feature: Feature) -> String {
    match feature.kind() {
        FeatureKind::Integer(bounds) => bounds.to_string(),
        _ => "-".to_string(),
    }
}
