//! Feature encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::feature::{FEATURE_COUNT, Feature};
use crate::profile::{ClientProfile, FieldRef, choice_code};

/// A single model input, keeping integer and float columns apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
}

impl FeatureValue {
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Int(value) => value as f64,
            FeatureValue::Float(value) => value,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(value) => write!(f, "{value}"),
            // Debug keeps the trailing `.0` on whole floats.
            FeatureValue::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// The encoded profile, in [`Feature::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([FeatureValue; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[FeatureValue; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, feature: Feature) -> FeatureValue {
        self.0[feature.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        Feature::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Values as `f64`, the shape expected by numeric backends.
    pub fn to_f64_row(&self) -> [f64; FEATURE_COUNT] {
        self.0.map(FeatureValue::as_f64)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, value) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Encode a profile into the model's input vector.
///
/// Categorical fields are replaced by their table code, numeric fields are
/// copied unchanged.
///
/// # Errors
///
/// Returns [`crate::ModelError::InvalidSelection`] for the first categorical
/// field whose value is not in its table.
pub fn encode(profile: &ClientProfile) -> Result<FeatureVector> {
    let mut values = [FeatureValue::Int(0); FEATURE_COUNT];
    for feature in Feature::ALL {
        values[feature.index()] = match profile.field(feature) {
            FieldRef::Integer(value) => FeatureValue::Int(value),
            FieldRef::Float(value) => FeatureValue::Float(value),
            FieldRef::Choice(value) => FeatureValue::Int(i64::from(choice_code(feature, value)?)),
        };
    }
    Ok(FeatureVector(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_encodes_first_codes() {
        let vector = encode(&ClientProfile::default()).unwrap();
        assert_eq!(vector.get(Feature::Job), FeatureValue::Int(0));
        assert_eq!(vector.get(Feature::Age), FeatureValue::Int(30));
        assert_eq!(vector.get(Feature::NrEmployed), FeatureValue::Float(5191.0));
    }

    #[test]
    fn display_keeps_float_kind() {
        assert_eq!(FeatureValue::Float(5191.0).to_string(), "5191.0");
        assert_eq!(FeatureValue::Float(-36.4).to_string(), "-36.4");
        assert_eq!(FeatureValue::Int(999).to_string(), "999");
    }

    #[test]
    fn iter_pairs_features_in_order() {
        let vector = encode(&ClientProfile::default()).unwrap();
        let names: Vec<_> = vector.iter().map(|(feature, _)| feature.name()).collect();
        assert_eq!(names.first(), Some(&"age"));
        assert_eq!(names.last(), Some(&"nr_employed"));
        assert_eq!(names.len(), FEATURE_COUNT);
    }
}
