//! XGBoost boosters in the native JSON model format.
//!
//! The format is what `Booster.save_model("model.json")` writes. Only the
//! parts needed for binary scoring are read:
//!
//! ```text
//! learner
//! ├── feature_names                       optional, training column names
//! ├── learner_model_param.num_feature     "19"
//! ├── learner_model_param.base_score      "5E-1" or "[5E-1]"
//! ├── objective.name                      binary:logistic | binary:logitraw
//! └── gradient_booster (gbtree)
//!     └── model.trees[]                   parallel node arrays
//! ```
//!
//! A model trained with early stopping records `attributes.best_iteration`
//! and keeps the trees boosted after it. Only trees up to and including the
//! best iteration are scored, as `XGBClassifier.predict_proba` does.
//!
//! A node with `left_children[i] == -1` is a leaf whose value is stored in
//! `split_conditions[i]`. Split nodes send `x < split_conditions[i]` left and
//! missing values (`NaN`) in the `default_left[i]` direction.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use tdp_model::FeatureVector;

use crate::classifier::Classifier;

pub const BACKEND_NAME: &str = "xgboost-json";

#[derive(Debug, Error)]
pub enum BoosterError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Supported training objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Probability output through the logistic function.
    Logistic,
    /// Raw margin output; probability is still the logistic of the margin.
    LogitRaw,
}

impl Objective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Logistic => "binary:logistic",
            Objective::LogitRaw => "binary:logitraw",
        }
    }

    fn parse(name: &str) -> Result<Self, BoosterError> {
        match name {
            "binary:logistic" => Ok(Objective::Logistic),
            "binary:logitraw" => Ok(Objective::LogitRaw),
            other => Err(BoosterError::Invalid(format!(
                "objective `{other}` is not a binary classification objective"
            ))),
        }
    }

    /// Margin equivalent of the stored `base_score`.
    fn base_margin(self, base_score: f32) -> Result<f32, BoosterError> {
        match self {
            Objective::LogitRaw => Ok(base_score),
            Objective::Logistic if base_score > 0.0 && base_score < 1.0 => {
                Ok((base_score / (1.0 - base_score)).ln())
            }
            Objective::Logistic => Err(BoosterError::Invalid(format!(
                "base_score {base_score} is not a probability"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
        default_left: bool,
    },
    Leaf(f32),
}

#[derive(Debug, Clone, PartialEq)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn leaf_value(&self, row: &[f32]) -> f32 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let value = row.get(feature).copied().unwrap_or(f32::NAN);
                    index = if value.is_nan() {
                        if default_left { left } else { right }
                    } else if value < threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// A gradient-boosted tree ensemble for binary classification.
#[derive(Debug, Clone, PartialEq)]
pub struct XgbBooster {
    objective: Objective,
    base_score: f32,
    base_margin: f32,
    num_features: usize,
    feature_names: Vec<String>,
    best_iteration: Option<usize>,
    trees: Vec<Tree>,
}

impl XgbBooster {
    /// Parse and check a JSON model document.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON and on models this scorer cannot evaluate
    /// exactly: non-binary objectives, multi-class or non-`gbtree` boosters,
    /// categorical splits and inconsistent trees.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, BoosterError> {
        let document: Document = serde_json::from_slice(bytes)?;
        Self::from_document(document)
    }

    fn from_document(document: Document) -> Result<Self, BoosterError> {
        let learner = document.learner;
        let params = learner.learner_model_param;

        let objective = Objective::parse(&learner.objective.name)?;
        let num_class = parse_param::<usize>("num_class", &params.num_class)?;
        if num_class > 1 {
            return Err(BoosterError::Invalid(format!(
                "model has {num_class} classes, expected a binary model"
            )));
        }
        let num_features = parse_param::<usize>("num_feature", &params.num_feature)?;
        let base_score = parse_param::<f32>("base_score", &params.base_score)?;
        let base_margin = objective.base_margin(base_score)?;

        if learner.gradient_booster.name != "gbtree" {
            return Err(BoosterError::Invalid(format!(
                "booster `{}` is not supported, expected `gbtree`",
                learner.gradient_booster.name
            )));
        }
        let ensemble = learner
            .gradient_booster
            .model
            .ok_or_else(|| BoosterError::Invalid("gbtree model has no trees".to_string()))?;

        let best_iteration = learner
            .attributes
            .best_iteration
            .as_deref()
            .map(|raw| parse_param::<usize>("best_iteration", raw))
            .transpose()?;
        let in_use = trees_in_use(best_iteration, &ensemble)?;

        let trees = ensemble
            .trees
            .into_iter()
            .take(in_use)
            .enumerate()
            .map(|(position, raw)| {
                build_tree(raw, num_features)
                    .map_err(|reason| BoosterError::Invalid(format!("tree {position}: {reason}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            objective,
            base_score,
            base_margin,
            num_features,
            feature_names: learner.feature_names,
            best_iteration,
            trees,
        })
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn base_score(&self) -> f32 {
        self.base_score
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Training column names, empty when the model was trained without them.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Trees that take part in scoring.
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Last boosting round kept by early stopping, if the model used it.
    pub fn best_iteration(&self) -> Option<usize> {
        self.best_iteration
    }

    /// Raw score before the logistic link. Missing columns count as `NaN`.
    pub fn margin(&self, row: &[f32]) -> f32 {
        self.trees
            .iter()
            .fold(self.base_margin, |sum, tree| sum + tree.leaf_value(row))
    }

    /// Positive-class probability for a raw row.
    pub fn probability(&self, row: &[f32]) -> f32 {
        sigmoid(self.margin(row))
    }
}

impl Classifier for XgbBooster {
    fn backend(&self) -> &'static str {
        BACKEND_NAME
    }

    #[allow(clippy::cast_possible_truncation)]
    fn predict_probability(&self, features: &FeatureVector) -> f64 {
        let row = features.to_f64_row().map(|value| value as f32);
        f64::from(self.probability(&row))
    }
}

fn sigmoid(margin: f32) -> f32 {
    1.0 / (1.0 + (-margin).exp())
}

/// Parse a learner parameter; XGBoost stores them as strings and newer
/// versions wrap vector-valued ones in brackets.
fn parse_param<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, BoosterError> {
    let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']');
    trimmed
        .trim()
        .parse()
        .map_err(|_| BoosterError::Invalid(format!("invalid {name} `{raw}`")))
}

/// Number of leading trees that belong to rounds `0..=best_iteration`.
fn trees_in_use(
    best_iteration: Option<usize>,
    ensemble: &TreeEnsemble,
) -> Result<usize, BoosterError> {
    let total = ensemble.trees.len();
    let Some(best) = best_iteration else {
        return Ok(total);
    };
    let end = if ensemble.iteration_indptr.is_empty() {
        let per_round = match &ensemble.gbtree_model_param {
            Some(param) => parse_param::<usize>("num_parallel_tree", &param.num_parallel_tree)?,
            None => 1,
        };
        (best + 1).checked_mul(per_round)
    } else {
        ensemble.iteration_indptr.get(best + 1).copied()
    };
    end.filter(|end| *end > 0 && *end <= total).ok_or_else(|| {
        BoosterError::Invalid(format!(
            "best_iteration {best} lies beyond the {total} trees in the model"
        ))
    })
}

fn build_tree(raw: RawTree, num_features: usize) -> Result<Tree, String> {
    let len = raw.left_children.len();
    if len == 0 {
        return Err("tree has no nodes".to_string());
    }
    let lengths = [
        raw.right_children.len(),
        raw.split_indices.len(),
        raw.split_conditions.len(),
        raw.default_left.len(),
    ];
    if lengths.iter().any(|other| *other != len) {
        return Err("node arrays have different lengths".to_string());
    }
    if raw.split_type.iter().any(|kind| *kind != 0) {
        return Err("categorical splits are not supported".to_string());
    }

    let child = |parent: usize, raw_index: i32| -> Result<usize, String> {
        usize::try_from(raw_index)
            .ok()
            .filter(|index| *index > parent && *index < len)
            .ok_or_else(|| format!("node {parent} has invalid child {raw_index}"))
    };

    let mut nodes = Vec::with_capacity(len);
    for index in 0..len {
        let left = raw.left_children[index];
        let right = raw.right_children[index];
        if left == -1 {
            if right != -1 {
                return Err(format!("leaf {index} has a right child"));
            }
            nodes.push(Node::Leaf(raw.split_conditions[index]));
            continue;
        }
        let feature = usize::try_from(raw.split_indices[index])
            .ok()
            .filter(|feature| *feature < num_features)
            .ok_or_else(|| {
                format!(
                    "node {index} splits on feature {} of {num_features}",
                    raw.split_indices[index]
                )
            })?;
        nodes.push(Node::Split {
            feature,
            threshold: raw.split_conditions[index],
            left: child(index, left)?,
            right: child(index, right)?,
            default_left: raw.default_left[index],
        });
    }
    Ok(Tree { nodes })
}

#[derive(Deserialize)]
struct Document {
    learner: Learner,
}

#[derive(Deserialize)]
struct Learner {
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    feature_names: Vec<String>,
    gradient_booster: GradientBooster,
    learner_model_param: LearnerModelParam,
    objective: ObjectiveSpec,
}

#[derive(Deserialize)]
struct GradientBooster {
    name: String,
    #[serde(default)]
    model: Option<TreeEnsemble>,
}

/// String-valued learner attributes; only early stopping matters here.
#[derive(Default, Deserialize)]
struct Attributes {
    #[serde(default)]
    best_iteration: Option<String>,
}

#[derive(Deserialize)]
struct TreeEnsemble {
    #[serde(default)]
    gbtree_model_param: Option<GbtreeModelParam>,
    /// Tree offsets per boosting round, `len == rounds + 1` (XGBoost 2.x).
    #[serde(default)]
    iteration_indptr: Vec<usize>,
    trees: Vec<RawTree>,
}

#[derive(Deserialize)]
struct GbtreeModelParam {
    #[serde(default = "one")]
    num_parallel_tree: String,
}

#[derive(Deserialize)]
struct RawTree {
    left_children: Vec<i32>,
    right_children: Vec<i32>,
    split_indices: Vec<i64>,
    split_conditions: Vec<f32>,
    #[serde(deserialize_with = "flags")]
    default_left: Vec<bool>,
    #[serde(default)]
    split_type: Vec<u8>,
}

#[derive(Deserialize)]
struct LearnerModelParam {
    base_score: String,
    #[serde(default = "zero")]
    num_class: String,
    num_feature: String,
}

#[derive(Deserialize)]
struct ObjectiveSpec {
    name: String,
}

fn zero() -> String {
    "0".to_string()
}

fn one() -> String {
    "1".to_string()
}

/// `default_left` is a list of booleans in 1.x models and of 0/1 in 2.x.
fn flags<'de, D>(deserializer: D) -> Result<Vec<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }

    let raw = Vec::<Flag>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|flag| match flag {
            Flag::Bool(value) => value,
            Flag::Int(value) => value != 0,
        })
        .collect())
}
