//! Static model-quality figures shown next to every result.
//!
//! These are fixed display text from the model's offline evaluation. They are
//! not computed from the loaded artifact or from the current prediction.

use serde::Serialize;

/// One metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const INSIGHTS_HEADING: &str = "Model Insights";

pub const INSIGHTS_CAPTION: &str =
    "These insights help you understand how well the model performs in real situations:";

pub const MODEL_INSIGHTS: [Insight; 3] = [
    Insight {
        title: "Overall Accuracy",
        value: "87.5%",
        note: "Out of 100 clients, ~88 will be predicted correctly.",
    },
    Insight {
        title: "Subscription Recall",
        value: "48%",
        note: "48 out of 100 actual subscribers are identified.",
    },
    Insight {
        title: "ML Algorithm",
        value: "XGBoost",
        note: "Fast, efficient and widely used in industry.",
    },
];
