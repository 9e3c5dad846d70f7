//! Feature schema of the classifier.
//!
//! [`Feature::ALL`] is the column order the model was trained on. The encoder,
//! the artifact loader and both front ends all iterate this array, so it is
//! the one place that defines the order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{
    CONTACT, CategoryTable, DAY_OF_WEEK, EDUCATION, JOB, MARITAL, MONTH, POUTCOME, YES_NO_UNKNOWN,
};

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 19;

/// One column of the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Age,
    Job,
    Marital,
    Education,
    Default,
    Housing,
    Loan,
    Contact,
    Month,
    DayOfWeek,
    Campaign,
    Pdays,
    Previous,
    Poutcome,
    EmpVarRate,
    ConsPriceIdx,
    ConsConfIdx,
    Euribor3m,
    NrEmployed,
}

/// Inclusive widget bounds for an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntBounds {
    pub const NONE: Self = Self {
        min: None,
        max: None,
    };

    const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

impl fmt::Display for IntBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{min}..={max}"),
            (Some(min), None) => write!(f, ">= {min}"),
            (None, Some(max)) => write!(f, "<= {max}"),
            (None, None) => f.write_str("-"),
        }
    }
}

/// How a field is represented in the profile and in the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Integer(IntBounds),
    Float,
    Categorical(&'static CategoryTable),
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Integer(_) => "integer",
            FeatureKind::Float => "float",
            FeatureKind::Categorical(_) => "categorical",
        }
    }
}

impl Feature {
    /// Training column order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Age,
        Feature::Job,
        Feature::Marital,
        Feature::Education,
        Feature::Default,
        Feature::Housing,
        Feature::Loan,
        Feature::Contact,
        Feature::Month,
        Feature::DayOfWeek,
        Feature::Campaign,
        Feature::Pdays,
        Feature::Previous,
        Feature::Poutcome,
        Feature::EmpVarRate,
        Feature::ConsPriceIdx,
        Feature::ConsConfIdx,
        Feature::Euribor3m,
        Feature::NrEmployed,
    ];

    /// Column name as used in the training data.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Age => "age",
            Feature::Job => "job",
            Feature::Marital => "marital",
            Feature::Education => "education",
            Feature::Default => "default",
            Feature::Housing => "housing",
            Feature::Loan => "loan",
            Feature::Contact => "contact",
            Feature::Month => "month",
            Feature::DayOfWeek => "day_of_week",
            Feature::Campaign => "campaign",
            Feature::Pdays => "pdays",
            Feature::Previous => "previous",
            Feature::Poutcome => "poutcome",
            Feature::EmpVarRate => "emp_var_rate",
            Feature::ConsPriceIdx => "cons_price_idx",
            Feature::ConsConfIdx => "cons_conf_idx",
            Feature::Euribor3m => "euribor3m",
            Feature::NrEmployed => "nr_employed",
        }
    }

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Feature::Age => "Age",
            Feature::Job => "Job",
            Feature::Marital => "Marital Status",
            Feature::Education => "Education",
            Feature::Default => "Has Credit in Default?",
            Feature::Housing => "Has Housing Loan?",
            Feature::Loan => "Has Personal Loan?",
            Feature::Contact => "Contact Type",
            Feature::Month => "Last Contact Month",
            Feature::DayOfWeek => "Day of Week",
            Feature::Campaign => "# of Contacts (Current Campaign)",
            Feature::Pdays => "Days Since Last Contact",
            Feature::Previous => "# of Previous Contacts",
            Feature::Poutcome => "Previous Campaign Outcome",
            Feature::EmpVarRate => "Employment Variation Rate",
            Feature::ConsPriceIdx => "Consumer Price Index",
            Feature::ConsConfIdx => "Consumer Confidence Index",
            Feature::Euribor3m => "Euribor 3 Month Rate",
            Feature::NrEmployed => "Number of Employees",
        }
    }

    pub fn kind(self) -> FeatureKind {
        match self {
            Feature::Age => FeatureKind::Integer(IntBounds::between(18, 100)),
            Feature::Campaign => FeatureKind::Integer(IntBounds::at_least(1)),
            Feature::Pdays => FeatureKind::Integer(IntBounds::NONE),
            Feature::Previous => FeatureKind::Integer(IntBounds::at_least(0)),
            Feature::EmpVarRate
            | Feature::ConsPriceIdx
            | Feature::ConsConfIdx
            | Feature::Euribor3m
            | Feature::NrEmployed => FeatureKind::Float,
            Feature::Job => FeatureKind::Categorical(&JOB),
            Feature::Marital => FeatureKind::Categorical(&MARITAL),
            Feature::Education => FeatureKind::Categorical(&EDUCATION),
            Feature::Default | Feature::Housing | Feature::Loan => {
                FeatureKind::Categorical(&YES_NO_UNKNOWN)
            }
            Feature::Contact => FeatureKind::Categorical(&CONTACT),
            Feature::Month => FeatureKind::Categorical(&MONTH),
            Feature::DayOfWeek => FeatureKind::Categorical(&DAY_OF_WEEK),
            Feature::Poutcome => FeatureKind::Categorical(&POUTCOME),
        }
    }

    /// The category table, for categorical fields.
    pub fn table(self) -> Option<&'static CategoryTable> {
        match self.kind() {
            FeatureKind::Categorical(table) => Some(table),
            _ => None,
        }
    }

    /// Position of this feature in the vector.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = String;

    /// Accepts the column name, with `.` or `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_feature_name(s);
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == normalized)
            .ok_or_else(|| format!("Unknown feature: {s}"))
    }
}

/// Lowercase a column name and fold `.` and `-` into `_`.
///
/// The public bank-marketing dataset spells `emp.var.rate`, the form spells
/// `emp_var_rate`; both name the same column.
pub fn normalize_feature_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '.' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), position, "{feature}");
        }
    }

    #[test]
    fn yes_no_fields_share_one_table() {
        let default = Feature::Default.table().unwrap();
        let housing = Feature::Housing.table().unwrap();
        let loan = Feature::Loan.table().unwrap();
        assert!(std::ptr::eq(default, housing));
        assert!(std::ptr::eq(housing, loan));
    }

    #[test]
    fn eight_tables_cover_ten_categorical_fields() {
        let categorical = Feature::ALL
            .iter()
            .filter(|f| f.table().is_some())
            .count();
        assert_eq!(categorical, 10);
        assert_eq!(FEATURE_COUNT - categorical, 9);
    }

    #[test]
    fn parses_dotted_names() {
        assert_eq!("emp.var.rate".parse::<Feature>(), Ok(Feature::EmpVarRate));
        assert_eq!("nr.employed".parse::<Feature>(), Ok(Feature::NrEmployed));
        assert_eq!("DAY_OF_WEEK".parse::<Feature>(), Ok(Feature::DayOfWeek));
        assert!("duration".parse::<Feature>().is_err());
    }

    #[test]
    fn int_bounds() {
        let age = IntBounds::between(18, 100);
        assert!(age.contains(18));
        assert!(age.contains(100));
        assert!(!age.contains(17));
        assert!(IntBounds::NONE.contains(i64::MIN));
        assert_eq!(IntBounds::at_least(1).to_string(), ">= 1");
    }
}
