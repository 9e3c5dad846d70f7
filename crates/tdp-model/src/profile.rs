//! The client profile collected by the form.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::feature::{Feature, FeatureKind};

/// One prospective client and the campaign contact being scored.
///
/// Categorical fields hold the table value as text. They are checked against
/// their table by [`ClientProfile::validate`] and by the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientProfile {
    pub age: i64,
    pub job: String,
    pub marital: String,
    pub education: String,
    pub default: String,
    pub housing: String,
    pub loan: String,
    pub contact: String,
    pub month: String,
    pub day_of_week: String,
    pub campaign: i64,
    pub pdays: i64,
    pub previous: i64,
    pub poutcome: String,
    pub emp_var_rate: f64,
    pub cons_price_idx: f64,
    pub cons_conf_idx: f64,
    pub euribor3m: f64,
    pub nr_employed: f64,
}

/// Read access to a single profile field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Integer(i64),
    Float(f64),
    Choice(&'a str),
}

/// Write access to a single profile field.
#[derive(Debug)]
pub enum FieldMut<'a> {
    Integer(&'a mut i64),
    Float(&'a mut f64),
    Choice(&'a mut String),
}

impl Default for ClientProfile {
    /// Initial state of the form: first choice of every table.
    fn default() -> Self {
        let first = |feature: Feature| {
            feature
                .table()
                .and_then(|table| table.choices().first())
                .map(|choice| (*choice).to_string())
                .unwrap_or_default()
        };
        Self {
            age: 30,
            job: first(Feature::Job),
            marital: first(Feature::Marital),
            education: first(Feature::Education),
            default: first(Feature::Default),
            housing: first(Feature::Housing),
            loan: first(Feature::Loan),
            contact: first(Feature::Contact),
            month: first(Feature::Month),
            day_of_week: first(Feature::DayOfWeek),
            campaign: 1,
            pdays: 999,
            previous: 0,
            poutcome: first(Feature::Poutcome),
            emp_var_rate: 1.1,
            cons_price_idx: 93.994,
            cons_conf_idx: -36.4,
            euribor3m: 4.857,
            nr_employed: 5191.0,
        }
    }
}

impl ClientProfile {
    pub fn field(&self, feature: Feature) -> FieldRef<'_> {
        match feature {
            Feature::Age => FieldRef::Integer(self.age),
            Feature::Job => FieldRef::Choice(&self.job),
            Feature::Marital => FieldRef::Choice(&self.marital),
            Feature::Education => FieldRef::Choice(&self.education),
            Feature::Default => FieldRef::Choice(&self.default),
            Feature::Housing => FieldRef::Choice(&self.housing),
            Feature::Loan => FieldRef::Choice(&self.loan),
            Feature::Contact => FieldRef::Choice(&self.contact),
            Feature::Month => FieldRef::Choice(&self.month),
            Feature::DayOfWeek => FieldRef::Choice(&self.day_of_week),
            Feature::Campaign => FieldRef::Integer(self.campaign),
            Feature::Pdays => FieldRef::Integer(self.pdays),
            Feature::Previous => FieldRef::Integer(self.previous),
            Feature::Poutcome => FieldRef::Choice(&self.poutcome),
            Feature::EmpVarRate => FieldRef::Float(self.emp_var_rate),
            Feature::ConsPriceIdx => FieldRef::Float(self.cons_price_idx),
            Feature::ConsConfIdx => FieldRef::Float(self.cons_conf_idx),
            Feature::Euribor3m => FieldRef::Float(self.euribor3m),
            Feature::NrEmployed => FieldRef::Float(self.nr_employed),
        }
    }

    pub fn field_mut(&mut self, feature: Feature) -> FieldMut<'_> {
        match feature {
            Feature::Age => FieldMut::Integer(&mut self.age),
            Feature::Job => FieldMut::Choice(&mut self.job),
            Feature::Marital => FieldMut::Choice(&mut self.marital),
            Feature::Education => FieldMut::Choice(&mut self.education),
            Feature::Default => FieldMut::Choice(&mut self.default),
            Feature::Housing => FieldMut::Choice(&mut self.housing),
            Feature::Loan => FieldMut::Choice(&mut self.loan),
            Feature::Contact => FieldMut::Choice(&mut self.contact),
            Feature::Month => FieldMut::Choice(&mut self.month),
            Feature::DayOfWeek => FieldMut::Choice(&mut self.day_of_week),
            Feature::Campaign => FieldMut::Integer(&mut self.campaign),
            Feature::Pdays => FieldMut::Integer(&mut self.pdays),
            Feature::Previous => FieldMut::Integer(&mut self.previous),
            Feature::Poutcome => FieldMut::Choice(&mut self.poutcome),
            Feature::EmpVarRate => FieldMut::Float(&mut self.emp_var_rate),
            Feature::ConsPriceIdx => FieldMut::Float(&mut self.cons_price_idx),
            Feature::ConsConfIdx => FieldMut::Float(&mut self.cons_conf_idx),
            Feature::Euribor3m => FieldMut::Float(&mut self.euribor3m),
            Feature::NrEmployed => FieldMut::Float(&mut self.nr_employed),
        }
    }

    /// Check every categorical field against its table.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError::InvalidSelection`] in feature order.
    pub fn validate(&self) -> Result<()> {
        for feature in Feature::ALL {
            if let FieldRef::Choice(value) = self.field(feature) {
                choice_code(feature, value)?;
            }
        }
        Ok(())
    }

    /// Integer fields whose value lies outside the form's widget bounds.
    ///
    /// These are passed to the model unchanged; callers may report them.
    pub fn out_of_bounds(&self) -> Vec<(Feature, i64)> {
        Feature::ALL
            .into_iter()
            .filter_map(|feature| match (feature.kind(), self.field(feature)) {
                (FeatureKind::Integer(bounds), FieldRef::Integer(value))
                    if !bounds.contains(value) =>
                {
                    Some((feature, value))
                }
                _ => None,
            })
            .collect()
    }
}

/// Code of `value` in the table of `feature`.
///
/// # Errors
///
/// Fails with [`ModelError::InvalidSelection`] when the value is not a key of
/// the table. Non-categorical features have no valid choices.
pub fn choice_code(feature: Feature, value: &str) -> Result<u8> {
    let table = feature.table();
    table
        .and_then(|table| table.code(value))
        .ok_or_else(|| ModelError::InvalidSelection {
            field: feature.name(),
            value: value.to_string(),
            allowed: table.map(|table| table.choices()).unwrap_or_default(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        let profile = ClientProfile::default();
        assert_eq!(profile.validate(), Ok(()));
        assert_eq!(profile.job, "admin.");
        assert_eq!(profile.poutcome, "failure");
        assert!(profile.out_of_bounds().is_empty());
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let profile = ClientProfile {
            marital: "widowed".to_string(),
            month: "june".to_string(),
            ..ClientProfile::default()
        };
        let err = profile.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidSelection { field: "marital", ref value, .. } if value == "widowed"
        ));
    }

    #[test]
    fn field_mut_writes_through() {
        let mut profile = ClientProfile::default();
        if let FieldMut::Choice(value) = profile.field_mut(Feature::Housing) {
            *value = "yes".to_string();
        }
        if let FieldMut::Float(value) = profile.field_mut(Feature::Euribor3m) {
            *value = 1.25;
        }
        assert_eq!(profile.field(Feature::Housing), FieldRef::Choice("yes"));
        assert_eq!(profile.field(Feature::Euribor3m), FieldRef::Float(1.25));
    }

    #[test]
    fn out_of_bounds_is_reported_not_rejected() {
        let profile = ClientProfile {
            age: 12,
            campaign: 0,
            ..ClientProfile::default()
        };
        assert_eq!(
            profile.out_of_bounds(),
            vec![(Feature::Age, 12), (Feature::Campaign, 0)]
        );
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn error_lists_allowed_values() {
        let err = choice_code(Feature::Contact, "email").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid selection \"email\" for `contact` (expected one of: cellular, telephone)"
        );
    }
}
