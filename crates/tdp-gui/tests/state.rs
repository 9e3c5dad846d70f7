//! Form state transitions.

use std::sync::Arc;

use tdp_classifier::{Classifier, Predictor};
use tdp_gui::state::{FormState, Phase};
use tdp_model::{ClientProfile, Feature, FeatureVector, Label};

/// Probability 0.9 for a successful previous outcome, 0.2 otherwise.
struct PoutcomeScorer;

impl Classifier for PoutcomeScorer {
    fn backend(&self) -> &'static str {
        "poutcome-scorer"
    }

    fn predict_probability(&self, features: &FeatureVector) -> f64 {
        if features.get(Feature::Poutcome).as_f64() == 2.0 {
            0.9
        } else {
            0.2
        }
    }
}

fn predictor() -> Predictor {
    Predictor::new(Arc::new(PoutcomeScorer))
}

#[test]
fn starts_idle_with_default_profile() {
    let state = FormState::default();
    assert_eq!(state.phase(), &Phase::Idle);
    assert_eq!(state.profile(), &ClientProfile::default());
}

#[test]
fn submit_shows_result() {
    let mut state = FormState::default();
    let phase = state.submit(&predictor()).clone();

    let Phase::Shown(result) = phase else {
        panic!("expected a result, got {phase:?}");
    };
    assert_eq!(result.label, Label::NoSubscription);
    assert_eq!(result.message(), "Not likely to subscribe (Confidence: 80.00%)");
}

#[test]
fn edit_after_result_returns_to_idle() {
    let mut state = FormState::default();
    state.submit(&predictor());

    let changed = state.edit(|profile| {
        profile.poutcome = "success".to_string();
        true
    });

    assert!(changed);
    assert_eq!(state.phase(), &Phase::Idle);
    assert_eq!(state.profile().poutcome, "success");
}

#[test]
fn unchanged_edit_keeps_result() {
    let mut state = FormState::default();
    state.submit(&predictor());

    state.edit(|_| false);

    assert!(matches!(state.phase(), Phase::Shown(_)));
}

#[test]
fn each_submission_reflects_current_profile() {
    let mut state = FormState::default();
    state.submit(&predictor());
    state.edit(|profile| {
        profile.poutcome = "success".to_string();
        true
    });

    let Phase::Shown(result) = state.submit(&predictor()).clone() else {
        panic!("expected a result");
    };
    assert_eq!(result.label, Label::Subscription);
    assert_eq!(result.message(), "Likely to SUBSCRIBE (Confidence: 90.00%)");
}

#[test]
fn invalid_selection_fails_without_scoring() {
    let mut state = FormState::new(ClientProfile {
        day_of_week: "sat".to_string(),
        ..ClientProfile::default()
    });

    let Phase::Failed(message) = state.submit(&predictor()).clone() else {
        panic!("expected a failure");
    };
    assert!(message.contains("day_of_week"), "{message}");
    assert!(message.contains("sat"), "{message}");
}

#[test]
fn reset_restores_initial_form() {
    let mut state = FormState::default();
    state.edit(|profile| {
        profile.age = 61;
        true
    });
    state.submit(&predictor());

    state.reset();

    assert_eq!(state.phase(), &Phase::Idle);
    assert_eq!(state.profile(), &ClientProfile::default());
}
