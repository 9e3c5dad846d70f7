//! Form state: the profile being edited and the outcome of the last submission.

use tdp_classifier::Predictor;
use tdp_model::{ClientProfile, PredictionResult};

/// Where the form is in its idle → submitted → shown cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No result on screen.
    Idle,
    /// Result of the last submission.
    Shown(PredictionResult),
    /// The last submission was rejected before reaching the model.
    Failed(String),
}

/// State behind the single-page form.
#[derive(Debug, Clone)]
pub struct FormState {
    profile: ClientProfile,
    phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(ClientProfile::default())
    }
}

impl FormState {
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            profile,
            phase: Phase::Idle,
        }
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Apply an edit to the profile.
    ///
    /// `edit` returns whether anything changed; a change drops any result on
    /// screen.
    pub fn edit(&mut self, edit: impl FnOnce(&mut ClientProfile) -> bool) -> bool {
        let changed = edit(&mut self.profile);
        if changed && self.phase != Phase::Idle {
            tracing::debug!("profile edited, clearing result");
            self.phase = Phase::Idle;
        }
        changed
    }

    /// Score the current profile. Each submission replaces the previous outcome.
    pub fn submit(&mut self, predictor: &Predictor) -> &Phase {
        self.phase = match predictor.predict(&self.profile) {
            Ok(result) => {
                tracing::info!(label = result.label.class(), "prediction shown");
                Phase::Shown(result)
            }
            Err(error) => {
                tracing::warn!(%error, "submission rejected");
                Phase::Failed(error.to_string())
            }
        };
        &self.phase
    }

    /// Back to the initial form.
    pub fn reset(&mut self) {
        self.profile = ClientProfile::default();
        self.phase = Phase::Idle;
    }
}
