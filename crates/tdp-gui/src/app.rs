//! Main application struct and eframe::App implementation

use eframe::egui;
use egui::RichText;
use tdp_classifier::{LoadedModel, ModelSummary, Predictor};

use crate::settings::{Settings, save_settings};
use crate::state::FormState;
use crate::theme::{self, spacing};
use crate::views::{FormAction, FormView, ResultView};

pub const APP_TITLE: &str = "Bank Term Deposit Subscription Predictor";
pub const APP_CAPTION: &str = "Predict whether a client will subscribe based on their profile.";

/// Main application struct
pub struct PredictorApp {
    form: FormState,
    predictor: Predictor,
    summary: ModelSummary,
    settings: Settings,
}

impl PredictorApp {
    /// Create the application around an already loaded model.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, model: &LoadedModel) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply(&cc.egui_ctx, settings.dark_mode);

        Self {
            form: FormState::default(),
            predictor: Predictor::new(model.classifier().clone()),
            summary: model.summary().clone(),
            settings,
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.dark_mode = !self.settings.dark_mode;
        theme::apply(ctx, self.settings.dark_mode);
        if let Err(e) = save_settings(&self.settings) {
            tracing::error!("Failed to save settings: {:#}", e);
        }
    }

    fn model_status(&self) -> String {
        let fingerprint = self
            .summary
            .sha256
            .get(..12)
            .unwrap_or(self.summary.sha256.as_str());
        format!(
            "{} {} | {} trees | {}",
            egui_phosphor::regular::CPU,
            self.summary.path.display(),
            self.summary.trees,
            fingerprint
        )
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut toggle_theme = false;

        egui::TopBottomPanel::bottom("model_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.model_status()).small().weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.settings.dark_mode {
                        egui_phosphor::regular::SUN
                    } else {
                        egui_phosphor::regular::MOON
                    };
                    toggle_theme = ui.button(icon).on_hover_text("Toggle theme").clicked();
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(spacing::LG);
                    ui.heading(RichText::new(APP_TITLE).size(28.0));
                    ui.add_space(spacing::SM);
                    ui.label(RichText::new(APP_CAPTION).weak());
                });

                ui.add_space(spacing::XL);

                match FormView::show(ui, &mut self.form) {
                    Some(FormAction::Predict) => {
                        self.form.submit(&self.predictor);
                    }
                    Some(FormAction::Reset) => self.form.reset(),
                    None => {}
                }

                ui.add_space(spacing::LG);
                ResultView::show(ui, self.form.phase());
                ui.add_space(spacing::LG);
            });
        });

        if toggle_theme {
            self.toggle_theme(ctx);
        }
    }
}
