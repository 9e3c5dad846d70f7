//! Static metric cards.

use egui::{RichText, Ui};
use tdp_model::{INSIGHTS_CAPTION, INSIGHTS_HEADING, Insight, MODEL_INSIGHTS};

use crate::theme::{colors, spacing};

pub struct InsightsView;

impl InsightsView {
    pub fn show(ui: &mut Ui) {
        ui.heading(INSIGHTS_HEADING);
        ui.label(RichText::new(INSIGHTS_CAPTION).weak());
        ui.add_space(spacing::MD);

        ui.columns(MODEL_INSIGHTS.len(), |columns| {
            for (ui, insight) in columns.iter_mut().zip(&MODEL_INSIGHTS) {
                card(ui, insight);
            }
        });
    }
}

fn card(ui: &mut Ui, insight: &Insight) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin::same(spacing::MD as i8))
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(insight.title).strong());
            ui.add_space(spacing::XS);
            ui.label(
                RichText::new(insight.value)
                    .size(24.0)
                    .strong()
                    .color(colors::METRIC),
            );
            ui.add_space(spacing::XS);
            ui.label(RichText::new(insight.note).small().weak());
        });
}
