//! Result region below the form.

use egui::{RichText, Ui};

use crate::state::Phase;
use crate::theme::{colors, spacing};
use crate::views::InsightsView;

/// Prediction outcome followed by the model insights
pub struct ResultView;

impl ResultView {
    pub fn show(ui: &mut Ui, phase: &Phase) {
        match phase {
            Phase::Idle => {}
            Phase::Shown(result) => {
                ui.separator();
                ui.add_space(spacing::MD);
                ui.heading("Prediction Result");
                ui.add_space(spacing::SM);

                let (icon, color) = if result.label.is_positive() {
                    (egui_phosphor::regular::CHECK_CIRCLE, colors::SUCCESS)
                } else {
                    (
                        egui_phosphor::regular::X_CIRCLE,
                        ui.visuals().error_fg_color,
                    )
                };
                ui.label(
                    RichText::new(format!("{icon} {}", result.message()))
                        .color(color)
                        .strong()
                        .size(18.0),
                );

                ui.add_space(spacing::XL);
                InsightsView::show(ui);
            }
            Phase::Failed(message) => {
                ui.separator();
                ui.add_space(spacing::MD);
                ui.label(
                    RichText::new(format!("{} {message}", egui_phosphor::regular::WARNING))
                        .color(ui.visuals().error_fg_color),
                );
            }
        }
    }
}
