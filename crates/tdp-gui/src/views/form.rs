//! Client profile inputs and the Predict action.

use egui::{RichText, Ui};
use tdp_model::{ClientProfile, Feature, FeatureKind, FieldMut};

use crate::state::FormState;
use crate::theme::spacing;

/// Age through contact sit in the left column, month onwards in the right.
const LEFT_COLUMN_FIELDS: usize = 8;

const COMBO_WIDTH: f32 = 180.0;

/// Button pressed below the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Predict,
    Reset,
}

/// Profile inputs
pub struct FormView;

impl FormView {
    /// Render the inputs and the action buttons.
    pub fn show(ui: &mut Ui, state: &mut FormState) -> Option<FormAction> {
        let (left, right) = Feature::ALL.split_at(LEFT_COLUMN_FIELDS);
        ui.columns(2, |columns| {
            field_grid(&mut columns[0], "profile_left", left, state);
            field_grid(&mut columns[1], "profile_right", right, state);
        });

        ui.add_space(spacing::LG);

        let mut action = None;
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let predict = RichText::new(format!(
                    "{} Predict",
                    egui_phosphor::regular::MAGNIFYING_GLASS
                ))
                .size(16.0);
                if ui.button(predict).clicked() {
                    action = Some(FormAction::Predict);
                }
                ui.add_space(spacing::SM);
                let reset = RichText::new(format!(
                    "{} Reset",
                    egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                ));
                if ui.button(reset).on_hover_text("Restore the initial form").clicked() {
                    action = Some(FormAction::Reset);
                }
            });
        });
        action
    }
}

fn field_grid(ui: &mut Ui, id: &str, features: &[Feature], state: &mut FormState) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([spacing::MD, spacing::SM])
        .show(ui, |ui| {
            for &feature in features {
                ui.label(RichText::new(feature.label()).strong());
                state.edit(|profile| field_input(ui, feature, profile));
                ui.end_row();
            }
        });
}

/// One input widget; returns whether the value changed.
fn field_input(ui: &mut Ui, feature: Feature, profile: &mut ClientProfile) -> bool {
    match (feature.kind(), profile.field_mut(feature)) {
        (FeatureKind::Integer(bounds), FieldMut::Integer(value)) => {
            let mut drag = egui::DragValue::new(value).speed(1.0);
            if bounds.min.is_some() || bounds.max.is_some() {
                let min = bounds.min.unwrap_or(i64::MIN);
                let max = bounds.max.unwrap_or(i64::MAX);
                drag = drag.range(min..=max);
            }
            ui.add(drag).changed()
        }
        (FeatureKind::Float, FieldMut::Float(value)) => ui
            .add(egui::DragValue::new(value).speed(0.01).min_decimals(1))
            .changed(),
        (FeatureKind::Categorical(table), FieldMut::Choice(value)) => {
            let mut changed = false;
            egui::ComboBox::from_id_salt(feature.name())
                .selected_text(value.as_str())
                .width(COMBO_WIDTH)
                .show_ui(ui, |ui| {
                    for choice in table.choices() {
                        changed |= ui
                            .selectable_value(value, (*choice).to_string(), *choice)
                            .changed();
                    }
                });
            changed
        }
        _ => false,
    }
}
