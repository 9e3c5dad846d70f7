//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

    /// Metric card value color (amber)
    pub const METRIC: Color32 = Color32::from_rgb(245, 158, 11);
}

/// Switch between the dark and light visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}
