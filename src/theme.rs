//! Black & white theme for the banner over the mesh

use egui::Color32;

/// Greyscale palette matching the ember fade
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);           // #000000 - pure black

    // === Text (white to grey) ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);   // #FFFFFF - banner
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(80, 80, 80);        // #505050 - stats line
}

/// Banner type sizes
pub const BANNER_SIZE: f32 = 48.0;
pub const STATS_SIZE: f32 = 11.0;

/// Create minimal black & white egui Visuals
pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    // Pure black backgrounds so the mesh reads as light on dark
    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;

    // White text
    visuals.override_text_color = Some(TEXT_PRIMARY);

    // No shadows - flat design
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
