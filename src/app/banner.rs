//! Static text banner and a muted stats line

use eframe::egui;
use crate::theme::{colors, BANNER_SIZE, STATS_SIZE};
use super::EmberApp;

impl EmberApp {
    pub(crate) fn render_banner(&self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();

        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &self.model.config().banner,
            egui::FontId::proportional(BANNER_SIZE),
            colors::TEXT_PRIMARY,
        );

        let stats = format!(
            "{:.0} fps  {} particles  {} segments",
            self.stats.fps(),
            self.stats.particles,
            self.stats.segments
        );
        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            stats,
            egui::FontId::monospace(STATS_SIZE),
            colors::TEXT_MUTED,
        );
    }
}
