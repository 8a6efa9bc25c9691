// src/gui/components/titles.rs
use eframe::egui::{self, RichText};

pub fn draw(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(6.0);
        ui.heading(RichText::new("Performance Leaderboard").size(26.0).strong());
        ui.label(RichText::new("Weekly Top Performers").weak());
        ui.add_space(16.0);
    });
}
