// src/gui/components/banner.rs
//
// Error text above the list. The list itself is never hidden.

use eframe::egui::{self, RichText};

use crate::gui::{app::App, theme};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(msg) = app.board.error_message() else { return };

    egui::Frame::new()
        .fill(theme::ERROR_BG)
        .stroke(egui::Stroke::new(1.0, theme::ERROR_BORDER))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("ⓘ").color(theme::ERROR_FG));
                ui.label(RichText::new(msg).color(theme::ERROR_FG));
            });
        });
    ui.add_space(12.0);
}
