// src/gui/components/header.rs
//
// Brand on the left; sync badge and refresh button on the right.

use eframe::egui::{self, Align, Layout, RichText, widgets::Spinner};

use crate::gui::{actions, app::App, theme};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Pg").size(26.0).strong().color(theme::HONEY));
        ui.label(RichText::new("Bee").size(26.0).strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let button = ui
                .add(egui::Button::new(RichText::new("⟳").size(18.0)).corner_radius(16.0))
                .on_hover_text("Reload sheet");
            if button.clicked() {
                logf!("UI: manual refresh");
                actions::refresh(app, ui.ctx());
            }

            if app.board.is_loading() {
                ui.label(RichText::new("Syncing Sheet...").small().color(theme::HONEY_DARK));
                ui.add(Spinner::new().size(12.0));
            }
        });
    });
    ui.add_space(8.0);
}
