// src/gui/components/board_table.rs
//
// Draws the ranked list: glyph, rank badge, name, score.
// Purely a view over app.board.entries().

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    entry::LeaderboardEntry,
    gui::{app::App, theme},
};

const ROW_H: f32 = 56.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let entries = app.board.entries();

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(44.0))          // glyph
        .column(Column::exact(44.0))          // rank
        .column(Column::remainder().clip(true)) // name
        .column(Column::exact(90.0))          // score
        .body(|body| {
            body.rows(ROW_H, entries.len(), |mut row| {
                let Some(entry) = entries.get(row.index()) else { return };

                row.col(|ui| {
                    ui.push_id(entry.id, |ui| {
                        ui.label(RichText::new(entry.glyph().as_str()).size(26.0));
                    });
                });
                row.col(|ui| rank_badge(ui, entry));
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(RichText::new(&entry.name).size(18.0).strong());
                });
                row.col(|ui| score_cell(ui, entry));
            });
        });
}

fn rank_badge(ui: &mut egui::Ui, entry: &LeaderboardEntry) {
    egui::Frame::new()
        .fill(egui::Color32::BLACK)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(7, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(entry.rank.to_string()).small().strong().color(egui::Color32::WHITE));
        });
}

fn score_cell(ui: &mut egui::Ui, entry: &LeaderboardEntry) {
    ui.with_layout(Layout::top_down(Align::Max), |ui| {
        ui.label(RichText::new(entry.score.to_string()).size(22.0).strong());
        ui.label(RichText::new("POINTS").small().strong().color(theme::HONEY_DARK));
    });
}
