// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use pgbee_leaderboard::{
    config::consts::{WINDOW_H, WINDOW_W},
    gui, log,
};

fn main() {
    log::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_icon(gui::icon::app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
