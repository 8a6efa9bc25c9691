// src/gui/theme.rs
use eframe::egui::Color32;

pub const HONEY: Color32 = Color32::from_rgb(0xFA, 0xCC, 0x15);
pub const HONEY_DARK: Color32 = Color32::from_rgb(0xCA, 0x8A, 0x04);
pub const HONEYCOMB: [u8; 3] = [0xFD, 0xE0, 0x47];

pub const ERROR_BG: Color32 = Color32::from_rgb(0xFE, 0xF2, 0xF2);
pub const ERROR_BORDER: Color32 = Color32::from_rgb(0xFE, 0xE2, 0xE2);
pub const ERROR_FG: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);
