// src/gui/icon.rs
//
// Window icon: a single honeycomb cell, rasterized at startup so no
// binary asset ships with the crate.

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

use super::theme::HONEYCOMB;

const SIZE: u32 = 64;

pub fn app_icon() -> IconData {
    let rgba = honeycomb(SIZE);
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

/// Pointy-top hexagon filling a `size`×`size` square.
pub fn honeycomb(size: u32) -> RgbaImage {
    let c = size as f32 / 2.0;
    let r = c - 1.0;
    let half_w = r * 3f32.sqrt() / 2.0;
    let [red, green, blue] = HONEYCOMB;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = (x as f32 + 0.5 - c).abs();
        let dy = (y as f32 + 0.5 - c).abs();
        let inside = dx <= half_w && dy <= r - dx / 3f32.sqrt();
        if inside { Rgba([red, green, blue, 255]) } else { Rgba([0, 0, 0, 0]) }
    })
}
