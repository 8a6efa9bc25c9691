// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod icon;
pub mod theme;

pub use app::run;
