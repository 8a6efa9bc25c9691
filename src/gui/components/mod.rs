// src/gui/components/mod.rs
pub mod banner;
pub mod board_table;
pub mod header;
pub mod titles;
