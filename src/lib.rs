// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod board;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod entry;
pub mod error;
pub mod gui;

pub use board::{Board, BoardState};
pub use entry::LeaderboardEntry;
pub use error::LoadError;
