// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::refresh.

mod refresh; // src/gui/actions/refresh.rs

pub use refresh::refresh;
