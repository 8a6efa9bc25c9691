// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// First frame has fired the automatic refresh
    pub activated: bool,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
