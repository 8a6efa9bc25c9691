// src/error.rs
use thiserror::Error;

use crate::config::consts::{MSG_CONFIG_MISSING, MSG_LOAD_FAILED};
use crate::core::FetchError;

/// Why a refresh did not replace the board. `Display` is the banner text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}", MSG_CONFIG_MISSING)]
    ConfigMissing,

    #[error("{}", MSG_LOAD_FAILED)]
    LoadFailed(#[source] FetchError),
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        LoadError::LoadFailed(e)
    }
}
