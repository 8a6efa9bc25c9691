// src/core/net.rs
//
// Plain HTTP GET of a text body. `Fetch` is the seam the board talks to,
// so tests and the CLI can swap in their own source.

use std::time::Duration;

use thiserror::Error;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: status {0}")]
    Status(u16),
}

pub trait Fetch: Send + Sync {
    /// GET `url` and return the body text. Any non-2xx is an error.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        logd!("Net: GET {}", url);
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.text()?;
        logd!("Net: {} bytes, status {}", body.len(), status.as_u16());
        Ok(body)
    }
}
