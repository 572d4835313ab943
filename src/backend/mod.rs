//! Remote services: spelling correction and image search

pub mod images;
pub mod spell;
pub mod types;

use reqwest::Client;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Shared HTTP client with the configured timeout
pub fn http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(config.request_timeout())
        .user_agent(concat!("picsearch/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Http(e.to_string()))
}

#[cfg(test)]
pub(crate) mod memory;
