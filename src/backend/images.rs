//! Image search client for the Pixabay API

use async_trait::async_trait;
use reqwest::Client;

use super::types::{ImageHit, ImageSearchResponse};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Source of image records and their pixels
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Search for `word`; an empty word returns the unfiltered collection
    async fn search(&self, word: &str) -> Result<Vec<ImageHit>>;

    /// Fetch raw encoded image bytes
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct PixabayClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    per_page: u32,
    safe_search: bool,
}

impl PixabayClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.image_api_url.clone(),
            api_key: config.pixabay_key.clone(),
            per_page: config.per_page,
            safe_search: config.safe_search,
        }
    }

    fn query_params(&self, key: &str, word: &str) -> Vec<(&'static str, String)> {
        vec![
            ("key", key.to_string()),
            ("q", word.to_string()),
            ("image_type", "photo".to_string()),
            ("per_page", self.per_page.to_string()),
            ("safesearch", self.safe_search.to_string()),
        ]
    }
}

#[async_trait]
impl ImageSource for PixabayClient {
    async fn search(&self, word: &str) -> Result<Vec<ImageHit>> {
        let key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        tracing::debug!("GET {} q={:?}", self.base_url, word);

        let response: ImageSearchResponse = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(key, word))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(
            "Image search {:?}: {} of {} hits",
            word,
            response.total_hits,
            response.total
        );
        Ok(response.into_hits())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
