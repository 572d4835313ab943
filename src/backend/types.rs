//! Wire types for the spelling and image services

use serde::{Deserialize, Serialize};

/// One image record from the search service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHit {
    pub id: u64,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "previewURL")]
    pub preview_url: String,
    #[serde(rename = "webformatURL", default)]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: String,
    #[serde(rename = "imageWidth", default)]
    pub image_width: u32,
    #[serde(rename = "imageHeight", default)]
    pub image_height: u32,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub user: String,
}

impl ImageHit {
    /// Best URL for the detail view, falling back to the thumbnail
    pub fn detail_url(&self) -> &str {
        if !self.webformat_url.is_empty() {
            &self.webformat_url
        } else if !self.large_image_url.is_empty() {
            &self.large_image_url
        } else {
            &self.preview_url
        }
    }

    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Image search response body
#[derive(Debug, Deserialize)]
pub struct ImageSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,
    /// Absent on some error-ish bodies; treated as no results
    #[serde(default)]
    pub hits: Option<Vec<ImageHit>>,
}

impl ImageSearchResponse {
    pub fn into_hits(self) -> Vec<ImageHit> {
        self.hits.unwrap_or_default()
    }
}

/// One entry of the spelling suggestion endpoint
#[derive(Debug, Deserialize)]
pub struct SpellCandidate {
    pub word: String,
}

#[cfg(test)]
pub(crate) fn sample_hit(id: u64, tags: &str) -> ImageHit {
    ImageHit {
        id,
        page_url: format!("https://pixabay.com/photos/{}", id),
        tags: tags.to_string(),
        preview_url: format!("https://cdn.pixabay.com/{}_150.jpg", id),
        webformat_url: format!("https://cdn.pixabay.com/{}_640.jpg", id),
        large_image_url: format!("https://cdn.pixabay.com/{}_1280.jpg", id),
        image_width: 1920,
        image_height: 1080,
        views: 10,
        downloads: 5,
        likes: 2,
        user: "someone".to_string(),
    }
}
