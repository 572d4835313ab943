//! Spelling correction client
//!
//! Talks to the Datamuse suggestion endpoint, which returns candidates
//! ordered best-first.

use async_trait::async_trait;
use reqwest::Client;

use super::types::SpellCandidate;
use crate::config::Config;
use crate::error::{AppError, Result};

/// Turns raw user text into ordered correction candidates
#[async_trait]
pub trait SpellCorrector: Send + Sync {
    /// First element is the primary correction. Never returns an empty list.
    async fn correct(&self, text: &str) -> Result<Vec<String>>;
}

pub struct DatamuseClient {
    client: Client,
    base_url: String,
    max_candidates: u32,
}

impl DatamuseClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.spell_api_url.trim_end_matches('/').to_string(),
            // primary correction plus the alternates
            max_candidates: config.max_suggestions.saturating_add(1),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/sug", self.base_url)
    }
}

#[async_trait]
impl SpellCorrector for DatamuseClient {
    async fn correct(&self, text: &str) -> Result<Vec<String>> {
        let url = self.endpoint();
        let max = self.max_candidates.to_string();
        tracing::debug!("GET {} s={:?}", url, text);

        let candidates: Vec<SpellCandidate> = self
            .client
            .get(&url)
            .query(&[("s", text), ("max", max.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        words_from(text, candidates)
    }
}

fn words_from(text: &str, candidates: Vec<SpellCandidate>) -> Result<Vec<String>> {
    let words: Vec<String> = candidates
        .into_iter()
        .map(|c| c.word)
        .filter(|w| !w.trim().is_empty())
        .collect();

    if words.is_empty() {
        return Err(AppError::NoCandidates(text.to_string()));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_keep_service_order() {
        let body = r#"[{"word":"cat","score":2000},{"word":"cats","score":900},{"word":"catt","score":10}]"#;
        let candidates: Vec<SpellCandidate> = serde_json::from_str(body).unwrap();
        assert_eq!(words_from("catt", candidates).unwrap(), vec!["cat", "cats", "catt"]);
    }

    #[test]
    fn test_empty_response_is_error() {
        match words_from("qzxv", Vec::new()) {
            Err(AppError::NoCandidates(text)) => assert_eq!(text, "qzxv"),
            other => panic!("Expected NoCandidates, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_trims_slash() {
        let config = Config {
            spell_api_url: "http://localhost:8080/".to_string(),
            max_suggestions: 3,
            ..Config::default()
        };
        let client = DatamuseClient::new(Client::new(), &config);
        assert_eq!(client.endpoint(), "http://localhost:8080/sug");
        assert_eq!(client.max_candidates, 4);
    }

    #[test]
    fn test_huge_suggestion_count_does_not_overflow() {
        let config = Config {
            max_suggestions: u32::MAX,
            ..Config::default()
        };
        let client = DatamuseClient::new(Client::new(), &config);
        assert_eq!(client.max_candidates, u32::MAX);
    }
}
