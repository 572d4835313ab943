//! In-memory service doubles for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::images::ImageSource;
use super::spell::SpellCorrector;
use super::types::ImageHit;
use crate::error::{AppError, Result};

/// Spell checker answering from a fixed table. Unknown text is an HTTP error.
#[derive(Default)]
pub struct MemorySpeller {
    answers: HashMap<String, Result<Vec<String>>>,
}

impl MemorySpeller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, candidates: &[&str]) -> Self {
        let words = candidates.iter().map(|w| w.to_string()).collect();
        self.answers.insert(text.to_string(), Ok(words));
        self
    }
}

#[async_trait]
impl SpellCorrector for MemorySpeller {
    async fn correct(&self, text: &str) -> Result<Vec<String>> {
        self.answers
            .get(text)
            .cloned()
            .unwrap_or_else(|| Err(AppError::Http(format!("no answer for {:?}", text))))
    }
}

/// Image source answering from a fixed table, recording every query
#[derive(Default)]
pub struct MemoryImages {
    answers: HashMap<String, Result<Vec<ImageHit>>>,
    searched: Mutex<Vec<String>>,
}

impl MemoryImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(mut self, word: &str, hits: Vec<ImageHit>) -> Self {
        self.answers.insert(word.to_string(), Ok(hits));
        self
    }

    pub fn with_error(mut self, word: &str, err: AppError) -> Self {
        self.answers.insert(word.to_string(), Err(err));
        self
    }

    pub fn searched(&self) -> Vec<String> {
        self.searched.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ImageSource for MemoryImages {
    async fn search(&self, word: &str) -> Result<Vec<ImageHit>> {
        if let Ok(mut searched) = self.searched.lock() {
            searched.push(word.to_string());
        }
        self.answers
            .get(word)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        Ok(url.as_bytes().to_vec())
    }
}
