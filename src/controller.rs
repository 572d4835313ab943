//! Search screen state machine
//!
//! Owns everything the screen shows and decides which requests to issue.
//! It performs no I/O itself: operations return request descriptions
//! (`CorrectionRequest`, `FetchRequest`) and the caller feeds the responses
//! back in. Every request carries a `Ticket`; only the response holding the
//! most recently issued ticket may change state.

use crate::backend::types::ImageHit;
use crate::error::AppError;

// ============================================================================
// Requests & Outcomes
// ============================================================================

/// Generation number of an outstanding request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRequest {
    pub ticket: Ticket,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub word: String,
}

/// Result of feeding an image response back in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Failed,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Suggesting,
    Error,
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Default)]
pub struct SearchController {
    raw_input: String,
    corrected_query: String,
    suggestions: Vec<String>,
    loading: bool,
    images: Vec<ImageHit>,
    selected: Option<ImageHit>,
    modal_visible: bool,
    notice: Option<String>,
    latest: u64,
    mounted: bool,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn corrected_query(&self) -> &str {
        &self.corrected_query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn images(&self) -> &[ImageHit] {
        &self.images
    }

    pub fn selected(&self) -> Option<&ImageHit> {
        self.selected.as_ref()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.notice.is_some() {
            Phase::Error
        } else if !self.suggestions.is_empty() {
            Phase::Suggesting
        } else {
            Phase::Idle
        }
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Initial unfiltered fetch. Only the first call issues a request.
    pub fn mount(&mut self) -> Option<FetchRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        tracing::info!("Search screen mounted, loading default images");
        Some(self.fetch_images(""))
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.raw_input = text.into();
    }

    /// Submit the current raw input to the spell checker. Empty text is
    /// sent as-is; an empty answer surfaces through `correction_finished`.
    pub fn submit(&mut self) -> CorrectionRequest {
        self.loading = true;
        let ticket = self.next_ticket();
        tracing::info!("Checking spelling of {:?}", self.raw_input);
        CorrectionRequest {
            ticket,
            text: self.raw_input.clone(),
        }
    }

    /// Apply a spell checker response. Returns the image query to run next.
    pub fn correction_finished(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<String>, AppError>,
    ) -> Option<FetchRequest> {
        if !self.is_current(ticket) {
            tracing::debug!("Dropping stale correction {:?}", ticket);
            return None;
        }

        let candidates = match result {
            Ok(candidates) => candidates,
            Err(err) => {
                self.fail(&err);
                return None;
            }
        };

        let Some((best, rest)) = candidates.split_first() else {
            self.fail(&AppError::NoCandidates(self.raw_input.clone()));
            return None;
        };

        self.corrected_query = best.clone();
        self.suggestions = rest.to_vec();
        tracing::info!(
            "Corrected {:?} -> {:?} ({} alternates)",
            self.raw_input,
            self.corrected_query,
            self.suggestions.len()
        );

        let word = self.corrected_query.clone();
        Some(self.fetch_images(&word))
    }

    /// Start an image query for `word`
    pub fn fetch_images(&mut self, word: &str) -> FetchRequest {
        self.loading = true;
        FetchRequest {
            ticket: self.next_ticket(),
            word: word.to_string(),
        }
    }

    /// Apply an image query response
    pub fn images_finished(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<ImageHit>, AppError>,
    ) -> Outcome {
        if !self.is_current(ticket) {
            tracing::debug!("Dropping stale image response {:?}", ticket);
            return Outcome::Stale;
        }

        match result {
            Ok(images) => {
                tracing::info!("Showing {} images", images.len());
                self.images = images;
                self.loading = false;
                self.notice = None;
                Outcome::Applied
            }
            Err(err) => {
                self.fail(&err);
                Outcome::Failed
            }
        }
    }

    /// A suggestion chip was clicked. The chip's word always wins over the
    /// text in the search box; the correction header stays as it was.
    pub fn pick_suggestion(&mut self, word: &str) -> FetchRequest {
        tracing::info!(
            "Suggestion {:?} picked (search box holds {:?})",
            word,
            self.raw_input
        );
        self.fetch_images(word)
    }

    pub fn select_image(&mut self, item: ImageHit) {
        self.selected = Some(item);
        self.modal_visible = true;
    }

    /// Hide the modal. The selected item stays until the next selection.
    pub fn close_modal(&mut self) {
        self.modal_visible = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn next_ticket(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    #[cfg(test)]
    pub(crate) fn latest_ticket(&self) -> Ticket {
        Ticket(self.latest)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    fn fail(&mut self, err: &AppError) {
        tracing::warn!("Search request failed: {}", err);
        self.loading = false;
        self.notice = Some(err.user_message().to_string());
    }
}
