//! Core application state and Iced Application implementation
//!
//! The search state lives in `SearchController`; this module turns its
//! request descriptions into `Task`s, feeds responses back as messages and
//! keeps the decoded thumbnails the grid and modal display.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use iced::keyboard::{self, Key};
use iced::widget::{column, container, image, text};
use iced::{Element, Event, Length, Subscription, Task, Theme};

use crate::backend::images::ImageSource;
use crate::backend::spell::SpellCorrector;
use crate::backend::types::ImageHit;
use crate::controller::{
    CorrectionRequest, FetchRequest, Outcome, Phase, SearchController, Ticket,
};
use crate::error::AppError;
use crate::ui::theme::{self, DarkTheme};
use crate::ui::modal::Picture;
use crate::ui::{gallery, modal, notice, search_bar, suggestions};

// ============================================================================
// Application State
// ============================================================================

pub struct PicSearch {
    controller: SearchController,
    speller: Arc<dyn SpellCorrector>,
    source: Arc<dyn ImageSource>,
    thumbnails: HashMap<u64, image::Handle>,
    /// Detail image for the selected hit, keyed by hit id
    preview: Option<(u64, Preview)>,
    grid_columns: usize,
}

enum Preview {
    Ready(image::Handle),
    Unavailable,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    CorrectionFinished(Ticket, Result<Vec<String>, AppError>),
    ImagesFinished(Ticket, Result<Vec<ImageHit>, AppError>),
    SuggestionPicked(String),
    ImageSelected(ImageHit),
    ThumbnailLoaded(u64, Result<Vec<u8>, AppError>),
    PreviewLoaded(u64, Result<Vec<u8>, AppError>),
    CloseModal,
    DismissNotice,
    IcedEvent(Event),
}

impl PicSearch {
    /// Build the screen and kick off the initial unfiltered fetch
    pub fn new(
        speller: Arc<dyn SpellCorrector>,
        source: Arc<dyn ImageSource>,
        grid_columns: usize,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            controller: SearchController::new(),
            speller,
            source,
            thumbnails: HashMap::new(),
            preview: None,
            grid_columns,
        };

        let task = match app.controller.mount() {
            Some(request) => app.run_fetch(request),
            None => Task::none(),
        };
        (app, task)
    }

    pub fn title(&self) -> String {
        match self.controller.corrected_query() {
            "" => String::from("PicSearch"),
            query => format!("PicSearch - {}", query),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(text) => {
                self.controller.set_input(text);
                Task::none()
            }

            Message::Submit => {
                let request = self.controller.submit();
                self.run_correction(request)
            }

            Message::CorrectionFinished(ticket, result) => {
                match self.controller.correction_finished(ticket, result) {
                    Some(request) => self.run_fetch(request),
                    None => Task::none(),
                }
            }

            Message::ImagesFinished(ticket, result) => {
                match self.controller.images_finished(ticket, result) {
                    Outcome::Applied => self.load_thumbnails(),
                    Outcome::Failed | Outcome::Stale => Task::none(),
                }
            }

            Message::SuggestionPicked(word) => {
                let request = self.controller.pick_suggestion(&word);
                self.run_fetch(request)
            }

            Message::ImageSelected(hit) => {
                let id = hit.id;
                let url = hit.detail_url().to_string();
                self.controller.select_image(hit);

                if matches!(self.preview, Some((cached, Preview::Ready(_))) if cached == id) {
                    return Task::none();
                }
                self.preview = None;

                let source = self.source.clone();
                Task::perform(
                    async move { source.download(&url).await },
                    move |result| Message::PreviewLoaded(id, result),
                )
            }

            Message::ThumbnailLoaded(id, result) => {
                match result {
                    Ok(bytes) if self.is_displayed(id) => {
                        self.thumbnails.insert(id, image::Handle::from_bytes(bytes));
                    }
                    Ok(_) => tracing::debug!("Dropping thumbnail {} from an older result set", id),
                    Err(e) => tracing::warn!("Thumbnail {} failed: {}", id, e),
                }
                Task::none()
            }

            Message::PreviewLoaded(id, result) => {
                let selected = self.controller.selected().map(|hit| hit.id);
                if selected != Some(id) {
                    tracing::debug!("Dropping preview {} for a previous selection", id);
                    return Task::none();
                }

                let preview = match result {
                    Ok(bytes) => Preview::Ready(image::Handle::from_bytes(bytes)),
                    Err(e) => {
                        tracing::warn!("Preview {} failed: {}", id, e);
                        // fall back to the grid thumbnail when we have one
                        match self.thumbnails.get(&id) {
                            Some(handle) => Preview::Ready(handle.clone()),
                            None => Preview::Unavailable,
                        }
                    }
                };
                self.preview = Some((id, preview));
                Task::none()
            }

            Message::CloseModal => {
                self.controller.close_modal();
                Task::none()
            }

            Message::DismissNotice => {
                self.controller.dismiss_notice();
                Task::none()
            }

            Message::IcedEvent(event) => {
                if let Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(keyboard::key::Named::Escape),
                    ..
                }) = event
                {
                    if self.controller.modal_visible() {
                        return self.update(Message::CloseModal);
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controller = &self.controller;

        let header = container(text("PicSearch").size(26).color(DarkTheme::PRIMARY))
            .width(Length::Fill)
            .center_x(Length::Fill);

        let mut content = column![
            header,
            search_bar::view(
                controller.raw_input(),
                controller.is_loading(),
                Message::InputChanged,
                Message::Submit,
            ),
        ]
        .spacing(12);

        if let Some(message) = controller.notice() {
            content = content.push(notice::view(message, Message::DismissNotice));
        }

        if !controller.suggestions().is_empty() {
            content = content.push(suggestions::view(
                controller.corrected_query(),
                controller.suggestions(),
                Message::SuggestionPicked,
            ));
        }

        // Previous results stay on screen in the Error phase
        let body: Element<'_, Message> = match controller.phase() {
            Phase::Loading => {
                container(text("Loading images...").size(16).color(DarkTheme::TEXT_MUTED))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .into()
            }
            Phase::Idle | Phase::Suggesting | Phase::Error => gallery::view(
                controller.images(),
                &self.thumbnails,
                self.grid_columns,
                Message::ImageSelected,
            ),
        };

        let screen = container(content.push(body).padding(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::window);

        let picture = match &self.preview {
            Some((id, preview)) if controller.selected().map(|hit| hit.id) == Some(*id) => {
                match preview {
                    Preview::Ready(handle) => Picture::Ready(handle),
                    Preview::Unavailable => Picture::Unavailable,
                }
            }
            _ => Picture::Loading,
        };

        modal::view(
            screen.into(),
            controller.modal_visible(),
            controller.selected(),
            picture,
            Message::CloseModal,
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen().map(Message::IcedEvent)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Requests
    // ========================================================================

    fn run_correction(&self, request: CorrectionRequest) -> Task<Message> {
        let speller = self.speller.clone();
        let CorrectionRequest { ticket, text } = request;
        Task::perform(
            async move { speller.correct(&text).await },
            move |result| Message::CorrectionFinished(ticket, result),
        )
    }

    fn run_fetch(&self, request: FetchRequest) -> Task<Message> {
        let source = self.source.clone();
        let FetchRequest { ticket, word } = request;
        tracing::info!("Fetching images for {:?}", word);
        Task::perform(
            async move { source.search(&word).await },
            move |result| Message::ImagesFinished(ticket, result),
        )
    }

    /// Download thumbnails for the current result set, dropping the rest
    fn load_thumbnails(&mut self) -> Task<Message> {
        let current: HashSet<u64> = self.controller.images().iter().map(|hit| hit.id).collect();
        self.thumbnails.retain(|id, _| current.contains(id));

        let missing: Vec<(u64, String)> = self
            .controller
            .images()
            .iter()
            .filter(|hit| !self.thumbnails.contains_key(&hit.id))
            .map(|hit| (hit.id, hit.preview_url.clone()))
            .collect();

        Task::batch(missing.into_iter().map(|(id, url)| {
            let source = self.source.clone();
            Task::perform(
                async move { source.download(&url).await },
                move |result| Message::ThumbnailLoaded(id, result),
            )
        }))
    }

    fn is_displayed(&self, id: u64) -> bool {
        self.controller.images().iter().any(|hit| hit.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::{MemoryImages, MemorySpeller};
    use crate::backend::types::sample_hit;

    fn app() -> PicSearch {
        let speller = Arc::new(MemorySpeller::new().with("catt", &["cat", "cats"]));
        let source = Arc::new(MemoryImages::new());
        let (app, _task) = PicSearch::new(speller, source, 4);
        app
    }

    #[test]
    fn test_new_starts_loading() {
        let app = app();
        assert!(app.controller.is_loading());
        assert_eq!(app.title(), "PicSearch");
    }

    #[test]
    fn test_thumbnail_for_unknown_hit_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::ThumbnailLoaded(42, Ok(vec![1, 2, 3])));
        assert!(app.thumbnails.is_empty());
    }

    #[test]
    fn test_close_modal_keeps_selection() {
        let mut app = app();
        let _ = app.update(Message::ImageSelected(sample_hit(5, "tree")));
        assert!(app.controller.modal_visible());

        let _ = app.update(Message::CloseModal);
        assert!(!app.controller.modal_visible());
        assert_eq!(app.controller.selected().map(|hit| hit.id), Some(5));
    }

    #[test]
    fn test_preview_for_previous_selection_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::ImageSelected(sample_hit(1, "a")));
        let _ = app.update(Message::ImageSelected(sample_hit(2, "b")));

        let _ = app.update(Message::PreviewLoaded(1, Ok(vec![0])));
        assert!(app.preview.is_none());
    }

    #[test]
    fn test_failed_preview_falls_back_to_thumbnail() {
        let mut app = app();
        let ticket = app.controller.latest_ticket();
        let _ = app.update(Message::ImagesFinished(ticket, Ok(vec![sample_hit(3, "sea")])));
        let _ = app.update(Message::ThumbnailLoaded(3, Ok(vec![1, 2])));

        let _ = app.update(Message::ImageSelected(sample_hit(3, "sea")));
        let _ = app.update(Message::PreviewLoaded(3, Err(AppError::Status(404))));

        assert!(matches!(app.preview, Some((3, Preview::Ready(_)))));
    }

    #[test]
    fn test_failed_preview_without_thumbnail_is_unavailable() {
        let mut app = app();
        let _ = app.update(Message::ImageSelected(sample_hit(4, "sky")));
        let _ = app.update(Message::PreviewLoaded(4, Err(AppError::Http("reset".into()))));

        assert!(matches!(app.preview, Some((4, Preview::Unavailable))));
    }

    #[test]
    fn test_failed_correction_sets_error_phase() {
        let mut app = app();
        let _ = app.update(Message::InputChanged("catt".to_string()));
        let _ = app.update(Message::Submit);
        assert_eq!(app.controller.phase(), Phase::Loading);

        let ticket = app.controller.latest_ticket();
        let _ = app.update(Message::CorrectionFinished(
            ticket,
            Err(AppError::Http("offline".into())),
        ));

        assert_eq!(app.controller.phase(), Phase::Error);
        assert!(!app.controller.is_loading());
    }

    #[test]
    fn test_accepted_images_update_title_and_grid() {
        let mut app = app();
        let _ = app.update(Message::InputChanged("catt".to_string()));
        let _ = app.update(Message::Submit);

        let ticket = app.controller.latest_ticket();
        let _ = app.update(Message::CorrectionFinished(
            ticket,
            Ok(vec!["cat".into(), "cats".into()]),
        ));
        assert_eq!(app.controller.suggestions(), ["cats"]);

        let ticket = app.controller.latest_ticket();
        let _ = app.update(Message::ImagesFinished(ticket, Ok(vec![sample_hit(8, "cat")])));
        let _ = app.update(Message::ThumbnailLoaded(8, Ok(vec![0, 1])));

        assert_eq!(app.title(), "PicSearch - cat");
        assert!(app.thumbnails.contains_key(&8));
        assert_eq!(app.controller.phase(), Phase::Suggesting);
    }
}
