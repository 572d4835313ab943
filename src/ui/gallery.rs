//! Image grid

use std::collections::HashMap;

use iced::widget::{button, column, container, image, scrollable, text, Row};
use iced::{ContentFit, Element, Length};

use super::theme::{self, DarkTheme};
use crate::backend::types::ImageHit;

const TILE_SIZE: f32 = 150.0;

/// Thumbnails laid out `columns` per row. Hits whose thumbnail has not
/// arrived yet render as a placeholder tile.
pub fn view<'a, Message: Clone + 'a>(
    hits: &'a [ImageHit],
    thumbnails: &'a HashMap<u64, image::Handle>,
    columns: usize,
    on_select: impl Fn(ImageHit) -> Message + 'a,
) -> Element<'a, Message> {
    if hits.is_empty() {
        return container(text("No images found").size(14).color(DarkTheme::TEXT_MUTED))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(24)
            .into();
    }

    let rows = hits.chunks(columns.max(1)).map(|chunk| -> Element<'a, Message> {
        chunk
            .iter()
            .fold(Row::new().spacing(8), |row, hit| {
                row.push(tile(hit, thumbnails.get(&hit.id), on_select(hit.clone())))
            })
            .into()
    });

    scrollable(column(rows).spacing(8).padding(4))
        .height(Length::Fill)
        .into()
}

fn tile<'a, Message: Clone + 'a>(
    hit: &'a ImageHit,
    thumbnail: Option<&image::Handle>,
    on_press: Message,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(TILE_SIZE)
            .height(TILE_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(first_tag(hit)).size(12).color(DarkTheme::TEXT_MUTED))
            .center_x(TILE_SIZE)
            .center_y(TILE_SIZE)
            .into(),
    };

    button(content)
        .padding(2)
        .style(theme::tile)
        .on_press(on_press)
        .into()
}

fn first_tag(hit: &ImageHit) -> &str {
    hit.tag_list().first().copied().unwrap_or("…")
}
