//! Detail overlay for the selected image
//!
//! Layered over the screen with `stack`; clicking the backdrop closes it,
//! clicks inside the card are swallowed by `opaque`.

use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, stack, text, Space};
use iced::{Background, Border, ContentFit, Element, Length};

use super::theme::{self, DarkTheme};
use crate::backend::types::ImageHit;

const PREVIEW_HEIGHT: f32 = 360.0;

/// State of the large image shown in the card
#[derive(Debug, Clone, Copy)]
pub enum Picture<'a> {
    Loading,
    Ready(&'a image::Handle),
    Unavailable,
}

/// Wrap `base` with the modal when `visible`
pub fn view<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    visible: bool,
    item: Option<&'a ImageHit>,
    picture: Picture<'_>,
    on_close: Message,
) -> Element<'a, Message> {
    let Some(item) = item.filter(|_| visible) else {
        return base;
    };

    let card = container(details(item, picture, on_close.clone()))
        .padding(16)
        .max_width(720.0)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        });

    stack![
        base,
        opaque(
            mouse_area(center(opaque(card)).style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKDROP)),
                ..Default::default()
            }))
            .on_press(on_close)
        )
    ]
    .into()
}

fn details<'a, Message: Clone + 'a>(
    item: &'a ImageHit,
    picture: Picture<'_>,
    on_close: Message,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match picture {
        Picture::Ready(handle) => image(handle.clone())
            .height(PREVIEW_HEIGHT)
            .width(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        Picture::Loading => placeholder("Loading image..."),
        Picture::Unavailable => placeholder("Preview unavailable"),
    };

    let tags = item.tag_list().join(" · ");

    column![
        row![
            text(format!("by {}", item.user)).size(14).color(DarkTheme::TEXT_MUTED),
            Space::with_width(Length::Fill),
            button(text("Close").size(14))
                .padding([4, 12])
                .style(theme::chip)
                .on_press(on_close),
        ]
        .align_y(iced::Alignment::Center),
        picture,
        text(tags).size(15).color(DarkTheme::TEXT),
        text(format!(
            "{} x {}  ·  {} likes  ·  {} downloads  ·  {} views",
            item.image_width, item.image_height, item.likes, item.downloads, item.views
        ))
        .size(12)
        .color(DarkTheme::TEXT_MUTED),
        text(&item.page_url).size(12).color(DarkTheme::PRIMARY),
    ]
    .spacing(12)
    .into()
}

fn placeholder<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).color(DarkTheme::TEXT_MUTED))
        .center_x(Length::Fill)
        .center_y(PREVIEW_HEIGHT)
        .into()
}
