//! Dismissible error banner

use iced::widget::{button, container, row, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::{self, DarkTheme};

pub fn view<'a, Message: Clone + 'a>(message: &'a str, on_dismiss: Message) -> Element<'a, Message> {
    container(
        row![
            text("Error").size(14).color(DarkTheme::TEXT),
            text(message).size(14).color(DarkTheme::TEXT),
            Space::with_width(Length::Fill),
            button(text("Dismiss").size(13))
                .padding([2, 10])
                .style(theme::chip)
                .on_press(on_dismiss),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    )
    .padding(Padding::from([8.0, 12.0]))
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(DarkTheme::ERROR)),
        border: Border::default().rounded(8),
        ..Default::default()
    })
    .into()
}
