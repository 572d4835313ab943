//! Search bar widget

use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::{self, DarkTheme};

/// Text field plus a search button. Both stop emitting while `loading`.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    loading: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let mut input = text_input("Search images...", value)
        .on_input(on_input)
        .padding(Padding::new(14.0))
        .size(18)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    let mut submit = button(text("Search").size(15))
        .padding(Padding::from([8.0, 16.0]))
        .style(theme::chip);

    if !loading {
        input = input.on_submit(on_submit.clone());
        submit = submit.on_press(on_submit);
    }

    container(
        row![input, submit]
            .spacing(8)
            .align_y(iced::Alignment::Center),
    )
    .padding(Padding::from([4.0, 12.0]))
    .width(Length::Fill)
    .style(theme::surface)
    .into()
}
