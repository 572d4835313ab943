//! "Show results of ..." header and the alternate-spelling chips

use iced::font::Weight;
use iced::widget::{button, column, row, text, Row};
use iced::{Element, Font};

use super::theme::{self, DarkTheme};

pub fn view<'a, Message: Clone + 'a>(
    query: &'a str,
    suggestions: &'a [String],
    on_pick: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let header = row![
        text("Show results of").size(16).color(DarkTheme::TEXT_MUTED),
        text(query)
            .size(16)
            .color(DarkTheme::TEXT)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }),
    ]
    .spacing(6);

    let chips = suggestions.iter().fold(Row::new().spacing(8), |chips, word| {
        chips.push(
            button(text(word.as_str()).size(14))
                .padding([4, 12])
                .style(theme::chip)
                .on_press(on_pick(word.clone())),
        )
    });

    column![header, chips].spacing(8).into()
}
