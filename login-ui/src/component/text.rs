use crate::{font, theme, widget::Text};
use iced::{advanced::text::Shaping, Font};
use std::fmt::Display;

pub const TITLE_SIZE: u16 = 24;
pub const BODY_SIZE: u16 = 16;
pub const WARNING_SIZE: u16 = 12;

fn styled<'a>(content: impl Display, font: Font, size: u16) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font)
        .size(size)
}

/// Heading of a card.
pub fn title<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::BOLD, TITLE_SIZE)
}

/// Name of a field, shown above its input.
pub fn label<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::MEDIUM, BODY_SIZE).style(theme::text::muted)
}

pub fn body<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, BODY_SIZE)
}

/// Shown under a field flagged invalid.
pub fn warning<'a>(content: impl Display) -> Text<'a> {
    styled(content, font::REGULAR, WARNING_SIZE).style(theme::text::warning)
}
