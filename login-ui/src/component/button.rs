use super::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(label: &'static str) -> Button<'a, T> {
    Button::new(content(text::body(label).font(MEDIUM))).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(label: &'static str) -> Button<'a, T> {
    Button::new(content(text::body(label))).style(theme::button::secondary)
}

fn content<'a, T: 'a>(label: Text<'a>) -> Container<'a, T> {
    container(label)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
