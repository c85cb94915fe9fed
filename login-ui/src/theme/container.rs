use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::{Background, Border};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

/// Fills the whole window behind the cards.
pub fn screen(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.background)),
        ..Default::default()
    }
}

pub fn card(theme: &Theme) -> Style {
    let palette = &theme.colors.card;
    Style {
        background: Some(Background::Color(palette.background)),
        border: Border {
            radius: 25.0.into(),
            width: 1.0,
            color: palette.border,
        },
        ..Default::default()
    }
}
