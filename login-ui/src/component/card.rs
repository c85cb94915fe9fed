use crate::{theme, widget::*};

/// Rounded panel holding a whole screen's content.
pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content)
        .padding(25)
        .style(theme::container::card)
}
