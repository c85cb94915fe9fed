use iced::{
    advanced::widget::{self, operation::focusable},
    Length, Task,
};

use crate::{
    component::text,
    theme,
    widget::{text_input, *},
};

/// Focus capability of an [`Input`].
///
/// The handle owns the widget id the [`Input`] is rendered with, so the
/// state holding the handle can move focus to it without touching the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHandle {
    id: text_input::Id,
}

impl InputHandle {
    pub fn new(id: &'static str) -> Self {
        Self {
            id: text_input::Id::new(id),
        }
    }

    pub fn id(&self) -> text_input::Id {
        self.id.clone()
    }

    /// Produces a [`Task`] that focuses the input rendered with this handle.
    pub fn focus<T: Send + 'static>(&self) -> Task<T> {
        text_input::focus(self.id.clone())
    }

    /// Whether `id` is the widget id of the input rendered with this handle.
    pub fn is(&self, id: &widget::Id) -> bool {
        widget::Id::from(self.id.clone()) == *id
    }
}

/// Produces a [`Task`] yielding the id of the focused widget. Nothing is
/// produced if no widget has the focus.
pub fn focused_widget() -> Task<widget::Id> {
    widget::operate(focusable::find_focused())
}

/// Only an explicit `Some(false)` is displayed as invalid, an untouched field
/// (`None`) keeps the primary style.
pub fn is_flagged_invalid(valid: Option<bool>) -> bool {
    valid == Some(false)
}

pub struct Input<'a, Message> {
    label: &'a str,
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: Option<bool>,
}

impl<'a, Message: 'a> Input<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Input`].
    ///
    /// It expects:
    /// - the handle giving the input its id
    /// - a label displayed above the input, also used as placeholder
    /// - the current value and validity
    /// - a function that produces a message when the [`Input`] changes
    pub fn new<F>(
        handle: &InputHandle,
        label: &'a str,
        value: &'a str,
        valid: Option<bool>,
        on_change: F,
    ) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label,
            input: TextInput::new(label, value)
                .id(handle.id())
                .on_input(on_change),
            warning: None,
            valid,
        }
    }

    /// Hides the typed characters.
    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    /// Sets the message produced when Enter is pressed, if any.
    pub fn on_submit_maybe(mut self, message: Option<Message>) -> Self {
        if let Some(message) = message {
            self.input = self.input.on_submit(message);
        }
        self
    }

    /// Sets the [`Input`] with a warning message shown while it is invalid.
    pub fn maybe_warning(mut self, warning: Option<&'a str>) -> Self {
        self.warning = warning;
        self
    }

    /// Sets the padding of the [`Input`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Input`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Input<'a, Message>> for Element<'a, Message> {
    fn from(input: Input<'a, Message>) -> Element<'a, Message> {
        let invalid = is_flagged_invalid(input.valid);
        Container::new(
            Column::new()
                .push(text::label(input.label))
                .push(if invalid {
                    input.input.style(theme::text_input::invalid)
                } else {
                    input.input
                })
                .push_maybe(if invalid {
                    input.warning.map(text::warning)
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_field_is_not_flagged() {
        assert!(!is_flagged_invalid(None));
        assert!(!is_flagged_invalid(Some(true)));
        assert!(is_flagged_invalid(Some(false)));
    }

    #[test]
    fn handles_compare_by_id() {
        assert_eq!(InputHandle::new("email"), InputHandle::new("email"));
        assert_ne!(InputHandle::new("email"), InputHandle::new("password"));
    }

    #[test]
    fn handle_recognizes_its_widget_id() {
        let email = InputHandle::new("email");
        assert!(email.is(&widget::Id::from(email.id())));
        assert!(email.is(&widget::Id::new("email")));
        assert!(!email.is(&widget::Id::new("password")));
    }
}
