use iced::advanced::widget;

use super::debounce::Ticket;
use super::field::Field;

/// Messages handled by the login form.
#[derive(Debug, Clone)]
pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    /// Focus left the field.
    Blur(Field),
    /// Focus left the inputs: a click landed outside of them or the window
    /// lost the focus.
    FocusLost,
    /// A click was captured by a widget, which may have taken the focus.
    Clicked,
    /// Widget holding the focus after a click.
    Focused(widget::Id),
    /// Tab was pressed while the form had the keyboard.
    FocusNext,
    Submit,
    ValidityDebounced(Ticket),
}
