/// Minimum number of characters a password must exceed.
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// Field reached with Tab from this one.
    pub fn next(self) -> Self {
        match self {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        }
    }
}

/// Events a field reacts to. Both carry the value the input holds when the
/// event happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    Input(String),
    Blur(String),
}

impl FieldAction {
    fn into_value(self) -> String {
        match self {
            FieldAction::Input(value) | FieldAction::Blur(value) => value,
        }
    }
}

/// Value of a form field and its validity.
///
/// `is_valid` is `None` until the field receives its first event. It is only
/// ever computed from `value` by a reducer, never set on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: Option<bool>,
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        self.is_valid == Some(true)
    }
}

pub type Reducer = fn(&FieldState, FieldAction) -> FieldState;

pub fn email_is_valid(value: &str) -> bool {
    value.contains('@')
}

pub fn password_is_valid(value: &str) -> bool {
    value.chars().count() > PASSWORD_MIN_LEN
}

pub fn email_reducer(_previous: &FieldState, action: FieldAction) -> FieldState {
    let value = action.into_value();
    FieldState {
        is_valid: Some(email_is_valid(&value)),
        value,
    }
}

/// Blur does not trim: the raw value is stored and checked.
pub fn password_reducer(_previous: &FieldState, action: FieldAction) -> FieldState {
    let value = action.into_value();
    FieldState {
        is_valid: Some(password_is_valid(&value)),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validity_is_the_same_on_input_and_blur() {
        let initial = FieldState::default();
        for value in ["", "a", "@", "a@b.com", "no-at-sign.com", " @ "] {
            let on_input = email_reducer(&initial, FieldAction::Input(value.to_string()));
            let on_blur = email_reducer(&initial, FieldAction::Blur(value.to_string()));
            assert_eq!(on_input, on_blur);
            assert_eq!(on_input.value, value);
            assert_eq!(on_input.is_valid, Some(value.contains('@')));
        }
    }

    #[test]
    fn password_needs_more_than_six_characters() {
        let initial = FieldState::default();
        let short = password_reducer(&initial, FieldAction::Input("123456".to_string()));
        assert_eq!(short.is_valid, Some(false));
        let long = password_reducer(&initial, FieldAction::Input("1234567".to_string()));
        assert_eq!(long.is_valid, Some(true));
    }

    #[test]
    fn password_blur_keeps_the_raw_value() {
        let initial = FieldState::default();
        let state = password_reducer(&initial, FieldAction::Blur("  1234  ".to_string()));
        assert_eq!(state.value, "  1234  ");
        // 8 characters including the spaces.
        assert_eq!(state.is_valid, Some(true));

        let state = password_reducer(&initial, FieldAction::Input("  1234  ".to_string()));
        assert_eq!(state.is_valid, Some(true));
    }

    #[test]
    fn password_length_counts_characters() {
        let initial = FieldState::default();
        // 6 characters, 12 bytes.
        let state = password_reducer(&initial, FieldAction::Input("éééééé".to_string()));
        assert_eq!(state.is_valid, Some(false));
    }

    #[test]
    fn reducers_ignore_previous_state() {
        let previous = FieldState {
            value: "old@value".to_string(),
            is_valid: Some(true),
        };
        let state = email_reducer(&previous, FieldAction::Input("new".to_string()));
        assert_eq!(state.value, "new");
        assert_eq!(state.is_valid, Some(false));
    }

    #[test]
    fn untouched_field_is_not_valid() {
        assert!(!FieldState::default().is_valid());
        assert_eq!(FieldState::default().is_valid, None);
    }

    #[test]
    fn tab_cycles_between_fields() {
        assert_eq!(Field::Email.next(), Field::Password);
        assert_eq!(Field::Password.next(), Field::Email);
    }
}
