use iced::{advanced::widget, Task};
use login_ui::component::form;
use tracing::{debug, info, trace};

use super::{
    field::{
        email_is_valid, email_reducer, password_is_valid, password_reducer, Field, FieldAction,
        Reducer,
    },
    LoginForm, Msg, SubmitPolicy,
};

impl LoginForm {
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        if matches!(message, Msg::ValidityDebounced(_)) {
            trace!("received message");
        } else {
            debug!("received message");
        }
        match message {
            Msg::EmailChanged(value) => self.on_email_changed(value),
            Msg::PasswordChanged(value) => self.on_password_changed(value),
            Msg::Blur(field) => self.on_blur(field),
            Msg::FocusLost => self.on_focus_lost(),
            Msg::Clicked => form::focused_widget().map(Msg::Focused),
            Msg::Focused(id) => self.on_focused(&id),
            Msg::FocusNext => self.on_focus_next(),
            Msg::Submit => self.on_submit(),
            Msg::ValidityDebounced(ticket) => {
                if self.debounce.fire(ticket) {
                    self.form_is_valid = self.email.is_valid() && self.password.is_valid();
                    trace!("debounced form validity: {}", self.form_is_valid);
                } else {
                    debug!("ignoring superseded validity debounce {:?}", ticket);
                }
                Task::none()
            }
        }
    }

    fn on_email_changed(&mut self, value: String) -> Task<Msg> {
        let blur = self.enter(Field::Email);
        let form_is_valid = email_is_valid(&value) && self.password.is_valid();
        let debounce = self.dispatch(Field::Email, FieldAction::Input(value));
        self.form_is_valid = form_is_valid;
        Task::batch([blur, debounce])
    }

    // The immediate check trims while the reducer does not, the debounce
    // settles on the reducer's verdict.
    fn on_password_changed(&mut self, value: String) -> Task<Msg> {
        let blur = self.enter(Field::Password);
        let form_is_valid = self.email.is_valid() && password_is_valid(value.trim());
        let debounce = self.dispatch(Field::Password, FieldAction::Input(value));
        self.form_is_valid = form_is_valid;
        Task::batch([blur, debounce])
    }

    fn on_blur(&mut self, field: Field) -> Task<Msg> {
        if self.focused == Some(field) {
            self.focused = None;
        }
        let value = self.field(field).value.clone();
        self.dispatch(field, FieldAction::Blur(value))
    }

    fn on_focus_lost(&mut self) -> Task<Msg> {
        match self.focused {
            Some(field) => self.on_blur(field),
            None => Task::none(),
        }
    }

    fn on_focused(&mut self, id: &widget::Id) -> Task<Msg> {
        if self.input(Field::Email).is(id) {
            self.enter(Field::Email)
        } else if self.input(Field::Password).is(id) {
            self.enter(Field::Password)
        } else {
            self.on_focus_lost()
        }
    }

    fn on_focus_next(&mut self) -> Task<Msg> {
        let next = self.focused.map(Field::next).unwrap_or(Field::Email);
        self.focus(next)
    }

    fn on_submit(&mut self) -> Task<Msg> {
        match self.policy {
            SubmitPolicy::FocusInvalid => {
                if self.form_is_valid {
                    self.login();
                    Task::none()
                } else if !self.email.is_valid() {
                    debug!("submit refused, email is invalid");
                    self.focus(Field::Email)
                } else {
                    debug!("submit refused, password is invalid");
                    self.focus(Field::Password)
                }
            }
            SubmitPolicy::DisableButton => {
                self.login();
                Task::none()
            }
        }
    }

    fn login(&self) {
        info!("submitting login form");
        self.auth.on_login(&self.email.value, &self.password.value);
    }

    fn field(&self, field: Field) -> &super::FieldState {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Applies a field event, re-arming the debounce if the validity of either
    /// field changed.
    fn dispatch(&mut self, field: Field, action: FieldAction) -> Task<Msg> {
        let before = (self.email.is_valid, self.password.is_valid);
        let reducer: Reducer = match field {
            Field::Email => email_reducer,
            Field::Password => password_reducer,
        };
        let state = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *state = reducer(state, action);
        if before != (self.email.is_valid, self.password.is_valid) {
            self.debounce.arm(Msg::ValidityDebounced)
        } else {
            Task::none()
        }
    }

    /// Records that the user is now in `field`, blurring the field the focus
    /// comes from.
    fn enter(&mut self, field: Field) -> Task<Msg> {
        match self.focused.replace(field) {
            Some(previous) if previous != field => {
                let value = self.field(previous).value.clone();
                self.dispatch(previous, FieldAction::Blur(value))
            }
            _ => Task::none(),
        }
    }

    fn focus(&mut self, field: Field) -> Task<Msg> {
        let blur = self.enter(field);
        Task::batch([blur, self.input(field).focus()])
    }
}
