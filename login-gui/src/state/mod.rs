pub mod debounce;
pub mod field;
pub mod message;
mod update;

use std::{sync::Arc, time::Duration};

use iced::Task;
use login_ui::component::form::InputHandle;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::Authenticator;
pub use debounce::{Debounce, Ticket};
pub use field::{Field, FieldAction, FieldState};
pub use message::Msg;

/// What a submit does when the form is not valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Submitting is always possible. An invalid form is not sent, the first
    /// invalid field gets the focus instead.
    #[default]
    FocusInvalid,
    /// Submitting is disabled while the form is invalid, a submit always sends
    /// the credentials.
    DisableButton,
}

/// Email/password login form.
///
/// Lives from mount ([`LoginForm::new`]) to unmount ([`LoginForm::teardown`]).
pub struct LoginForm {
    email: FieldState,
    password: FieldState,
    form_is_valid: bool,
    focused: Option<Field>,
    policy: SubmitPolicy,
    debounce: Debounce,
    auth: Arc<dyn Authenticator>,
    email_input: InputHandle,
    password_input: InputHandle,
}

impl LoginForm {
    /// Mounts a form. The returned task is the first validity debounce.
    pub fn new(
        auth: Arc<dyn Authenticator>,
        policy: SubmitPolicy,
        debounce_delay: Duration,
    ) -> (Self, Task<Msg>) {
        let mut form = Self {
            email: FieldState::default(),
            password: FieldState::default(),
            form_is_valid: false,
            focused: None,
            policy,
            debounce: Debounce::new(debounce_delay),
            auth,
            email_input: InputHandle::new("email"),
            password_input: InputHandle::new("password"),
        };
        let task = form.debounce.arm(Msg::ValidityDebounced);
        (form, task)
    }

    pub fn email(&self) -> &FieldState {
        &self.email
    }

    pub fn password(&self) -> &FieldState {
        &self.password
    }

    /// Aggregate validity of the form.
    pub fn is_valid(&self) -> bool {
        self.form_is_valid
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn input(&self, field: Field) -> &InputHandle {
        match field {
            Field::Email => &self.email_input,
            Field::Password => &self.password_input,
        }
    }

    pub fn pending_debounce(&self) -> Option<Ticket> {
        self.debounce.pending()
    }

    /// Whether the submit button and Enter are enabled.
    pub fn can_submit(&self) -> bool {
        match self.policy {
            SubmitPolicy::FocusInvalid => true,
            SubmitPolicy::DisableButton => self.form_is_valid,
        }
    }

    /// Unmounts the form: a pending debounce is aborted and will not update
    /// the form anymore.
    pub fn teardown(&mut self) {
        if self.debounce.cancel() {
            debug!("login form unmounted with a pending validity debounce");
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password_is_valid", &self.password.is_valid)
            .field("form_is_valid", &self.form_is_valid)
            .field("focused", &self.focused)
            .field("policy", &self.policy)
            .field("debounce", &self.debounce)
            .finish()
    }
}
