use std::sync::Mutex;

use tracing::info;

/// Receives the credentials of a submitted login form.
///
/// Called synchronously from the form's submit handler. Any `Fn(&str, &str)`
/// closure can be used.
pub trait Authenticator: Send + Sync {
    fn on_login(&self, email: &str, password: &str);
}

impl<F> Authenticator for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn on_login(&self, email: &str, password: &str) {
        self(email, password)
    }
}

/// Keeps the email of the last login in memory, used by the application shell
/// to leave the login screen. Credentials are never checked nor stored.
#[derive(Debug, Default)]
pub struct Session {
    user: Mutex<Option<String>>,
}

impl Session {
    pub fn user(&self) -> Option<String> {
        self.user.lock().ok().and_then(|user| user.clone())
    }

    pub fn logout(&self) {
        if let Ok(mut user) = self.user.lock() {
            if let Some(email) = user.take() {
                info!("{} logged out", email);
            }
        }
    }
}

impl Authenticator for Session {
    fn on_login(&self, email: &str, _password: &str) {
        info!("{} logged in", email);
        if let Ok(mut user) = self.user.lock() {
            *user = Some(email.to_string());
        }
    }
}
