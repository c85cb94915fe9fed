use std::sync::Arc;

use iced::{event, keyboard, mouse, window, Event, Subscription, Task};
use login_ui::widget::Element;
use tracing::{debug, info};

use crate::{
    auth::Session,
    config::Config,
    state::{LoginForm, Msg},
    view,
};

#[derive(Debug, Clone)]
pub enum Message {
    Login(Msg),
    Logout,
}

#[derive(Debug)]
pub enum Screen {
    Login(LoginForm),
    Welcome(String),
}

/// Application shell: shows the login form until the session has a user.
pub struct App {
    screen: Screen,
    session: Arc<Session>,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let session = Arc::new(Session::default());
        let (form, task) = mount(&session, &config);
        (
            Self {
                screen: Screen::Login(form),
                session,
                config,
            },
            task,
        )
    }

    pub fn title(&self) -> String {
        "Login".to_string()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Login(msg) => {
                let Screen::Login(form) = &mut self.screen else {
                    debug!("login form is not mounted, dropping {:?}", msg);
                    return Task::none();
                };
                let task = form.update(msg).map(Message::Login);
                if let Some(email) = self.session.user() {
                    form.teardown();
                    info!("leaving login screen");
                    self.screen = Screen::Welcome(email);
                }
                task
            }
            Message::Logout => {
                self.session.logout();
                let (form, task) = mount(&self.session, &self.config);
                self.screen = Screen::Login(form);
                task
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.screen {
            Screen::Login(_) => event::listen_with(|event, status, _| match (&event, status) {
                (
                    Event::Keyboard(keyboard::Event::KeyPressed {
                        key: keyboard::Key::Named(keyboard::key::Named::Tab),
                        ..
                    }),
                    event::Status::Ignored,
                ) => Some(Message::Login(Msg::FocusNext)),
                (Event::Mouse(mouse::Event::ButtonPressed(_)), event::Status::Ignored)
                | (Event::Window(window::Event::Unfocused), _) => {
                    Some(Message::Login(Msg::FocusLost))
                }
                (Event::Mouse(mouse::Event::ButtonPressed(_)), event::Status::Captured) => {
                    Some(Message::Login(Msg::Clicked))
                }
                _ => None,
            }),
            Screen::Welcome(_) => Subscription::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Login(form) => view::login_view(form).map(Message::Login),
            Screen::Welcome(email) => view::welcome_view(email, Message::Logout),
        }
    }
}

fn mount(session: &Arc<Session>, config: &Config) -> (LoginForm, Task<Message>) {
    debug!("mounting login form");
    let (form, task) = LoginForm::new(
        session.clone(),
        config.submit_policy,
        config.debounce_delay(),
    );
    (form, task.map(Message::Login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SubmitPolicy;

    fn screen_is_login(app: &App) -> bool {
        matches!(app.screen(), Screen::Login(_))
    }

    fn login(app: &mut App, email: &str, password: &str) {
        let _ = app.update(Message::Login(Msg::EmailChanged(email.to_string())));
        let _ = app.update(Message::Login(Msg::PasswordChanged(password.to_string())));
        let _ = app.update(Message::Login(Msg::Submit));
    }

    #[test]
    fn valid_submit_leaves_the_login_screen() {
        let (mut app, _) = App::new(Config::default());
        login(&mut app, "a@b.com", "1234567");
        match app.screen() {
            Screen::Welcome(email) => assert_eq!(email, "a@b.com"),
            Screen::Login(_) => panic!("still on the login screen"),
        }
    }

    #[test]
    fn invalid_submit_stays_on_the_login_screen() {
        let (mut app, _) = App::new(Config::default());
        login(&mut app, "ab.com", "1234567");
        assert!(screen_is_login(&app));
    }

    #[test]
    fn late_tick_after_unmount_is_dropped() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::Login(Msg::EmailChanged("a@b.com".to_string())));
        let _ = app.update(Message::Login(Msg::PasswordChanged("1234567".to_string())));
        let ticket = match app.screen() {
            Screen::Login(form) => form.pending_debounce().unwrap(),
            Screen::Welcome(_) => unreachable!(),
        };
        let _ = app.update(Message::Login(Msg::Submit));
        assert!(!screen_is_login(&app));

        let _ = app.update(Message::Login(Msg::ValidityDebounced(ticket)));
        assert!(!screen_is_login(&app));
    }

    #[test]
    fn logout_mounts_a_fresh_form() {
        let (mut app, _) = App::new(Config::default());
        login(&mut app, "a@b.com", "1234567");
        let _ = app.update(Message::Logout);
        match app.screen() {
            Screen::Login(form) => {
                assert_eq!(form.email().value, "");
                assert_eq!(form.email().is_valid, None);
                assert!(!form.is_valid());
                assert!(form.pending_debounce().is_some());
            }
            Screen::Welcome(_) => panic!("still logged in"),
        }
    }

    #[test]
    fn policy_comes_from_the_config() {
        let config = Config {
            submit_policy: SubmitPolicy::DisableButton,
            ..Default::default()
        };
        let (mut app, _) = App::new(config);
        match app.screen() {
            Screen::Login(form) => assert!(!form.can_submit()),
            Screen::Welcome(_) => unreachable!(),
        }
        // The disabled button is the only gate, a submit always goes through.
        login(&mut app, "ab.com", "1");
        assert!(!screen_is_login(&app));
    }
}
