use iced::{widget::Space, Alignment, Length};
use login_ui::{
    component::{button, card, form::Input, text},
    theme,
    widget::*,
};

use crate::state::{Field, LoginForm, Msg};

const EMAIL_WARNING: &str = "An email address must contain '@'";
const PASSWORD_WARNING: &str = "A password must be longer than 6 characters";

pub fn login_view(form: &LoginForm) -> Element<'_, Msg> {
    let submit = form.can_submit().then_some(Msg::Submit);

    let email = Input::new(
        form.input(Field::Email),
        "E-mail",
        &form.email().value,
        form.email().is_valid,
        Msg::EmailChanged,
    )
    .on_submit_maybe(submit.clone())
    .maybe_warning(Some(EMAIL_WARNING))
    .size(16)
    .padding(10);

    let password = Input::new(
        form.input(Field::Password),
        "Password",
        &form.password().value,
        form.password().is_valid,
        Msg::PasswordChanged,
    )
    .secure(true)
    .on_submit_maybe(submit.clone())
    .maybe_warning(Some(PASSWORD_WARNING))
    .size(16)
    .padding(10);

    let actions = Row::new()
        .push(Space::with_width(Length::Fill))
        .push(
            button::primary("Login")
                .on_press_maybe(submit)
                .width(Length::Fixed(150.0)),
        )
        .push(Space::with_width(Length::Fill));

    let content = Column::new()
        .push(email)
        .push(password)
        .push(actions)
        .spacing(20)
        .align_x(Alignment::Center);

    centered(card::simple(content).max_width(iced::Pixels(500.0)))
}

pub fn welcome_view<'a, T: 'a + Clone>(email: &'a str, logout: T) -> Element<'a, T> {
    let content = Column::new()
        .push(text::title("Welcome back!"))
        .push(text::body(email).style(theme::text::muted))
        .push(
            button::secondary("Logout")
                .on_press(logout)
                .width(Length::Fixed(150.0)),
        )
        .spacing(20)
        .align_x(Alignment::Center);

    centered(card::simple(content).max_width(iced::Pixels(500.0)))
}

fn centered<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Element<'a, T> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::container::screen)
        .into()
}
