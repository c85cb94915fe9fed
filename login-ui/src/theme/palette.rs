use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub card: CardPalette,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub muted: iced::Color,
    pub warning: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CardPalette {
    pub background: iced::Color,
    pub border: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
            },
            text: Text {
                primary: color::WHITE,
                muted: color::GREY_2,
                warning: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::BLACK,
                        border: color::GREEN.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_GREEN,
                        text: color::WHITE,
                        border: color::GREEN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREEN,
                        text: color::BLACK,
                        border: color::GREEN.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_5,
                        text: color::GREY_3,
                        border: color::GREY_5.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::BLACK,
                        text: color::GREY_2,
                        border: color::GREY_3.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::BLACK,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::BLACK,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    }),
                    disabled: None,
                },
            },
            card: CardPalette {
                background: color::BLACK,
                border: color::GREY_5,
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::BLACK,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_GREEN,
                        border: color::GREY_3.into(),
                    },
                    focused: TextInputPalette {
                        background: color::BLACK,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_GREEN,
                        border: color::GREEN.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_GREEN,
                        border: None,
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_RED,
                        icon: color::RED,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_GREEN,
                        border: color::RED.into(),
                    },
                    focused: TextInputPalette {
                        background: color::LIGHT_RED,
                        icon: color::RED,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_GREEN,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_GREEN,
                        border: color::RED.into(),
                    },
                },
            },
        }
    }
}
