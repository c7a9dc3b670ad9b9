// Text input component.

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSize {
    Small,
    Medium,
    Large,
}

pub struct InputBuilder {
    placeholder: String,
    value: String,
    size: InputSize,
    label: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    left_icon: Option<IconName>,
    on_change: Option<Box<dyn Fn(String)>>,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self {
            placeholder: String::new(),
            value: String::new(),
            size: InputSize::Medium,
            label: None,
            error_message: None,
            disabled: false,
            left_icon: None,
            on_change: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Puts the input into its error state and renders the message below.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (height, padding_x, font_size, icon_size) = match self.size {
            InputSize::Small => (32, SPACING_8, FONT_SIZE_14, IconSize::Small),
            InputSize::Medium => (40, SPACING_12, FONT_SIZE_16, IconSize::Medium),
            InputSize::Large => (48, SPACING_16, FONT_SIZE_18, IconSize::Large),
        };

        let (focused, focused_signal) = Mutable::new_and_signal(false);
        let has_error = self.error_message.is_some();
        let disabled = self.disabled;

        let border_signal = map_ref! {
            let focused = focused_signal,
            let neutral = neutral_5(),
            let focus = primary_7(),
            let error = error_7() =>
            if has_error {
                Border::new().width(BORDER_WIDTH_2).color(*error)
            } else if *focused {
                Border::new().width(BORDER_WIDTH_2).color(*focus)
            } else {
                Border::new().width(BORDER_WIDTH_1).color(*neutral)
            }
        };

        let on_change = self.on_change;
        let mut field = Row::new()
            .s(Width::fill())
            .s(Height::exact(height))
            .s(Padding::new().x(padding_x))
            .s(Gap::new().x(SPACING_8))
            .s(Align::new().center_y())
            .s(RoundedCorners::all(CORNER_RADIUS_2))
            .s(Background::new().color_signal(if disabled {
                neutral_3().boxed_local()
            } else {
                neutral_1().boxed_local()
            }))
            .s(Borders::all_signal(border_signal))
            .s(transition_colors());
        if let Some(name) = self.left_icon {
            field = field.item(
                IconBuilder::new(name)
                    .size(icon_size)
                    .color(IconColor::Muted)
                    .build(),
            );
        }
        let field = field.item(
                TextInput::new()
                    .s(Width::fill())
                    .s(font_sans())
                    .s(Font::new().size(font_size).color_signal(neutral_11()))
                    .s(Background::new().color("transparent"))
                    .s(Borders::new())
                    .placeholder(
                        Placeholder::new(&self.placeholder)
                            .s(Font::new().color_signal(neutral_7())),
                    )
                    .text(&self.value)
                    .read_only(disabled)
                    .label_hidden(self.label.clone().unwrap_or_else(|| "Input".into()))
                    .on_focused_change(move |is_focused| focused.set_neq(is_focused))
                    .on_change(move |new_value| {
                        if let Some(handler) = &on_change {
                            handler(new_value);
                        }
                    }),
            );

        let mut column = Column::new().s(Width::fill()).s(Gap::new().y(SPACING_6));
        if let Some(label) = self.label {
            column = column.item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .weight(FontWeight::Number(FONT_WEIGHT_5))
                        .color_signal(neutral_10()))
                    .child(Text::new(label)),
            );
        }
        column = column.item(field);
        if let Some(message) = self.error_message {
            column = column.item(
                El::new()
                    .s(Font::new().size(FONT_SIZE_12).color_signal(error_7()))
                    .child(Text::new(message)),
            );
        }
        column
    }
}

pub fn input() -> InputBuilder {
    InputBuilder::new()
}
