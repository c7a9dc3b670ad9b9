// Button component.

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;
use zoon::futures_signals::signal::always;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

pub struct ButtonBuilder {
    label: Option<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
    fill_width: bool,
    on_press: Option<Box<dyn Fn()>>,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            left_icon: None,
            right_icon: None,
            fill_width: false,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: IconName) -> Self {
        self.right_icon = Some(icon);
        self
    }

    /// Stretch to the parent's width, for hero and form actions.
    pub fn fill_width(mut self) -> Self {
        self.fill_width = true;
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        let (focused, focused_signal) = Mutable::new_and_signal(false);

        let (padding_x, padding_y, font_size, icon_size) = match self.size {
            ButtonSize::Small => (SPACING_12, SPACING_6, FONT_SIZE_14, IconSize::Small),
            ButtonSize::Medium => (SPACING_16, SPACING_8, FONT_SIZE_16, IconSize::Medium),
            ButtonSize::Large => (SPACING_20, SPACING_12, FONT_SIZE_18, IconSize::Large),
        };

        // Icon-only buttons get square padding.
        let icon_only = self.label.is_none();
        let padding_x = if icon_only { padding_y } else { padding_x };

        let variant = self.variant;
        let disabled = self.disabled;

        let bg_signal = match variant {
            ButtonVariant::Primary => primary_7().boxed_local(),
            ButtonVariant::Secondary => neutral_4().boxed_local(),
            _ => always(transparent()).boxed_local(),
        };
        let hover_bg_signal = match variant {
            ButtonVariant::Primary => primary_8().boxed_local(),
            ButtonVariant::Secondary => neutral_5().boxed_local(),
            ButtonVariant::Outline | ButtonVariant::Ghost => primary_2().boxed_local(),
            ButtonVariant::Link => always(transparent()).boxed_local(),
        };
        let text_signal = match variant {
            ButtonVariant::Primary => neutral_1().boxed_local(),
            ButtonVariant::Secondary => neutral_11().boxed_local(),
            _ => primary_7().boxed_local(),
        };
        let border_signal = match variant {
            ButtonVariant::Outline => neutral_6().boxed_local(),
            ButtonVariant::Secondary => neutral_5().boxed_local(),
            _ => always(transparent()).boxed_local(),
        };

        let content = button_content(self.label, self.left_icon, self.right_icon, icon_size);
        let on_press = self.on_press;

        let mut button = Button::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all(CORNER_RADIUS_4))
            .s(font_sans())
            .s(Font::new()
                .size(font_size)
                .weight(FontWeight::Number(FONT_WEIGHT_6))
                .color_signal(if disabled {
                    neutral_7().boxed_local()
                } else {
                    text_signal
                }))
            .s(transition_colors())
            .s(Background::new().color_signal(if disabled {
                neutral_4().boxed_local()
            } else {
                map_ref! {
                    let hovered = hovered_signal,
                    let bg = bg_signal,
                    let hover_bg = hover_bg_signal =>
                    if *hovered { *hover_bg } else { *bg }
                }
                .boxed_local()
            }))
            .s(Borders::all_signal(
                border_signal.map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .s(Outline::with_signal_self(focused_signal.map(|focused| {
                focused.then(|| Outline::inner().width(BORDER_WIDTH_2).color(SHADOW_COLOR_PRIMARY))
            })))
            .s(Cursor::new(if disabled {
                CursorIcon::NotAllowed
            } else {
                CursorIcon::Pointer
            }))
            .update_raw_el(move |raw_el| {
                let raw_el = if variant == ButtonVariant::Link {
                    raw_el.style("text-decoration", "underline")
                } else {
                    raw_el
                };
                if disabled {
                    raw_el.style("opacity", OPACITY_DISABLED)
                } else {
                    raw_el
                }
            })
            .on_hovered_change(move |is_hovered| {
                if !disabled {
                    hovered.set_neq(is_hovered);
                }
            })
            .on_focused_change(move |is_focused| {
                if !disabled {
                    focused.set_neq(is_focused);
                }
            })
            .label(content)
            .on_press(move || {
                if !disabled {
                    if let Some(handler) = &on_press {
                        handler();
                    }
                }
            });

        if self.fill_width {
            button = button.s(Width::fill());
        }
        button
    }
}

fn button_content(
    label: Option<String>,
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
    icon_size: IconSize,
) -> RawElOrText {
    let icon_el = |name: IconName| {
        IconBuilder::new(name)
            .size(icon_size)
            .color(IconColor::Current)
            .build()
    };

    match (left_icon, &label, right_icon) {
        (Some(left), None, None) => icon_el(left).unify(),
        (None, None, Some(right)) => icon_el(right).unify(),
        (None, Some(text), None) => Text::new(text).unify(),
        (left, text, right) => {
            let mut row = Row::new()
                .s(Align::new().center_y())
                .s(Gap::new().x(SPACING_8));
            if let Some(left) = left {
                row = row.item(icon_el(left));
            }
            if let Some(text) = text {
                row = row.item(Text::new(text));
            }
            if let Some(right) = right {
                row = row.item(icon_el(right));
            }
            row.unify()
        }
    }
}

pub fn button() -> ButtonBuilder {
    ButtonBuilder::new()
}
