// Alert component: tinted panel with an accent stripe and a matching icon.

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertVariant {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertVariant {
    fn background(self) -> impl Signal<Item = &'static str> {
        match self {
            AlertVariant::Info => neutral_2().boxed_local(),
            AlertVariant::Success => success_1().boxed_local(),
            AlertVariant::Warning => warning_1().boxed_local(),
            AlertVariant::Error => error_1().boxed_local(),
        }
    }

    fn accent(self) -> impl Signal<Item = &'static str> {
        match self {
            AlertVariant::Info => primary_7().boxed_local(),
            AlertVariant::Success => success_7().boxed_local(),
            AlertVariant::Warning => warning_7().boxed_local(),
            AlertVariant::Error => error_7().boxed_local(),
        }
    }

    fn text(self) -> impl Signal<Item = &'static str> {
        match self {
            AlertVariant::Info => neutral_11().boxed_local(),
            AlertVariant::Success => success_9().boxed_local(),
            AlertVariant::Warning => warning_9().boxed_local(),
            AlertVariant::Error => error_9().boxed_local(),
        }
    }

    fn icon(self) -> IconName {
        match self {
            AlertVariant::Info => IconName::Info,
            AlertVariant::Success => IconName::CircleCheck,
            AlertVariant::Warning => IconName::TriangleAlert,
            AlertVariant::Error => IconName::CircleAlert,
        }
    }
}

pub struct AlertBuilder {
    variant: AlertVariant,
    title: Option<String>,
    message: String,
    show_icon: bool,
}

impl AlertBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            variant: AlertVariant::Info,
            title: None,
            message: message.into(),
            show_icon: true,
        }
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    pub fn build(self) -> impl Element {
        let variant = self.variant;

        let mut body = Column::new().s(Width::fill()).s(Gap::new().y(SPACING_4));
        if let Some(title) = self.title {
            body = body.item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_16)
                        .weight(FontWeight::Number(FONT_WEIGHT_7))
                        .color_signal(variant.text()))
                    .child(Text::new(title)),
            );
        }
        body = body.item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .line_height(line_height_normal(FONT_SIZE_14))
                    .color_signal(variant.text()))
                .child(Text::new(self.message)),
        );

        let mut row = Row::new()
            .s(Width::fill())
            .s(Padding::new().x(SPACING_16).y(SPACING_12))
            .s(Gap::new().x(SPACING_12))
            .s(Align::new().top())
            .s(RoundedCorners::all(CORNER_RADIUS_6))
            .s(Background::new().color_signal(variant.background()))
            .s(Borders::new().left_signal(
                variant
                    .accent()
                    .map(|color| Border::new().width(BORDER_WIDTH_4).color(color)),
            ));

        if self.show_icon {
            row = row.item(
                El::new()
                    .s(Font::new().color_signal(variant.accent()))
                    .child(
                        IconBuilder::new(variant.icon())
                            .size(IconSize::Medium)
                            .color(IconColor::Current)
                            .build(),
                    ),
            );
        }
        row.item(body)
    }
}

pub fn alert(message: impl Into<String>) -> AlertBuilder {
    AlertBuilder::new(message)
}
