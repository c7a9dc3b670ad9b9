// Card components: feature, info, and product cards.

use std::rc::Rc;

use crate::components::button::{button, ButtonSize, ButtonVariant};
use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSize {
    Small,
    Medium,
    Large,
}

impl CardSize {
    fn padding(self) -> u32 {
        match self {
            CardSize::Small => SPACING_16,
            CardSize::Medium => SPACING_24,
            CardSize::Large => SPACING_32,
        }
    }
}

/// Icon, title and description stacked in a bordered panel.
pub struct CardFeatureBuilder {
    icon: IconName,
    title: String,
    description: String,
}

impl CardFeatureBuilder {
    pub fn new(
        icon: IconName,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn build(self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Padding::all(SPACING_24))
            .s(Gap::new().y(SPACING_12))
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Background::new().color_signal(neutral_1()))
            .s(Borders::all_signal(
                neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .item(
                El::new()
                    .s(Width::exact(40))
                    .s(Height::exact(40))
                    .s(Align::new().left())
                    .s(RoundedCorners::all(CORNER_RADIUS_6))
                    .s(Background::new().color_signal(primary_2()))
                    .child(
                        El::new().s(Align::center()).child(
                            IconBuilder::new(self.icon)
                                .size(IconSize::Medium)
                                .color(IconColor::Primary)
                                .build(),
                        ),
                    ),
            )
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_18)
                        .weight(FontWeight::Number(FONT_WEIGHT_7))
                        .color_signal(neutral_12()))
                    .child(Text::new(self.title)),
            )
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .line_height(line_height_relaxed(FONT_SIZE_14))
                        .color_signal(neutral_9()))
                    .child(Text::new(self.description)),
            )
    }
}

/// Title plus body text, optionally on a filled background.
pub struct CardInfoBuilder {
    title: String,
    text: String,
    size: CardSize,
    filled: bool,
}

impl CardInfoBuilder {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            size: CardSize::Medium,
            filled: false,
        }
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn build(self) -> impl Element {
        let background = if self.filled {
            neutral_2().boxed_local()
        } else {
            neutral_1().boxed_local()
        };

        Column::new()
            .s(Width::fill())
            .s(Padding::all(self.size.padding()))
            .s(Gap::new().y(SPACING_8))
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Background::new().color_signal(background))
            .s(Borders::all_signal(
                neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_16)
                        .weight(FontWeight::Number(FONT_WEIGHT_7))
                        .color_signal(neutral_12()))
                    .child(Text::new(self.title)),
            )
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .line_height(line_height_relaxed(FONT_SIZE_14))
                        .color_signal(neutral_9()))
                    .child(Text::new(self.text)),
            )
    }
}

/// Product card: image placeholder, name, price and a call to action.
pub struct CardProductBuilder {
    name: String,
    price: String,
    description: String,
    action_label: String,
    on_action: Option<Rc<dyn Fn()>>,
}

impl CardProductBuilder {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: String::new(),
            action_label: "Add to cart".to_owned(),
            on_action: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = label.into();
        self
    }

    pub fn on_action<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_action = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let on_action = self.on_action;

        let mut body = Column::new()
            .s(Width::fill())
            .s(Padding::all(SPACING_16))
            .s(Gap::new().y(SPACING_8))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Align::new().center_y())
                    .item(
                        El::new()
                            .s(Width::fill())
                            .s(Font::new()
                                .size(FONT_SIZE_16)
                                .weight(FontWeight::Number(FONT_WEIGHT_7))
                                .color_signal(neutral_12()))
                            .child(Text::new(self.name)),
                    )
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(FONT_SIZE_16)
                                .weight(FontWeight::Number(FONT_WEIGHT_7))
                                .color_signal(primary_7()))
                            .child(Text::new(self.price)),
                    ),
            );

        if !self.description.is_empty() {
            body = body.item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .line_height(line_height_relaxed(FONT_SIZE_14))
                        .color_signal(neutral_9()))
                    .child(Text::new(self.description)),
            );
        }

        body = body.item(
            El::new().s(Padding::new().top(SPACING_8)).child(
                button()
                    .label(self.action_label)
                    .variant(ButtonVariant::Primary)
                    .size(ButtonSize::Small)
                    .fill_width()
                    .on_press(move || {
                        if let Some(handler) = &on_action {
                            handler();
                        }
                    })
                    .build(),
            ),
        );

        Column::new()
            .s(Width::fill())
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Background::new().color_signal(neutral_1()))
            .s(Borders::all_signal(
                neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .s(Clip::both())
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Height::exact(160))
                    .s(Background::new().color_signal(neutral_3()))
                    .child(
                        El::new().s(Align::center()).child(
                            IconBuilder::new(IconName::Image)
                                .size(IconSize::Large)
                                .color(IconColor::Muted)
                                .build(),
                        ),
                    ),
            )
            .item(body)
    }
}

pub fn card_feature(
    icon: IconName,
    title: impl Into<String>,
    description: impl Into<String>,
) -> CardFeatureBuilder {
    CardFeatureBuilder::new(icon, title, description)
}

pub fn card_info(title: impl Into<String>, text: impl Into<String>) -> CardInfoBuilder {
    CardInfoBuilder::new(title, text)
}

pub fn card_product(name: impl Into<String>, price: impl Into<String>) -> CardProductBuilder {
    CardProductBuilder::new(name, price)
}
