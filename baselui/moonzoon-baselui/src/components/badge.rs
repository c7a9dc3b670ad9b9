// Badge component: small uppercase status label.

use crate::tokens::*;
use zoon::*;
use zoon::futures_signals::signal::always;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Neutral,
    Primary,
    Outline,
    /// Inverted block for section kickers and doc page headers.
    Solid,
}

pub struct BadgeBuilder {
    text: String,
    variant: BadgeVariant,
}

impl BadgeBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Neutral,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn build(self) -> impl Element {
        let (bg, text_color, border) = match self.variant {
            BadgeVariant::Neutral => (
                neutral_3().boxed_local(),
                neutral_10().boxed_local(),
                always(transparent()).boxed_local(),
            ),
            BadgeVariant::Primary => (
                primary_2().boxed_local(),
                primary_8().boxed_local(),
                always(transparent()).boxed_local(),
            ),
            BadgeVariant::Outline => (
                always(transparent()).boxed_local(),
                primary_7().boxed_local(),
                primary_7().boxed_local(),
            ),
            BadgeVariant::Solid => (
                neutral_12().boxed_local(),
                neutral_1().boxed_local(),
                always(transparent()).boxed_local(),
            ),
        };

        El::new()
            .s(Padding::new().x(SPACING_8).y(SPACING_4))
            .s(RoundedCorners::all(CORNER_RADIUS_2))
            .s(Background::new().color_signal(bg))
            .s(Borders::all_signal(
                border.map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .s(Font::new()
                .size(FONT_SIZE_11)
                .weight(FontWeight::Number(FONT_WEIGHT_9))
                .color_signal(text_color))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", "0.15em")
            })
            .child(Text::new(self.text))
    }
}

pub fn badge(text: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder::new(text)
}
