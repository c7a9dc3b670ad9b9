// Typography helpers for headings and body copy.

use crate::tokens::*;
use zoon::*;

pub fn h1(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_36)
            .weight(FontWeight::Number(FONT_WEIGHT_9))
            .line_height(line_height_tight(FONT_SIZE_36))
            .color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h2(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_24)
            .weight(FontWeight::Number(FONT_WEIGHT_7))
            .line_height(line_height_tight(FONT_SIZE_24))
            .color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h3(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_18)
            .weight(FontWeight::Number(FONT_WEIGHT_7))
            .line_height(line_height_normal(FONT_SIZE_18))
            .color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn lead(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_18)
            .line_height(line_height_relaxed(FONT_SIZE_18))
            .color_signal(neutral_9()))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_16)
            .line_height(line_height_relaxed(FONT_SIZE_16))
            .color_signal(neutral_10()))
        .child(Text::new(text.into()))
}

pub fn small(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .line_height(line_height_normal(FONT_SIZE_14))
            .color_signal(neutral_10()))
        .child(Text::new(text.into()))
}

pub fn muted(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .line_height(line_height_normal(FONT_SIZE_14))
            .color_signal(neutral_8()))
        .child(Text::new(text.into()))
}

/// Inline code span for use inside body copy.
pub fn inline_code(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Padding::new().x(SPACING_6).y(SPACING_2))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(neutral_3()))
        .s(font_mono())
        .s(Font::new().size(FONT_SIZE_14).color_signal(primary_8()))
        .child(Text::new(text.into()))
}
