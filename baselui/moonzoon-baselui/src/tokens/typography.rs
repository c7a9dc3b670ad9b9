// Typography tokens.

use zoon::*;

pub const FONT_FAMILY_SANS: &str = "'Inter', 'system-ui', 'Segoe UI', 'Arial', sans-serif";
pub const FONT_FAMILY_MONO: &str = "'Fira Code', 'Menlo', 'Consolas', monospace";

pub const FONT_SIZE_11: u32 = 11;
pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_30: u32 = 30;
pub const FONT_SIZE_36: u32 = 36;
pub const FONT_SIZE_48: u32 = 48;

pub const FONT_WEIGHT_4: u32 = 400;
pub const FONT_WEIGHT_5: u32 = 500;
pub const FONT_WEIGHT_6: u32 = 600;
pub const FONT_WEIGHT_7: u32 = 700;
pub const FONT_WEIGHT_9: u32 = 900;

// Zoon line heights are pixels, so these scale the font size.
pub fn line_height_tight(font_size: u32) -> u32 {
    (font_size as f32 * 1.2) as u32
}

pub fn line_height_normal(font_size: u32) -> u32 {
    (font_size as f32 * 1.4) as u32
}

pub fn line_height_relaxed(font_size: u32) -> u32 {
    (font_size as f32 * 1.6) as u32
}

pub fn font_sans() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_SANS)])
}

pub fn font_mono() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_MONO)])
}
