// Shadow color tokens. Sizes are composed at the call site with
// `Shadow::new()`.

pub const SHADOW_COLOR_NEUTRAL: &str = "oklch(60% 0.02 260 / 0.22)";
pub const SHADOW_COLOR_PRIMARY: &str = "oklch(55% 0.19 15 / 0.3)";

pub const SHADOW_COLOR_BLACK_SUBTLE: &str = "rgba(0, 0, 0, 0.04)";
pub const SHADOW_COLOR_BLACK_LIGHT: &str = "rgba(0, 0, 0, 0.08)";
pub const SHADOW_COLOR_BLACK_MEDIUM: &str = "rgba(0, 0, 0, 0.15)";
pub const SHADOW_COLOR_BLACK_STRONG: &str = "rgba(0, 0, 0, 0.4)";
