// Opacity tokens.

pub const OPACITY_BACKDROP: &str = "0.5";
pub const OPACITY_DISABLED: &str = "0.6";
pub const OPACITY_MUTED: &str = "0.8";
pub const OPACITY_FULL: &str = "1";
