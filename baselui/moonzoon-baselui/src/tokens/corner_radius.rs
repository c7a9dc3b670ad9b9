// Corner radius tokens.

pub const CORNER_RADIUS_0: u32 = 0;
pub const CORNER_RADIUS_2: u32 = 2;   // inputs, chips
pub const CORNER_RADIUS_4: u32 = 4;   // buttons, cards
pub const CORNER_RADIUS_6: u32 = 6;   // alerts
pub const CORNER_RADIUS_8: u32 = 8;   // panels, dropdowns
pub const CORNER_RADIUS_MAX: u32 = 9999; // pill
