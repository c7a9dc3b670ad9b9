// Border width tokens.

pub const BORDER_WIDTH_0: u32 = 0;
pub const BORDER_WIDTH_1: u32 = 1;
pub const BORDER_WIDTH_2: u32 = 2;
pub const BORDER_WIDTH_4: u32 = 4;
