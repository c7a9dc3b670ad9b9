pub mod footer;
pub mod nav_item;
pub mod navbar;
