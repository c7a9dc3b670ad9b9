pub mod accordion;
pub mod alert;
pub mod badge;
pub mod breadcrumbs;
pub mod button;
pub mod card;
pub mod code_block;
pub mod dropdown;
pub mod faq;
pub mod icon;
pub mod input;
pub mod typography;

pub use accordion::*;
pub use alert::*;
pub use badge::*;
pub use breadcrumbs::*;
pub use button::*;
pub use card::*;
pub use code_block::*;
pub use dropdown::*;
pub use faq::*;
pub use icon::*;
pub use input::*;
pub use typography::*;
