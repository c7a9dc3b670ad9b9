pub mod docs;
pub mod home;
