//! Basel UI documentation site.

use zoon::*;

mod app;
mod components;
mod pages;
mod platform;
mod routes;
mod view;

pub fn main() {
    let app = app::App::new();
    start_app("app", move || app.root());
}
