//! Raw browser bindings. Everything that touches `web_sys` lives here;
//! the rest of the frontend goes through these helpers.

use site_core::{PersistenceError, ThemeFlag, ThemePersistence};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use zoon::*;

/// localStorage key holding the literal `"light"` / `"dark"` string.
const THEME_STORAGE_KEY: &str = "theme";

fn window() -> web_sys::Window {
    web_sys::window().unwrap_throw()
}

/// Theme persistence over localStorage.
///
/// Bare string literals, not JSON, so the stored value stays readable by
/// other tooling and by hand.
pub struct BrowserThemePersistence;

impl ThemePersistence for BrowserThemePersistence {
    fn load(&self) -> Option<ThemeFlag> {
        let storage = window().local_storage().ok()??;
        let raw = storage.get_item(THEME_STORAGE_KEY).ok()??;
        ThemeFlag::parse(&raw)
    }

    fn store(&self, flag: ThemeFlag) -> Result<(), PersistenceError> {
        let storage = window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| PersistenceError("localStorage unavailable".into()))?;
        storage
            .set_item(THEME_STORAGE_KEY, flag.as_str())
            .map_err(|_| PersistenceError("localStorage write rejected".into()))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`; `false` when the query
/// is unsupported.
pub fn prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

pub fn pathname() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_owned())
}

pub fn push_state(path: &str) {
    if let Ok(history) = window().history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

pub fn replace_state(path: &str) {
    if let Ok(history) = window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Registers a popstate handler for the lifetime of the page.
pub fn on_popstate(handler: impl Fn() + 'static) {
    let closure = Closure::<dyn Fn()>::new(handler);
    window()
        .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        .unwrap_throw();
    closure.forget();
}

pub fn open_in_new_tab(url: &str) {
    let _ = window().open_with_url_and_target(url, "_blank");
}

pub fn copy_to_clipboard(text: String) {
    Task::start(async move {
        let clipboard = window().navigator().clipboard();
        if let Err(error) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await
        {
            zoon::eprintln!("Clipboard error: {error:?}");
        }
    });
}
