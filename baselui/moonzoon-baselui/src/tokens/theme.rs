// Library-local theme flag.
//
// Persistence deliberately lives in the host application, which owns the
// authoritative theme store and pushes changes in through `set_theme`.

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Light));

/// Current theme as a signal for reactive styling.
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Current theme value (non-reactive).
pub fn current_theme() -> Theme {
    THEME.get()
}

/// Restyles every token signal. Called by the host whenever its theme store
/// changes.
pub fn set_theme(new_theme: Theme) {
    THEME.set_neq(new_theme);
}
