//! Page view lifecycle and browser navigation.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{Router, SubscriptionHandle, ThemeFlag, ThemeStore, View, ViewId};
use zoon::*;

use crate::app::App;
use crate::platform;

type RenderFn = Rc<dyn Fn(&App, Option<RawElOrText>) -> RawElOrText>;

/// One mounted route segment.
///
/// Mounting reads the theme store into a per-view `Mutable` and subscribes;
/// unmounting takes the handle back. The render closure is created by the
/// view factory, so per-view UI state (the docs sidebar toggle) lives
/// exactly as long as the view instance.
pub struct PageView {
    id: ViewId,
    store: Rc<ThemeStore>,
    theme: Mutable<ThemeFlag>,
    subscription: Option<SubscriptionHandle>,
    render: RenderFn,
}

impl PageView {
    pub fn new(
        id: ViewId,
        store: Rc<ThemeStore>,
        render: impl Fn(&App, Option<RawElOrText>) -> RawElOrText + 'static,
    ) -> Self {
        let theme = Mutable::new(store.get());
        Self {
            id,
            store,
            theme,
            subscription: None,
            render: Rc::new(render),
        }
    }

    pub fn theme(&self) -> Mutable<ThemeFlag> {
        self.theme.clone()
    }

    pub fn render(&self, app: &App, child: Option<RawElOrText>) -> RawElOrText {
        (self.render)(app, child)
    }
}

impl View for PageView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn mount(&mut self) {
        self.theme.set_neq(self.store.get());
        let store = Rc::clone(&self.store);
        let theme = self.theme.clone();
        self.subscription = Some(self.store.subscribe(move || theme.set_neq(store.get())));
    }

    fn unmount(&mut self) {
        if let Some(handle) = self.subscription.take() {
            self.store.unsubscribe(handle);
        }
    }
}

enum HistoryMode {
    Push,
    Replace,
}

/// The one place that touches browser history.
///
/// A path is resolved before any history write, so the address bar always
/// shows the post-redirect path (`/docs` lands as `/docs/intro`). Unresolved
/// paths log and fall back to `/`.
#[derive(Clone)]
pub struct Navigator {
    router: Rc<RefCell<Router<PageView>>>,
}

impl Navigator {
    pub fn new(router: Rc<RefCell<Router<PageView>>>) -> Self {
        Self { router }
    }

    /// Link clicks: pushState with the effective path.
    pub fn go(&self, path: &str) {
        self.apply(path, HistoryMode::Push);
    }

    /// Startup and popstate: replaceState, never growing the history stack.
    pub fn sync_from_location(&self) {
        self.apply(&platform::pathname(), HistoryMode::Replace);
    }

    fn apply(&self, path: &str, mode: HistoryMode) {
        let resolved = self.router.borrow().resolve(path);
        let effective = match resolved {
            Ok(resolution) => resolution.path,
            Err(error) => {
                zoon::eprintln!("Navigation failed: {error}");
                if path == "/" {
                    return;
                }
                // Deterministic fallback: land on home.
                return self.apply("/", HistoryMode::Replace);
            }
        };

        // History first: the location listeners registered on the router
        // re-read the pathname when navigation completes.
        match mode {
            HistoryMode::Push => platform::push_state(&effective),
            HistoryMode::Replace => platform::replace_state(&effective),
        }

        if let Err(error) = self.router.borrow_mut().navigate(&effective) {
            zoon::eprintln!("Navigation failed: {error}");
        }
    }
}
