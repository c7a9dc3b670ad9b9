//! Application glue: site manifest, theme store wiring, router setup.

use std::cell::RefCell;
use std::rc::Rc;

use moonzoon_baselui::{self as ui, Theme};
use site_core::{Router, SiteMeta, ThemeFlag, ThemeStore};
use zoon::*;

use crate::components::{footer, navbar};
use crate::pages;
use crate::platform::{self, BrowserThemePersistence};
use crate::routes::{self, DOCS_VIEW, HOME_VIEW};
use crate::view::{Navigator, PageView};

/// Cheap-to-clone handle threaded through every page and chrome builder.
#[derive(Clone)]
pub struct App {
    meta: Rc<SiteMeta>,
    theme_store: Rc<ThemeStore>,
    router: Rc<RefCell<Router<PageView>>>,
    navigator: Navigator,
    current_path: Mutable<String>,
}

impl App {
    pub fn new() -> Self {
        let meta = Rc::new(
            SiteMeta::from_toml_str(include_str!("../site.toml")).unwrap_throw(),
        );

        let ambient = platform::prefers_dark().then_some(ThemeFlag::Dark);
        let theme_store = Rc::new(ThemeStore::new(BrowserThemePersistence, ambient));

        // Seed the component library's tokens and keep them in step for the
        // lifetime of the page.
        apply_library_theme(theme_store.get());
        let _ = theme_store.subscribe({
            let store = Rc::clone(&theme_store);
            move || apply_library_theme(store.get())
        });

        let mut router = Router::new(routes::route_table().unwrap_throw());
        register_views(&mut router, &theme_store);

        let current_path = Mutable::new(platform::pathname());
        router.on_location_change({
            let current_path = current_path.clone();
            move || current_path.set_neq(platform::pathname())
        });

        let router = Rc::new(RefCell::new(router));
        let navigator = Navigator::new(Rc::clone(&router));

        platform::on_popstate({
            let navigator = navigator.clone();
            move || navigator.sync_from_location()
        });
        navigator.sync_from_location();

        Self {
            meta,
            theme_store,
            router,
            navigator,
            current_path,
        }
    }

    pub fn meta(&self) -> &SiteMeta {
        &self.meta
    }

    pub fn go(&self, path: &str) {
        self.navigator.go(path);
    }

    pub fn toggle_theme(&self) {
        self.theme_store.toggle();
    }

    pub fn current_path(&self) -> Mutable<String> {
        self.current_path.clone()
    }

    pub fn root(&self) -> impl Element {
        let app = self.clone();
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(ui::font_sans())
            .s(Background::new().color_signal(ui::neutral_1()))
            .s(Font::new().color_signal(ui::neutral_11()))
            .item(navbar::navbar(self))
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .s(Scrollbars::both())
                    .child(
                        Column::new()
                            .s(Width::fill())
                            .s(Height::fill())
                            .item(
                                El::new().s(Width::fill()).s(Height::fill()).child_signal(
                                    self.current_path
                                        .signal_cloned()
                                        .map(move |_| app.render_active()),
                                ),
                            )
                            .item(footer::footer(self)),
                    ),
            )
    }

    /// Folds the active view stack into one element, innermost rendered
    /// first and handed to its container.
    fn render_active(&self) -> RawElOrText {
        let router = self.router.borrow();
        match router.active_views() {
            [] => El::new().unify(),
            [only] => only.render(self, None),
            [outer, rest @ ..] => {
                let mut child = None;
                for view in rest.iter().rev() {
                    child = Some(view.render(self, child));
                }
                outer.render(self, child)
            }
        }
    }
}

fn register_views(router: &mut Router<PageView>, theme_store: &Rc<ThemeStore>) {
    router.register(HOME_VIEW, {
        let store = Rc::clone(theme_store);
        move || PageView::new(HOME_VIEW, Rc::clone(&store), |app, _| pages::home::page(app))
    });

    router.register(DOCS_VIEW, {
        let store = Rc::clone(theme_store);
        move || {
            // Per-instance sidebar state: survives child page swaps, resets
            // when the container itself is remounted.
            let sidebar_open = Mutable::new(false);
            PageView::new(DOCS_VIEW, Rc::clone(&store), move |app, child| {
                pages::docs::container(app, child, sidebar_open.clone())
            })
        }
    });

    for entry in routes::DOC_ENTRIES {
        let store = Rc::clone(theme_store);
        router.register(entry.view, move || {
            PageView::new(entry.view, Rc::clone(&store), move |app, _| (entry.page)(app))
        });
    }
}

fn apply_library_theme(flag: ThemeFlag) {
    ui::set_theme(match flag {
        ThemeFlag::Light => Theme::Light,
        ThemeFlag::Dark => Theme::Dark,
    });
}
