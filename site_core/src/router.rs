//! Router: owns the route table, the view factories, and the set of
//! currently mounted views.
//!
//! A navigation first resolves the path, then tears down stale views
//! innermost-first, and only then mounts the newly required ones outermost
//! first, so two views never claim the same mount point at once. Views
//! shared between the old and new resolution keep their instances.

use indexmap::IndexMap;
use thiserror::Error;

use crate::routing::{Resolution, RouteError, RouteTable, ViewId};

/// A unit of presentation corresponding to one route segment.
///
/// Lifecycle is `unmounted -> mounted -> unmounted`; an instance is never
/// remounted, a fresh one is created from the factory instead. Implementers
/// subscribe to the theme store on mount and must unsubscribe on unmount.
pub trait View {
    fn id(&self) -> ViewId;
    fn mount(&mut self);
    fn unmount(&mut self);
}

type Factory<V> = Box<dyn Fn() -> V>;

/// Handle for a registered location listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerHandle(u64);

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),
    /// The table names a view no factory was registered for. This is a
    /// configuration error, reported before any view is torn down.
    #[error("no view factory registered for {view}")]
    UnknownView { view: ViewId },
}

pub struct Router<V: View> {
    table: RouteTable,
    factories: IndexMap<&'static str, Factory<V>>,
    active: Vec<V>,
    current_path: Option<String>,
    listeners: Vec<(ListenerHandle, Box<dyn Fn()>)>,
    next_listener: u64,
}

impl<V: View> Router<V> {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            factories: IndexMap::new(),
            active: Vec::new(),
            current_path: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn register(&mut self, view: ViewId, factory: impl Fn() -> V + 'static) {
        self.factories.insert(view.as_str(), Box::new(factory));
    }

    pub fn resolve(&self, path: &str) -> Result<Resolution, RouteError> {
        self.table.resolve(path)
    }

    /// Transitions the active view set to the one `path` resolves to.
    ///
    /// On any error the active set and current path are left untouched;
    /// the caller decides the fallback.
    pub fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        let resolution = self.table.resolve(path)?;
        for view in &resolution.views {
            if !self.factories.contains_key(view.as_str()) {
                return Err(NavigationError::UnknownView { view: *view });
            }
        }

        let shared = self
            .active
            .iter()
            .zip(&resolution.views)
            .take_while(|(active, wanted)| active.id() == **wanted)
            .count();

        // All unmounts complete before the first mount begins.
        while self.active.len() > shared {
            if let Some(mut stale) = self.active.pop() {
                stale.unmount();
            }
        }
        for view_id in &resolution.views[shared..] {
            let factory = &self.factories[view_id.as_str()];
            let mut view = factory();
            view.mount();
            self.active.push(view);
        }

        self.current_path = Some(resolution.path);
        for (_, listener) in &self.listeners {
            listener();
        }
        Ok(())
    }

    /// The effective path of the last successful navigation, after any
    /// redirect rewrote it.
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    /// Mounted views, outermost first.
    pub fn active_views(&self) -> &[V] {
        &self.active
    }

    pub fn active_ids(&self) -> Vec<ViewId> {
        self.active.iter().map(View::id).collect()
    }

    /// Registers a payload-less listener invoked after every successful
    /// navigation, in registration order. Receivers re-derive whatever they
    /// need from the current path.
    pub fn on_location_change(&mut self, listener: impl Fn() + 'static) -> ListenerHandle {
        let handle = ListenerHandle(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((handle, Box::new(listener)));
        handle
    }

    pub fn remove_location_listener(&mut self, handle: ListenerHandle) {
        self.listeners.retain(|(registered, _)| *registered != handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::routing::RouteNode;

    const HOME: ViewId = ViewId::new("home");
    const DOCS: ViewId = ViewId::new("docs");
    const INTRO: ViewId = ViewId::new("doc-intro");
    const INSTALL: ViewId = ViewId::new("doc-install");

    struct TestView {
        id: ViewId,
        serial: u64,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl View for TestView {
        fn id(&self) -> ViewId {
            self.id
        }

        fn mount(&mut self) {
            self.events.borrow_mut().push(format!("mount {}", self.id));
        }

        fn unmount(&mut self) {
            self.events.borrow_mut().push(format!("unmount {}", self.id));
        }
    }

    struct Fixture {
        router: Router<TestView>,
        events: Rc<RefCell<Vec<String>>>,
    }

    fn fixture() -> Fixture {
        let table = RouteTable::new(vec![
            RouteNode::leaf("", HOME),
            RouteNode::group(
                "docs",
                DOCS,
                vec![
                    RouteNode::redirect("", "/docs/intro"),
                    RouteNode::leaf("intro", INTRO),
                    RouteNode::leaf("install", INSTALL),
                ],
            ),
        ])
        .expect("valid table");

        let events: Rc<RefCell<Vec<String>>> = Rc::default();
        let serials = Rc::new(Cell::new(0_u64));
        let mut router = Router::new(table);
        for id in [HOME, DOCS, INTRO, INSTALL] {
            let events = Rc::clone(&events);
            let serials = Rc::clone(&serials);
            router.register(id, move || {
                serials.set(serials.get() + 1);
                TestView {
                    id,
                    serial: serials.get(),
                    events: Rc::clone(&events),
                }
            });
        }
        Fixture { router, events }
    }

    fn drain(events: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
        events.borrow_mut().drain(..).collect()
    }

    #[test]
    fn navigation_mounts_views_outermost_first() {
        let mut fx = fixture();
        fx.router.navigate("/docs/intro").unwrap();
        assert_eq!(drain(&fx.events), ["mount docs", "mount doc-intro"]);
        assert_eq!(fx.router.active_ids(), [DOCS, INTRO]);
        assert_eq!(fx.router.current_path(), Some("/docs/intro"));
    }

    #[test]
    fn stale_views_unmount_before_new_views_mount() {
        let mut fx = fixture();
        fx.router.navigate("/").unwrap();
        drain(&fx.events);

        fx.router.navigate("/docs/intro").unwrap();
        assert_eq!(
            drain(&fx.events),
            ["unmount home", "mount docs", "mount doc-intro"],
        );
    }

    #[test]
    fn container_instance_survives_a_sibling_swap() {
        let mut fx = fixture();
        fx.router.navigate("/docs/intro").unwrap();
        let docs_serial = fx.router.active_views()[0].serial;
        drain(&fx.events);

        fx.router.navigate("/docs/install").unwrap();
        assert_eq!(
            drain(&fx.events),
            ["unmount doc-intro", "mount doc-install"],
        );
        assert_eq!(fx.router.active_views()[0].serial, docs_serial);
        assert_eq!(fx.router.active_ids(), [DOCS, INSTALL]);
    }

    #[test]
    fn navigating_to_the_current_path_keeps_every_instance() {
        let mut fx = fixture();
        fx.router.navigate("/docs/intro").unwrap();
        let serials: Vec<u64> = fx.router.active_views().iter().map(|v| v.serial).collect();
        drain(&fx.events);

        fx.router.navigate("/docs/intro").unwrap();
        assert!(drain(&fx.events).is_empty());
        let after: Vec<u64> = fx.router.active_views().iter().map(|v| v.serial).collect();
        assert_eq!(after, serials);
    }

    #[test]
    fn container_path_lands_on_the_redirect_target() {
        let mut fx = fixture();
        fx.router.navigate("/docs").unwrap();
        assert_eq!(fx.router.active_ids(), [DOCS, INTRO]);
        assert_eq!(fx.router.current_path(), Some("/docs/intro"));
    }

    #[test]
    fn failed_resolution_leaves_the_active_set_untouched() {
        let mut fx = fixture();
        fx.router.navigate("/docs/intro").unwrap();
        drain(&fx.events);

        let err = fx.router.navigate("/docs/missing").unwrap_err();
        assert!(matches!(err, NavigationError::Route(_)));
        assert!(drain(&fx.events).is_empty());
        assert_eq!(fx.router.active_ids(), [DOCS, INTRO]);
        assert_eq!(fx.router.current_path(), Some("/docs/intro"));
    }

    #[test]
    fn missing_factory_is_reported_before_any_teardown() {
        let table = RouteTable::new(vec![
            RouteNode::leaf("", HOME),
            RouteNode::group("docs", DOCS, vec![RouteNode::leaf("intro", INTRO)]),
        ])
        .expect("valid table");

        let events: Rc<RefCell<Vec<String>>> = Rc::default();
        let mut router: Router<TestView> = Router::new(table);
        router.register(HOME, {
            let events = Rc::clone(&events);
            move || TestView {
                id: HOME,
                serial: 0,
                events: Rc::clone(&events),
            }
        });
        router.register(DOCS, {
            let events = Rc::clone(&events);
            move || TestView {
                id: DOCS,
                serial: 0,
                events: Rc::clone(&events),
            }
        });

        router.navigate("/").unwrap();
        drain(&events);

        let err = router.navigate("/docs/intro").unwrap_err();
        assert!(matches!(err, NavigationError::UnknownView { view } if view == INTRO));
        assert!(drain(&events).is_empty());
        assert_eq!(router.active_ids(), [HOME]);
    }

    #[test]
    fn listeners_fire_in_registration_order_after_successful_navigation() {
        let mut fx = fixture();
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        for name in ["first", "second"] {
            let order = Rc::clone(&order);
            fx.router.on_location_change(move || order.borrow_mut().push(name));
        }

        fx.router.navigate("/").unwrap();
        assert_eq!(*order.borrow(), ["first", "second"]);

        order.borrow_mut().clear();
        let _ = fx.router.navigate("/missing");
        assert!(order.borrow().is_empty());
    }

    #[test]
    fn removed_listeners_stay_silent() {
        let mut fx = fixture();
        let calls: Rc<Cell<u32>> = Rc::default();
        let handle = fx.router.on_location_change({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        });

        fx.router.navigate("/").unwrap();
        fx.router.remove_location_listener(handle);
        fx.router.remove_location_listener(handle);
        fx.router.navigate("/docs").unwrap();
        assert_eq!(calls.get(), 1);
    }
}
