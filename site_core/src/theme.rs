//! Theme store and broadcaster.
//!
//! The store is the single authoritative holder of the light/dark flag.
//! It is an explicit, injectable object rather than an ambient global, so a
//! test can construct an isolated instance with its own persistence backing.
//! Mutation goes exclusively through [`ThemeStore::toggle`], which gives a
//! single-writer/many-reader discipline on the browser main thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

/// The light/dark preference. Exactly one value is active at any instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeFlag {
    Light,
    Dark,
}

impl ThemeFlag {
    /// The literal persisted under the `"theme"` key.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeFlag::Light => "light",
            ThemeFlag::Dark => "dark",
        }
    }

    /// Accepts exactly the two persisted literals; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeFlag::Light),
            "dark" => Some(ThemeFlag::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeFlag::Light => ThemeFlag::Dark,
            ThemeFlag::Dark => ThemeFlag::Light,
        }
    }
}

#[derive(Debug, Error)]
#[error("theme persistence failed: {0}")]
pub struct PersistenceError(pub String);

/// Storage backing for the theme flag.
///
/// The browser implementation writes localStorage; tests use an in-memory
/// slot. Writes are best-effort: the store swallows [`PersistenceError`] and
/// keeps the in-memory flag authoritative for the running session.
pub trait ThemePersistence {
    fn load(&self) -> Option<ThemeFlag>;
    fn store(&self, flag: ThemeFlag) -> Result<(), PersistenceError>;
}

/// Handle returned by [`ThemeStore::subscribe`].
///
/// Unsubscribing twice, or with a handle the store never issued, is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionHandle(u64);

type Subscriber = Rc<dyn Fn()>;

/// Single source of truth for the theme flag.
pub struct ThemeStore {
    flag: Cell<ThemeFlag>,
    persistence: Box<dyn ThemePersistence>,
    subscribers: RefCell<Vec<(SubscriptionHandle, Subscriber)>>,
    next_handle: Cell<u64>,
}

impl ThemeStore {
    /// Initial value: persisted flag, else the ambient system preference,
    /// else light.
    pub fn new(persistence: impl ThemePersistence + 'static, ambient: Option<ThemeFlag>) -> Self {
        let initial = persistence
            .load()
            .or(ambient)
            .unwrap_or(ThemeFlag::Light);
        Self {
            flag: Cell::new(initial),
            persistence: Box::new(persistence),
            subscribers: RefCell::new(Vec::new()),
            next_handle: Cell::new(0),
        }
    }

    /// Current value. Never fails.
    pub fn get(&self) -> ThemeFlag {
        self.flag.get()
    }

    /// Flips the flag, persists the new value best-effort, then notifies
    /// every subscriber in registration order before returning.
    pub fn toggle(&self) {
        let next = self.flag.get().flipped();
        self.flag.set(next);
        // In-memory state stays authoritative when the write fails.
        let _ = self.persistence.store(next);

        // Snapshot first so a handler may subscribe or unsubscribe
        // re-entrantly without poisoning the registry borrow.
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in snapshot {
            handler();
        }
    }

    /// Registers a handler invoked once per [`toggle`](Self::toggle) call.
    /// The notification carries no payload; handlers re-query [`get`](Self::get).
    pub fn subscribe(&self, handler: impl Fn() + 'static) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);
        self.subscribers
            .borrow_mut()
            .push((handle, Rc::new(handler)));
        handle
    }

    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        self.subscribers
            .borrow_mut()
            .retain(|(registered, _)| *registered != handle);
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shared in-memory backing so a second store can simulate a fresh
    /// process start against the same storage.
    #[derive(Clone, Default)]
    struct FakePersistence {
        slot: Rc<RefCell<Option<ThemeFlag>>>,
        failing: Rc<Cell<bool>>,
    }

    impl ThemePersistence for FakePersistence {
        fn load(&self) -> Option<ThemeFlag> {
            *self.slot.borrow()
        }

        fn store(&self, flag: ThemeFlag) -> Result<(), PersistenceError> {
            if self.failing.get() {
                return Err(PersistenceError("quota exceeded".into()));
            }
            *self.slot.borrow_mut() = Some(flag);
            Ok(())
        }
    }

    fn store_with(persistence: FakePersistence, ambient: Option<ThemeFlag>) -> ThemeStore {
        ThemeStore::new(persistence, ambient)
    }

    #[test]
    fn reads_are_idempotent() {
        let store = store_with(FakePersistence::default(), None);
        assert_eq!(store.get(), store.get());
    }

    #[test]
    fn defaults_to_light_without_persisted_or_ambient_value() {
        let store = store_with(FakePersistence::default(), None);
        assert_eq!(store.get(), ThemeFlag::Light);
    }

    #[test]
    fn ambient_dark_preference_wins_when_nothing_is_persisted() {
        let persistence = FakePersistence::default();
        let store = store_with(persistence.clone(), Some(ThemeFlag::Dark));
        assert_eq!(store.get(), ThemeFlag::Dark);

        store.toggle();
        assert_eq!(store.get(), ThemeFlag::Light);
        assert_eq!(*persistence.slot.borrow(), Some(ThemeFlag::Light));
    }

    #[test]
    fn persisted_value_beats_ambient_preference() {
        let persistence = FakePersistence::default();
        *persistence.slot.borrow_mut() = Some(ThemeFlag::Light);
        let store = store_with(persistence, Some(ThemeFlag::Dark));
        assert_eq!(store.get(), ThemeFlag::Light);
    }

    #[test]
    fn toggle_round_trips_from_both_values() {
        let light = store_with(FakePersistence::default(), None);
        light.toggle();
        light.toggle();
        assert_eq!(light.get(), ThemeFlag::Light);

        let dark = store_with(FakePersistence::default(), Some(ThemeFlag::Dark));
        dark.toggle();
        dark.toggle();
        assert_eq!(dark.get(), ThemeFlag::Dark);
    }

    #[test]
    fn reinitializing_from_the_same_backing_restores_the_last_value() {
        let persistence = FakePersistence::default();
        let store = store_with(persistence.clone(), None);
        store.toggle();
        assert_eq!(store.get(), ThemeFlag::Dark);

        let fresh = store_with(persistence, None);
        assert_eq!(fresh.get(), ThemeFlag::Dark);
    }

    #[test]
    fn every_subscriber_is_notified_once_in_registration_order() {
        let store = Rc::new(store_with(FakePersistence::default(), None));
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            store.subscribe(move || log.borrow_mut().push(name));
        }

        store.toggle();
        assert_eq!(*log.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn unsubscribed_handlers_receive_nothing() {
        let store = store_with(FakePersistence::default(), None);
        let calls: Rc<Cell<u32>> = Rc::default();

        let handle = store.subscribe({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        });

        store.toggle();
        store.unsubscribe(handle);
        store.toggle();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unsubscribing_twice_or_with_an_unknown_handle_is_a_no_op() {
        let store = store_with(FakePersistence::default(), None);
        let handle = store.subscribe(|| {});
        store.unsubscribe(handle);
        store.unsubscribe(handle);

        let other = store_with(FakePersistence::default(), None);
        let foreign = other.subscribe(|| {});
        store.unsubscribe(foreign);
    }

    #[test]
    fn handlers_observe_the_new_value_when_notified() {
        let store = Rc::new(store_with(FakePersistence::default(), None));
        let seen: Rc<RefCell<Vec<ThemeFlag>>> = Rc::default();

        store.subscribe({
            let store = Rc::clone(&store);
            let seen = Rc::clone(&seen);
            move || seen.borrow_mut().push(store.get())
        });

        store.toggle();
        store.toggle();
        assert_eq!(*seen.borrow(), [ThemeFlag::Dark, ThemeFlag::Light]);
    }

    #[test]
    fn persistence_failures_are_swallowed_and_subscribers_still_notified() {
        let persistence = FakePersistence::default();
        persistence.failing.set(true);
        let store = Rc::new(ThemeStore::new(persistence.clone(), None));

        let calls: Rc<Cell<u32>> = Rc::default();
        store.subscribe({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        });

        store.toggle();
        assert_eq!(store.get(), ThemeFlag::Dark);
        assert_eq!(calls.get(), 1);
        assert_eq!(*persistence.slot.borrow(), None);
    }

    #[test]
    fn a_handler_may_unsubscribe_itself_during_delivery() {
        let store = Rc::new(store_with(FakePersistence::default(), None));
        let handle_slot: Rc<RefCell<Option<SubscriptionHandle>>> = Rc::default();

        let handle = store.subscribe({
            let store = Rc::clone(&store);
            let handle_slot = Rc::clone(&handle_slot);
            move || {
                if let Some(handle) = handle_slot.borrow_mut().take() {
                    store.unsubscribe(handle);
                }
            }
        });
        *handle_slot.borrow_mut() = Some(handle);

        store.toggle();
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn flag_literals_round_trip() {
        assert_eq!(ThemeFlag::parse("light"), Some(ThemeFlag::Light));
        assert_eq!(ThemeFlag::parse("dark"), Some(ThemeFlag::Dark));
        assert_eq!(ThemeFlag::parse("solarized"), None);
        assert_eq!(ThemeFlag::Dark.as_str(), "dark");
    }
}
