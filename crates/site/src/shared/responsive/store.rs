//! Observable match-state for a fixed set of named min-width breakpoints.
//!
//! The store itself knows nothing about the browser: it keeps the current
//! name → bool mapping and a subscriber list, and is driven by whatever
//! feeds it match-change events (see `watcher`). This keeps the state and
//! notification logic testable off the wasm target.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A named min-width breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub min_width: u32,
}

impl Breakpoint {
    pub const fn new(name: &'static str, min_width: u32) -> Self {
        Self { name, min_width }
    }

    /// CSS media query string for this breakpoint.
    pub fn media_query(&self) -> String {
        format!("(min-width: {}px)", self.min_width)
    }
}

/// The breakpoint set the site lays out against.
pub const DEFAULT_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::new("sm", 640),
    Breakpoint::new("md", 768),
    Breakpoint::new("lg", 1024),
    Breakpoint::new("xl", 1280),
    Breakpoint::new("2xl", 1536),
];

/// Snapshot of the current match state for every registered breakpoint.
///
/// The key set is fixed at construction. Every breakpoint starts out
/// unmatched until the environment reports otherwise, so a context with no
/// viewport at all simply reads all-false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointState {
    entries: Vec<(&'static str, bool)>,
}

impl BreakpointState {
    pub fn unmatched(breakpoints: &[Breakpoint]) -> Self {
        Self {
            entries: breakpoints.iter().map(|bp| (bp.name, false)).collect(),
        }
    }

    /// Whether the named breakpoint currently matches. Unknown names read false.
    pub fn matches(&self, name: &str) -> bool {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .is_some_and(|(_, matched)| *matched)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Updates one flag. Returns whether the value actually flipped; unknown
    /// names are ignored.
    fn set(&mut self, name: &str, matched: bool) -> bool {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) if entry.1 != matched => {
                entry.1 = matched;
                true
            }
            _ => false,
        }
    }
}

struct Subscriber {
    id: u64,
    notify: Rc<dyn Fn(&BreakpointState)>,
}

/// Shared core: state map plus subscriber list. Watchers hold an `Rc` to it
/// and push match-change events in; subscriptions hold a `Weak` so a released
/// handle can sever itself without keeping the store alive.
pub(crate) struct Registry {
    state: RefCell<BreakpointState>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
}

impl Registry {
    fn new(state: BreakpointState) -> Self {
        Self {
            state: RefCell::new(state),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Records one breakpoint's match flag and, if it flipped, notifies every
    /// current subscriber with a full snapshot.
    ///
    /// The subscriber list is cloned before invocation so a callback may
    /// release its own (or any other) subscription mid-notification; such a
    /// subscriber can still receive the in-flight snapshot, never a later one.
    pub(crate) fn apply(&self, name: &str, matched: bool) {
        let changed = self.state.borrow_mut().set(name, matched);
        if !changed {
            return;
        }
        let snapshot = self.state.borrow().clone();
        let notifies: Vec<Rc<dyn Fn(&BreakpointState)>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|sub| Rc::clone(&sub.notify))
            .collect();
        for notify in notifies {
            notify(&snapshot);
        }
    }

    fn snapshot(&self) -> BreakpointState {
        self.state.borrow().clone()
    }

    fn add_subscriber(&self, notify: Rc<dyn Fn(&BreakpointState)>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push(Subscriber { id, notify });
        id
    }

    fn remove_subscriber(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|sub| sub.id != id);
    }
}

/// Handle returned by [`BreakpointStore::subscribe`]. Releasing it (or just
/// dropping it) guarantees the callback is never invoked again.
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    pub fn release(self) {
        // Drop does the work.
    }

    fn detach(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove_subscriber(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Per-view breakpoint store.
///
/// Each instance owns its own watchers and subscriber list; any number of
/// independent instances may coexist. Construct with [`start`] in the browser
/// or [`detached`] where no viewport exists — a detached store keeps the
/// all-unmatched state forever and tears down as a no-op.
///
/// [`start`]: BreakpointStore::start
/// [`detached`]: BreakpointStore::detached
pub struct BreakpointStore {
    pub(crate) registry: Rc<Registry>,
    watchers: Vec<super::watcher::Watcher>,
}

impl BreakpointStore {
    /// Store with live viewport watchers. Degrades to a detached store when
    /// the environment offers no viewport facility.
    pub fn start(breakpoints: &[Breakpoint]) -> Self {
        let mut store = Self::detached(breakpoints);
        store.watchers = super::watcher::attach(&store.registry, breakpoints);
        store
    }

    /// Store with no watchers: every breakpoint reads unmatched, permanently.
    pub fn detached(breakpoints: &[Breakpoint]) -> Self {
        Self {
            registry: Rc::new(Registry::new(BreakpointState::unmatched(breakpoints))),
            watchers: Vec::new(),
        }
    }

    /// Most recent known match state for every breakpoint.
    pub fn current_state(&self) -> BreakpointState {
        self.registry.snapshot()
    }

    /// Registers a callback invoked with the full snapshot each time any
    /// single breakpoint flips. Subscribers are independent of each other;
    /// invocation order is unspecified.
    pub fn subscribe(&self, notify: impl Fn(&BreakpointState) + 'static) -> Subscription {
        let id = self.registry.add_subscriber(Rc::new(notify));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Releases every viewport watcher. Idempotent: the second and later
    /// calls find nothing left to release.
    pub fn teardown(&mut self) {
        for watcher in self.watchers.drain(..) {
            watcher.detach();
        }
    }
}

impl Drop for BreakpointStore {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BREAKPOINTS: [Breakpoint; 3] = [
        Breakpoint::new("sm", 640),
        Breakpoint::new("md", 768),
        Breakpoint::new("lg", 1024),
    ];

    #[test]
    fn cold_start_reads_all_unmatched() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        let state = store.current_state();
        for (name, matched) in state.iter() {
            assert!(!matched, "{name} should start unmatched");
        }
    }

    #[test]
    fn unknown_names_read_false() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        assert!(!store.current_state().matches("3xl"));
    }

    #[test]
    fn flip_notifies_subscribers_with_full_snapshot() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        let seen: Rc<RefCell<Vec<BreakpointState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        store.registry.apply("lg", true);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].matches("lg"));
        assert!(!seen[0].matches("sm"));
        assert!(!seen[0].matches("md"));
        assert!(store.current_state().matches("lg"));
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.registry.apply("md", false);
        assert_eq!(calls.get(), 0);

        store.registry.apply("md", true);
        store.registry.apply("md", true);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn released_subscription_receives_nothing_further() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.registry.apply("sm", true);
        assert_eq!(calls.get(), 1);

        sub.release();
        store.registry.apply("sm", false);
        store.registry.apply("lg", true);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropping_the_handle_also_unsubscribes() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        drop(store.subscribe(move |_| counter.set(counter.get() + 1)));

        store.registry.apply("sm", true);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn subscribers_are_independent() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));
        let first_counter = Rc::clone(&first);
        let second_counter = Rc::clone(&second);
        let sub = store.subscribe(move |_| first_counter.set(first_counter.get() + 1));
        let _keep = store.subscribe(move |_| second_counter.set(second_counter.get() + 1));

        store.registry.apply("md", true);
        sub.release();
        store.registry.apply("md", false);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn release_during_notification_is_harmless() {
        let store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        let calls = Rc::new(Cell::new(0u32));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let counter = Rc::clone(&calls);
        let own_handle = Rc::clone(&slot);
        let sub = store.subscribe(move |_| {
            counter.set(counter.get() + 1);
            // Self-release from inside the callback.
            own_handle.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        store.registry.apply("lg", true);
        store.registry.apply("lg", false);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn teardown_twice_is_a_noop() {
        let mut store = BreakpointStore::detached(&TEST_BREAKPOINTS);
        store.teardown();
        store.teardown();
        // State stays readable after teardown.
        assert!(!store.current_state().matches("sm"));
    }
}
