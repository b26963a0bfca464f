//! Leptos adapter for the breakpoint store.
//!
//! `ResponsiveProvider` owns one store instance per mounted provider,
//! mirrors its snapshots into a signal, and releases every watcher when the
//! owning view is destroyed. Descendants read through `ResponsiveContext`.

use super::store::{BreakpointState, BreakpointStore, Subscription, DEFAULT_BREAKPOINTS};
use leptos::prelude::*;

/// Read-only reactive view of the breakpoint store.
#[derive(Clone, Copy)]
pub struct ResponsiveContext {
    pub state: RwSignal<BreakpointState>,
}

impl ResponsiveContext {
    /// Whether the named breakpoint currently matches. Reactive.
    pub fn matches(&self, name: &str) -> bool {
        self.state.with(|state| state.matches(name))
    }
}

struct OwnedStore {
    store: BreakpointStore,
    _subscription: Subscription,
}

/// Provides a [`ResponsiveContext`] to children components.
///
/// Each mounted provider is fully independent: it creates its own store,
/// and `on_cleanup` tears the watchers down on every exit path, so repeated
/// mounts never accumulate listeners.
#[component]
pub fn ResponsiveProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(BreakpointState::unmatched(&DEFAULT_BREAKPOINTS));

    let store = BreakpointStore::start(&DEFAULT_BREAKPOINTS);
    let subscription = store.subscribe(move |snapshot| state.set(snapshot.clone()));
    // Pick up the values the watchers applied during registration.
    state.set(store.current_state());

    let owned = StoredValue::new_local(Some(OwnedStore {
        store,
        _subscription: subscription,
    }));
    on_cleanup(move || {
        owned.update_value(|slot| {
            if let Some(mut owned) = slot.take() {
                owned.store.teardown();
            }
        });
    });

    provide_context(ResponsiveContext { state });

    children()
}

/// Hook to use the responsive context.
pub fn use_responsive() -> ResponsiveContext {
    use_context::<ResponsiveContext>()
        .expect("ResponsiveContext not found. Wrap the view with ResponsiveProvider.")
}
