//! Browser side of the breakpoint store: one `MediaQueryList` watcher per
//! breakpoint, feeding match-change events into the shared registry.

use super::store::{Breakpoint, Registry};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

/// A registered `change` listener on one media query. Detaching removes the
/// listener; dropping a detached watcher releases the closure.
pub(crate) struct Watcher {
    mql: MediaQueryList,
    handler: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl Watcher {
    pub(crate) fn detach(&self) {
        let _ = self
            .mql
            .remove_event_listener_with_callback("change", self.handler.as_ref().unchecked_ref());
    }
}

/// Registers one watcher per breakpoint and applies each query's current
/// match value to the registry.
///
/// A context with no window or no `matchMedia` yields no watchers at all, so
/// the registry keeps its all-unmatched cold-start state.
pub(crate) fn attach(registry: &Rc<Registry>, breakpoints: &[Breakpoint]) -> Vec<Watcher> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };

    let mut watchers = Vec::with_capacity(breakpoints.len());
    for breakpoint in breakpoints {
        let mql = match window.match_media(&breakpoint.media_query()) {
            Ok(Some(mql)) => mql,
            _ => {
                log::debug!("matchMedia unavailable for {}", breakpoint.name);
                continue;
            }
        };

        // First evaluation: replace the cold-start default with the real value.
        registry.apply(breakpoint.name, mql.matches());

        let name = breakpoint.name;
        let registry = Rc::clone(registry);
        let handler = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            registry.apply(name, event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        if mql
            .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
            .is_err()
        {
            continue;
        }
        watchers.push(Watcher { mql, handler });
    }
    watchers
}
