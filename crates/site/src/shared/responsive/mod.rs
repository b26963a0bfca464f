mod context;
mod store;
mod watcher;

pub use context::{use_responsive, ResponsiveContext, ResponsiveProvider};
pub use store::{Breakpoint, BreakpointState, BreakpointStore, Subscription, DEFAULT_BREAKPOINTS};
