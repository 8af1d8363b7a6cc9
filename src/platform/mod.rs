//! Browser-backed implementations of the controller capabilities. Outside
//! the hydrate build they are inert.

mod dom;
#[cfg(feature = "hydrate")]
mod viewport;

pub use dom::{AlertAcknowledger, ConsoleSink, DomScroller};
#[cfg(feature = "hydrate")]
pub use viewport::{IntervalScheduler, ObserverSubscription, ViewportObserver};
