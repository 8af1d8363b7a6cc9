use std::cell::RefCell;
use std::time::Duration;

use ::web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use leptos::logging;
use leptos::prelude::{set_interval_with_handle, IntervalHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::controllers::{crosses_threshold, Scheduler, VisibilityObserver};

/// `setInterval` on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn schedule_repeating(&self, interval: Duration, tick: Box<dyn FnMut()>) -> Option<IntervalHandle> {
        let tick = RefCell::new(tick);
        set_interval_with_handle(move || (*tick.borrow_mut())(), interval)
            .map_err(|e| logging::warn!("setInterval failed: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: IntervalHandle) {
        handle.clear();
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer and its JS callback alive until unsubscribed.
pub struct ObserverSubscription {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

/// `IntersectionObserver` with a single threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportObserver;

impl VisibilityObserver for ViewportObserver {
    type Region = Element;
    type Subscription = ObserverSubscription;

    fn subscribe(
        &self,
        region: &Element,
        threshold: f64,
        mut on_visible: Box<dyn FnMut()>,
    ) -> Option<ObserverSubscription> {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                });
                if visible {
                    on_visible();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| logging::warn!("IntersectionObserver unavailable: {e:?}"))
                .ok()?;
        observer.observe(region);

        Some(ObserverSubscription {
            observer,
            _callback: callback,
        })
    }

    fn unsubscribe(&self, subscription: ObserverSubscription) {
        subscription.observer.disconnect();
    }
}
