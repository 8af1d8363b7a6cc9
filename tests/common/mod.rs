//! In-memory stand-ins for the browser capabilities.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use bapoos::controllers::{
    crosses_threshold, Acknowledger, DiagnosticSink, FormKind, FormSubmission, Scheduler,
    SectionScroller, VisibilityObserver,
};
use bapoos::models::SectionId;

enum Slot {
    Active(Box<dyn FnMut()>),
    Running,
    Cancelled,
}

/// Repeating timers that fire only when `advance` is called.
#[derive(Clone, Default)]
pub struct FakeClock {
    slots: Rc<RefCell<Vec<Slot>>>,
    pub scheduled: Rc<Cell<usize>>,
}

impl FakeClock {
    pub fn live_timers(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|s| !matches!(s, Slot::Cancelled))
            .count()
    }

    /// Fires every live timer `ticks` times.
    pub fn advance(&self, ticks: usize) {
        for _ in 0..ticks {
            let len = self.slots.borrow().len();
            for id in 0..len {
                let slot = std::mem::replace(&mut self.slots.borrow_mut()[id], Slot::Running);
                match slot {
                    Slot::Active(mut tick) => {
                        tick();
                        let mut slots = self.slots.borrow_mut();
                        if matches!(slots[id], Slot::Running) {
                            slots[id] = Slot::Active(tick);
                        }
                    }
                    other => self.slots.borrow_mut()[id] = other,
                }
            }
        }
    }
}

impl Scheduler for FakeClock {
    type Handle = usize;

    fn schedule_repeating(&self, _interval: Duration, tick: Box<dyn FnMut()>) -> Option<usize> {
        self.scheduled.set(self.scheduled.get() + 1);
        let mut slots = self.slots.borrow_mut();
        slots.push(Slot::Active(tick));
        Some(slots.len() - 1)
    }

    fn cancel(&self, handle: usize) {
        self.slots.borrow_mut()[handle] = Slot::Cancelled;
    }
}

/// A viewport the test scrolls by hand.
#[derive(Clone, Default)]
pub struct FakeViewport {
    callback: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
    pub threshold: Rc<Cell<f64>>,
    pub unsubscribed: Rc<Cell<bool>>,
}

impl FakeViewport {
    pub fn scroll_into_view(&self) {
        self.show(true, 1.0);
    }

    /// Reports an observer entry with the given intersection state.
    pub fn show(&self, intersecting: bool, ratio: f64) {
        if !crosses_threshold(intersecting, ratio, self.threshold.get()) {
            return;
        }
        if let Some(on_visible) = self.callback.borrow_mut().as_mut() {
            on_visible();
        }
    }
}

impl VisibilityObserver for FakeViewport {
    type Region = str;
    type Subscription = ();

    fn subscribe(&self, _region: &str, threshold: f64, on_visible: Box<dyn FnMut()>) -> Option<()> {
        self.threshold.set(threshold);
        *self.callback.borrow_mut() = Some(on_visible);
        Some(())
    }

    fn unsubscribe(&self, _subscription: ()) {
        self.callback.borrow_mut().take();
        self.unsubscribed.set(true);
    }
}

/// Renders every section except the ones listed as missing.
#[derive(Default)]
pub struct FakeDocument {
    pub missing: Vec<SectionId>,
    pub scrolled: RefCell<Vec<SectionId>>,
}

impl SectionScroller for FakeDocument {
    fn scroll_to(&self, section: SectionId) -> bool {
        if self.missing.contains(&section) {
            return false;
        }
        self.scrolled.borrow_mut().push(section);
        true
    }
}

/// Captures what would go to the console and to `alert`.
#[derive(Clone, Default)]
pub struct Browser {
    pub console: Rc<RefCell<Vec<String>>>,
    pub alerts: Rc<RefCell<Vec<String>>>,
}

impl DiagnosticSink for Browser {
    fn record(&self, kind: FormKind, submission: &FormSubmission) {
        let json = serde_json::to_string(submission).unwrap();
        self.console
            .borrow_mut()
            .push(format!("{} Form Data: {json}", kind.label()));
    }
}

impl Acknowledger for Browser {
    fn acknowledge(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
