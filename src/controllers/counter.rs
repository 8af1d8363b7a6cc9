use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// The four growth statistics, always updated together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub outlets: u32,
    pub customers: u32,
    pub years: u32,
    pub satisfaction: u32,
}

impl Counts {
    pub const ZERO: Counts = Counts {
        outlets: 0,
        customers: 0,
        years: 0,
        satisfaction: 0,
    };

    /// `floor(self * step / steps)` for every field, in exact integer arithmetic.
    fn scaled(&self, step: u32, steps: u32) -> Counts {
        let scale = |target: u32| (u64::from(target) * u64::from(step) / u64::from(steps)) as u32;
        Counts {
            outlets: scale(self.outlets),
            customers: scale(self.customers),
            years: scale(self.years),
            satisfaction: scale(self.satisfaction),
        }
    }
}

/// Timing and targets of the stats animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterConfig {
    pub targets: Counts,
    pub steps: u32,
    pub duration: Duration,
    /// Fraction of the stats region that must be visible to start
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            targets: Counts {
                outlets: 15,
                customers: 1_000_000,
                years: 10,
                satisfaction: 98,
            },
            steps: 60,
            duration: Duration::from_millis(2000),
            threshold: 0.5,
        }
    }
}

impl CounterConfig {
    pub fn steps(&self) -> u32 {
        self.steps.max(1)
    }

    /// Time between two timer firings.
    pub fn interval(&self) -> Duration {
        self.duration / self.steps()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating { step: u32 },
    Done,
}

/// One-shot animation of [`Counts`] from zero to the configured targets.
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    config: CounterConfig,
    phase: Phase,
    counts: Counts,
}

impl Default for CounterAnimator {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl CounterAnimator {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            counts: Counts::ZERO,
        }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Values shown after `step` of the run. The last step is pinned to the
    /// exact targets.
    pub fn counts_at(&self, step: u32) -> Counts {
        let steps = self.config.steps();
        if step >= steps {
            self.config.targets
        } else {
            self.config.targets.scaled(step, steps)
        }
    }

    /// Starts the run. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Animating { step: 0 };
        true
    }

    /// Advances one step and returns the new counts, or `None` when not animating.
    pub fn tick(&mut self) -> Option<Counts> {
        let Phase::Animating { step } = self.phase else {
            return None;
        };
        let step = step + 1;
        self.counts = self.counts_at(step);
        self.phase = if step >= self.config.steps() {
            Phase::Done
        } else {
            Phase::Animating { step }
        };
        Some(self.counts)
    }
}

/// Repeating timer capability.
pub trait Scheduler: 'static {
    type Handle: 'static;

    /// Calls `tick` every `interval` until cancelled. `None` if the timer
    /// could not be installed.
    fn schedule_repeating(&self, interval: Duration, tick: Box<dyn FnMut()>)
        -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Viewport visibility capability.
pub trait VisibilityObserver {
    type Region: ?Sized;
    type Subscription;

    /// Calls `on_visible` whenever at least `threshold` of `region` becomes visible.
    fn subscribe(
        &self,
        region: &Self::Region,
        threshold: f64,
        on_visible: Box<dyn FnMut()>,
    ) -> Option<Self::Subscription>;

    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// Whether an observed region counts as visible. Observers also report
/// entries that merely started or stopped intersecting, so the ratio has to
/// be checked as well.
pub fn crosses_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}

type Publish = Rc<RefCell<Box<dyn FnMut(Counts)>>>;

/// Runs a [`CounterAnimator`] on a [`Scheduler`], holding at most one timer.
pub struct CounterDriver<S: Scheduler> {
    animator: Rc<RefCell<CounterAnimator>>,
    scheduler: Rc<S>,
    timer: Rc<RefCell<Option<S::Handle>>>,
    publish: Publish,
}

impl<S: Scheduler> CounterDriver<S> {
    pub fn new(config: CounterConfig, scheduler: S, publish: impl FnMut(Counts) + 'static) -> Self {
        let publish: Box<dyn FnMut(Counts)> = Box::new(publish);
        Self {
            animator: Rc::new(RefCell::new(CounterAnimator::new(config))),
            scheduler: Rc::new(scheduler),
            timer: Rc::new(RefCell::new(None)),
            publish: Rc::new(RefCell::new(publish)),
        }
    }

    pub fn counts(&self) -> Counts {
        self.animator.borrow().counts()
    }

    pub fn phase(&self) -> Phase {
        self.animator.borrow().phase()
    }

    pub fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }

    /// Visibility callback. Starts the animation the first time it is called
    /// and does nothing afterwards. When the timer cannot be installed the
    /// animator stays idle so a later call can retry.
    pub fn on_visible(&self) -> bool {
        if self.is_running() || self.phase() != Phase::Idle {
            return false;
        }

        let interval = self.animator.borrow().config().interval();
        let animator = Rc::clone(&self.animator);
        let scheduler = Rc::clone(&self.scheduler);
        let timer = Rc::clone(&self.timer);
        let publish = Rc::clone(&self.publish);

        let tick = Box::new(move || {
            let (next, done) = {
                let mut animator = animator.borrow_mut();
                let next = animator.tick();
                (next, animator.is_done())
            };
            if let Some(counts) = next {
                (*publish.borrow_mut())(counts);
            }
            if done {
                let pending = timer.borrow_mut().take();
                if let Some(handle) = pending {
                    scheduler.cancel(handle);
                }
            }
        });

        let Some(handle) = self.scheduler.schedule_repeating(interval, tick) else {
            tracing::warn!("could not start stats counter timer");
            return false;
        };
        self.animator.borrow_mut().trigger();
        *self.timer.borrow_mut() = Some(handle);
        tracing::debug!(?interval, "stats counter animation started");
        true
    }

    /// Cancels a pending timer, if any.
    pub fn teardown(&self) {
        let pending = self.timer.borrow_mut().take();
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
            tracing::debug!("stats counter timer cancelled");
        }
    }
}

/// Live visibility subscription for the stats region. Releasing it (or
/// dropping it) unsubscribes and cancels any running animation.
pub struct StatsWatch<O: VisibilityObserver, S: Scheduler> {
    observer: O,
    subscription: Option<O::Subscription>,
    driver: Rc<CounterDriver<S>>,
}

impl<O: VisibilityObserver, S: Scheduler> StatsWatch<O, S> {
    pub fn driver(&self) -> &CounterDriver<S> {
        &self.driver
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.observer.unsubscribe(subscription);
        }
        self.driver.teardown();
    }
}

impl<O: VisibilityObserver, S: Scheduler> Drop for StatsWatch<O, S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Subscribes `driver` to the visibility of `region`.
pub fn watch_stats<O, S>(observer: O, region: &O::Region, driver: CounterDriver<S>) -> StatsWatch<O, S>
where
    O: VisibilityObserver,
    S: Scheduler,
{
    let driver = Rc::new(driver);
    let threshold = driver.animator.borrow().config().threshold;
    let on_visible = {
        let driver = Rc::clone(&driver);
        Box::new(move || {
            driver.on_visible();
        })
    };
    let subscription = observer.subscribe(region, threshold, on_visible);
    if subscription.is_none() {
        tracing::warn!("stats region could not be observed, counters stay at zero");
    }
    StatsWatch {
        observer,
        subscription,
        driver,
    }
}

/// Formats `n` with comma thousands separators: `1000000` becomes `"1,000,000"`.
pub fn format_grouped(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
