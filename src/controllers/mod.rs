//! Page state machines. Nothing in here touches the DOM directly: every
//! browser capability is reached through a trait so the logic runs (and is
//! tested) natively.

pub mod carousel;
pub mod counter;
pub mod forms;
pub mod navigation;

pub use carousel::{Carousel, CarouselError};
pub use counter::{
    crosses_threshold, format_grouped, watch_stats, CounterAnimator, CounterConfig, CounterDriver,
    Counts, Phase, Scheduler, StatsWatch, VisibilityObserver,
};
pub use forms::{
    Acknowledger, DiagnosticSink, FieldSet, FieldSpec, FormIntake, FormKind, FormSubmission,
};
pub use navigation::{activate, activate_str, SectionScroller};
