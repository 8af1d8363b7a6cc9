use leptos::prelude::*;

use crate::controllers::{format_grouped, Counts};

/// One animated figure of the growth stats band
#[derive(Clone, Copy)]
struct Stat {
    label: &'static str,
    suffix: &'static str,
    value: fn(&Counts) -> u32,
}

fn outlets(c: &Counts) -> u32 {
    c.outlets
}

fn customers(c: &Counts) -> u32 {
    c.customers
}

fn years(c: &Counts) -> u32 {
    c.years
}

fn satisfaction(c: &Counts) -> u32 {
    c.satisfaction
}

static STATS: [Stat; 4] = [
    Stat { label: "Outlets", suffix: "+", value: outlets },
    Stat { label: "Happy Customers", suffix: "+", value: customers },
    Stat { label: "Years of Excellence", suffix: "+", value: years },
    Stat { label: "Satisfaction Rate", suffix: "%", value: satisfaction },
];

/// Growth figures that count up from zero the first time at least half of
/// the band scrolls into view.
#[component]
pub fn StatsSection() -> impl IntoView {
    let counts = RwSignal::new(Counts::ZERO);
    let stats_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::controllers::{watch_stats, CounterConfig, CounterDriver, StatsWatch};
        use crate::platform::{IntervalScheduler, ViewportObserver};

        let watch = StoredValue::new_local(None::<StatsWatch<ViewportObserver, IntervalScheduler>>);

        Effect::new(move |_| {
            let Some(section) = stats_ref.get() else {
                return;
            };
            if watch.with_value(Option::is_some) {
                return;
            }
            let driver = CounterDriver::new(CounterConfig::default(), IntervalScheduler, move |c| {
                counts.set(c)
            });
            let region: &::web_sys::Element = &section;
            watch.set_value(Some(watch_stats(ViewportObserver, region, driver)));
        });

        // Dropping the watch unsubscribes and cancels a pending timer
        on_cleanup(move || watch.dispose());
    }

    view! {
        <section node_ref=stats_ref class="stats muted">
            <div class="container grid grid-4">
                {STATS
                    .iter()
                    .map(|stat| {
                        let Stat { label, suffix, value } = *stat;
                        view! {
                            <div class="stat">
                                <div class="stat-value">
                                    {move || format!("{}{suffix}", format_grouped(value(&counts.get())))}
                                </div>
                                <p class="muted-text">{label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
