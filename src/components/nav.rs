use leptos::prelude::*;

use super::image::FallbackImage;
use crate::controllers::navigation;
use crate::models::{SectionId, BRAND_NAME, LOGO};
use crate::platform::DomScroller;

/// Scrolls to `section`, closing the mobile sheet if the section exists.
pub fn go_to(section: SectionId, menu_open: RwSignal<bool>) {
    let before = menu_open.get_untracked();
    let mut open = before;
    navigation::activate(&DomScroller, section, &mut open);
    if open != before {
        menu_open.set(open);
    }
}

#[component]
pub fn SiteNav(menu_open: RwSignal<bool>) -> impl IntoView {
    let links = move |class: &'static str| {
        SectionId::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button class=class on:click=move |_| go_to(section, menu_open)>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="main-nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <FallbackImage src=LOGO alt="BAPOO's FAST FOOD Logo" width="50" height="50" class="logo"/>
                    <span class="brand-name">{BRAND_NAME}</span>
                </div>

                <div class="nav-links">{links("nav-link")}</div>

                <button
                    class="nav-toggle"
                    aria-label="Open menu"
                    on:click=move |_| menu_open.set(true)
                >
                    "☰"
                </button>
            </div>

            // Mobile sheet
            <Show when=move || menu_open.get()>
                <div class="sheet-overlay" on:click=move |_| menu_open.set(false)></div>
                <aside class="sheet">
                    <button
                        class="sheet-close"
                        aria-label="Close menu"
                        on:click=move |_| menu_open.set(false)
                    >
                        "✕"
                    </button>
                    <div class="sheet-links">{links("sheet-link")}</div>
                </aside>
            </Show>
        </nav>
    }
}
