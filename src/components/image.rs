use leptos::prelude::*;

use crate::models::displayed_image;

/// `<img>` that swaps to the placeholder asset once its source fails to load.
#[component]
pub fn FallbackImage(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] width: Option<&'static str>,
    #[prop(optional)] height: Option<&'static str>,
    #[prop(optional)] lazy: bool,
) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <img
            src=move || displayed_image(src, failed.get())
            alt=alt
            class=class
            width=width
            height=height
            loading=lazy.then_some("lazy")
            on:error=move |_| failed.set(true)
        />
    }
}
