use leptos::prelude::*;

use crate::components::{
    About, ContactSection, Footer, FranchiseDialog, FranchiseSection, Gallery, Hero,
    HighlightStrip, MenuSection, SiteNav, StatsSection, Testimonials,
};

/// The whole site. Owns the mobile-menu and franchise-dialog flags and hands
/// them to the sections that change them.
#[component]
pub fn HomePage() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let dialog_open = RwSignal::new(false);

    // Honour a deep link like `/#franchise` once the page is interactive.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::controllers::navigation;
        use crate::platform::DomScroller;

        let Some(hash) = ::web_sys::window().and_then(|w| w.location().hash().ok()) else {
            return;
        };
        let mut open = menu_open.get_untracked();
        navigation::activate_str(&DomScroller, &hash, &mut open);
        menu_open.set(open);
    });

    view! {
        <div class="home-page">
            <SiteNav menu_open=menu_open/>
            <Hero menu_open=menu_open dialog_open=dialog_open/>
            <About/>
            <MenuSection/>
            <HighlightStrip/>
            <FranchiseSection dialog_open=dialog_open/>
            <StatsSection/>
            <Gallery/>
            <Testimonials/>
            <ContactSection/>
            <Footer menu_open=menu_open/>
            <FranchiseDialog open=dialog_open/>
        </div>
    }
}
