use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::models::{LOGO, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bapoos.css"/>
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <Link rel="icon" href=LOGO/>
        <Link rel="apple-touch-icon" href=LOGO/>

        <Router>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
