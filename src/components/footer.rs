use leptos::prelude::*;

use super::image::FallbackImage;
use super::nav::go_to;
use crate::models::{SectionId, BRAND_NAME, BRAND_SHORT, LEGAL_LINKS, LOGO};

#[component]
pub fn Footer(menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container grid grid-4">
                <div>
                    <div class="footer-brand">
                        <FallbackImage src=LOGO alt="BAPOO's Logo" width="40" height="40" class="logo"/>
                        <span>{BRAND_SHORT}</span>
                    </div>
                    <p class="muted-text">"Gujarat's favorite fast food destination since 2015."</p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {SectionId::QUICK_LINKS
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <button class="footer-link" on:click=move |_| go_to(section, menu_open)>
                                            {section.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Legal"</h3>
                    <ul>
                        {LEGAL_LINKS
                            .iter()
                            .map(|label| view! { <li><a href="#" class="footer-link">{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Newsletter"</h3>
                    <p class="muted-text">"Stay updated with our latest offers"</p>
                    // Subscriptions are not collected anywhere
                    <div class="newsletter">
                        <input type="email" placeholder="Your email"/>
                        <button type="button" class="btn btn-primary">"Subscribe"</button>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2025 " {BRAND_NAME} ". All rights reserved."</p>
            </div>
        </footer>
    }
}
