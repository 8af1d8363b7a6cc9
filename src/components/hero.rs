use leptos::prelude::*;

use super::image::FallbackImage;
use super::nav::go_to;
use crate::models::{SectionId, HERO_IMAGE};

#[component]
pub fn Hero(menu_open: RwSignal<bool>, dialog_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <section id=SectionId::Home.as_str() class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1>"Crafting Flavours You’ll Crave Again."</h1>
                    <p class="subtitle">"Fast. Fresh. Flavour-packed — Join our franchise family."</p>
                    <div class="cta-buttons">
                        <button class="btn btn-primary btn-lg" on:click=move |_| dialog_open.set(true)>
                            "Become a Franchise Partner"
                        </button>
                        <button
                            class="btn btn-outline btn-lg"
                            on:click=move |_| go_to(SectionId::Menu, menu_open)
                        >
                            "Explore Menu"
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="animate-float">
                        <FallbackImage src=HERO_IMAGE alt="Featured Food" width="500" height="500" class="hero-image"/>
                        <div class="hero-glow"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
