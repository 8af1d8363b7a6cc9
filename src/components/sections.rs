//! Static content sections: rendered once from `models::content`.

use leptos::prelude::*;

use super::image::FallbackImage;
use crate::models::{SectionId, FEATURES, HIGHLIGHTS, MENU_ITEMS, TESTIMONIALS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about muted">
            <div class="container">
                <div class="section-header">
                    <h2>"Why Choose BAPOO'S?"</h2>
                    <p>
                        "Since 2015, we've been serving Gujarat with authentic flavors and modern convenience. "
                        "Our commitment to quality and taste has made us a household name."
                    </p>
                </div>
                <div class="grid grid-4">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card feature-card">
                                    <div class="icon-badge">
                                        <span class=feature.icon.class()></span>
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p class="muted-text">{feature.caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn MenuSection() -> impl IntoView {
    view! {
        <section id=SectionId::Menu.as_str() class="menu">
            <div class="container">
                <div class="section-header">
                    <h2>"Signature Menu"</h2>
                    <p>"Crafted with love, served with pride"</p>
                </div>
                <div class="grid grid-3">
                    {MENU_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="card menu-card">
                                    <div class="menu-image">
                                        <FallbackImage src=item.image alt=item.name lazy=true/>
                                    </div>
                                    <div class="menu-body">
                                        <div class="menu-title">
                                            <h3>{item.name}</h3>
                                            <span class="price">{item.price}</span>
                                        </div>
                                        <p class="muted-text">{item.description}</p>
                                        // Ordering is out of scope; the button is decorative
                                        <button type="button" class="btn btn-outline btn-block">"Add to Cart"</button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HighlightStrip() -> impl IntoView {
    view! {
        <section class="highlights">
            <div class="container grid grid-6">
                {HIGHLIGHTS
                    .iter()
                    .map(|h| {
                        view! {
                            <div class="highlight">
                                <span class=h.icon.class()></span>
                                <p>{h.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials muted">
            <div class="container">
                <div class="section-header">
                    <h2>"What People Say"</h2>
                    <p>"Hear from our franchise partners and customers"</p>
                </div>
                <div class="grid grid-3">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="card testimonial-card">
                                    <div class="testimonial-author">
                                        <FallbackImage
                                            src=t.avatar
                                            alt=t.name
                                            width="60"
                                            height="60"
                                            class="avatar"
                                        />
                                        <div>
                                            <h3>{t.name}</h3>
                                            <p class="muted-text">{t.role}</p>
                                        </div>
                                    </div>
                                    <div class="stars">
                                        {(0..5).map(|_| view! { <span class="icon icon-star filled"></span> }).collect_view()}
                                    </div>
                                    <p class="quote">"\u{201c}" {t.quote} "\u{201d}"</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
