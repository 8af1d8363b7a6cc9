use leptos::prelude::*;

use crate::controllers::Carousel;
use crate::models::{displayed_image, SectionId, GALLERY_IMAGES};

#[component]
pub fn Gallery() -> impl IntoView {
    let Ok(carousel) = Carousel::new(GALLERY_IMAGES.len()) else {
        return ().into_any();
    };
    let carousel = RwSignal::new(carousel);
    // slides whose asset failed to load
    let failed = RwSignal::new([false; GALLERY_IMAGES.len()]);

    let image = move || {
        let index = carousel.get().current();
        displayed_image(GALLERY_IMAGES[index], failed.get()[index])
    };

    view! {
        <section id=SectionId::Gallery.as_str() class="gallery">
            <div class="container">
                <div class="section-header">
                    <h2>"Gallery & Ambience"</h2>
                    <p>"Experience the BAPOO'S vibe"</p>
                </div>
                <div class="carousel">
                    <div class="carousel-frame">
                        <img
                            src=image
                            alt=move || format!("Gallery image {}", carousel.get().current() + 1)
                            on:error=move |_| {
                                let index = carousel.get_untracked().current();
                                failed.update(|f| f[index] = true);
                            }
                        />
                    </div>
                    <button
                        class="carousel-arrow prev"
                        aria-label="Previous image"
                        on:click=move |_| carousel.update(Carousel::previous)
                    >
                        "‹"
                    </button>
                    <button
                        class="carousel-arrow next"
                        aria-label="Next image"
                        on:click=move |_| carousel.update(Carousel::next)
                    >
                        "›"
                    </button>
                    <div class="carousel-dots">
                        {(0..GALLERY_IMAGES.len())
                            .map(|i| {
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:active=move || carousel.get().is_current(i)
                                        aria-label=format!("Show image {}", i + 1)
                                        on:click=move |_| carousel.update(|c| c.jump_to(i))
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}
