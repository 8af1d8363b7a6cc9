use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use super::fields::{SelectField, TextAreaField, TextField};
use crate::controllers::{FieldSet, FormIntake, FormKind};
use crate::models::{SectionId, FRANCHISE_OFFERS, INVESTMENT_RANGES};
use crate::platform::{AlertAcknowledger, ConsoleSink};

#[component]
pub fn FranchiseSection(dialog_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <section id=SectionId::Franchise.as_str() class="franchise">
            <div class="container">
                <div class="section-header">
                    <h2>"Franchise Opportunity"</h2>
                    <p>"Join the BAPOO'S family and be part of Gujarat's fastest-growing fast food chain"</p>
                </div>
                <div class="grid grid-3">
                    {FRANCHISE_OFFERS
                        .iter()
                        .map(|offer| {
                            view! {
                                <div class="card offer-card">
                                    <h3>{offer.title}</h3>
                                    <p class="offer-headline">{offer.headline}</p>
                                    <ul>
                                        {offer.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="cta-buttons centered">
                    <button class="btn btn-primary btn-lg" on:click=move |_| dialog_open.set(true)>
                        "Apply for Franchise"
                    </button>
                    <a href="#" download class="btn btn-outline btn-lg">"Download Brochure"</a>
                </div>
            </div>
        </section>
    }
}

/// Modal application form. Submitting logs the values, thanks the visitor
/// and closes the dialog. Closing it any other way drops the typed values.
#[component]
pub fn FranchiseDialog(open: RwSignal<bool>) -> impl IntoView {
    let fields = RwSignal::new(FieldSet::new(FormKind::Franchise));
    let intake = FormIntake::new(FormKind::Franchise, ConsoleSink, AlertAcknowledger);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut still_open = open.get_untracked();
        fields.update(|f| intake.submit(f, Some(&mut still_open)));
        open.set(still_open);
    };
    let on_dismiss = move |_: MouseEvent| {
        let mut still_open = open.get_untracked();
        fields.update(|f| intake.dismiss(f, &mut still_open));
        open.set(still_open);
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay" on:click=on_dismiss></div>
            <div class="dialog" role="dialog" aria-modal="true" aria-labelledby="franchise-title">
                <button class="dialog-close" aria-label="Close" on:click=on_dismiss>
                    "✕"
                </button>
                <div class="dialog-header">
                    <h2 id="franchise-title">"Franchise Application"</h2>
                    <p>"Fill out the form below and our team will contact you within 48 hours."</p>
                </div>
                <form class="dialog-form" on:submit=on_submit>
                    <TextField fields=fields name="name" id="franchise-name" label="Full Name *" required=true/>
                    <TextField
                        fields=fields
                        name="phone"
                        id="franchise-phone"
                        label="Phone *"
                        input_type="tel"
                        required=true
                    />
                    <TextField
                        fields=fields
                        name="email"
                        id="franchise-email"
                        label="Email *"
                        input_type="email"
                        required=true
                    />
                    <TextField fields=fields name="city" id="franchise-city" label="City *" required=true/>
                    <SelectField
                        fields=fields
                        name="investment"
                        id="franchise-investment"
                        label="Investment Range *"
                        placeholder="Select range"
                        choices=&INVESTMENT_RANGES
                    />
                    <TextAreaField fields=fields name="message" id="franchise-message" label="Message"/>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">"Submit Application"</button>
                        <a href="#" download class="btn btn-outline">"Download Brochure"</a>
                    </div>
                </form>
            </div>
        </Show>
    }
}
