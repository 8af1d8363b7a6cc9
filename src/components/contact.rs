use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::fields::{SelectField, TextAreaField, TextField};
use crate::controllers::{FieldSet, FormIntake, FormKind};
use crate::models::{Icon, SectionId, CONTACT, INQUIRY_TYPES};
use crate::platform::{AlertAcknowledger, ConsoleSink};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() class="contact">
            <div class="container narrow">
                <div class="section-header">
                    <h2>"Get In Touch"</h2>
                    <p>"Have questions? We'd love to hear from you"</p>
                </div>
                <div class="grid grid-2">
                    <div class="card">
                        <ContactForm/>
                    </div>
                    <div class="contact-details">
                        <div class="card">
                            <h3><span class=Icon::Phone.class()></span>"Phone"</h3>
                            <a href=CONTACT.phone_href>{CONTACT.phone_display}</a>
                        </div>
                        <div class="card">
                            <h3><span class=Icon::Mail.class()></span>"Email"</h3>
                            <a href=format!("mailto:{}", CONTACT.email)>{CONTACT.email}</a>
                        </div>
                        <div class="card">
                            <h3><span class=Icon::MapPin.class()></span>"Address"</h3>
                            <p>{CONTACT.address_lines[0]}<br/>{CONTACT.address_lines[1]}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let fields = RwSignal::new(FieldSet::new(FormKind::Contact));
    let intake = FormIntake::new(FormKind::Contact, ConsoleSink, AlertAcknowledger);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        fields.update(|f| intake.submit(f, None));
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <TextField fields=fields name="name" id="contact-name" label="Name *" required=true/>
            <TextField
                fields=fields
                name="mobile"
                id="contact-mobile"
                label="Mobile *"
                input_type="tel"
                required=true
            />
            <TextField
                fields=fields
                name="email"
                id="contact-email"
                label="Email *"
                input_type="email"
                required=true
            />
            <TextField fields=fields name="city" id="contact-city" label="City *" required=true/>
            <SelectField
                fields=fields
                name="inquiryType"
                id="contact-inquiry"
                label="Inquiry Type *"
                placeholder="Select type"
                choices=&INQUIRY_TYPES
            />
            <TextAreaField fields=fields name="message" id="contact-message" label="Message" rows=4/>
            <button type="submit" class="btn btn-primary btn-block">"Send Message"</button>
        </form>
    }
}
