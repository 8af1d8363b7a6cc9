use leptos::prelude::*;

use crate::controllers::FieldSet;
use crate::models::Choice;

#[component]
pub fn TextField(
    fields: RwSignal<FieldSet>,
    name: &'static str,
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                name=name
                required=required
                placeholder=placeholder
                prop:value=move || fields.with(|f| f.get(name).to_string())
                on:input=move |ev| fields.update(|f| f.set(name, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    fields: RwSignal<FieldSet>,
    name: &'static str,
    id: &'static str,
    label: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea
                id=id
                name=name
                rows=rows
                prop:value=move || fields.with(|f| f.get(name).to_string())
                on:input=move |ev| fields.update(|f| f.set(name, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

/// A required `<select>` whose empty placeholder option blocks submission.
#[component]
pub fn SelectField(
    fields: RwSignal<FieldSet>,
    name: &'static str,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    choices: &'static [Choice],
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                name=name
                required
                prop:value=move || fields.with(|f| f.get(name).to_string())
                on:change=move |ev| fields.update(|f| f.set(name, event_target_value(&ev)))
            >
                <option value="" disabled>{placeholder}</option>
                {choices
                    .iter()
                    .map(|choice| view! { <option value=choice.value>{choice.label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
