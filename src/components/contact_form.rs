use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::contact::{ContactField, ContactForm, FieldErrors, SUCCESS_MESSAGE};
use crate::data::services::SERVICES;

fn event_value(e: &Event) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[function_component]
pub fn ContactFormWidget() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::default);
    let sent = use_state(|| false);

    let on_field = |field: ContactField| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.set(field, event_value(&e));
            form.set(next);

            if errors.get(field).is_some() {
                let mut cleared = (*errors).clone();
                cleared.clear(field);
                errors.set(cleared);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    log::info!("Contact form accepted");
                    errors.set(FieldErrors::default());
                    form.set(ContactForm::default());
                    sent.set(true);
                }
                Err(found) => {
                    log::warn!("Contact form rejected: {:?}", found);
                    errors.set(found);
                }
            }
        })
    };

    if *sent {
        return html! {
            <div class="contact-success">{SUCCESS_MESSAGE}</div>
        };
    }

    let error_for = |field: ContactField| -> Html {
        match errors.get(field) {
            Some(err) => html! { <p class="field-error">{err.to_string()}</p> },
            None => html! {},
        }
    };
    let invalid = |field: ContactField| errors.get(field).is_some().then(|| "invalid");

    html! {
        <form class="contact-form" {onsubmit} novalidate={true}>
            <div class="form-grid">
                <div class="form-field">
                    <label for="name">{"Name *"}</label>
                    <input type="text" id="name" name="name" class={classes!(invalid(ContactField::Name))}
                        value={form.name.clone()} onchange={on_field(ContactField::Name)} />
                    { error_for(ContactField::Name) }
                </div>
                <div class="form-field">
                    <label for="email">{"Email *"}</label>
                    <input type="email" id="email" name="email" class={classes!(invalid(ContactField::Email))}
                        value={form.email.clone()} onchange={on_field(ContactField::Email)} />
                    { error_for(ContactField::Email) }
                </div>
                <div class="form-field">
                    <label for="phone">{"Phone"}</label>
                    <input type="tel" id="phone" name="phone"
                        value={form.phone.clone()} onchange={on_field(ContactField::Phone)} />
                </div>
                <div class="form-field">
                    <label for="company">{"Company"}</label>
                    <input type="text" id="company" name="company"
                        value={form.company.clone()} onchange={on_field(ContactField::Company)} />
                </div>
            </div>

            <div class="form-field">
                <label for="service">{"Service You're Interested In"}</label>
                <select id="service" name="service" onchange={on_field(ContactField::Service)}>
                    <option value="" selected={form.service.is_empty()}>{"Select a service"}</option>
                    { for SERVICES.iter().map(|service| html! {
                        <option value={service.id} selected={form.service == service.id}>{service.title}</option>
                    }) }
                    <option value="multiple" selected={form.service == "multiple"}>{"Multiple Services"}</option>
                </select>
            </div>

            <div class="form-field">
                <label for="message">{"Message *"}</label>
                <textarea id="message" name="message" rows="4" class={classes!(invalid(ContactField::Message))}
                    value={form.message.clone()} onchange={on_field(ContactField::Message)} />
                { error_for(ContactField::Message) }
            </div>

            <button type="submit" class="hero-cta">{"Send Message"}</button>
        </form>
    }
}
