use yew::prelude::*;

use crate::components::contact_form::ContactFormWidget;
use crate::components::sections::{Hero, SectionHeader};
use crate::config;
use crate::data::site::CONTACT_INFO;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <Hero
                title="Contact Us"
                subtitle="GET IN TOUCH"
                description="Ready to elevate your social media presence? Send us a message and we'll get back to you soon."
            />
            <section class="page-section">
                <div class="card-grid">
                    <div class="card">
                        <SectionHeader title="Send Us a Message" />
                        <ContactFormWidget />
                    </div>
                    <div class="card">
                        <h3>{"Contact Information"}</h3>
                        <p>{CONTACT_INFO.address}</p>
                        <p>{format!("{}, {} {}", CONTACT_INFO.city, CONTACT_INFO.state, CONTACT_INFO.zip)}</p>
                        <p>{CONTACT_INFO.phone}</p>
                        <p><a href={config::contact_href()}>{CONTACT_INFO.email}</a></p>
                        <p class="card-meta">{CONTACT_INFO.hours}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
