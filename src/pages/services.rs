use yew::prelude::*;

use crate::components::sections::{CtaSection, FaqList, Hero, SectionHeader};
use crate::data::services::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <Hero
                title="Our Services"
                subtitle="WHAT WE DO"
                description="Comprehensive social media content production services, 100% done for you."
            />

            { for SERVICES.iter().map(|service| html! {
                <section class="page-section" id={service.id} key={service.id}>
                    <SectionHeader title={service.title} subtitle={service.description} />
                    <div class="card-grid">
                        <div class="card">
                            <img src={service.primary_image} alt={service.title} />
                            <p>{service.long_description}</p>
                        </div>
                        <div class="card">
                            <h3>{"Benefits"}</h3>
                            <ul>{ for service.benefits.iter().map(|b| html! { <li>{*b}</li> }) }</ul>
                            <h3>{"Our Process"}</h3>
                            <ol>{ for service.process.iter().map(|p| html! { <li>{*p}</li> }) }</ol>
                        </div>
                    </div>
                    <h3>{format!("{} FAQs", service.short_title)}</h3>
                    <FaqList faqs={service.faqs} />
                </section>
            }) }

            <CtaSection
                title="Not Sure Which Service Fits?"
                description="Tell us about your business and we'll recommend the right mix of content."
            />
        </div>
    }
}
