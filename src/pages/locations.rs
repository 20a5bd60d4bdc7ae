use yew::prelude::*;

use crate::components::sections::{CtaSection, Hero, LocationsGrid, SectionHeader};
use crate::data::locations::LOCATIONS;
use crate::data::services::SERVICES;
use crate::utils::{format_location_name, service_location_combinations};

#[function_component(Locations)]
pub fn locations() -> Html {
    let combinations = service_location_combinations();

    html! {
        <div class="locations-page">
            <Hero
                title="Locations We Serve"
                subtitle="LOCAL EXPERTISE"
                description="Tailored social media content for businesses across Tennessee, Kentucky, and Alabama."
            />

            <section class="page-section">
                <SectionHeader title="Our Locations" />
                <LocationsGrid />
            </section>

            <section class="page-section">
                <SectionHeader
                    title="Services by Location"
                    subtitle={format!("{} services available in {} cities", SERVICES.len(), LOCATIONS.len())}
                />
                <div class="card-grid">
                    { for LOCATIONS.iter().map(|location| html! {
                        <div class="card" key={location.id}>
                            <h3>{format_location_name(location)}</h3>
                            <p class="card-meta">{location.social_media_stats}</p>
                            <ul class="card-list">
                                { for combinations
                                    .iter()
                                    .filter(|c| c.location_id == location.id)
                                    .filter_map(|c| SERVICES.iter().find(|s| s.id == c.service_id))
                                    .map(|service| html! {
                                        <li>{format!("{} in {}", service.short_title, location.name)}</li>
                                    }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <CtaSection
                title="Don't See Your City?"
                description="We work with businesses everywhere. Reach out and let's talk."
            />
        </div>
    }
}
