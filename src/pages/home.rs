use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::sections::{
    CtaSection, FaqList, FeaturesGrid, Hero, LocationsGrid, SectionHeader, ServicesGrid,
    StatsPanel, TestimonialsList,
};
use crate::config;
use crate::data::site::{GENERAL_FAQS, PROCESS_STEPS, SERVICE_FEATURES, STATS, TESTIMONIALS};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero
                title="Professional Social Media Content Production"
                subtitle="100% DONE FOR YOU"
                description={config::COMPANY_DESCRIPTION}
                image="/images/Social_Media_Charity_CampaignSubheadingHelping_hands_community_service_0001.jpg"
            >
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    {"Get Started"}
                </Link<Route>>
            </Hero>

            <section class="page-section">
                <SectionHeader title="Why Choose Gishmo" subtitle="We deliver exceptional social media content that drives results" />
                <FeaturesGrid items={SERVICE_FEATURES} />
            </section>

            <section class="page-section">
                <SectionHeader title="Our Services" subtitle="Comprehensive social media content production services to elevate your brand" />
                <ServicesGrid />
            </section>

            <section class="page-section">
                <SectionHeader title="Our Process" subtitle="How we create exceptional social media content for your business" />
                <FeaturesGrid items={PROCESS_STEPS} numbered={true} />
            </section>

            <section class="page-section">
                <StatsPanel stats={STATS} />
            </section>

            <section class="page-section">
                <SectionHeader title="Serving Businesses Across" subtitle="We provide tailored social media content for businesses in these locations" />
                <LocationsGrid limit={3} />
                <p class="section-subtitle">
                    <Link<Route> to={Route::Locations}>{"View all locations"}</Link<Route>>
                </p>
            </section>

            <section class="page-section">
                <SectionHeader title="What Our Clients Say" subtitle="Hear from businesses that have transformed their social media presence with Gishmo" />
                <TestimonialsList testimonials={TESTIMONIALS} />
            </section>

            <section class="page-section">
                <SectionHeader title="Frequently Asked Questions" subtitle="Find answers to common questions about our services" />
                <FaqList faqs={GENERAL_FAQS} />
            </section>

            <CtaSection
                title="Ready to Transform Your Social Media?"
                description="Let us handle your social media content so you can focus on running your business."
                button_text="Get Started Today"
            />
        </div>
    }
}
