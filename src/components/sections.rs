use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::locations::LOCATIONS;
use crate::data::services::SERVICES;
use crate::data::site::{Faq, Feature, Stat, Testimonial};
use crate::utils::format_location_name;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{&props.title}</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let style = props
        .image
        .as_ref()
        .map(|src| format!("background-image: linear-gradient(rgba(26,26,26,0.75), rgba(26,26,26,0.95)), url('{}');", src));

    html! {
        <section class="site-hero" style={style}>
            <p class="hero-eyebrow">{&props.subtitle}</p>
            <h1>{&props.title}</h1>
            <p class="hero-subtitle">{&props.description}</p>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct GridLimitProps {
    #[prop_or_default]
    pub limit: Option<usize>,
}

#[function_component(ServicesGrid)]
pub fn services_grid(props: &GridLimitProps) -> Html {
    let limit = props.limit.unwrap_or(SERVICES.len());
    html! {
        <div class="card-grid">
            { for SERVICES.iter().take(limit).map(|service| html! {
                <div class="card" key={service.id}>
                    <img src={service.primary_image} alt={service.title} />
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                    <ul class="card-list">
                        { for service.benefits.iter().take(3).map(|b| html! { <li>{*b}</li> }) }
                    </ul>
                </div>
            }) }
        </div>
    }
}

#[function_component(LocationsGrid)]
pub fn locations_grid(props: &GridLimitProps) -> Html {
    let limit = props.limit.unwrap_or(LOCATIONS.len());
    html! {
        <div class="card-grid">
            { for LOCATIONS.iter().take(limit).map(|location| html! {
                <div class="card" key={location.id}>
                    <img src={location.image} alt={location.full_name} />
                    <h3>
                        {format_location_name(location)}
                        if location.is_headquarters {
                            <span class="badge">{"Headquarters"}</span>
                        }
                    </h3>
                    <p>{location.description}</p>
                    <p class="card-meta">{location.population}</p>
                    <a href={location.map_url} target="_blank" rel="noopener noreferrer">{"View on map"}</a>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub items: &'static [Feature],
    #[prop_or_default]
    pub numbered: bool,
}

#[function_component(FeaturesGrid)]
pub fn features_grid(props: &FeaturesProps) -> Html {
    html! {
        <div class="card-grid">
            { for props.items.iter().enumerate().map(|(i, feature)| html! {
                <div class="card feature">
                    if props.numbered {
                        <span class="step-number">{i + 1}</span>
                    }
                    <i class={classes!("icon", feature.icon)}></i>
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: &'static [Stat],
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsProps) -> Html {
    html! {
        <div class="stats-panel">
            { for props.stats.iter().map(|stat| html! {
                <div class="stat">
                    <strong>{stat.value}</strong>
                    <h4>{stat.label}</h4>
                    <p>{stat.description}</p>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: &'static [Testimonial],
}

#[function_component(TestimonialsList)]
pub fn testimonials_list(props: &TestimonialsProps) -> Html {
    html! {
        <div class="card-grid">
            { for props.testimonials.iter().map(|t| html! {
                <blockquote class="card testimonial">
                    <p>{format!("\u{201c}{}\u{201d}", t.text)}</p>
                    <footer>
                        <img src={t.image} alt={t.name} />
                        <span>{t.name}</span>
                        <span class="card-meta">{t.company}</span>
                    </footer>
                </blockquote>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub faqs: &'static [Faq],
}

/// Native `<details>` elements, so open/closed state lives in the browser.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.faqs.iter().map(|faq| html! {
                <details class="faq-item">
                    <summary class="faq-question">{faq.question}</summary>
                    <p class="faq-answer">{faq.answer}</p>
                </details>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or(AttrValue::Static("Contact Us"))]
    pub button_text: AttrValue,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaProps) -> Html {
    html! {
        <section class="cta-section">
            <h2>{&props.title}</h2>
            <p>{&props.description}</p>
            <Link<Route> to={Route::Contact} classes="hero-cta">
                {props.button_text.clone()}
            </Link<Route>>
        </section>
    }
}

/// Shared rules for the section blocks above, mounted once by the app shell.
pub const SECTION_CSS: &str = r#"
body {
    margin: 0;
    background: #1a1a1a;
    color: #fff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.site-hero {
    text-align: center;
    padding: 8rem 2rem 4rem;
    background-size: cover;
    background-position: center;
}
.site-hero h1 {
    font-size: 3rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-eyebrow {
    color: #1E90FF;
    letter-spacing: 0.1em;
    font-size: 0.875rem;
}
.hero-subtitle {
    color: #ccc;
    max-width: 720px;
    margin: 0 auto 2rem;
}
.page-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 3rem 2rem;
}
.section-header h2 {
    text-align: center;
    color: #7EB2FF;
}
.section-subtitle {
    text-align: center;
    color: #999;
    margin-bottom: 2rem;
}
.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.5rem;
}
.card {
    background: rgba(30, 30, 30, 0.7);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 1.5rem;
    margin: 0;
}
.card img {
    width: 100%;
    border-radius: 12px;
    object-fit: cover;
    max-height: 180px;
}
.card p, .card li { color: #ccc; line-height: 1.6; }
.card-meta { color: #999; font-size: 0.875rem; }
.badge {
    margin-left: 0.5rem;
    font-size: 0.75rem;
    padding: 0.1rem 0.5rem;
    border-radius: 9999px;
    background: #1E90FF;
}
.step-number {
    display: inline-block;
    width: 2rem;
    height: 2rem;
    line-height: 2rem;
    text-align: center;
    border-radius: 50%;
    background: #1E90FF;
}
.stats-panel {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
    text-align: center;
}
.stat strong { font-size: 2.5rem; color: #7EB2FF; }
.stat p { color: #999; }
.testimonial footer {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}
.testimonial footer img {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
}
.faq-item {
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    padding: 1rem 0;
}
.faq-question { cursor: pointer; font-weight: 600; }
.faq-answer { color: #ccc; line-height: 1.6; }
.cta-section {
    text-align: center;
    padding: 4rem 2rem;
    background: rgba(30, 144, 255, 0.08);
}
.hero-cta {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    background: #1E90FF;
    color: #fff;
    text-decoration: none;
    border: none;
    cursor: pointer;
}
"#;
