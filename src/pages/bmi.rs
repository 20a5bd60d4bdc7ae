use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::bmi::{Category, UnitSystem};
use crate::components::bmi_calculator::BmiCalculatorWidget;
use crate::Route;

/// Unit system requested through `?unit=`, metric when absent or unknown.
fn requested_unit(param: Option<&str>) -> UnitSystem {
    match param.map(str::parse::<UnitSystem>) {
        Some(Ok(unit)) => unit,
        Some(Err(e)) => {
            log::warn!("Ignoring unit parameter: {}", e);
            UnitSystem::default()
        }
        None => UnitSystem::default(),
    }
}

fn calculator_key(unit: UnitSystem) -> &'static str {
    unit.as_str()
}

#[function_component]
pub fn BmiCalculatorPage() -> Html {
    let unit_param = use_search_param("unit".to_string());
    let initial_unit = requested_unit(unit_param.as_deref());

    html! {
        <div class="bmi-page">
            <section class="bmi-hero">
                <p class="bmi-eyebrow">{"HEALTH METRICS MADE SIMPLE"}</p>
                <h1>{"BMI Calculator"}</h1>
                <p class="hero-subtitle">
                    {"Calculate your Body Mass Index (BMI) with our easy-to-use calculator. Get instant results and understand what your BMI means for your health."}
                </p>
            </section>

            <section class="bmi-section">
                <h2>{"Calculate Your BMI"}</h2>
                <p class="section-subtitle">{"Enter your height and weight to calculate your Body Mass Index"}</p>
                // Keyed so a new `?unit=` remounts the widget with fresh state.
                <BmiCalculatorWidget key={calculator_key(initial_unit)} {initial_unit} />
            </section>

            <section class="bmi-section bmi-info">
                <h2>{"Understanding BMI"}</h2>
                <p class="section-subtitle">{"What your BMI result means and how to interpret it"}</p>
                <p>
                    {"Body Mass Index (BMI) is a simple calculation using a person's height and weight. The formula is BMI = kg/m² where kg is a person's weight in kilograms and m² is their height in meters squared."}
                </p>

                <h3>{"BMI Categories:"}</h3>
                <ul>
                    { for Category::ALL.iter().map(|c| html! {
                        <li><strong>{format!("{}:", c.label())}</strong>{format!(" BMI {}", c.range_text())}</li>
                    }) }
                </ul>

                <h3>{"Limitations of BMI"}</h3>
                <p>{"While BMI can be a useful tool for identifying potential weight issues, it has several limitations:"}</p>
                <ul>
                    <li>{"It doesn't distinguish between muscle and fat"}</li>
                    <li>{"It doesn't account for body composition"}</li>
                    <li>{"It may not be accurate for athletes, elderly people, or pregnant women"}</li>
                    <li>{"It doesn't consider where fat is stored in the body"}</li>
                </ul>
                <p>{"Always consult with healthcare professionals for a comprehensive health assessment."}</p>
            </section>

            <section class="bmi-section bmi-closing">
                <h2>{"Take Control of Your Health Today"}</h2>
                <p>{"Understanding your BMI is just the first step toward a healthier lifestyle."}</p>
                <Link<Route> to={Route::Contact} classes="hero-cta">{"Learn More"}</Link<Route>>
            </section>

            <style>
                {r#"
                .bmi-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #fff;
                    padding-bottom: 4rem;
                }
                .bmi-hero {
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                }
                .bmi-hero h1 {
                    font-size: 3rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .bmi-eyebrow {
                    color: #1E90FF;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                }
                .bmi-section {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .bmi-section h2 {
                    text-align: center;
                    color: #7EB2FF;
                }
                .section-subtitle {
                    text-align: center;
                    color: #999;
                    margin-bottom: 2rem;
                }
                .bmi-info p, .bmi-info li {
                    color: #ccc;
                    line-height: 1.6;
                }
                .bmi-closing {
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_param_selects_initial_system() {
        assert_eq!(requested_unit(None), UnitSystem::Metric);
        assert_eq!(requested_unit(Some("imperial")), UnitSystem::Imperial);
        assert_eq!(requested_unit(Some("IMPERIAL")), UnitSystem::Imperial);
        assert_eq!(requested_unit(Some("furlongs")), UnitSystem::Metric);
    }

    #[test]
    fn changing_unit_param_changes_widget_key() {
        let metric = calculator_key(requested_unit(Some("metric")));
        let imperial = calculator_key(requested_unit(Some("imperial")));
        assert_ne!(metric, imperial);
        assert_eq!(calculator_key(requested_unit(None)), metric);
    }
}
