use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;

use crate::bmi::gauge::{gauge_width, GAUGE_TICKS};
use crate::bmi::{BmiCalculator, BmiResult, Category, UnitSystem};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BmiCalculatorProps {
    #[prop_or_default]
    pub initial_unit: UnitSystem,
}

#[function_component]
pub fn BmiCalculatorWidget(props: &BmiCalculatorProps) -> Html {
    let initial_unit = props.initial_unit;
    let calc = use_state(move || BmiCalculator::new(initial_unit));

    let unit = calc.unit_system();

    let select_unit = |target: UnitSystem| {
        let calc = calc.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*calc).clone();
            next.set_unit_system(target);
            calc.set(next);
        })
    };

    let on_height = {
        let calc = calc.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*calc).clone();
            next.set_height(input.value());
            calc.set(next);
        })
    };

    let on_weight = {
        let calc = calc.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*calc).clone();
            next.set_weight(input.value());
            calc.set(next);
        })
    };

    html! {
        <div class="bmi-calculator">
            <style>
                {r#"
                    .bmi-calculator {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .bmi-toggle {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 2rem;
                    }
                    .bmi-toggle button {
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        background: rgba(30, 30, 30, 0.7);
                        color: #ccc;
                        cursor: pointer;
                    }
                    .bmi-toggle button:first-child { border-radius: 8px 0 0 8px; }
                    .bmi-toggle button:last-child { border-radius: 0 8px 8px 0; }
                    .bmi-toggle button.active {
                        background: #1E90FF;
                        color: #fff;
                    }
                    .bmi-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    }
                    .bmi-inputs {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .bmi-field label {
                        display: block;
                        color: #7EB2FF;
                        font-size: 0.875rem;
                        margin-bottom: 0.25rem;
                    }
                    .bmi-field .input-wrap {
                        position: relative;
                    }
                    .bmi-field input {
                        width: 100%;
                        padding: 0.6rem 3rem 0.6rem 0.75rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(0, 0, 0, 0.3);
                        color: #fff;
                    }
                    .bmi-field .unit {
                        position: absolute;
                        right: 0.75rem;
                        top: 50%;
                        transform: translateY(-50%);
                        color: #999;
                        font-size: 0.875rem;
                    }
                    .bmi-field .hint {
                        margin-top: 0.25rem;
                        font-size: 0.75rem;
                        color: #999;
                    }
                    .bmi-error {
                        margin-bottom: 1.5rem;
                        padding: 0.75rem;
                        border-radius: 8px;
                        background: rgba(239, 68, 68, 0.15);
                        color: #f87171;
                    }
                    .bmi-result { text-align: center; }
                    .bmi-value {
                        display: inline-block;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        background: rgba(0, 0, 0, 0.3);
                        margin-bottom: 1rem;
                    }
                    .bmi-value strong { font-size: 1.875rem; color: #fff; }
                    .bmi-value span { color: #999; margin-left: 0.25rem; }
                    .bmi-track {
                        height: 1.5rem;
                        width: 100%;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .bmi-fill {
                        height: 100%;
                        border-radius: 9999px;
                        transition: width 0.5s ease-out;
                        background: linear-gradient(90deg, #3b82f6, #10b981, #f59e0b, #ef4444);
                    }
                    .bmi-scale {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.75rem;
                        color: #999;
                        margin-top: 0.25rem;
                    }
                    .bmi-placeholder {
                        padding: 2rem;
                        border-radius: 12px;
                        background: rgba(0, 0, 0, 0.2);
                        color: #999;
                    }
                    .bmi-cta {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        border-radius: 12px;
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        text-align: center;
                    }
                    .bmi-blue { color: #3b82f6; }
                    .bmi-green { color: #10b981; }
                    .bmi-yellow { color: #f59e0b; }
                    .bmi-red { color: #ef4444; }
                "#}
            </style>

            <div class="bmi-toggle" role="group">
                { for UnitSystem::ALL.iter().map(|&system| html! {
                    <button
                        type="button"
                        class={classes!((system == unit).then(|| "active"))}
                        onclick={select_unit(system)}
                    >
                        {system.toggle_label()}
                    </button>
                }) }
            </div>

            <div class="bmi-card">
                <div class="bmi-inputs">
                    <div class="bmi-field">
                        <label for="height">{format!("Height ({})", calc.height().unit)}</label>
                        <div class="input-wrap">
                            <input
                                type="number"
                                id="height"
                                name="height"
                                min="0"
                                step={unit.height_step()}
                                placeholder={unit.height_placeholder()}
                                value={calc.height().value.clone()}
                                oninput={on_height}
                            />
                            <span class="unit">{calc.height().unit}</span>
                        </div>
                        <p class="hint">{unit.height_hint()}</p>
                    </div>

                    <div class="bmi-field">
                        <label for="weight">{format!("Weight ({})", calc.weight().unit)}</label>
                        <div class="input-wrap">
                            <input
                                type="number"
                                id="weight"
                                name="weight"
                                min="0"
                                step={unit.weight_step()}
                                placeholder={unit.weight_placeholder()}
                                value={calc.weight().value.clone()}
                                oninput={on_weight}
                            />
                            <span class="unit">{calc.weight().unit}</span>
                        </div>
                        <p class="hint">{unit.weight_hint()}</p>
                    </div>
                </div>

                if let Some(message) = calc.error() {
                    <div class="bmi-error">{message}</div>
                }

                <h3>{"Your Result"}</h3>
                <div class="bmi-result">
                    {
                        match calc.result() {
                            Some(result) => render_result(result, calc.state().gauge_position()),
                            None => html! {
                                <div class="bmi-placeholder">
                                    <p>{"Enter your height and weight to see your BMI result"}</p>
                                </div>
                            },
                        }
                    }
                </div>

                if calc.result().is_some() {
                    <div class="bmi-cta">
                        <h3>{"Take the Next Step"}</h3>
                        <p>{"Now that you know your BMI, discover how we can help you achieve your health goals."}</p>
                        <Link<Route> to={Route::Contact} classes="hero-cta">{"Learn More"}</Link<Route>>
                    </div>
                }
            </div>
        </div>
    }
}

fn render_result(result: &BmiResult, position: f64) -> Html {
    html! {
        <>
            <div class="bmi-value">
                <strong>{result.display_value()}</strong>
                <span>{"kg/m²"}</span>
            </div>
            <p>
                {"Your BMI indicates you are "}
                <strong class={result.category.color_class()}>{result.category.label()}</strong>
            </p>
            <div class="bmi-gauge">
                <div class="bmi-track">
                    <div class="bmi-fill" style={format!("width: {};", gauge_width(position))}></div>
                </div>
                <div class="bmi-scale">
                    { for GAUGE_TICKS.iter().map(|tick| html! { <span>{*tick}</span> }) }
                </div>
                <div class="bmi-scale">
                    { for Category::ALL.iter().map(|c| html! {
                        <span class={c.color_class()}>{c.gauge_label()}</span>
                    }) }
                </div>
            </div>
        </>
    }
}
