use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <h2>{"Page Not Found"}</h2>
            <p>{"Sorry, the page you are looking for doesn't exist or has been moved."}</p>
            <Link<Route> to={Route::BmiCalculator} classes="hero-cta">
                {"Go to the BMI Calculator"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 2rem;
                }
                .not-found h1 {
                    font-size: 6rem;
                    color: #1E90FF;
                    margin: 0;
                }
                .not-found p {
                    color: #999;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
