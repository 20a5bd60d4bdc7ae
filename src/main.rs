use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use chrono::Datelike;
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod bmi;
mod contact;
mod data;
mod utils;
mod components {
    pub mod bmi_calculator;
    pub mod contact_form;
    pub mod sections;
}
mod pages {
    pub mod bmi;
    pub mod contact;
    pub mod home;
    pub mod locations;
    pub mod not_found;
    pub mod services;
}

use pages::{
    bmi::BmiCalculatorPage,
    contact::Contact,
    home::Home,
    locations::Locations,
    not_found::NotFound,
    services::Services,
};
use components::sections::SECTION_CSS;
use data::site::NAV_LINKS;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/locations")]
    Locations,
    #[at("/bmi-calculator")]
    BmiCalculator,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Locations => {
            info!("Rendering Locations page");
            html! { <Locations /> }
        },
        Route::BmiCalculator => {
            info!("Rendering BMI calculator page");
            html! { <BmiCalculatorPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}


/// Navigation entries paired with the route each path resolves to.
fn nav_routes() -> Vec<(&'static str, Route)> {
    NAV_LINKS
        .iter()
        .filter_map(|link| Route::recognize(link.path).map(|route| (link.name, route)))
        .filter(|(_, route)| *route != Route::NotFound)
        .collect()
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::COMPANY_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_routes().into_iter().map(|(name, route)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">
                                {name}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </nav>
    }
}


#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();
    let years_running = year - config::COMPANY_FOUNDED;

    html! {
        <footer class="site-footer">
            <p class="footer-tagline">{config::COMPANY_TAGLINE}</p>
            <p>{format!("Creating content since {} ({} years and counting)", config::COMPANY_FOUNDED, years_running)}</p>
            <p>
                {format!("© {} ", year)}
                <a href={config::get_site_url()}>{config::COMPANY_NAME}</a>
                {". All rights reserved."}
            </p>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{SECTION_CSS}</style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_link_has_a_page() {
        let routes = nav_routes();
        assert_eq!(routes.len(), NAV_LINKS.len());
        assert_eq!(routes[0], ("Home", Route::Home));
        assert!(routes.contains(&("BMI Calculator", Route::BmiCalculator)));
        assert!(routes.contains(&("Contact", Route::Contact)));
    }

    #[test]
    fn home_is_its_own_route() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/bmi-calculator"), Some(Route::BmiCalculator));
        assert_ne!(Route::Home.to_path(), Route::BmiCalculator.to_path());
    }
}
