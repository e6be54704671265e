use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod lead;
mod quiz {
    pub mod model;
    pub mod score;
    pub mod sequencer;
    pub mod storage;
}
mod components {
    pub mod chapter_nav;
    pub mod confetti;
    pub mod quiz_view;
    pub mod share_banner;
    pub mod user_form;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod methode;
    pub mod ressources;
}
mod guides {
    pub mod automatisation_odoo;
    pub mod controle_gestion;
    pub mod daf_pme;
    pub mod diagnostic_gestion;
    pub mod plan_action_2026;
}

use pages::{
    contact::Contact,
    faq::Faq,
    home::Home,
    methode::Methode,
    ressources::Ressources,
};

use guides::{
    automatisation_odoo::GuideAutomatisationOdoo,
    controle_gestion::GuideControleGestion,
    daf_pme::GuideDafPme,
    diagnostic_gestion::GuideDiagnosticGestion,
    plan_action_2026::GuidePlanAction2026,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/methode")]
    Methode,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/ressources")]
    Ressources,
    #[at("/ressources/guides/daf-pme")]
    GuideDafPme,
    #[at("/ressources/guides/diagnostic-gestion")]
    GuideDiagnosticGestion,
    #[at("/ressources/guides/automatisation-odoo")]
    GuideAutomatisationOdoo,
    #[at("/ressources/guides/controle-gestion")]
    GuideControleGestion,
    #[at("/ressources/guides/plan-action-2026")]
    GuidePlanAction2026,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Scrolls the window back to the top, used on every funnel step change.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Methode => {
            info!("Rendering Methode page");
            html! { <Methode /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Ressources => {
            info!("Rendering Ressources page");
            html! { <Ressources /> }
        },
        Route::GuideDafPme => {
            info!("Rendering DAF PME guide");
            html! { <GuideDafPme /> }
        },
        Route::GuideDiagnosticGestion => {
            info!("Rendering diagnostic gestion guide");
            html! { <GuideDiagnosticGestion /> }
        },
        Route::GuideAutomatisationOdoo => {
            info!("Rendering automatisation Odoo guide");
            html! { <GuideAutomatisationOdoo /> }
        },
        Route::GuideControleGestion => {
            info!("Rendering controle de gestion guide");
            html! { <GuideControleGestion /> }
        },
        Route::GuidePlanAction2026 => {
            info!("Rendering plan d'action 2026 guide");
            html! { <GuidePlanAction2026 /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Cette page n'existe pas."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Retour à l'accueil"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #ffffff;
                    color: #1f2937;
                }
                .not-found h1 {
                    font-size: 5rem;
                    color: #1a3c5e;
                }
                .not-found-link {
                    color: #fe981a;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 50);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
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
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
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
                    {"MSL Conseils"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Methode} classes="nav-link">
                            {"La méthode"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Ressources} classes="nav-link">
                            {"Ressources"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.2s;
                }
                .top-nav.scrolled {
                    box-shadow: 0 2px 12px rgba(17, 24, 39, 0.08);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1a3c5e;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-link {
                    color: #374151;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #1a3c5e;
                }
                .nav-contact-button {
                    background: #1a3c5e;
                    color: #ffffff;
                    font-weight: 600;
                    padding: 0.6rem 1.4rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: background 0.2s;
                }
                .nav-contact-button:hover {
                    background: #2d5a8a;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1a3c5e;
                    transition: all 0.2s;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #ffffff;
                        padding: 1.5rem 2rem;
                        box-shadow: 0 10px 20px rgba(17, 24, 39, 0.1);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
