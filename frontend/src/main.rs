use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod animation {
    pub mod reveal;
}
mod team {
    pub mod roster;
    pub mod selector;
    pub mod layout;
    pub mod player;
    pub mod sync;
}
mod location {
    pub mod reference;
    pub mod picker;
}
mod contact {
    pub mod error;
    pub mod form;
    pub mod relay;
}
mod components {
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod why;
    pub mod about_product;
    pub mod how_it_works;
    pub mod for_parents;
    pub mod for_school;
    pub mod about_us;
    pub mod contact;
}

use pages::home::Home;

const SCROLLED_THRESHOLD: i32 = 80;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about-the-product", "Producto"),
    ("#como-funciona", "¿Cómo funciona?"),
    ("#para-padres", "Padres"),
    ("#para-colegios", "Colegios"),
    ("#about-us", "Equipo"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"La página que buscas no existe."}</p>
                    <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let scroll_top = window
                        .document()
                        .and_then(|d| d.document_element())
                        .map_or(0, |el| el.scroll_top());
                    is_scrolled.set(scroll_top > SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(cb)) = (&window, &listener) {
                if window
                    .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not attach scroll listener");
                }
            }

            move || {
                if let (Some(window), Some(cb)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
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
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.25rem 1.5rem;
                        background: transparent;
                        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 1.5rem;
                        background: rgba(255, 255, 255, 0.92);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo { font-size: 1.5rem; font-weight: 800; color: #111827; text-decoration: none; letter-spacing: 0.05em; }
                    .nav-logo span { color: #2563eb; }
                    .nav-right { display: flex; gap: 1.75rem; align-items: center; }
                    .nav-link { color: #374151; text-decoration: none; font-weight: 500; transition: color 0.2s ease; }
                    .nav-link:hover { color: #2563eb; }
                    .nav-cta {
                        background: #2563eb;
                        color: #fff;
                        padding: 0.6rem 1.4rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        font-weight: 600;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .nav-cta:hover { background: #1d4ed8; transform: translateY(-2px); }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span { width: 24px; height: 2px; background: #111827; }
                    .not-found { min-height: 80vh; display: flex; flex-direction: column; align-items: center; justify-content: center; }
                    @media (max-width: 900px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: #fff;
                            box-shadow: 0 10px 20px rgba(15, 23, 42, 0.1);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"RUTA"}<span>{"KIDS"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#contactanos" class="nav-cta" onclick={close_menu.clone()}>
                        {"Contáctanos"}
                    </a>
                </div>
            </div>
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting RutaKids");
    yew::Renderer::<App>::new().render();
}
