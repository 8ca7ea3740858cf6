use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod stats {
    pub mod counter;
    pub mod fetch;
    pub mod reveal;
}
mod components {
    pub mod background;
    pub mod contact;
    pub mod faq;
    pub mod scroll_top;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

/// Height of the fixed header, compensated when scrolling to an anchor.
const NAV_OFFSET_PX: i32 = 80;
const NAV_SCROLLED_AFTER_PX: f64 = 50.0;

/// Smooth scroll to a section by element id. Unknown ids are a no-op.
pub fn scroll_to_anchor(target_id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(target) = document.get_element_by_id(target_id) {
                if let Ok(target) = target.dyn_into::<HtmlElement>() {
                    let mut options = ScrollToOptions::new();
                    options.top(f64::from(target.offset_top() - NAV_OFFSET_PX));
                    options.behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
            }
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting to Landing");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > NAV_SCROLLED_AFTER_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_anchor(target);
        })
    };

    let to_top = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_top();
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={to_top}>
                    {"Chronos"}
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={nav_to("features")}>{"Features"}</a>
                    <a href="#stats" class="nav-link" onclick={nav_to("stats")}>{"Stats"}</a>
                    <a href="#roadmap" class="nav-link" onclick={nav_to("roadmap")}>{"Roadmap"}</a>
                    <a href="#faq" class="nav-link" onclick={nav_to("faq")}>{"FAQ"}</a>
                    <a href="#contact" class="nav-link nav-cta" onclick={nav_to("contact")}>{"Contact"}</a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(26, 26, 26, 0.75);
                    backdrop-filter: blur(5px);
                    transition: box-shadow 0.3s ease, backdrop-filter 0.3s ease;
                }

                .top-nav.scrolled {
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
                    backdrop-filter: blur(10px);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    height: 80px;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.4rem;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                    background: linear-gradient(45deg, var(--teal), var(--blue));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: var(--blue);
                }

                .nav-cta {
                    padding: 0.5rem 1.2rem;
                    border: 1px solid rgba(76, 157, 243, 0.4);
                    border-radius: 20px;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--white);
                    transition: transform 0.3s ease;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        position: fixed;
                        top: 80px;
                        left: 0;
                        right: 0;
                        background: var(--dark-gray);
                        flex-direction: column;
                        padding: 20px;
                        gap: 16px;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        transform: translateY(-120%);
                        opacity: 0;
                        visibility: hidden;
                        transition: transform 0.3s, opacity 0.3s, visibility 0.3s;
                    }

                    .nav-links.mobile-menu-open {
                        transform: translateY(0);
                        opacity: 1;
                        visibility: visible;
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
