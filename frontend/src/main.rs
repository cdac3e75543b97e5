use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod models;
mod scroll;
mod pages {
    pub mod landing;
    pub mod inbox;
}
mod components {
    pub mod contact_form;
}

use pages::{
    landing::Landing,
    inbox::Inbox,
};

// Nav turns solid once the reader leaves the first screen of the hero
const NAV_SOLID_AFTER_PX: f64 = 600.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/inbox")]
    Inbox,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Inbox => {
            info!("Rendering Inbox page");
            html! { <Inbox /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Nothing here"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the start"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = {
                    let window = window.clone();
                    Closure::<dyn Fn()>::new(move || {
                        if let Ok(scroll_y) = window.scroll_y() {
                            is_scrolled.set(scroll_y > NAV_SOLID_AFTER_PX);
                        }
                    })
                };

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        }, ());
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"luminar"}
                </Link<Route>>
                <a href="#contact" class="nav-link">{"Contact"}</a>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 20;
                        padding: 1rem 2rem;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(5, 5, 5, 0.85);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo, .nav-link {
                        color: #fff;
                        text-decoration: none;
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
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
