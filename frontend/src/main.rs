use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod hooks;
mod navigation;
mod controllers {
    pub mod carousel;
    pub mod dom;
    pub mod reveal;
}
mod components {
    pub mod button;
    pub mod footer;
    pub mod image_carousel;
    pub mod navbar;
    pub mod service_card;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod home;
    pub mod services;
    pub mod what_is_coaching;
}

use components::navbar::Navbar;
use pages::home::Home;

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
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
