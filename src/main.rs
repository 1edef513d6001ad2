use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod services {
    pub mod scheduler;
    pub mod viewport;
    pub mod signals;
    pub mod storage;
    pub mod context;
}
mod state {
    pub mod carousel;
    pub mod scroll_spy;
    pub mod reveal;
    pub mod panel;
    pub mod chat;
    pub mod consent;
    pub mod contact;
}
mod components {
    pub mod header;
    pub mod sections;
    pub mod carousel;
    pub mod reveal;
    pub mod values;
    pub mod service_cards;
    pub mod process;
    pub mod contact_drawer;
    pub mod chat_widget;
    pub mod cookie_banner;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use pages::{
    home::Home,
    privacy::{NotFound, PrivacyNotice},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
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
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyNotice /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting New Leaf Oasis");
    yew::Renderer::<App>::new().render();
}
