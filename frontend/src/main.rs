use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod counter;
mod handoff;
mod storage;
mod quiz {
    pub mod catalog;
    pub mod machine;
    pub mod scheduler;
    pub mod session;
}
mod animation {
    pub mod frame_loop;
    pub mod host;
    pub mod particles;
    pub mod scene;
}
mod components {
    pub mod particle_background;
    pub mod theme;
    pub mod view_counter;
}
mod pages {
    pub mod landing;
    pub mod quiz;
    pub mod thank_you;
}

use components::theme::FunnelStyles;
use pages::{
    landing::Landing,
    quiz::Quiz,
    thank_you::ThankYou,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/quiz")]
    Quiz,
    #[at("/obrigado")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Quiz => {
            info!("Rendering Quiz page");
            html! { <Quiz /> }
        },
        Route::ThankYou => {
            info!("Rendering Thank-you page");
            html! { <ThankYou /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to Landing");
            html! { <Redirect<Route> to={Route::Landing} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <FunnelStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting funnel");
    yew::Renderer::<App>::new().render();
}
