use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod a11y;
mod config;
mod dom;
mod effects;
mod lazy;
mod viewport;
mod animations {
    pub mod buttons;
    pub mod hero;
    pub mod motion;
    pub mod reveal;
    pub mod scroll;
    pub mod styles;
}
mod components {
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod home;
}

use a11y::SkipLink;
use animations::styles::AnimationStyles;
use components::{footer::Footer, nav::Nav};
use pages::home::Home;

#[derive(Clone, Debug, Routable, PartialEq)]
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
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <AnimationStyles />
            <SkipLink />
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(config::log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    info!("Starting front page");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_root_renders_home_directly() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_ne!(Route::recognize("/index.html"), Some(Route::Home));
    }
}
