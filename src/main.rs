use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod mailto;
mod motion;
mod components {
    pub mod flip_card;
    pub mod footer;
    pub mod logo;
    pub mod partner_strip;
    pub mod progress_counter;
    pub mod reveal;
    pub mod site_nav;
    pub mod video_strip;
}
mod pages {
    pub mod contact;
    pub mod home;
}

use components::reveal::REVEAL_CSS;
use config::{SiteConfig, Theme};
use pages::{contact::ContactPage, home::Home};

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
    }
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if let Err(err) = result {
        log::warn!("could not apply theme: {:?}", err);
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    {
        let theme = props.config.theme;
        use_effect_with_deps(
            move |theme| {
                apply_theme(*theme);
                || ()
            },
            theme,
        );
    }

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: #fff;
                    color: #000;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                .logo-fallback {
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                "#}
                { REVEAL_CSS }
            </style>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    let config = SiteConfig::load().unwrap_or_else(|err| {
        error!("Falling back to default site configuration: {}", err);
        SiteConfig::default()
    });

    info!("Starting {} site", config.company_name);
    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_map_to_their_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/careers"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Contact.to_path(), "/contact");
    }
}
