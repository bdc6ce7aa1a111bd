use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::logo::Logo;
use crate::content::{NavTarget, NAV_ITEMS};

#[derive(Properties, PartialEq)]
pub struct SiteNavProps {
    pub scrolled: bool,
}

#[function_component(SiteNav)]
pub fn site_nav(props: &SiteNavProps) -> Html {
    let navigator = use_navigator();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let render_item = |mobile: bool| {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        move |item: &crate::content::NavItem| -> Html {
            let class = if mobile { "site-nav__mobile-link" } else { "site-nav__link" };
            match item.target {
                NavTarget::Page(route) => {
                    let navigator = navigator.clone();
                    let menu_open = menu_open.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        menu_open.set(false);
                        match &navigator {
                            Some(navigator) => navigator.push(&route),
                            None => log::warn!("no router available for nav link"),
                        }
                    });
                    html! {
                        <button key={item.name} {class} {onclick}>{item.name}</button>
                    }
                }
                NavTarget::Anchor(href) => {
                    let menu_open = menu_open.clone();
                    let onclick = Callback::from(move |_: MouseEvent| menu_open.set(false));
                    html! {
                        <a key={item.name} {href} {class} {onclick}>{item.name}</a>
                    }
                }
            }
        }
    };

    html! {
        <nav class={classes!("site-nav", props.scrolled.then_some("scrolled"))}>
            <div class="site-nav__content">
                <a href="#home" class="site-nav__logo">
                    <Logo class="site-nav__logo-img" width={200} height={40} />
                </a>

                <div class="site-nav__links">
                    { for NAV_ITEMS.iter().map(render_item(false)) }
                </div>

                <button class="site-nav__toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="site-nav__mobile">
                            { for NAV_ITEMS.iter().map(render_item(true)) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.25rem 0;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(4px);
                    transition: all 0.5s ease;
                }

                .site-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(40px);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .site-nav__content {
                    max-width: 980px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .site-nav__logo {
                    display: flex;
                    align-items: center;
                }

                .site-nav__logo-img {
                    height: 24px;
                    width: auto;
                    filter: brightness(0);
                }

                .site-nav__links {
                    display: none;
                    align-items: center;
                    gap: 2.5rem;
                }

                .site-nav__link {
                    font-size: 14px;
                    color: rgba(0, 0, 0, 0.8);
                    text-decoration: none;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .site-nav__link:hover {
                    color: #000;
                }

                .site-nav__toggle {
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    font-size: 24px;
                    color: #000;
                    cursor: pointer;
                }

                .site-nav__mobile {
                    max-width: 980px;
                    margin: 0 auto;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    background: rgba(255, 255, 255, 0.95);
                    border-top: 1px solid rgba(0, 0, 0, 0.1);
                    animation: reveal-enter 0.3s ease-out both;
                    --reveal-x: 0px;
                    --reveal-y: -8px;
                    --reveal-scale: 1;
                }

                .site-nav__mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    font-size: 17px;
                    color: rgba(0, 0, 0, 0.8);
                    text-decoration: none;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                }

                @media (min-width: 1024px) {
                    .site-nav__links {
                        display: flex;
                    }
                    .site-nav__toggle,
                    .site-nav__mobile {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
