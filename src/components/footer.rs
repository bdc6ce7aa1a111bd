use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Minimal variant used on the contact page: copyright line only.
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();

    html! {
        <footer class="site-footer">
            <div class="site-footer__content">
                {
                    if props.compact {
                        html! {}
                    } else {
                        html! {
                            <div class="site-footer__row">
                                <div class="site-footer__links">
                                    <a href="#">{"Privacy Policy"}</a>
                                    <a href="#">{"Terms of Service"}</a>
                                </div>
                                <div class="site-footer__social">
                                    <a href="#" aria-label="LinkedIn">{"in"}</a>
                                    <a href="#" aria-label="Twitter">{"𝕏"}</a>
                                    <a href="#" aria-label="Facebook">{"f"}</a>
                                </div>
                            </div>
                        }
                    }
                }
                <div class={classes!("site-footer__copyright", (!props.compact).then_some("spaced"))}>
                    { config.copyright_line() }
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #f9fafb;
                    padding: 3rem 0;
                    border-top: 1px solid rgba(0, 0, 0, 0.05);
                }

                .site-footer__content {
                    max-width: 980px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .site-footer__row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .site-footer__links {
                    display: flex;
                    gap: 2rem;
                }

                .site-footer__links a {
                    font-size: 14px;
                    color: rgba(0, 0, 0, 0.6);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .site-footer__links a:hover {
                    color: #000;
                }

                .site-footer__social {
                    display: flex;
                    gap: 1rem;
                }

                .site-footer__social a {
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 14px;
                    font-weight: 600;
                    color: rgba(0, 0, 0, 0.6);
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .site-footer__social a:hover {
                    background: rgba(0, 0, 0, 0.1);
                }

                .site-footer__copyright {
                    text-align: center;
                    font-size: 12px;
                    color: rgba(0, 0, 0, 0.4);
                }

                .site-footer__copyright.spaced {
                    margin-top: 2rem;
                }

                @media (min-width: 768px) {
                    .site-footer__row {
                        flex-direction: row;
                        gap: 0;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
