use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::flip_card::FlipCard;
use crate::components::footer::Footer;
use crate::components::partner_strip::PartnerStrip;
use crate::components::progress_counter::ProgressCounter;
use crate::components::reveal::{Entrance, Reveal, Trigger};
use crate::components::site_nav::SiteNav;
use crate::components::video_strip::VideoStrip;
use crate::config::{SiteConfig, NAV_SCROLL_THRESHOLD};
use crate::content::{
    ABOUT_IMAGE, ABOUT_IMAGE_ALT, ABOUT_PARAGRAPHS, HERO_HEADLINE, HERO_TAGLINE, PARTNERS,
    SERVICES, STATS, VIDEO_LEADERS,
};
use crate::hooks::use_scroll_metrics;
use crate::motion::{headline_char_delay, headline_tokens, hero_opacity, hero_scale, HeadlineToken};
use crate::Route;

fn go_to_contact(navigator: Option<Navigator>) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&Route::Contact),
        None => log::warn!("no router available, cannot open contact page"),
    })
}

/// Headline with every character rising in on a staggered delay.
fn render_headline(text: &str) -> Html {
    headline_tokens(text)
        .into_iter()
        .enumerate()
        .map(|(t_index, token)| match token {
            HeadlineToken::Space(space) => html! {
                <span key={t_index} class="hero__space">{space}</span>
            },
            HeadlineToken::Word(word) => html! {
                <span key={t_index} class="hero__word">
                    {
                        word.chars().enumerate().map(|(c_index, ch)| {
                            let style = format!("animation-delay: {:.2}s;", headline_char_delay(t_index, c_index));
                            html! {
                                <span key={format!("{}-{}", t_index, c_index)} class="hero__char" {style}>
                                    {ch.to_string()}
                                </span>
                            }
                        }).collect::<Html>()
                    }
                </span>
            },
        })
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let navigator = use_navigator();
    let scroll = use_scroll_metrics();

    let progress_style = format!("transform: scaleX({:.4});", scroll.progress);
    let hero_style = format!(
        "opacity: {:.3}; transform: scale({:.4});",
        hero_opacity(scroll.offset),
        hero_scale(scroll.offset)
    );
    let hero_background = format!("background-image: url('{}');", config.hero_background);

    html! {
        <div class="home">
            <div class="home__progress" style={progress_style}></div>

            <SiteNav scrolled={scroll.offset > NAV_SCROLL_THRESHOLD} />

            <section id="home" class="hero" style={hero_background}>
                <div class="hero__content" style={hero_style}>
                    <div class="hero__headline">
                        { render_headline(HERO_HEADLINE) }
                    </div>
                    <Reveal trigger={Trigger::Mount} duration={0.8} delay={1.6}>
                        <p class="hero__tagline"><span>{HERO_TAGLINE}</span></p>
                    </Reveal>
                    <Reveal trigger={Trigger::Mount} duration={0.8} delay={1.8} class="hero__actions">
                        <a href="#services" class="button button--dark">{"Explore services"}</a>
                        <button class="button button--ghost" onclick={go_to_contact(navigator.clone())}>
                            {"Contact us"}<span class="button__arrow">{"→"}</span>
                        </button>
                    </Reveal>
                </div>
            </section>

            <section id="about" class="home__section">
                <div class="home__container">
                    <Reveal class="home__heading">
                        <h2>{"Who Are We?"}</h2>
                    </Reveal>
                    <div class="about__grid">
                        <Reveal entrance={Entrance::Slide(-50)} duration={0.8} easing="ease-in-out" class="about__image">
                            <img src={ABOUT_IMAGE} alt={ABOUT_IMAGE_ALT} />
                        </Reveal>
                        <div class="about__copy">
                            <Reveal entrance={Entrance::Slide(50)} duration={0.8} delay={0.5} easing="ease-in-out">
                                <p>{ABOUT_PARAGRAPHS[0]}</p>
                            </Reveal>
                            <Reveal entrance={Entrance::Slide(50)} duration={0.8} delay={1.5} easing="ease-in-out">
                                <p>{ABOUT_PARAGRAPHS[1]}</p>
                            </Reveal>
                        </div>
                    </div>
                </div>
            </section>

            <section id="services" class="home__section">
                <div class="home__container">
                    <Reveal class="home__heading">
                        <h2>{"Core services."}</h2>
                        <p>{"Specialized capabilities designed to tackle the most complex enterprise challenges."}</p>
                    </Reveal>
                    <div class="services__grid">
                        {
                            SERVICES.iter().enumerate().map(|(index, service)| html! {
                                <FlipCard
                                    key={service.title}
                                    image_url={service.image_url}
                                    title={service.title}
                                    description={service.description}
                                    delay={index as f64 * 0.1}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="capabilities" class="home__section">
                <div class="home__container home__container--wide">
                    <Reveal class="home__heading">
                        <h2>{"Built for scale."}</h2>
                        <p>{"Enterprise-grade infrastructure with global reach and expertise."}</p>
                    </Reveal>
                    <div class="capabilities__grid">
                        {
                            STATS.iter().map(|stat| html! {
                                <div class="capabilities__cell">
                                    <ProgressCounter
                                        percentage={stat.percentage}
                                        label={stat.label}
                                        color={stat.color}
                                        delay_ms={stat.delay_ms}
                                    />
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="partners" class="home__section home__section--muted">
                <div class="home__container">
                    <Reveal class="home__heading">
                        <h2>{"Our partners."}</h2>
                    </Reveal>
                    <PartnerStrip partners={PARTNERS} />

                    <div class="insights">
                        <Reveal class="home__heading">
                            <h3>{"Industry Insights."}</h3>
                            <p>{"Insights from the pioneers shaping tomorrow's technology"}</p>
                        </Reveal>
                        <VideoStrip leaders={VIDEO_LEADERS} />
                    </div>
                </div>
            </section>

            <section id="contact" class="home__section">
                <div class="home__container">
                    <Reveal class="home__heading">
                        <h2>{"Let's get the conversation going"}</h2>
                        <p>{"Reach out to discuss your next strategic move or technical challenge."}</p>
                    </Reveal>
                    <Reveal entrance={Entrance::Rise(30)} class="contact-cta">
                        <button class="button button--dark" onclick={go_to_contact(navigator)}>
                            {"Get in touch"}
                        </button>
                    </Reveal>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .home__progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: #000;
                    transform-origin: left;
                    transition: transform 0.15s ease-out;
                    z-index: 100;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding-top: 5rem;
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    max-width: 980px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .hero__headline {
                    font-size: 3rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                    line-height: 1.05;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }

                .hero__space {
                    white-space: pre;
                }

                .hero__word {
                    display: inline-block;
                    margin-right: 0.15em;
                }

                .hero__char {
                    display: inline-block;
                    animation: hero-char-in 0.3s cubic-bezier(0.33, 1, 0.68, 1) both;
                }

                @keyframes hero-char-in {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .hero__tagline {
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    line-height: 1.6;
                    color: #fff;
                }

                .hero__tagline span {
                    display: inline-block;
                    padding: 0.75rem 1.25rem;
                    border-radius: 12px;
                    background: rgba(0, 0, 0, 0.45);
                    backdrop-filter: blur(4px);
                    text-shadow: 0 6px 18px rgba(0, 0, 0, 0.6);
                }

                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }

                .button {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    border: none;
                    font-size: 17px;
                    font-weight: 500;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .button--dark {
                    background: #000;
                    color: #fff;
                }

                .button--dark:hover {
                    background: rgba(0, 0, 0, 0.8);
                }

                .button--ghost {
                    background: none;
                    color: #fff;
                }

                .button__arrow {
                    margin-left: 0.5rem;
                }

                .home__section {
                    padding: 8rem 0;
                    background: #fff;
                }

                .home__section--muted {
                    background: #f9fafb;
                }

                .home__container {
                    max-width: 980px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .home__container--wide {
                    max-width: 1400px;
                }

                .home__heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .home__heading h2,
                .home__heading h3 {
                    font-size: 3rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                    color: rgba(0, 0, 0, 0.9);
                    margin: 0 0 1.5rem;
                }

                .home__heading p {
                    max-width: 42rem;
                    margin: 0 auto;
                    font-size: 1.25rem;
                    color: rgba(0, 0, 0, 0.6);
                }

                .about__grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }

                .about__image {
                    border-radius: 24px;
                    overflow: hidden;
                }

                .about__image img {
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                    display: block;
                }

                .about__copy p {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: rgba(0, 0, 0, 0.6);
                    margin: 0 0 1.5rem;
                }

                .services__grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .capabilities__grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1.5rem;
                    padding: 3rem 1rem;
                    align-items: start;
                }

                .capabilities__cell {
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    height: 100%;
                }

                .insights {
                    max-width: 1400px;
                    margin: 5rem auto 0;
                }

                .contact-cta {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                @media (min-width: 640px) {
                    .hero__actions {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .hero__headline {
                        font-size: 4.5rem;
                    }
                    .hero__tagline {
                        font-size: 1.5rem;
                    }
                    .home__heading h2,
                    .home__heading h3 {
                        font-size: 3.75rem;
                    }
                    .services__grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                    .capabilities__grid {
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                    }
                }

                @media (min-width: 1024px) {
                    .hero__headline {
                        font-size: 6rem;
                    }
                    .about__grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </div>
    }
}
