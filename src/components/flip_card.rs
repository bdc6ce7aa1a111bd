use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};

#[derive(Properties, PartialEq)]
pub struct FlipCardProps {
    pub image_url: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub delay: f64,
}

/// Service card showing image and title on the front and the
/// description on the back. Hover flips it, click toggles.
#[function_component(FlipCard)]
pub fn flip_card(props: &FlipCardProps) -> Html {
    let is_flipped = use_state(|| false);

    let onmouseenter = {
        let is_flipped = is_flipped.clone();
        Callback::from(move |_: MouseEvent| is_flipped.set(true))
    };
    let onmouseleave = {
        let is_flipped = is_flipped.clone();
        Callback::from(move |_: MouseEvent| is_flipped.set(false))
    };
    let onclick = {
        let is_flipped = is_flipped.clone();
        Callback::from(move |_: MouseEvent| is_flipped.set(!*is_flipped))
    };

    html! {
        <Reveal entrance={Entrance::Rise(30)} delay={props.delay} class="flip-card">
            <div class="flip-card__scene" {onmouseenter} {onmouseleave} {onclick}>
                <div class={classes!("flip-card__inner", (*is_flipped).then_some("flipped"))}>
                    <div class="flip-card__face flip-card__front">
                        <div class="flip-card__image">
                            <img src={props.image_url.clone()} alt={props.title.clone()} />
                        </div>
                        <div class="flip-card__title">
                            <h3>{&props.title}</h3>
                        </div>
                    </div>
                    <div class="flip-card__face flip-card__back">
                        <p>{&props.description}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .flip-card__scene {
                    perspective: 1000px;
                    cursor: pointer;
                }

                .flip-card__inner {
                    position: relative;
                    width: 100%;
                    height: 400px;
                    transform-style: preserve-3d;
                    transition: transform 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94),
                                box-shadow 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    border-radius: 24px;
                }

                .flip-card__inner.flipped {
                    transform: translateY(-8px) rotateY(180deg);
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.15);
                }

                .flip-card__face {
                    position: absolute;
                    inset: 0;
                    border-radius: 24px;
                    overflow: hidden;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    background: #ffffff;
                    backface-visibility: hidden;
                    -webkit-backface-visibility: hidden;
                }

                .flip-card__front {
                    display: flex;
                    flex-direction: column;
                }

                .flip-card__image {
                    width: 100%;
                    height: 240px;
                    overflow: hidden;
                }

                .flip-card__image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .flip-card__title {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 2rem;
                }

                .flip-card__title h3 {
                    margin: 0;
                    text-align: center;
                    color: #333333;
                    font-family: Inter, sans-serif;
                    font-weight: 700;
                    font-size: 24px;
                    line-height: 1.2;
                }

                .flip-card__back {
                    transform: rotateY(180deg);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                }

                .flip-card__back p {
                    color: #555555;
                    font-family: Inter, sans-serif;
                    font-size: 16px;
                    line-height: 1.6;
                    text-align: center;
                }
                "#}
            </style>
        </Reveal>
    }
}
