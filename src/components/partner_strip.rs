use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{CAROUSEL_COPIES, PARTNER_LOOP_SECS, PARTNER_STRIDE_PX};
use crate::content::Partner;
use crate::motion::marquee_keyframes;

#[derive(Properties, PartialEq)]
pub struct PartnerStripProps {
    pub partners: &'static [Partner],
}

/// Endlessly scrolling row of partner logos. Logos stay greyscale
/// until hovered.
#[function_component(PartnerStrip)]
pub fn partner_strip(props: &PartnerStripProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    let keyframes = marquee_keyframes("scroll-left", props.partners.len(), PARTNER_STRIDE_PX);
    let track_style = format!("animation: scroll-left {}s linear infinite;", PARTNER_LOOP_SECS);

    let logos = props
        .partners
        .iter()
        .cycle()
        .take(props.partners.len() * CAROUSEL_COPIES)
        .enumerate()
        .map(|(idx, partner)| {
            let onmouseenter = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(Some(idx)))
            };
            let onmouseleave = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(None))
            };
            let active = *hovered == Some(idx);
            html! {
                <div
                    key={format!("{}-{}", partner.name, idx)}
                    class={classes!("partner-strip__item", active.then_some("active"))}
                    {onmouseenter}
                    {onmouseleave}
                >
                    <img src={partner.logo} alt={partner.name} />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="partner-strip">
            <div class="partner-strip__track" style={track_style}>
                { logos }
            </div>
            <style>
                { keyframes }
                {r#"
                .partner-strip {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem 0;
                }

                .partner-strip__track {
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    width: max-content;
                }

                .partner-strip__item {
                    flex-shrink: 0;
                    width: 180px;
                    height: 100px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    filter: grayscale(1);
                    transform: scale(1);
                    transition: all 0.3s ease;
                }

                .partner-strip__item.active {
                    filter: grayscale(0);
                    transform: scale(1.1);
                }

                .partner-strip__item img {
                    width: 140px;
                    height: 70px;
                    object-fit: contain;
                }
                "#}
            </style>
        </div>
    }
}
