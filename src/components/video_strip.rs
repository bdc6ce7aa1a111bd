use std::rc::Rc;

use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::{SiteConfig, CAROUSEL_COPIES, VIDEO_LOOP_SECS, VIDEO_STRIDE_PX};
use crate::content::VideoLeader;
use crate::motion::marquee_keyframes;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub leader: VideoLeader,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let leader = &props.leader;

    let thumbnail = if leader.thumbnail.is_empty() {
        config.default_video_thumbnail.clone()
    } else {
        leader.thumbnail.to_string()
    };

    // Swap to the default thumbnail once; if that fails too, leave it.
    let onerror = {
        let fallback = config.default_video_thumbnail.clone();
        Callback::from(move |e: Event| {
            let img: HtmlImageElement = e.target_unchecked_into();
            if !img.src().contains(&fallback) {
                img.set_src(&fallback);
            }
        })
    };

    html! {
        <a href={leader.video_url} target="_blank" rel="noopener noreferrer" class="video-card">
            <div class="video-card__frame">
                <div class="video-card__thumb">
                    <img
                        src={thumbnail}
                        alt={format!("{} - {}", leader.name, leader.title)}
                        loading="lazy"
                        {onerror}
                    />
                    <div class="video-card__shade"></div>
                    <div class="video-card__play">
                        <div class="video-card__play-button">
                            <div class="video-card__play-icon"></div>
                        </div>
                    </div>
                </div>
                <div class="video-card__caption">
                    <h3>{leader.name}</h3>
                    <p class="video-card__company">{leader.company}</p>
                    <p class="video-card__title">{leader.title}</p>
                </div>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoStripProps {
    pub leaders: &'static [VideoLeader],
}

#[function_component(VideoStrip)]
pub fn video_strip(props: &VideoStripProps) -> Html {
    let keyframes = marquee_keyframes("scroll-videos", props.leaders.len(), VIDEO_STRIDE_PX);
    let track_style = format!("animation: scroll-videos {}s linear infinite;", VIDEO_LOOP_SECS);

    html! {
        <div class="video-strip">
            <div class="video-strip__track" style={track_style}>
                {
                    props.leaders
                        .iter()
                        .cycle()
                        .take(props.leaders.len() * CAROUSEL_COPIES)
                        .enumerate()
                        .map(|(idx, leader)| html! {
                            <VideoCard key={format!("{}-{}", leader.name, idx)} leader={leader.clone()} />
                        })
                        .collect::<Html>()
                }
            </div>
            <style>
                { keyframes }
                {r#"
                .video-strip {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem 0;
                }

                .video-strip__track {
                    display: flex;
                    align-items: center;
                    gap: 24px;
                    width: max-content;
                }

                .video-card {
                    display: block;
                    flex-shrink: 0;
                    width: 380px;
                    cursor: pointer;
                    text-decoration: none;
                }

                .video-card__frame {
                    position: relative;
                    overflow: hidden;
                    border-radius: 16px;
                    background: #000;
                }

                .video-card__thumb {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                }

                .video-card__thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }

                .video-card:hover .video-card__thumb img {
                    transform: scale(1.05);
                }

                .video-card__shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.2);
                    transition: background 0.3s ease;
                }

                .video-card:hover .video-card__shade {
                    background: rgba(0, 0, 0, 0.4);
                }

                .video-card__play {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .video-card__play-button {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.3s ease;
                }

                .video-card:hover .video-card__play-button {
                    transform: scale(1.1);
                    background: #fff;
                }

                .video-card__play-icon {
                    width: 0;
                    height: 0;
                    margin-left: 4px;
                    border-left: 18px solid #000;
                    border-top: 12px solid transparent;
                    border-bottom: 12px solid transparent;
                }

                .video-card__caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.7), transparent);
                }

                .video-card__caption h3 {
                    margin: 0 0 0.25rem;
                    font-family: Inter, sans-serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                }

                .video-card__company {
                    margin: 0 0 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .video-card__title {
                    margin: 0;
                    font-size: 1rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                "#}
            </style>
        </div>
    }
}
