use yew::prelude::*;

use crate::hooks::use_in_view;

/// Where a revealed block starts before it settles into place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    /// Starts this many px below its resting position.
    Rise(i32),
    /// Starts this many px to the right (negative: left).
    Slide(i32),
    /// Starts at 90% scale.
    Grow,
}

impl Entrance {
    fn offsets(self) -> (i32, i32, f64) {
        match self {
            Entrance::Rise(dy) => (0, dy, 1.0),
            Entrance::Slide(dx) => (dx, 0, 1.0),
            Entrance::Grow => (0, 0, 0.9),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trigger {
    /// Animates in each time the block scrolls into view and out again when it leaves.
    #[default]
    InView,
    /// Animates once when the block is first rendered.
    Mount,
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Entrance::Rise(20))]
    pub entrance: Entrance,
    #[prop_or_default]
    pub trigger: Trigger,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or("ease-out")]
    pub easing: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "0px", 0.3);

    let (dx, dy, scale) = props.entrance.offsets();
    let style = format!(
        "--reveal-x: {}px; --reveal-y: {}px; --reveal-scale: {}; --reveal-duration: {}s; --reveal-delay: {}s; --reveal-easing: {};",
        dx, dy, scale, props.duration, props.delay, props.easing
    );

    let state_class = match props.trigger {
        Trigger::Mount => Some("reveal--mount"),
        Trigger::InView if in_view => Some("is-visible"),
        Trigger::InView => None,
    };

    html! {
        <div ref={node} class={classes!("reveal", state_class, props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

/// Shared rules for [`Reveal`], rendered once by the app shell.
pub const REVEAL_CSS: &str = r#"
.reveal {
    opacity: 0;
    transform: translate(var(--reveal-x), var(--reveal-y)) scale(var(--reveal-scale));
    transition:
        opacity var(--reveal-duration) var(--reveal-easing) var(--reveal-delay),
        transform var(--reveal-duration) var(--reveal-easing) var(--reveal-delay);
}

.reveal.is-visible {
    opacity: 1;
    transform: none;
}

.reveal--mount {
    animation: reveal-enter var(--reveal-duration) var(--reveal-easing) var(--reveal-delay) both;
}

@keyframes reveal-enter {
    from {
        opacity: 0;
        transform: translate(var(--reveal-x), var(--reveal-y)) scale(var(--reveal-scale));
    }
    to {
        opacity: 1;
        transform: none;
    }
}
"#;
