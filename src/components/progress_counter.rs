use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config::{
    COUNTER_STEPS, COUNT_START_OFFSET_MS, COUNT_UP_MS, LABEL_FADE_OFFSET_MS, RING_SWEEP_MS,
};
use crate::hooks::use_in_view;
use crate::motion::{ring_circumference, ring_dash_offset, step_interval, step_value, RING_RADIUS, RING_STROKE};

/// A delayed count-up that writes each step into a state setter.
///
/// Dropping it cancels both the pending start and the running interval.
struct Sweep {
    _start: Timeout,
    ticker: Rc<RefCell<Option<Interval>>>,
}

impl Sweep {
    fn start(target: u32, delay_ms: u32, duration_ms: u32, setter: UseStateSetter<u32>) -> Self {
        let ticker = Rc::new(RefCell::new(None));
        let start = {
            let ticker = ticker.clone();
            Timeout::new(delay_ms, move || {
                let step = Rc::new(RefCell::new(0u32));
                let finished = ticker.clone();
                let interval = Interval::new(step_interval(duration_ms, COUNTER_STEPS), move || {
                    let mut current = step.borrow_mut();
                    *current += 1;
                    if *current <= COUNTER_STEPS {
                        setter.set(step_value(target, *current, COUNTER_STEPS));
                    } else if *current == COUNTER_STEPS + 1 {
                        // Can't drop the interval from inside its own tick.
                        let finished = finished.clone();
                        Timeout::new(0, move || {
                            finished.borrow_mut().take();
                        })
                        .forget();
                    }
                });
                *ticker.borrow_mut() = Some(interval);
            })
        };
        Self { _start: start, ticker }
    }
}

impl Drop for Sweep {
    fn drop(&mut self) {
        // Dropping a gloo Interval clears it.
        self.ticker.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressCounterProps {
    pub percentage: u32,
    pub label: AttrValue,
    pub color: AttrValue,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Ring that sweeps to `percentage` with a number counting up inside it.
/// Replays every time it scrolls back into view.
#[function_component(ProgressCounter)]
pub fn progress_counter(props: &ProgressCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "-100px", 0.0);

    let ring_progress = use_state(|| 0u32);
    let count = use_state(|| 0u32);
    let label_visible = use_state(|| false);

    {
        let ring_progress = ring_progress.clone();
        let count = count.clone();
        let label_visible = label_visible.clone();
        use_effect_with_deps(
            move |(in_view, percentage, delay_ms)| {
                let mut running: Option<(Sweep, Sweep, Timeout)> = None;
                if *in_view {
                    ring_progress.set(0);
                    count.set(0);
                    label_visible.set(false);

                    let ring = Sweep::start(*percentage, *delay_ms, RING_SWEEP_MS, ring_progress.setter());
                    let counter = Sweep::start(
                        *percentage,
                        delay_ms + COUNT_START_OFFSET_MS,
                        COUNT_UP_MS,
                        count.setter(),
                    );
                    let label = Timeout::new(delay_ms + LABEL_FADE_OFFSET_MS, move || {
                        label_visible.set(true);
                    });
                    running = Some((ring, counter, label));
                }
                move || drop(running)
            },
            (in_view, props.percentage, props.delay_ms),
        );
    }

    let circumference = ring_circumference();
    let offset = ring_dash_offset(*ring_progress);
    let label_style = format!("opacity: {};", if *label_visible { 1 } else { 0 });

    html! {
        <div ref={node} class="progress-counter">
            <div class="progress-counter__ring">
                <svg viewBox="0 0 200 200">
                    <circle
                        cx="100"
                        cy="100"
                        r={RING_RADIUS.to_string()}
                        stroke="#e5e7eb"
                        stroke-width={RING_STROKE.to_string()}
                        fill="none"
                    />
                    <circle
                        class="progress-counter__arc"
                        cx="100"
                        cy="100"
                        r={RING_RADIUS.to_string()}
                        stroke={props.color.clone()}
                        stroke-width={RING_STROKE.to_string()}
                        fill="none"
                        stroke-dasharray={circumference.to_string()}
                        stroke-dashoffset={offset.to_string()}
                        stroke-linecap="round"
                    />
                </svg>
                <div class="progress-counter__value">{format!("{}%", *count)}</div>
            </div>
            <div class="progress-counter__label" style={label_style}>
                <p>{&props.label}</p>
            </div>
            <style>
                {r#"
                .progress-counter {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: flex-start;
                    width: 100%;
                }

                .progress-counter__ring {
                    position: relative;
                    width: 140px;
                    height: 140px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 0.75rem;
                }

                .progress-counter__ring svg {
                    position: absolute;
                    width: 100%;
                    height: 100%;
                    transform: rotate(-90deg);
                }

                .progress-counter__arc {
                    transition: all 75ms ease-out;
                }

                .progress-counter__value {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-family: Arial, Helvetica, sans-serif;
                    font-size: 28px;
                    font-weight: 700;
                    line-height: 1;
                    font-variant-numeric: tabular-nums;
                    color: #000000;
                }

                .progress-counter__label {
                    max-width: 280px;
                    min-height: 64px;
                    padding: 0 0.75rem;
                    text-align: center;
                    transition: opacity 0.5s ease;
                }

                .progress-counter__label p {
                    margin: 0;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: rgba(0, 0, 0, 0.6);
                }

                @media (min-width: 640px) {
                    .progress-counter__ring {
                        width: 180px;
                        height: 180px;
                    }
                    .progress-counter__value {
                        font-size: 36px;
                    }
                }

                @media (min-width: 768px) {
                    .progress-counter__ring {
                        width: 200px;
                        height: 200px;
                    }
                    .progress-counter__value {
                        font-size: 48px;
                    }
                    .progress-counter__label p {
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
