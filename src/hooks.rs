use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::scroll_progress;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub progress: f64,
}

fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window
        .document()?
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(viewport);
    Some(ScrollMetrics {
        offset,
        progress: scroll_progress(offset, scroll_height, viewport),
    })
}

/// Tracks the window scroll offset and how far down the page it is.
#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state(ScrollMetrics::default);

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let metrics = metrics.clone();
                        move || {
                            if let Some(next) = read_scroll_metrics() {
                                metrics.set(next);
                            }
                        }
                    });
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("could not attach scroll listener: {:?}", err);
                    }
                    // Initial read so a restored scroll position is honoured
                    if let Some(initial) = read_scroll_metrics() {
                        metrics.set(initial);
                    }
                    Box::new(move || {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    *metrics
}

/// Reports whether the referenced element is in the viewport.
///
/// Unlike a one-shot reveal this flips back to `false` when the element
/// leaves, so animations replay on every entry. `root_margin` uses CSS
/// margin syntax and `threshold` is the visible fraction that counts as
/// "in view".
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, root_margin, threshold)| {
                let mut observer_handle = None;

                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, _observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                in_view.set(entry.is_intersecting());
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(root_margin);
                    options.set_threshold(&JsValue::from_f64(*threshold));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            observer_handle = Some((observer, callback));
                        }
                        Err(err) => log::warn!("IntersectionObserver unavailable: {:?}", err),
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observer_handle {
                        observer.disconnect();
                    }
                }
            },
            (node, root_margin, threshold),
        );
    }

    *in_view
}
