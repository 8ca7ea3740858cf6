use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[cfg(test)]
#[path = "background_tests.rs"]
mod background_tests;

const PALETTE: [&str; 4] = ["#18ac91", "#4c9df3", "#d561cd", "#dfb459"];
const MOBILE_BREAKPOINT: f64 = 768.0;
const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Placement for one floating hourglass.
#[derive(Debug, Clone, PartialEq)]
pub struct HourglassSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub color_index: usize,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

pub fn field_count(mobile: bool) -> usize {
    if mobile {
        15
    } else {
        30
    }
}

/// Scatter `count` hourglasses with randomized placement. The RNG is an
/// injected `Math.random`-shaped closure returning [0, 1), so the placement
/// ranges stay checkable off-browser.
pub fn scatter(count: usize, mobile: bool, mut rng: impl FnMut() -> f64) -> Vec<HourglassSpec> {
    (0..count)
        .map(|_| {
            let left_pct = rng() * 100.0;
            let top_pct = rng() * 100.0;
            let size_px = if mobile {
                20.0 + rng() * 30.0
            } else {
                30.0 + rng() * 50.0
            };
            let color_index = (rng() * PALETTE.len() as f64).floor() as usize % PALETTE.len();
            let duration_s = 10.0 + rng() * 15.0;
            let delay_s = rng() * 5.0;
            let opacity = 0.1 + rng() * 0.2;
            HourglassSpec {
                left_pct,
                top_pct,
                size_px,
                color_index,
                duration_s,
                delay_s,
                opacity,
            }
        })
        .collect()
}

fn is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width <= MOBILE_BREAKPOINT)
        .unwrap_or(false)
}

fn current_scatter() -> Vec<HourglassSpec> {
    let mobile = is_mobile();
    scatter(field_count(mobile), mobile, js_sys::Math::random)
}

fn render_hourglass(spec: &HourglassSpec) -> Html {
    let color = PALETTE[spec.color_index];
    let style = format!(
        "left: {:.2}%; top: {:.2}%; width: {:.0}px; height: {:.0}px; opacity: {:.2}; \
         animation-duration: {:.1}s; animation-delay: {:.1}s; \
         filter: drop-shadow(0 0 10px {color});",
        spec.left_pct, spec.top_pct, spec.size_px, spec.size_px, spec.opacity,
        spec.duration_s, spec.delay_s,
    );
    html! {
        <div class="background-hourglass" style={style}>
            <svg viewBox="0 0 24 24" fill={color}>
                <path d="M6 2h12v4.2c0 .5-.2 1-.6 1.4L13.4 11c-.6.55-.6 1.45 0 2l4 3.4c.4.4.6.9.6 1.4V22H6v-4.2c0-.5.2-1 .6-1.4l4-3.4c.6-.55.6-1.45 0-2l-4-3.4C6.2 7.2 6 6.7 6 6.2V2z" />
            </svg>
        </div>
    }
}

/// Field of floating hourglasses behind the page content. Regenerated with a
/// fresh scatter when the window is resized, behind a short debounce.
#[function_component(HourglassField)]
pub fn hourglass_field() -> Html {
    let specs = use_state(current_scatter);

    {
        let specs = specs.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let resize_callback = Closure::wrap(Box::new(move || {
                    let specs = specs.clone();
                    // Replacing the stored handle cancels the previous timer.
                    *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                        specs.set(current_scatter());
                    }));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class="hourglass-container" aria-hidden="true">
            { for specs.iter().map(render_hourglass) }

            <style>
                {r#"
                .hourglass-container {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    z-index: 0;
                    pointer-events: none;
                }

                .background-hourglass {
                    position: absolute;
                    z-index: 0;
                    animation-name: float;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }

                .background-hourglass svg {
                    width: 100%;
                    height: 100%;
                }

                @keyframes float {
                    0%, 100% {
                        transform: translateY(0) rotate(0deg);
                    }
                    50% {
                        transform: translateY(-20px) rotate(10deg);
                    }
                }
                "#}
            </style>
        </div>
    }
}
