use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const SHOW_AFTER_PX: f64 = 300.0;

/// Floating button that appears once the page has scrolled a bit and smooth
/// scrolls back to the top.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    visible.set(offset > SHOW_AFTER_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0);
            options.behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <button
                class={classes!("scroll-top-button", (*visible).then(|| "visible"))}
                onclick={onclick}
                aria-label="Back to top"
            >
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M5 15l7-7 7 7" />
                </svg>
            </button>

            <style>
                {r#"
                .scroll-top-button {
                    position: fixed;
                    bottom: 20px;
                    right: 20px;
                    width: 40px;
                    height: 40px;
                    background: linear-gradient(135deg, var(--blue), var(--purple));
                    color: var(--white);
                    border: none;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.3s, visibility 0.3s, transform 0.3s;
                    box-shadow: 0 4px 12px rgba(76, 157, 243, 0.3);
                    z-index: 99;
                }

                .scroll-top-button.visible {
                    opacity: 1;
                    visibility: visible;
                }

                .scroll-top-button:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 6px 16px rgba(76, 157, 243, 0.4);
                }

                .scroll-top-button svg {
                    width: 20px;
                    height: 20px;
                }
                "#}
            </style>
        </>
    }
}
