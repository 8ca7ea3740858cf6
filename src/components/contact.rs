use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const SEND_DELAY_MS: u32 = 1500;

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    MissingFields,
    Sending,
    Sent,
}

/// Contact form stub: validates locally and simulates the send. There is no
/// inbox behind this yet; the delay mirrors what a real submit will feel like.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Sending {
                return;
            }
            if name.is_empty() || email.is_empty() || message.is_empty() {
                status.set(FormStatus::MissingFields);
                return;
            }
            status.set(FormStatus::Sending);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SEND_DELAY_MS).await;
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                status.set(FormStatus::Sent);
            });
        })
    };

    let sending = *status == FormStatus::Sending;

    html! {
        <section id="contact" class="contact-section fade-in">
            <h2>{"Get in Touch"}</h2>
            <p class="contact-intro">
                {"Questions about mining, listings or partnerships? Drop us a line."}
            </p>

            {
                match *status {
                    FormStatus::MissingFields => html! {
                        <div class="form-status error">{"Please fill in all fields"}</div>
                    },
                    FormStatus::Sent => html! {
                        <div class="form-status success">
                            {"Thank you for your message! We will get back to you soon."}
                        </div>
                    },
                    _ => html! {},
                }
            }

            <form class="contact-form" onsubmit={onsubmit}>
                <input
                    id="name"
                    type="text"
                    placeholder="Your name"
                    value={(*name).clone()}
                    onchange={let name = name.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
                <input
                    id="email"
                    type="email"
                    placeholder="Your email"
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
                <textarea
                    id="message"
                    rows="5"
                    placeholder="Your message"
                    value={(*message).clone()}
                    onchange={let message = message.clone(); move |e: Event| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(input.value());
                    }}
                />
                <button type="submit" class="submit-button" disabled={sending}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>

            <style>
                {r#"
                .contact-section {
                    max-width: 600px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    position: relative;
                    z-index: 1;
                }

                .contact-section h2 {
                    text-align: center;
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, var(--white), var(--purple));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .contact-intro {
                    text-align: center;
                    color: #999;
                    margin-bottom: 2rem;
                }

                .form-status {
                    text-align: center;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    margin-bottom: 1.5rem;
                }

                .form-status.error {
                    background: rgba(213, 97, 205, 0.1);
                    color: var(--purple);
                    border: 1px solid rgba(213, 97, 205, 0.3);
                }

                .form-status.success {
                    background: rgba(24, 172, 145, 0.1);
                    color: var(--teal);
                    border: 1px solid rgba(24, 172, 145, 0.3);
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form input,
                .contact-form textarea {
                    background: rgba(36, 36, 36, 0.85);
                    border: 1px solid rgba(76, 157, 243, 0.15);
                    border-radius: 8px;
                    padding: 0.9rem 1rem;
                    color: var(--white);
                    font-size: 1rem;
                    font-family: inherit;
                    resize: vertical;
                }

                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: var(--blue);
                }

                .submit-button {
                    background: linear-gradient(135deg, var(--blue), var(--purple));
                    color: var(--white);
                    border: none;
                    border-radius: 8px;
                    padding: 1rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }

                .submit-button:hover:enabled {
                    transform: translateY(-2px);
                }

                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                "#}
            </style>
        </section>
    }
}
