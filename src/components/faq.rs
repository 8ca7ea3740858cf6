use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    // Exclusive accordion, first item open by default.
    let open_item = use_state(|| Some(0usize));

    let on_toggle = {
        let open_item = open_item.clone();
        Callback::from(move |index: usize| {
            open_item.set(if *open_item == Some(index) {
                None
            } else {
                Some(index)
            });
        })
    };

    let open = |index: usize| *open_item == Some(index);

    html! {
        <section id="faq" class="faq-section fade-in">
            <h2>{"Frequently Asked Questions"}</h2>

            <FaqItem index={0} open={open(0)} on_toggle={on_toggle.clone()}
                question="What is Chronos?">
                <p>
                    {"Chronos is a community-driven token built around a simple idea: time \
                      is the ultimate currency. Instead of burning electricity on hash \
                      puzzles, you mine CHRON by keeping a session open in the app — your \
                      time literally becomes your stake."}
                </p>
            </FaqItem>

            <FaqItem index={1} open={open(1)} on_toggle={on_toggle.clone()}
                question="How does time mining work?">
                <p>
                    {"Open the app, start an hourglass, and CHRON accrues for as long as \
                      the sand keeps falling. Flipping the hourglass once a day keeps your \
                      streak alive and boosts your rate."}
                </p>
                <p>
                    {"There is no hardware requirement beyond a phone, so mining stays \
                      accessible to everyone."}
                </p>
            </FaqItem>

            <FaqItem index={2} open={open(2)} on_toggle={on_toggle.clone()}
                question="Is mining free?">
                <p>
                    {"Yes. Mining costs nothing and always will. Optional boosts exist for \
                      supporters, but the base rate is the same for every miner."}
                </p>
            </FaqItem>

            <FaqItem index={3} open={open(3)} on_toggle={on_toggle.clone()}
                question="When can I trade CHRON?">
                <p>
                    {"Mined balances become transferable at the token generation event, \
                      scheduled alongside our first exchange listings — see the roadmap \
                      above. Until then, everything you mine is recorded against your \
                      account."}
                </p>
            </FaqItem>

            <FaqItem index={4} open={open(4)} on_toggle={on_toggle.clone()}
                question="Do I need a wallet to start?">
                <p>
                    {"No. You can mine with just an account and connect a wallet later, \
                      any time before the token generation event."}
                </p>
            </FaqItem>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    position: relative;
                    z-index: 1;
                }

                .faq-section h2 {
                    text-align: center;
                    font-size: 2.5rem;
                    margin-bottom: 3rem;
                    background: linear-gradient(45deg, var(--white), var(--blue));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .faq-item {
                    background: rgba(36, 36, 36, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(76, 157, 243, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(76, 157, 243, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: var(--white);
                    font-size: 1.2rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: var(--blue);
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: var(--blue);
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 4rem 1rem;
                    }

                    .faq-question {
                        font-size: 1.1rem;
                        padding: 1rem;
                    }

                    .faq-answer {
                        padding: 0 1rem;
                    }

                    .faq-item.open .faq-answer {
                        padding: 0 1rem 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
