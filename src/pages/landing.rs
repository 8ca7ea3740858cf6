use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::background::HourglassField;
use crate::components::contact::ContactSection;
use crate::components::faq::FaqSection;
use crate::components::scroll_top::ScrollTopButton;
use crate::config;
use crate::scroll_to_anchor;
use crate::stats::counter::{CounterAnimator, CounterSpec};
use crate::stats::fetch::{fetch_online_count, online_target};
use crate::stats::reveal::VisibilityTrigger;

const USERS_END: u64 = 50_000;
const COMMUNITY_END: u64 = 20_000;
const HOLDERS_END: u64 = 15_000;
const ACTIVE_END: u64 = 8_000;

/// The one counter whose target comes from the stats endpoint.
const ONLINE_COUNTER_ID: &str = "online-count";

fn fixed_counters() -> [CounterSpec; 4] {
    [
        CounterSpec::count_up("users-count", USERS_END),
        CounterSpec::count_up("community-count", COMMUNITY_END),
        CounterSpec::count_up("holders-count", HOLDERS_END),
        CounterSpec::count_up("active-count", ACTIVE_END),
    ]
}

const STAT_LABELS: [(&str, &str); 5] = [
    ("users-count", "Registered Users"),
    ("community-count", "Community Members"),
    ("holders-count", "Token Holders"),
    ("active-count", "Active Miners"),
    (ONLINE_COUNTER_ID, "Mining Right Now"),
];

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "time",
        "Time Mining",
        "No rigs, no heat, no noise. Keep an hourglass running and CHRON accrues for every minute of it.",
    ),
    (
        "phone",
        "Mine From Your Phone",
        "The miner is a lightweight app. A daily flip of the hourglass keeps your session and streak alive.",
    ),
    (
        "fair",
        "Fair Launch",
        "No presale and no team allocation mined ahead of you. Every CHRON in existence was mined by a member.",
    ),
    (
        "secure",
        "Audited Contract",
        "The token contract is independently audited and the report is public before a single listing.",
    ),
    (
        "community",
        "Community Governed",
        "Holders vote on emission curves and treasury spending once governance goes live.",
    ),
    (
        "grow",
        "Streak Boosts",
        "Consecutive mining days compound your rate. Time invested is literally time earned.",
    ),
];

const ROADMAP: [(&str, &str, &str); 4] = [
    (
        "Q1 2025",
        "Genesis",
        "Token contract deployed, whitepaper published, time-mining model finalized.",
    ),
    (
        "Q2 2025",
        "Mining App",
        "Public beta of the hourglass miner on iOS and Android.",
    ),
    (
        "Q3 2025",
        "Listings",
        "Token generation event and the first exchange listings.",
    ),
    (
        "Q4 2025",
        "Ecosystem",
        "Staking, governance voting and the CHRON merchant toolkit.",
    ),
];

const MOCKUPS: [(&str, [(&str, &str); 3]); 3] = [
    (
        "Mining",
        [
            ("Session", "04:12:09"),
            ("Rate", "52 CHRON/h"),
            ("Mined today", "+216"),
        ],
    ),
    (
        "Wallet",
        [
            ("Balance", "12,480"),
            ("Streak", "21 days"),
            ("Boost", "x1.4"),
        ],
    ),
    (
        "Leaderboard",
        [
            ("Your rank", "#1,204"),
            ("Top miner", "88,102"),
            ("Friends", "14"),
        ],
    ),
];

fn feature_icon(key: &str) -> Html {
    let path = match key {
        "time" => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        "phone" => "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z",
        "fair" => "M3 6l3 1m0 0l-3 9a5.002 5.002 0 006.001 0M6 7l3 9M6 7l6-2m6 2l3-1m-3 1l-3 9a5.002 5.002 0 006.001 0M18 7l3 9m-3-9l-6-2m0-2v2m0 16V5m0 16H9m3 0h3",
        "secure" => "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
        "community" => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
        _ => "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
    };
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" stroke-linejoin="round" d={path} />
        </svg>
    }
}

fn render_mockup(
    index: usize,
    hovered: Option<usize>,
    parallax: (f64, f64),
    on_hover: &Callback<Option<usize>>,
) -> Html {
    let (title, rows) = MOCKUPS[index];
    // Front mockups shift more than back ones.
    let factor = 15.0 - index as f64 * 5.0;
    let depth_style = format!(
        "transform: translateX({:.1}px) translateY({:.1}px);",
        parallax.0 * factor,
        parallax.1 * factor,
    );
    let state_class = match hovered {
        Some(current) if current == index => Some("lifted"),
        Some(_) => Some("dimmed"),
        None => None,
    };

    html! {
        <div class="mockup-depth" style={depth_style}>
            <div
                class={classes!("iphone-mockup", state_class)}
                onmouseenter={on_hover.reform(move |_: MouseEvent| Some(index))}
                onmouseleave={on_hover.reform(|_: MouseEvent| None)}
            >
                <div class="glow-effect"></div>
                <div class="mockup-notch"></div>
                <div class="mockup-screen">
                    <span class="screen-title">{title}</span>
                    { for rows.iter().map(|(label, value)| html! {
                        <div class="screen-row">
                            <span class="screen-label">{*label}</span>
                            <span class="screen-value">{*value}</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let mockup_container = use_node_ref();
    let parallax = use_state(|| (0.0f64, 0.0f64));
    let hovered = use_state(|| None::<usize>);

    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Reveal sections, feature cards and timeline items the first time they
    // come into view.
    {
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let reveal = VisibilityTrigger::new(|element: Element| {
                    let _ = element.class_list().add_1("visible");
                })
                .unwrap();

                if let Ok(nodes) = document.query_selector_all(".fade-in, .fade-in-left") {
                    for i in 0..nodes.length() {
                        if let Some(element) = nodes
                            .item(i)
                            .and_then(|node| node.dyn_into::<Element>().ok())
                        {
                            reveal.observe(&element);
                        }
                    }
                }

                move || reveal.disconnect()
            },
            (),
        );
    }

    // Start each counter the first time its element is visible. The online
    // counter first resolves its target from the stats endpoint, falling back
    // to a placeholder; the other four never depend on the fetch.
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let animator = CounterAnimator::new(window, document.clone());

                let counters = VisibilityTrigger::new(move |element: Element| {
                    let id = element.id();
                    let specs = fixed_counters();
                    if let Some(spec) = specs.iter().find(|spec| spec.element_id == id) {
                        animator.animate(spec.clone());
                    } else if id == ONLINE_COUNTER_ID {
                        let animator = animator.clone();
                        spawn_local(async move {
                            let fetched = fetch_online_count(config::stats_endpoint()).await;
                            let target = online_target(fetched);
                            animator.animate(CounterSpec::count_up(ONLINE_COUNTER_ID, target));
                        });
                    }
                })
                .unwrap();

                for (id, _) in STAT_LABELS {
                    if let Some(element) = document.get_element_by_id(id) {
                        counters.observe(&element);
                    }
                }

                move || counters.disconnect()
            },
            (),
        );
    }

    let on_container_move = {
        let parallax = parallax.clone();
        let container = mockup_container.clone();
        Callback::from(move |e: MouseEvent| {
            let width = web_sys::window()
                .and_then(|window| window.inner_width().ok())
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            // Parallax is desktop-only.
            if width <= 768.0 {
                return;
            }
            if let Some(container) = container.cast::<Element>() {
                let rect = container.get_bounding_client_rect();
                if rect.width() > 0.0 && rect.height() > 0.0 {
                    let x = (f64::from(e.client_x()) - rect.left()) / rect.width() - 0.5;
                    let y = (f64::from(e.client_y()) - rect.top()) / rect.height() - 0.5;
                    parallax.set((x, y));
                }
            }
        })
    };

    let on_container_leave = {
        let parallax = parallax.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            parallax.set((0.0, 0.0));
            hovered.set(None);
        })
    };

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |state: Option<usize>| hovered.set(state))
    };

    let cta_to = |target: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(target);
        })
    };

    html! {
        <div class="landing-page">
            <HourglassField />

            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Chronos"}</h1>
                    <p class="hero-subtitle">
                        {"Time is the ultimate currency. Keep the hourglass running and \
                          turn your minutes into CHRON — no hardware, no electricity bills."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#stats" class="hero-cta" onclick={cta_to("stats")}>
                            {"Start Mining"}
                        </a>
                        <a href="#features" class="hero-secondary" onclick={cta_to("features")}>
                            {"Learn More"}
                        </a>
                    </div>
                </div>

                <div
                    class="mockup-container"
                    ref={mockup_container.clone()}
                    onmousemove={on_container_move}
                    onmouseleave={on_container_leave}
                >
                    { for (0..MOCKUPS.len()).map(|i| render_mockup(i, *hovered, *parallax, &on_hover)) }
                </div>
            </header>

            <section id="features" class="features-section fade-in">
                <h2>{"Why Chronos?"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <div
                            class="feature-card fade-in"
                            style={format!("transition-delay: {:.1}s;", i as f64 * 0.1)}
                        >
                            <div class="feature-icon">{feature_icon(icon)}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="stats" class="stats-section fade-in">
                <h2>{"Chronos in Numbers"}</h2>
                <div class="stats-grid">
                    { for STAT_LABELS.iter().map(|(id, label)| html! {
                        <div class="stat-card">
                            <span class="stat-value" id={*id}>{"0+"}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section id="roadmap" class="roadmap-section fade-in">
                <h2>{"Roadmap"}</h2>
                <div class="timeline">
                    { for ROADMAP.iter().enumerate().map(|(i, (quarter, title, detail))| html! {
                        <div
                            class="timeline-item fade-in-left"
                            style={format!("transition-delay: {:.1}s;", i as f64 * 0.1)}
                        >
                            <span class="timeline-quarter">{*quarter}</span>
                            <div class="timeline-body">
                                <h3>{*title}</h3>
                                <p>{*detail}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <FaqSection />
            <ContactSection />

            <footer class="footer">
                <div class="footer-content">
                    <span class="footer-brand">{"Chronos"}</span>
                    <div class="footer-links">
                        <a href="#features" onclick={cta_to("features")}>{"Features"}</a>
                        <a href="#roadmap" onclick={cta_to("roadmap")}>{"Roadmap"}</a>
                        <a href="#faq" onclick={cta_to("faq")}>{"FAQ"}</a>
                        <a href="#contact" onclick={cta_to("contact")}>{"Contact"}</a>
                    </div>
                    <span class="footer-copyright">{"© 2025 Chronos. Every second counts."}</span>
                </div>
            </footer>

            <ScrollTopButton />

            <style>
                {r#"
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }

                .landing-page section {
                    position: relative;
                    z-index: 1;
                }

                /* One-shot reveal states; the trigger adds `visible`. */
                .fade-in {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .fade-in.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .fade-in-left {
                    opacity: 0;
                    transform: translateX(-20px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }

                .fade-in-left.visible {
                    opacity: 1;
                    transform: translateX(0);
                }

                .hero {
                    position: relative;
                    z-index: 1;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                    gap: 3rem;
                }

                .hero-title {
                    font-size: 5rem;
                    letter-spacing: 0.05em;
                    background: linear-gradient(45deg, var(--teal), var(--blue), var(--purple));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #bbb;
                    max-width: 620px;
                    margin: 1.5rem auto 0;
                    line-height: 1.6;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }

                .hero-cta {
                    background: linear-gradient(135deg, var(--blue), var(--purple));
                    color: var(--white);
                    padding: 1rem 2.5rem;
                    border-radius: 30px;
                    text-decoration: none;
                    font-size: 1.1rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                    box-shadow: 0 4px 16px rgba(76, 157, 243, 0.3);
                }

                .hero-cta:hover {
                    transform: translateY(-3px);
                    box-shadow: 0 8px 24px rgba(76, 157, 243, 0.45);
                }

                .hero-secondary {
                    color: var(--blue);
                    padding: 1rem 2.5rem;
                    border: 1px solid rgba(76, 157, 243, 0.4);
                    border-radius: 30px;
                    text-decoration: none;
                    font-size: 1.1rem;
                    transition: border-color 0.3s ease, color 0.3s ease;
                }

                .hero-secondary:hover {
                    border-color: var(--blue);
                    color: var(--white);
                }

                .mockup-container {
                    display: flex;
                    gap: 2rem;
                    justify-content: center;
                    align-items: center;
                    padding: 1rem;
                }

                .mockup-depth {
                    transition: transform 0.1s linear;
                }

                .iphone-mockup {
                    position: relative;
                    width: 200px;
                    height: 400px;
                    border-radius: 32px;
                    border: 2px solid rgba(255, 255, 255, 0.12);
                    background: linear-gradient(160deg, #20242c, #15171c);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.5);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                    overflow: hidden;
                }

                .iphone-mockup.lifted {
                    transform: scale(1.05) translateY(-10px);
                    z-index: 10;
                }

                .iphone-mockup.dimmed {
                    opacity: 0.5;
                    transform: scale(0.95);
                }

                .mockup-notch {
                    position: absolute;
                    top: 10px;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 70px;
                    height: 16px;
                    border-radius: 8px;
                    background: #0b0c0f;
                }

                .glow-effect {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 50% 0%, rgba(76, 157, 243, 0.25), transparent 70%);
                    opacity: 0.6;
                    transition: opacity 0.3s ease;
                    pointer-events: none;
                }

                .iphone-mockup.lifted .glow-effect {
                    opacity: 1;
                }

                .mockup-screen {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 3rem 1.2rem 1.2rem;
                    text-align: left;
                }

                .screen-title {
                    font-size: 1.1rem;
                    color: var(--white);
                    margin-bottom: 0.5rem;
                }

                .screen-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.6rem 0.8rem;
                    background: rgba(255, 255, 255, 0.04);
                    border-radius: 10px;
                }

                .screen-label {
                    color: #888;
                    font-size: 0.85rem;
                }

                .screen-value {
                    color: var(--teal);
                    font-size: 0.85rem;
                }

                .features-section,
                .stats-section,
                .roadmap-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .features-section h2,
                .stats-section h2,
                .roadmap-section h2 {
                    text-align: center;
                    font-size: 2.5rem;
                    margin-bottom: 3rem;
                    background: linear-gradient(45deg, var(--white), var(--blue));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .feature-card {
                    background: rgba(36, 36, 36, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(76, 157, 243, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    transition: opacity 0.5s ease, transform 0.5s ease, border-color 0.3s ease;
                }

                .feature-card:hover {
                    border-color: rgba(76, 157, 243, 0.35);
                }

                .feature-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    background: rgba(76, 157, 243, 0.12);
                    color: var(--blue);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.2rem;
                }

                .feature-icon svg {
                    width: 26px;
                    height: 26px;
                }

                .feature-card h3 {
                    margin-bottom: 0.8rem;
                    font-size: 1.2rem;
                }

                .feature-card p {
                    color: #999;
                    line-height: 1.6;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                }

                .stat-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.6rem;
                    padding: 2rem 1rem;
                    background: rgba(36, 36, 36, 0.85);
                    border: 1px solid rgba(24, 172, 145, 0.15);
                    border-radius: 16px;
                }

                .stat-value {
                    font-size: 2.2rem;
                    font-variant-numeric: tabular-nums;
                    color: var(--teal);
                }

                .stat-label {
                    color: #999;
                    font-size: 0.95rem;
                    text-align: center;
                }

                .timeline {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    max-width: 700px;
                    margin: 0 auto;
                    padding-left: 1.5rem;
                    border-left: 2px solid rgba(76, 157, 243, 0.25);
                }

                .timeline-item {
                    display: flex;
                    gap: 1.5rem;
                    align-items: baseline;
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }

                .timeline-quarter {
                    flex-shrink: 0;
                    color: var(--gold);
                    font-size: 0.95rem;
                    width: 70px;
                }

                .timeline-body h3 {
                    margin-bottom: 0.4rem;
                }

                .timeline-body p {
                    color: #999;
                    line-height: 1.6;
                }

                .footer {
                    position: relative;
                    z-index: 1;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    padding: 3rem 2rem;
                    margin-top: 4rem;
                }

                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .footer-brand {
                    font-size: 1.3rem;
                    letter-spacing: 0.05em;
                    background: linear-gradient(45deg, var(--teal), var(--blue));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .footer-links {
                    display: flex;
                    gap: 2rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }

                .footer-links a {
                    color: #999;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover {
                    color: var(--blue);
                }

                .footer-copyright {
                    color: #666;
                    font-size: 0.85rem;
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 7rem 1rem 3rem;
                    }

                    .hero-title {
                        font-size: 3rem;
                    }

                    .hero-subtitle {
                        font-size: 1.1rem;
                    }

                    .mockup-container {
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .features-section,
                    .stats-section,
                    .roadmap-section {
                        padding: 4rem 1rem;
                    }

                    .features-section h2,
                    .stats-section h2,
                    .roadmap-section h2 {
                        font-size: 2rem;
                    }

                    .timeline-item {
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
