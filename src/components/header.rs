use crate::services::context::use_page_services;
use crate::services::signals::PanelSignal;
use crate::state::scroll_spy::{track_sections, NAV_SECTIONS};
use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

const PRIMARY_LINKS: &[(&str, &str)] = &[
    ("about", "About Us"),
    ("values", "Our Values"),
    ("services", "Our Services"),
    ("choose", "Why Choose Us"),
    ("process", "Referral process"),
];

const TOP_LINKS: &[(&str, &str)] = &[
    ("#team", "Our Team"),
    ("#partners", "Our Partners"),
    ("#resources", "Resources and Support"),
    ("#careers", "Careers"),
    ("#login", "My NLO Login"),
];

const HEADER_CSS: &str = r#"
.top-bar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    background: #fff;
    border-bottom: 1px solid #e5e5e5;
}
.top-bar__inner, .green-bar__inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.top-bar__inner { padding-top: 0.75rem; padding-bottom: 0.75rem; }
.green-bar__inner { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand__mark {
    height: 2.25rem;
    width: 2.25rem;
    border-radius: 1rem;
    background: #059669;
    color: #fff;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}
.brand__name { font-weight: 600; line-height: 1.2; margin: 0; }
.brand__tagline { font-size: 0.75rem; color: #737373; line-height: 1.2; margin: 0; }
.top-links { display: flex; gap: 1.5rem; font-size: 0.875rem; }
.top-links a { color: inherit; text-decoration: none; }
.top-links a:hover { text-decoration: underline; }
.green-bar {
    position: fixed;
    left: 0;
    right: 0;
    z-index: 30;
    color: #fff;
    background: linear-gradient(to bottom, #047857, #065f46);
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}
.primary-links { display: flex; align-items: center; gap: 1.5rem; font-size: 0.875rem; }
.primary-links a { color: rgba(255, 255, 255, 0.9); text-decoration: none; }
.primary-links a:hover { color: #fff; }
.primary-links a.is-active {
    color: #fff;
    font-weight: 600;
    text-decoration: underline;
    text-decoration-thickness: 2px;
    text-underline-offset: 4px;
}
.contact-pill {
    display: inline-flex;
    align-items: center;
    border-radius: 9999px;
    border: 2px solid #fff;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    font-weight: 700;
    color: #fff;
    background: transparent;
    cursor: pointer;
}
.contact-pill:hover { background: #fff; color: #047857; }
@media (max-width: 768px) {
    .top-links { display: none; }
    .primary-links { gap: 0.75rem; overflow-x: auto; }
}
"#;

#[function_component(HeaderNav)]
pub fn header_nav() -> Html {
    let services = use_page_services();
    let active = use_state(String::new);
    let top_bar = use_node_ref();
    let green_bar = use_node_ref();
    let heights = use_state(|| (0, 0));

    // Both bars are fixed, so the spacer and the green bar offset follow their measured heights
    let measure = {
        let top_bar = top_bar.clone();
        let green_bar = green_bar.clone();
        let heights = heights.clone();
        Callback::from(move |_: ()| {
            let height = |node: &NodeRef| {
                node.cast::<HtmlElement>()
                    .map(|el| el.offset_height())
                    .unwrap_or(0)
            };
            heights.set((height(&top_bar), height(&green_bar)));
        })
    };
    {
        let measure = measure.clone();
        use_effect_with_deps(
            move |_| {
                measure.emit(());
                || ()
            },
            (),
        );
    }
    {
        let measure = measure.clone();
        use_event_with_window("resize", move |_: Event| measure.emit(()));
    }

    {
        let setter = active.setter();
        let viewport = services.viewport.clone();
        use_effect_with_deps(
            move |_| {
                let observation = track_sections(
                    viewport.as_ref(),
                    NAV_SECTIONS,
                    Callback::from(move |id: String| {
                        debug!("scroll spy: #{id} active");
                        setter.set(id);
                    }),
                );
                move || drop(observation)
            },
            (),
        );
    }

    let open_contact = {
        let signals = services.signals.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("nav raised {}", PanelSignal::OpenContact.name());
            signals.dispatch(PanelSignal::OpenContact);
        })
    };

    let (top_h, green_h) = *heights;

    html! {
        <header role="banner">
            <style>{HEADER_CSS}</style>
            <div ref={top_bar} class="top-bar">
                <div class="container top-bar__inner">
                    <div class="brand">
                        <span class="brand__mark">{"NL"}</span>
                        <div>
                            <p class="brand__name">{"New Leaf Oasis"}</p>
                            <p class="brand__tagline">{"Where Safety Meets Support"}</p>
                        </div>
                    </div>
                    <nav class="top-links" aria-label="Top navigation">
                        { for TOP_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href}>{*label}</a>
                        }) }
                    </nav>
                </div>
            </div>

            <div ref={green_bar} class="green-bar" style={format!("top: {}px;", top_h)}>
                <div class="container green-bar__inner">
                    <nav class="primary-links" aria-label="Primary navigation">
                        { for PRIMARY_LINKS.iter().map(|(id, label)| {
                            let is_active = *active == *id;
                            html! {
                                <a
                                    href={format!("#{}", id)}
                                    class={classes!(is_active.then(|| "is-active"))}
                                    aria-current={is_active.then(|| "page")}
                                >
                                    {*label}
                                </a>
                            }
                        }) }
                    </nav>
                    <button type="button" class="contact-pill" onclick={open_contact}>
                        {"Contact Us"}
                    </button>
                </div>
            </div>

            <div id="content-start" style={format!("height: {}px;", top_h + green_h)} aria-hidden="true"></div>
        </header>
    }
}
