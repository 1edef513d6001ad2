use crate::components::reveal::use_reveal;
use crate::components::sections::Section;
use crate::state::reveal::SERVICES_REVEAL;
use yew::prelude::*;

const SERVICES_GRID_ID: &str = "services-grid";

const SERVICES: &[(&str, &[&str])] = &[
    (
        "Safe, Supportive Living",
        &["Secure, nurturing accommodation", "Calm routines and positive interactions"],
    ),
    (
        "Settling-In Period (3 Weeks)",
        &["Gentle adjustment before assessment", "Relationship building and stabilising routines"],
    ),
    (
        "Parenting Capacity Assessments",
        &["Practical care skills and bonding", "Safeguarding awareness and insight"],
    ),
    (
        "Risk & Safeguarding",
        &["Identify risks and protective factors", "Environmental safety and stability"],
    ),
    (
        "Therapeutic Guidance",
        &["Role modelling and reflective practice", "Confidence, resilience and healthy routines"],
    ),
    (
        "Court-Ready Reports",
        &["Clear, evidence-based reporting", "Supports planning and decisions"],
    ),
];

const SERVICES_CSS: &str = r#"
@keyframes slideInL {
    0%   { transform: translateX(-40px); opacity: 0; }
    60%  { transform: translateX(6px);   opacity: 1; }
    80%  { transform: translateX(-2px); }
    100% { transform: translateX(0); }
}
@keyframes slideInR {
    0%   { transform: translateX(40px);  opacity: 0; }
    60%  { transform: translateX(-6px);  opacity: 1; }
    80%  { transform: translateX(2px); }
    100% { transform: translateX(0); }
}
.service-card { will-change: transform, opacity; }
.service-card--from-left { transform: translateX(-2rem); opacity: 0; }
.service-card--from-right { transform: translateX(2rem); opacity: 0; }
.service-card--slide-left { animation-name: slideInL; }
.service-card--slide-right { animation-name: slideInR; }
.service-card__ribbon {
    border-radius: 1rem 1rem 0 0;
    padding: 0.75rem 1rem;
    color: #fff;
    background: linear-gradient(to bottom right, #047857, #065f46);
}
.service-card__ribbon h3 { margin: 0; font-size: 1.125rem; font-weight: 600; line-height: 1.25; }
.service-card ul { list-style: none; margin: 0; padding: 1.25rem; color: #404040; }
.service-card li { display: flex; gap: 0.5rem; align-items: flex-start; margin-bottom: 0.5rem; }
.service-card li::before { content: "✓"; color: #047857; font-weight: 700; }
"#;

#[function_component(ServiceCards)]
pub fn service_cards() -> Html {
    let revealed = use_reveal(SERVICES_GRID_ID, SERVICES_REVEAL);

    html! {
        <Section id="services" title="What We Provide" tight_top={true} compact={true}>
            <style>{SERVICES_CSS}</style>
            <div id={SERVICES_GRID_ID} class="grid grid--two">
                { for SERVICES.iter().enumerate().map(|(i, (title, bullets))| {
                    let from_left = i % 2 == 0;
                    let motion = match (revealed, from_left) {
                        (true, true) => "service-card--slide-left",
                        (true, false) => "service-card--slide-right",
                        (false, true) => "service-card--from-left",
                        (false, false) => "service-card--from-right",
                    };
                    let style = revealed.then(|| format!(
                        "animation-delay: {}ms; animation-duration: 850ms; animation-fill-mode: both;",
                        SERVICES_REVEAL.stagger_ms(i)
                    ));
                    html! {
                        <div key={*title} tabindex="0" class={classes!("card", "card--lift", "service-card", motion)} {style}>
                            <div class="service-card__ribbon">
                                <h3>{*title}</h3>
                            </div>
                            <div class="card__rule"></div>
                            <ul>
                                { for bullets.iter().map(|b| html! { <li key={*b}><span>{*b}</span></li> }) }
                            </ul>
                        </div>
                    }
                }) }
            </div>
        </Section>
    }
}
