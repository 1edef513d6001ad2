use crate::components::reveal::use_reveal;
use crate::components::sections::Section;
use crate::state::reveal::VALUES_REVEAL;
use yew::prelude::*;

const VALUES_GRID_ID: &str = "values-grid";
const COLUMNS: usize = 3;

// (icon, title, description); the first row drops in from above, the second rises from below
const VALUES: &[(&str, &str, &str)] = &[
    ("🛡", "Safety First", "Secure, structured environment and safeguarding"),
    ("🤝", "Compassion", "Dignity, empathy and respect for every family"),
    ("✔", "Growth", "We build skills, confidence and resilience"),
    ("👐", "Transparency", "Open communication with families and professionals"),
    ("👥", "Collaboration", "Working with social care and health partners"),
    ("👶", "Child Focus", "Decisions made in the child's best interests"),
];

const VALUES_CSS: &str = r#"
@keyframes slamDown {
    0% { transform: translateY(-24px); opacity: 0; }
    60% { transform: translateY(4px); opacity: 1; }
    80% { transform: translateY(-2px); }
    100% { transform: translateY(0); }
}
@keyframes slamUp {
    0% { transform: translateY(24px); opacity: 0; }
    60% { transform: translateY(-4px); opacity: 1; }
    80% { transform: translateY(2px); }
    100% { transform: translateY(0); }
}
.value-card { will-change: transform, opacity; }
.value-card--above { transform: translateY(-1.5rem); opacity: 0; }
.value-card--below { transform: translateY(1.5rem); opacity: 0; }
.value-card--slam-down { animation-name: slamDown; }
.value-card--slam-up { animation-name: slamUp; }
.value-card__head { display: flex; gap: 0.75rem; align-items: center; padding: 1rem; }
.value-card__icon {
    border-radius: 1rem;
    background: rgba(5, 150, 105, 0.1);
    padding: 0.5rem;
    font-size: 1.25rem;
    line-height: 1;
}
.value-card__body {
    padding: 1.25rem;
    border-radius: 0 0 1rem 1rem;
    background: #047857;
    color: #fff;
}
.value-card__body p { margin: 0; font-size: 15px; line-height: 1.6; }
"#;

#[function_component(Values)]
pub fn values() -> Html {
    let revealed = use_reveal(VALUES_GRID_ID, VALUES_REVEAL);

    html! {
        <Section id="values" title="Our Values" tight_top={true} compact={true}>
            <style>{VALUES_CSS}</style>
            <div id={VALUES_GRID_ID} class="grid grid--three">
                { for VALUES.iter().enumerate().map(|(i, (icon, title, desc))| {
                    let top_row = i < COLUMNS;
                    let motion = match (revealed, top_row) {
                        (true, true) => "value-card--slam-down",
                        (true, false) => "value-card--slam-up",
                        (false, true) => "value-card--above",
                        (false, false) => "value-card--below",
                    };
                    // rows stagger independently
                    let delay = VALUES_REVEAL.stagger_ms(i % COLUMNS);
                    let style = revealed.then(|| format!(
                        "animation-delay: {}ms; animation-duration: 800ms; animation-fill-mode: both;",
                        delay
                    ));
                    html! {
                        <div key={*title} tabindex="0" class={classes!("card", "card--lift", "value-card", motion)} {style}>
                            <div class="value-card__head">
                                <div class="value-card__icon" aria-hidden="true">{*icon}</div>
                                <h3 class="card__title">{*title}</h3>
                            </div>
                            <div class="card__rule"></div>
                            <div class="value-card__body">
                                <p>{*desc}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </Section>
    }
}
