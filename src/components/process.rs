use crate::components::reveal::use_reveal;
use crate::components::sections::Section;
use crate::state::reveal::PROCESS_REVEAL;
use web_sys::Element;
use yew::prelude::*;

const PROCESS_STEPS_ID: &str = "process-steps";

/// Largest rotation, in degrees, a step card tilts toward the pointer.
const MAX_TILT_DEG: f64 = 7.0;

const STEPS: &[(&str, &str)] = &[
    ("Initial enquiry", "Call or email with basic, non confidential details. We will confirm availability."),
    ("Secure information", "We arrange a secure transfer for case information and risk overview."),
    ("Placement plan", "Agree objectives, safeguarding plan and settling in period."),
    ("Assessment", "Parenting capacity, therapeutic support and multi agency work."),
    ("Court ready report", "Clear, evidence based outcomes for planning and decision making."),
];

const PROCESS_CSS: &str = r#"
@keyframes rise {
    0% { transform: translateY(16px) scale(.985); opacity: 0; }
    60% { transform: translateY(-4px) scale(1.005); opacity: 1; }
    100% { transform: translateY(0) scale(1); }
}
.steps {
    display: grid;
    grid-template-columns: repeat(5, minmax(0, 1fr));
    gap: 1rem;
    list-style: none;
    padding: 0;
    margin: 0;
    font-size: 0.875rem;
    color: #262626;
}
.step-card {
    border-radius: 1rem;
    border: 1px solid rgba(6, 78, 59, 0.05);
    background: linear-gradient(to bottom, #fff, #fafafa);
    box-shadow: 0 12px 24px -12px rgba(0, 0, 0, 0.25);
    padding: 1rem;
    transition: transform 0.3s ease-out, box-shadow 0.3s ease-out;
    will-change: transform, opacity;
}
.step-card:hover { box-shadow: 0 18px 34px -14px rgba(0, 0, 0, 0.32); }
.step-card--waiting { opacity: 0; transform: translateY(1rem) scale(.985); }
.step-card--rise { animation-name: rise; }
.step-card__number { font-size: 0.75rem; font-weight: 600; color: #047857; margin: 0; }
.step-card__title { font-weight: 600; margin: 0; }
.step-card__desc { margin: 0.25rem 0 0; color: #404040; }
@media (max-width: 768px) {
    .steps { grid-template-columns: 1fr; }
}
"#;

/// CSS transform tilting a `width` x `height` card toward a pointer at (`x`, `y`)
/// relative to its top-left corner.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> Option<String> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let rotate_x = (0.5 - y / height) * MAX_TILT_DEG;
    let rotate_y = (x / width - 0.5) * MAX_TILT_DEG;
    Some(format!(
        "perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg)",
        rotate_x, rotate_y
    ))
}

#[derive(Properties, PartialEq)]
struct StepCardProps {
    number: usize,
    title: &'static str,
    desc: &'static str,
    index: usize,
    revealed: bool,
}

#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let card = use_node_ref();
    let tilt = use_state(|| None::<String>);

    let onmousemove = {
        let card = card.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = card.cast::<Element>() else { return };
            let rect = element.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            tilt.set(tilt_transform(x, y, rect.width(), rect.height()));
        })
    };
    let reset = {
        let tilt = tilt.clone();
        move || tilt.set(None)
    };
    let onmouseleave = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset())
    };
    let onblur = Callback::from(move |_: FocusEvent| reset());

    let style = match (&*tilt, props.revealed) {
        (Some(transform), _) => Some(format!("transform: {};", transform)),
        (None, true) => Some(format!(
            "animation-delay: {}ms; animation-duration: 720ms; animation-fill-mode: both;",
            PROCESS_REVEAL.stagger_ms(props.index)
        )),
        (None, false) => None,
    };

    html! {
        <li
            ref={card}
            tabindex="0"
            class={classes!("step-card", if props.revealed { "step-card--rise" } else { "step-card--waiting" })}
            {style}
            {onmousemove}
            {onmouseleave}
            {onblur}
        >
            <p class="step-card__number">{format!("Step {}", props.number)}</p>
            <p class="step-card__title">{props.title}</p>
            <p class="step-card__desc">{props.desc}</p>
        </li>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    let revealed = use_reveal(PROCESS_STEPS_ID, PROCESS_REVEAL);

    html! {
        <Section id="process" title="How Referrals Work" tight_top={true} compact={true}>
            <style>{PROCESS_CSS}</style>
            <ol id={PROCESS_STEPS_ID} class="steps">
                { for STEPS.iter().enumerate().map(|(i, (title, desc))| html! {
                    <StepCard key={*title} number={i + 1} title={*title} desc={*desc} index={i} {revealed} />
                }) }
            </ol>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(
            tilt_transform(50.0, 20.0, 100.0, 40.0).as_deref(),
            Some("perspective(800px) rotateX(0.00deg) rotateY(0.00deg)")
        );
    }

    #[test]
    fn corners_tilt_by_half_the_maximum() {
        assert_eq!(
            tilt_transform(0.0, 0.0, 200.0, 100.0).as_deref(),
            Some("perspective(800px) rotateX(3.50deg) rotateY(-3.50deg)")
        );
        assert_eq!(
            tilt_transform(200.0, 100.0, 200.0, 100.0).as_deref(),
            Some("perspective(800px) rotateX(-3.50deg) rotateY(3.50deg)")
        );
    }

    #[test]
    fn collapsed_card_does_not_tilt() {
        assert_eq!(tilt_transform(1.0, 1.0, 0.0, 10.0), None);
    }
}
