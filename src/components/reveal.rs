use crate::services::context::use_page_services;
use crate::state::reveal::{watch_reveal, RevealSettings};
use yew::prelude::*;

/// Reveal flag for the element with `target_id`, updated as it scrolls in and out.
#[hook]
pub fn use_reveal(target_id: &'static str, settings: RevealSettings) -> bool {
    let services = use_page_services();
    let revealed = use_state(|| false);
    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |target_id| {
                let observation = watch_reveal(
                    services.viewport.as_ref(),
                    *target_id,
                    &settings,
                    Callback::from(move |value| setter.set(value)),
                );
                move || drop(observation)
            },
            target_id,
        );
    }
    *revealed
}
