use crate::services::context::use_page_services;
use crate::services::signals::PanelSignal;
use crate::state::contact::ContactDraft;
use crate::state::panel::{self, PanelEvent, PanelState};
use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

const DRAWER_CSS: &str = r#"
.backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    border: none;
    padding: 0;
    background: rgba(0, 0, 0, 0.3);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}
.backdrop--open { opacity: 1; pointer-events: auto; }
.drawer {
    position: fixed;
    top: 0;
    right: 0;
    z-index: 60;
    height: 100%;
    width: 100%;
    max-width: 28rem;
    background: #fff;
    box-shadow: -10px 0 25px rgba(0, 0, 0, 0.15);
    transform: translateX(100%);
    transition: transform 0.3s ease;
}
.drawer--open { transform: translateX(0); }
.drawer__body { padding: 1.5rem; }
.drawer__header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.drawer__title { font-size: 1.25rem; font-weight: 600; margin: 0; }
.drawer__close { border: none; background: none; font-size: 1.25rem; cursor: pointer; }
.stack { display: flex; flex-direction: column; gap: 0.75rem; }
.field {
    width: 100%;
    box-sizing: border-box;
    border: 1px solid #d4d4d4;
    border-radius: 0.5rem;
    padding: 0.5rem 0.75rem;
    font: inherit;
}
.field--area { resize: vertical; }
.button {
    border: none;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    background: #059669;
    color: #fff;
    font: inherit;
    cursor: pointer;
}
.button:hover { background: #047857; }
.button--block { width: 100%; }
.fine-print { font-size: 0.75rem; color: #737373; margin: 0; }
.fine-print a { color: #047857; }
"#;

#[function_component(ContactDrawer)]
pub fn contact_drawer() -> Html {
    let services = use_page_services();
    let panel = use_reducer(PanelState::default);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    {
        let dispatcher = panel.dispatcher();
        let signals = services.signals.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = panel::bind(
                    &signals,
                    PanelSignal::OpenContact,
                    Callback::from(move |event| dispatcher.dispatch(event)),
                );
                move || drop(subscription)
            },
            (),
        );
    }
    {
        let dispatcher = panel.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(PanelEvent::Escape);
            }
        });
    }

    let close = |event: PanelEvent| {
        let dispatcher = panel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(event))
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let dispatcher = panel.dispatcher();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = ContactDraft {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let Some(event) = draft.submission() else {
                debug!("contact form rejected: {:?}", draft.validate());
                return;
            };
            // Demo form: nothing leaves the browser
            info!("contact form submitted");
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.alert_with_message("Message sent (demo)") {
                    warn!("confirmation alert failed: {err:?}");
                }
            }
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            dispatcher.dispatch(event);
        })
    };

    let open = panel.is_open();
    let contact_email = services.config.contact.email.clone();

    html! {
        <div aria-hidden={(!open).to_string()}>
            <style>{DRAWER_CSS}</style>
            <button
                type="button"
                aria-label="Close contact panel"
                class={classes!("backdrop", "backdrop--contact", open.then(|| "backdrop--open"))}
                onclick={close(PanelEvent::Backdrop)}
            ></button>
            <aside
                role="dialog"
                aria-modal="true"
                aria-labelledby="contact-panel-title"
                class={classes!("drawer", "drawer--contact", open.then(|| "drawer--open"))}
            >
                <div class="drawer__body">
                    <div class="drawer__header">
                        <h2 id="contact-panel-title" class="drawer__title">{"Contact Us"}</h2>
                        <button type="button" aria-label="Close" class="drawer__close" onclick={close(PanelEvent::CloseButton)}>
                            {"✕"}
                        </button>
                    </div>
                    <form class="stack" {onsubmit}>
                        <input
                            class="field"
                            required=true
                            placeholder="Your name"
                            aria-label="Your name"
                            value={(*name).clone()}
                            oninput={on_name}
                        />
                        <input
                            class="field"
                            required=true
                            type="email"
                            placeholder="Your email"
                            aria-label="Your email"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                        <textarea
                            class="field field--area"
                            rows="4"
                            placeholder="How can we help?"
                            aria-label="How can we help?"
                            value={(*message).clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="button button--block">{"Send"}</button>
                        <p class="fine-print">
                            {"Or email "}
                            <a href={format!("mailto:{}", contact_email)}>{contact_email.clone()}</a>
                        </p>
                    </form>
                </div>
            </aside>
        </div>
    }
}
