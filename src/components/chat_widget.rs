use crate::services::context::use_page_services;
use crate::services::signals::PanelSignal;
use crate::state::chat::{ChatLog, ChatMessage, ChatSession, Sender, SendOutcome};
use crate::state::panel::{self, PanelEvent, PanelState};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

const CHAT_CSS: &str = r#"
.chat-launcher {
    position: fixed;
    right: 1.25rem;
    bottom: 1.25rem;
    z-index: 40;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border: none;
    border-radius: 9999px;
    padding: 0.75rem 1rem;
    background: #059669;
    color: #fff;
    font: inherit;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
    cursor: pointer;
}
.chat-launcher:hover { background: #047857; }
.chat-launcher__dot { height: 0.5rem; width: 0.5rem; border-radius: 9999px; background: #a7f3d0; }
.chat {
    position: fixed;
    right: 1.25rem;
    bottom: 5rem;
    z-index: 60;
    width: 22rem;
    max-width: calc(100vw - 2.5rem);
    display: flex;
    flex-direction: column;
    border-radius: 1rem;
    background: #fff;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
    opacity: 0;
    transform: translateY(1rem);
    pointer-events: none;
    transition: opacity 0.25s ease, transform 0.25s ease;
}
.chat--open { opacity: 1; transform: translateY(0); pointer-events: auto; }
.chat__header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    border-bottom: 1px solid #e5e5e5;
}
.chat__title { font-weight: 600; margin: 0; font-size: 1rem; }
.chat__log {
    height: 16rem;
    overflow-y: auto;
    padding: 0.75rem 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.bubble { max-width: 80%; padding: 0.5rem 0.75rem; border-radius: 0.75rem; font-size: 0.875rem; }
.bubble--agent { align-self: flex-start; background: #f5f5f5; }
.bubble--user { align-self: flex-end; background: #059669; color: #fff; }
.chat__form { display: flex; gap: 0.5rem; padding: 0.75rem 1rem; border-top: 1px solid #e5e5e5; }
"#;

#[derive(Properties, PartialEq)]
struct BubbleProps {
    message: ChatMessage,
}

#[function_component(Bubble)]
fn bubble(props: &BubbleProps) -> Html {
    let class = match props.message.sender {
        Sender::Agent => "bubble--agent",
        Sender::User => "bubble--user",
    };
    html! {
        <div class={classes!("bubble", class)}>{props.message.text.clone()}</div>
    }
}

#[function_component(LiveChatWidget)]
pub fn live_chat_widget() -> Html {
    let services = use_page_services();
    let panel = use_reducer(PanelState::default);
    let draft = use_state(String::new);
    let messages = {
        let greeting = services.config.chat.greeting.clone();
        use_state(move || ChatLog::with_greeting(&greeting).messages().to_vec())
    };
    let session = {
        let setter = messages.setter();
        let chat = services.config.chat.clone();
        let scheduler = services.scheduler.clone();
        use_memo(
            move |_| {
                ChatSession::new(
                    &chat.greeting,
                    &chat.canned_reply,
                    scheduler,
                    chat.reply_delay_ms,
                    Callback::from(move |log| setter.set(log)),
                )
            },
            (),
        )
    };

    {
        let session = session.clone();
        use_effect_with_deps(move |_| move || session.cancel_pending(), ());
    }
    {
        let dispatcher = panel.dispatcher();
        let signals = services.signals.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = panel::bind(
                    &signals,
                    PanelSignal::OpenChat,
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

    let dispatch = |event: PanelEvent| {
        let dispatcher = panel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(event))
    };
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let onsubmit = {
        let draft = draft.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let SendOutcome::Sent { .. } = session.send(&draft) {
                draft.set(String::new());
            }
        })
    };

    let open = panel.is_open();

    html! {
        <>
            <style>{CHAT_CSS}</style>
            <button
                type="button"
                class="chat-launcher"
                aria-label="Open live chat"
                onclick={dispatch(PanelEvent::Launcher)}
            >
                <span class="chat-launcher__dot"></span>
                {"Live chat"}
            </button>
            <button
                type="button"
                aria-label="Close chat"
                class={classes!("backdrop", open.then(|| "backdrop--open"))}
                onclick={dispatch(PanelEvent::Backdrop)}
            ></button>
            <aside
                role="dialog"
                aria-modal="true"
                aria-labelledby="chat-panel-title"
                aria-hidden={(!open).to_string()}
                class={classes!("chat", open.then(|| "chat--open"))}
            >
                <div class="chat__header">
                    <h2 id="chat-panel-title" class="chat__title">{"Support Chat (demo)"}</h2>
                    <button type="button" aria-label="Close" class="drawer__close" onclick={dispatch(PanelEvent::CloseButton)}>
                        {"✕"}
                    </button>
                </div>
                <div class="chat__log" aria-live="polite">
                    { for messages.iter().map(|message| html! {
                        <Bubble key={message.id} message={message.clone()} />
                    }) }
                </div>
                <form class="chat__form" {onsubmit}>
                    <input
                        class="field"
                        placeholder="Type your message"
                        aria-label="Type your message"
                        value={(*draft).clone()}
                        {oninput}
                    />
                    <button type="submit" class="button">{"Send"}</button>
                </form>
            </aside>
        </>
    }
}
