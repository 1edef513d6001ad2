use crate::services::context::use_page_services;
use crate::state::consent::ConsentFlag;
use crate::Route;
use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

const BANNER_CSS: &str = r#"
.cookie-banner {
    position: fixed;
    left: 1rem;
    right: 1rem;
    bottom: 1rem;
    z-index: 70;
    margin: 0 auto;
    max-width: 48rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1rem 1.25rem;
    border-radius: 1rem;
    background: #fff;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
    font-size: 0.875rem;
}
.cookie-banner p { margin: 0; }
.cookie-banner a { color: #047857; }
"#;

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let services = use_page_services();
    let visible = use_state(|| false);
    let flag = {
        let storage = services.storage.clone();
        let key = services.config.consent.storage_key.clone();
        use_memo(move |_| ConsentFlag::new(storage, &key), ())
    };

    // Reading storage waits until after the first render so the page never
    // blocks on it.
    {
        let visible = visible.clone();
        let flag = flag.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(flag.should_prompt());
                || ()
            },
            (),
        );
    }

    let on_accept = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = flag.accept() {
                warn!("cookie consent not saved: {err}");
            }
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="region" aria-label="Cookie notice">
            <style>{BANNER_CSS}</style>
            <p>
                {"We use essential cookies to make this site work. "}
                <Link<Route> to={Route::Privacy}>{"Privacy & cookies"}</Link<Route>>
            </p>
            <button type="button" class="button" onclick={on_accept}>{"Got it"}</button>
        </div>
    }
}
