use crate::pages::home::PAGE_CSS;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const LEGAL_CSS: &str = r#"
.legal-content {
    min-height: 100vh;
    background: linear-gradient(to bottom right, rgba(236, 253, 245, 0.6), #fff);
    padding: 4rem 1rem;
}
.legal-content > div {
    max-width: 48rem;
    margin: 0 auto;
    background: #fff;
    border: 1px solid #d1fae5;
    border-radius: 1rem;
    padding: 2.5rem;
    box-shadow: 0 10px 15px -3px rgba(4, 120, 87, 0.1);
}
.legal-content h1 { font-size: 2rem; color: #064e3b; margin: 0 0 2rem; }
.legal-content h2 { font-size: 1.25rem; color: #065f46; margin: 0 0 0.75rem; }
.legal-content section { margin-bottom: 1.75rem; }
.legal-content p, .legal-content li { color: #404040; line-height: 1.7; }
.legal-content a { color: #047857; }
.legal-back { display: inline-block; margin-top: 1rem; font-weight: 600; }
"#;

#[function_component(PrivacyNotice)]
pub fn privacy_notice() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <style>{PAGE_CSS}</style>
            <style>{LEGAL_CSS}</style>
            <div>
                <h1>{"Privacy & Cookies"}</h1>

                <section>
                    <h2>{"1. What we store"}</h2>
                    <p>{"This website keeps a single value in your browser's local storage to remember that you have dismissed the cookie notice. It holds no personal information and is never sent to us."}</p>
                </section>

                <section>
                    <h2>{"2. Contact form and live chat"}</h2>
                    <ul>
                        <li>{"The contact form on this site is a demonstration and does not transmit your details."}</li>
                        <li>{"The live chat replies with an automatic message and keeps no history once you leave the page."}</li>
                        <li>{"To reach our team, email or telephone us using the details in the page footer."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Referrals"}</h2>
                    <p>{"Referral information shared with us by local authorities, health services or the courts is handled under our safeguarding and data protection policies, available on request."}</p>
                </section>

                <section>
                    <h2>{"4. Your rights"}</h2>
                    <p>{"You can clear the stored cookie preference at any time through your browser settings. For any data protection request, contact us and we will respond within one month."}</p>
                </section>

                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to New Leaf Oasis"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <style>{PAGE_CSS}</style>
            <style>{LEGAL_CSS}</style>
            <div>
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for has moved or never existed."}</p>
                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to New Leaf Oasis"}</Link<Route>>
            </div>
        </div>
    }
}
