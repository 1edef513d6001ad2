use crate::components::carousel::ApproachCarousel;
use crate::components::chat_widget::LiveChatWidget;
use crate::components::contact_drawer::ContactDrawer;
use crate::components::cookie_banner::CookieBanner;
use crate::components::header::HeaderNav;
use crate::components::process::Process;
use crate::components::sections::{AboutTabs, AboutUs, Footer, Hero, WhyChooseUs};
use crate::components::service_cards::ServiceCards;
use crate::components::values::Values;
use crate::config::SiteConfig;
use crate::services::context::PageServices;
use yew::prelude::*;

/// Classes shared by more than one section.
pub const PAGE_CSS: &str = r#"
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: #171717;
    background: #fff;
    scroll-behavior: smooth;
}
.container { max-width: 80rem; margin: 0 auto; padding-left: 1rem; padding-right: 1rem; }
@media (min-width: 640px) { .container { padding-left: 1.5rem; padding-right: 1.5rem; } }
@media (min-width: 1024px) { .container { padding-left: 2rem; padding-right: 2rem; } }
.page-section { padding-top: 3rem; padding-bottom: 3rem; scroll-margin-top: 8rem; }
.page-section--compact { padding-bottom: 1.5rem; }
.page-section--tight-top { padding-top: 1.5rem; }
.section-title { font-size: 1.875rem; font-weight: 700; margin: 0 0 1.5rem; }
.prose { color: #404040; line-height: 1.7; max-width: 64rem; }
.prose p { margin: 0 0 1rem; }
.grid { display: grid; gap: 1.5rem; }
@media (min-width: 768px) {
    .grid--two { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .grid--three { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}
.card {
    position: relative;
    border-radius: 1rem;
    background: #fff;
    border: 1px solid #e5e5e5;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    overflow: hidden;
}
.card--lift { transition: transform 0.2s ease, box-shadow 0.2s ease; }
.card--lift:hover, .card--lift:focus-within, .card--lift:focus {
    transform: translateY(-4px);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}
.card__head { padding: 1.25rem 1.5rem 0.75rem; }
.card__title { font-size: 1.25rem; font-weight: 700; margin: 0; }
.card__title--green { color: #065f46; }
.card__rule { height: 2px; margin: 0 1.5rem; background: linear-gradient(to right, #10b981, transparent); }
.card__body { padding: 1rem 1.5rem 1.5rem; color: #404040; line-height: 1.6; }
.card__body p { margin: 0; }
.about-tabs { padding-bottom: 2rem; }
.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}
.skip-link { position: absolute; left: -9999px; }
.skip-link:focus {
    left: 1rem;
    top: 1rem;
    z-index: 100;
    background: #fff;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.15);
}
@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after { animation: none !important; transition: none !important; }
}
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let services = use_state(|| PageServices::browser(SiteConfig::load()));

    html! {
        <ContextProvider<PageServices> context={(*services).clone()}>
            <style>{PAGE_CSS}</style>
            <a href="#content" class="skip-link">{"Skip to content"}</a>
            <HeaderNav />
            <main id="content">
                <Hero />
                <AboutUs />
                <WhyChooseUs />
                <ApproachCarousel />
                <AboutTabs />
                <Values />
                <ServiceCards />
                <Process />
            </main>
            <ContactDrawer />
            <LiveChatWidget />
            <CookieBanner />
            <Footer />
        </ContextProvider<PageServices>>
    }
}
