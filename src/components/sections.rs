//! Fixed-copy sections of the home page.

use crate::services::context::use_page_services;
use crate::services::signals::PanelSignal;
use chrono::Datelike;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub tight_top: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Titled page section. The title id is derived from the section id for `aria-labelledby`.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let title_id = props.id.as_ref().map(|id| format!("{}-title", id));
    html! {
        <section
            id={props.id.clone()}
            class={classes!(
                "page-section",
                props.tight_top.then(|| "page-section--tight-top"),
                props.compact.then(|| "page-section--compact"),
            )}
            aria-labelledby={title_id.clone()}
        >
            <div class="container">
                <h2 id={title_id} class="section-title">{props.title.clone()}</h2>
                { for props.children.iter() }
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero {
    background: linear-gradient(to bottom right, rgba(236, 253, 245, 0.6), #fff);
}
.hero .container { padding-top: 2rem; padding-bottom: 0.75rem; }
.hero h1 {
    font-size: clamp(2.25rem, 6vw, 3.75rem);
    font-weight: 800;
    letter-spacing: -0.025em;
    line-height: 1.05;
    margin: 0;
}
.hero__lead {
    margin-top: 1rem;
    font-size: 1.25rem;
    color: #404040;
    line-height: 1.6;
    max-width: 56rem;
}
.hero__actions { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: 1rem; }
.hero__cta {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 1rem;
    padding: 0.75rem 1.25rem;
    font-weight: 600;
    text-decoration: none;
    transition: transform 0.15s ease;
}
.hero__cta:hover { transform: translateY(-2px); }
.hero__cta--secondary {
    background: #fff;
    color: #064e3b;
    border: 1px solid #6ee7b7;
    box-shadow: 0 4px 6px -1px rgba(4, 120, 87, 0.1);
}
.hero__cta--primary {
    color: #fff;
    background: #059669;
    box-shadow: 0 10px 15px -3px rgba(4, 120, 87, 0.2);
}
.hero__cta--primary:hover { background: #047857; }
@media (max-width: 640px) {
    .hero__cta { width: 100%; justify-content: center; }
    .hero__cta--primary { order: -1; }
}
"#;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero" aria-labelledby="hero-title">
            <style>{HERO_CSS}</style>
            <div class="container">
                <h1 id="hero-title">{"Safe Beginnings, Strong Futures"}</h1>
                <p class="hero__lead">
                    {"Residential placement and assessment for young mothers and children, and women leaving domestic abuse - delivered with safeguarding, compassion, and professionalism."}
                </p>
                <div class="hero__actions">
                    <a href="#services" class="hero__cta hero__cta--secondary">
                        {"Explore Services"}<span aria-hidden="true">{"›"}</span>
                    </a>
                    <a href="/referrals" class="hero__cta hero__cta--primary" aria-label="Make a referral (priority action)">
                        {"Make a Referral"}<span aria-hidden="true">{"↗"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    html! {
        <Section id="about" title="About Us" compact={true} tight_top={true}>
            <div class="prose">
                <p>{"New Leaf Oasis is a mother and baby social work assessment unit focused on safeguarding children while supporting and empowering mothers. Founded by two qualified social workers with over 30 years of combined experience, we provide a fair, compassionate and structured environment where parenting potential can be demonstrated safely."}</p>
                <p>{"Our ethos blends robust safeguarding with therapeutic support and professional rigour. We work in partnership with local authorities, health professionals and families to secure the best outcomes for children."}</p>
            </div>
        </Section>
    }
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <Section id="choose" title="Why Choose Us" compact={true} tight_top={true}>
            <div class="prose">
                <p>
                    {"Choosing the right mother and baby assessment unit is a big decision. At New Leaf Oasis we combine experienced, qualified leadership with a child-centred ethos and a calm, structured environment where mothers and babies can live together safely while being supported. Our therapeutic, compassionate approach helps mothers reflect, learn and grow; our assessments are clear, evidence-based and court-ready; and our strong partnerships with local authorities and health professionals ensure holistic, fair outcomes. We are committed to safeguarding and to creating real opportunities for positive change."}
                </p>
            </div>
        </Section>
    }
}

const ABOUT_TABS: &[(&str, &str)] = &[
    (
        "Our Vision",
        "To be a centre of excellence in mother and baby social work assessments, combining robust safeguarding with compassionate care. Every baby safe; every mother given a fair opportunity to demonstrate parenting potential; every decision delivered with professionalism and integrity.",
    ),
    (
        "Our Mission",
        "Provide a safe, structured home where mothers and babies can live together during assessment. We safeguard children, deliver fair evidence-based, child-centred assessments, and support mothers to reflect, learn and grow.",
    ),
    (
        "Our Purpose",
        "We provide safe, structured living during assessment; deliver clear, evidence-based, child-centred assessments; help mothers reflect, learn and build parenting skills; and work in partnership with local authorities and health partners.",
    ),
    (
        "Led by Experience",
        "Our founders bring decades of frontline practice across safeguarding, fostering & adoption, and family assessment. We combine professional rigour with compassion so babies are safe, mothers are supported and families can turn a new leaf.",
    ),
];

#[function_component(AboutTabs)]
pub fn about_tabs() -> Html {
    html! {
        <div class="container about-tabs">
            <div class="grid grid--two">
                { for ABOUT_TABS.iter().map(|(title, body)| html! {
                    <div key={*title} tabindex="0" class="card card--lift">
                        <div class="card__head">
                            <h3 class="card__title card__title--green">{*title}</h3>
                        </div>
                        <div class="card__rule"></div>
                        <div class="card__body">
                            <p>{*body}</p>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

const FOOTER_CSS: &str = r#"
.site-footer { background: #065f46; color: #fff; }
.site-footer__grid {
    display: grid;
    gap: 2rem;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    padding-top: 3rem;
    padding-bottom: 3rem;
}
.site-footer__heading { font-weight: 600; letter-spacing: 0.025em; margin: 0; }
.site-footer ul { list-style: none; padding: 0; margin: 0.75rem 0 0; }
.site-footer li { margin-bottom: 0.5rem; color: #d1fae5; }
.site-footer a { color: #d1fae5; text-decoration: none; }
.site-footer a:hover { text-decoration: underline; }
.site-footer__muted { color: #d1fae5; margin-top: 0.75rem; }
.site-footer__link-button {
    background: none;
    border: none;
    padding: 0;
    color: #d1fae5;
    font: inherit;
    text-decoration: underline;
    cursor: pointer;
}
.site-footer__bottom {
    border-top: 1px solid rgba(255, 255, 255, 0.15);
    text-align: center;
    font-size: 0.75rem;
    color: #d1fae5;
    padding: 1.5rem 0;
}
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    let services = use_page_services();
    let contact = services.config.contact.clone();
    let year = chrono::Local::now().year();

    let open_chat = {
        let signals = services.signals.clone();
        Callback::from(move |_: MouseEvent| signals.dispatch(PanelSignal::OpenChat))
    };

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="container site-footer__grid">
                <nav aria-label="Quick links">
                    <p class="site-footer__heading">{"Quick Links"}</p>
                    <ul>
                        <li><a href="#about">{"About Us"}</a></li>
                        <li><a href="#services">{"Our Services"}</a></li>
                        <li><a href="#choose">{"Why Choose Us"}</a></li>
                        <li><a href="#process">{"How Referrals Work"}</a></li>
                    </ul>
                </nav>
                <div>
                    <p class="site-footer__heading">{"Contact"}</p>
                    <ul>
                        <li><a href={format!("mailto:{}", contact.email)}>{contact.email.clone()}</a></li>
                        <li>{contact.phone.clone()}</li>
                        <li>
                            <button type="button" class="site-footer__link-button" onclick={open_chat}>
                                {"Chat with us"}
                            </button>
                        </li>
                        <li>{"Registered in England & Wales"}</li>
                    </ul>
                </div>
                <div>
                    <p class="site-footer__heading">{"New Leaf Oasis"}</p>
                    <p class="site-footer__muted">{"Where Safety Meets Support"}</p>
                </div>
                <div>
                    <p class="site-footer__heading">{"Affiliations"}</p>
                    <p class="site-footer__muted">{"ICO • BASW • NSPCC • Barnardo's"}</p>
                </div>
            </div>
            <div class="site-footer__bottom">
                {format!("© {} New Leaf Oasis. All rights reserved.", year)}
            </div>
        </footer>
    }
}
