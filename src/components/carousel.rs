use crate::services::context::use_page_services;
use crate::state::carousel::{AutoAdvance, CarouselState};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct Slide {
    title: &'static str,
    tag: &'static str,
    src: &'static str,
    alt: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Child-centred",
        tag: "Safety first",
        src: "/assets/child-centred.jpg",
        alt: "Happy diverse children lying in a circle",
    },
    Slide {
        title: "Evidence-based",
        tag: "Court-ready reports",
        src: "/assets/evidence-based.jpg",
        alt: "Gavel and stethoscope representing evidence and care",
    },
    Slide {
        title: "Therapeutic",
        tag: "Support & growth",
        src: "/assets/therapeutic-support.jpg",
        alt: "Practitioner celebrating progress with mother and child",
    },
    Slide {
        title: "Multi-agency",
        tag: "LA • Health • Courts",
        src: "/assets/multi-agency.jpg",
        alt: "Professionals reviewing a plan together",
    },
    Slide {
        title: "Protecting Children",
        tag: "Safeguarding together",
        src: "/assets/protecting-children.jpg",
        alt: "Children and adult hands together symbolising protection",
    },
];

/// Slides whose image failed to load; their gradient background shows instead.
#[derive(Default, PartialEq)]
struct BrokenImages(Vec<usize>);

impl Reducible for BrokenImages {
    type Action = usize;

    fn reduce(self: Rc<Self>, slide: usize) -> Rc<Self> {
        if self.0.contains(&slide) {
            return self;
        }
        let mut broken = self.0.clone();
        broken.push(slide);
        Rc::new(Self(broken))
    }
}

const CAROUSEL_CSS: &str = r#"
.approach { padding-top: 0.5rem; padding-bottom: 2.5rem; }
.carousel {
    position: relative;
    overflow: hidden;
    border-radius: 1rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    outline: 1px solid rgba(0, 0, 0, 0.05);
}
.carousel__track { position: relative; height: 420px; }
.slide {
    position: absolute;
    inset: 0;
    opacity: 0;
    transition: opacity 0.5s ease;
}
.slide--active { opacity: 1; }
.slide__fallback, .slide__img, .slide__shade { position: absolute; inset: 0; }
.slide__fallback { background: linear-gradient(to bottom right, #ecfdf5, #fff); }
.slide__img { height: 100%; width: 100%; object-fit: cover; }
.slide__shade {
    background: linear-gradient(to top, rgba(0, 0, 0, 0.55), rgba(0, 0, 0, 0.25), transparent);
}
.slide__caption { position: absolute; left: 2rem; right: 2rem; bottom: 1.5rem; color: #fff; }
.slide__caption h3 { font-size: 1.875rem; font-weight: 700; margin: 0; }
.slide__caption p { margin: 0.25rem 0 0; color: rgba(255, 255, 255, 0.9); }
.carousel__dots {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0.5rem;
    display: flex;
    justify-content: center;
    gap: 0.5rem;
}
.carousel__dot {
    height: 0.625rem;
    width: 0.625rem;
    padding: 0;
    border: none;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.5);
    box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.6);
    cursor: pointer;
}
.carousel__dot--active { background: #fff; }
@media (max-width: 768px) {
    .carousel__track { height: 300px; }
    .slide__caption { left: 1rem; right: 1rem; bottom: 1rem; }
    .slide__caption h3 { font-size: 1.5rem; }
}
"#;

#[function_component(ApproachCarousel)]
pub fn approach_carousel() -> Html {
    let services = use_page_services();
    let pausable = services.config.carousel.pausable;
    let interval_ms = services.config.carousel.interval_ms;

    let snapshot = use_state(move || CarouselState::new(SLIDES.len(), pausable));
    let broken = use_reducer(BrokenImages::default);
    let carousel = {
        let setter = snapshot.setter();
        let scheduler = services.scheduler.clone();
        use_memo(
            move |_| {
                AutoAdvance::new(
                    CarouselState::new(SLIDES.len(), pausable),
                    scheduler,
                    interval_ms,
                    Callback::from(move |state| setter.set(state)),
                )
            },
            (),
        )
    };

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                carousel.start();
                move || carousel.stop()
            },
            (),
        );
    }

    let on_hover = |hovered: bool| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set_hovered(hovered))
    };
    let on_focus = |focused: bool| {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.set_focused(focused))
    };
    let onkeydown = {
        let carousel = carousel.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowRight" => carousel.next(),
            "ArrowLeft" => carousel.previous(),
            _ => {}
        })
    };

    html! {
        <section class="approach" aria-label="New Leaf Oasis approach">
            <style>{CAROUSEL_CSS}</style>
            <div class="container">
                <div
                    class="carousel"
                    role="region"
                    aria-roledescription="carousel"
                    onmouseenter={on_hover(true)}
                    onmouseleave={on_hover(false)}
                    onfocusin={on_focus(true)}
                    onfocusout={on_focus(false)}
                    {onkeydown}
                >
                    <div class="carousel__track">
                        { for SLIDES.iter().enumerate().map(|(i, slide)| {
                            let active = snapshot.is_active(i);
                            let image = if broken.0.contains(&i) {
                                html! {}
                            } else {
                                let broken = broken.dispatcher();
                                html! {
                                    <img
                                        class="slide__img"
                                        src={slide.src}
                                        alt={slide.alt}
                                        onerror={Callback::from(move |_: Event| broken.dispatch(i))}
                                    />
                                }
                            };
                            html! {
                                <div
                                    key={slide.title}
                                    class={classes!("slide", active.then(|| "slide--active"))}
                                    aria-hidden={(!active).to_string()}
                                >
                                    <div class="slide__fallback"></div>
                                    { image }
                                    <div class="slide__shade"></div>
                                    <div class="slide__caption">
                                        <h3>{slide.title}</h3>
                                        <p>{slide.tag}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>

                    <div class="carousel__dots">
                        { for (0..snapshot.len()).map(|i| {
                            let carousel = carousel.clone();
                            html! {
                                <button
                                    type="button"
                                    aria-label={format!("Go to slide {}", i + 1)}
                                    class={classes!("carousel__dot", snapshot.is_active(i).then(|| "carousel__dot--active"))}
                                    onclick={Callback::from(move |_: MouseEvent| carousel.select_slide(i))}
                                ></button>
                            }
                        }) }
                    </div>
                </div>
            </div>
            <p class="sr-only" aria-live="polite">{snapshot.announcement()}</p>
        </section>
    }
}
