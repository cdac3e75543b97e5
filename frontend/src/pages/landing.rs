use yew::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlVideoElement, Window};

use crate::components::contact_form::ContactForm;
use crate::scroll::{parallax_offset, section_progress, HeroFrame, HeroTimeline, SERVICE_COUNT};

const SERVICES: [(&str, &str); SERVICE_COUNT] = [
    ("Direction", "Concept, script and storyboard shaped around a single scroll."),
    ("Motion", "Camera moves, type and transitions timed to the reader's thumb."),
    ("Engineering", "Fast, accessible pages that stay smooth on a five-year-old phone."),
    ("Launch", "Analytics, hosting and a hand-off your team can keep running."),
];

// (depth in px, headline, copy)
const PARALLAX_SECTIONS: [(f64, &str, &str); 3] = [
    (160.0, "Stories that move with you", "Every section reacts to the scroll, so the page reads like a film you direct."),
    (260.0, "Built for the first impression", "Video, light and depth arrive exactly when the reader gets there."),
    (360.0, "Measured, not guessed", "Each phase is a plain window over scroll progress that we can tune frame by frame."),
];

// Re-seeking a video is expensive; skip updates smaller than one frame.
const SEEK_EPSILON: f64 = 1.0 / 60.0;

/// Samples the current scroll position and returns the hero frame plus the
/// progress through the whole page. Also scrubs the hero video.
fn sample_scroll(
    window: &Window,
    journey_ref: &NodeRef,
    video_ref: &NodeRef,
    timeline: &HeroTimeline,
) -> Option<(HeroFrame, f64)> {
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    let journey = journey_ref.cast::<Element>()?;
    let rect = journey.get_bounding_client_rect();
    let progress = section_progress(scroll_y, rect.top() + scroll_y, rect.height(), viewport_height);

    let video = video_ref.cast::<HtmlVideoElement>();
    let duration = video.as_ref().map(|v| v.duration()).unwrap_or(f64::NAN);
    let frame = timeline.frame(progress, duration);
    if let Some(video) = video {
        if (video.current_time() - frame.video_time).abs() > SEEK_EPSILON {
            video.set_current_time(frame.video_time);
        }
    }

    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    let page_progress = section_progress(scroll_y, 0.0, document_height, viewport_height);

    Some((frame, page_progress))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let timeline = HeroTimeline::default();
    let frame = use_state_eq(move || timeline.frame(0.0, f64::NAN));
    let page_progress = use_state_eq(|| 0.0_f64);
    let journey_ref = use_node_ref();
    let video_ref = use_node_ref();

    // Scroll to top only on initial mount
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                // Scrubbed, never played: keep it silent and inline on iOS
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    let _ = video.set_attribute("playsinline", "");
                }
                || ()
            },
            (),
        );
    }

    {
        let frame = frame.clone();
        let page_progress = page_progress.clone();
        let journey_ref = journey_ref.clone();
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = {
                        let window = window.clone();
                        move || {
                            if let Some((next, page)) = sample_scroll(&window, &journey_ref, &video_ref, &timeline) {
                                frame.set(next);
                                page_progress.set(page);
                            }
                        }
                    };
                    // Initial check
                    update();

                    let callback = Closure::<dyn Fn()>::new(update);
                    for event in ["scroll", "resize"] {
                        if window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("Could not listen for {} events", event);
                        }
                    }

                    Box::new(move || {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let hero = *frame;
    let page = *page_progress;
    let gather_scale = 0.9 + 0.1 * hero.gather;

    html! {
        <div class="landing-page">
            <div class="page-progress" style={format!("transform: scaleX({:.4});", page)}></div>

            <section class="hero-journey" ref={journey_ref}>
                <div class="hero-sticky">
                    <video
                        ref={video_ref}
                        class="hero-video"
                        src="/assets/hero.mp4"
                        preload="auto"
                    />
                    <div class="hero-text" style={format!("opacity: {:.3};", hero.hero_text_opacity)}>
                        <h1>{"Luminar Studio"}</h1>
                        <p class="hero-subtitle">{"Websites that unfold as you scroll."}</p>
                    </div>

                    <div class="services">
                        { for SERVICES.iter().zip(hero.services.iter()).map(|((title, blurb), service)| html! {
                            <div
                                class="service-card"
                                style={format!(
                                    "opacity: {:.3}; transform: translateY({:.1}px);",
                                    service.opacity, service.offset_y
                                )}
                            >
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }) }
                    </div>

                    <div
                        class="gather"
                        style={format!("opacity: {:.3}; transform: scale({:.4});", hero.gather, gather_scale)}
                    >
                        <h2>{"All of it, in one continuous take."}</h2>
                    </div>

                    <div class="whiteout" style={format!("opacity: {:.3};", hero.whiteout_opacity)}></div>
                </div>
            </section>

            { for PARALLAX_SECTIONS.iter().map(|(depth, title, copy)| html! {
                <section class="parallax-section">
                    <div
                        class="parallax-layer"
                        style={format!("transform: translateY({:.1}px);", parallax_offset(page, *depth) - depth / 2.0)}
                    ></div>
                    <div class="parallax-content">
                        <h2>{*title}</h2>
                        <p>{*copy}</p>
                    </div>
                </section>
            }) }

            <section id="contact" class="contact-section">
                <h2>{"Start a project"}</h2>
                <p>{"Tell us what you are making. We answer every inquiry within two working days."}</p>
                <ContactForm />
            </section>

            <footer class="footer-cta">
                <p>{"© Luminar Studio"}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        background: #050505;
                        color: #f2f2f2;
                    }
                    .page-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        background: linear-gradient(90deg, #7EB2FF, #fff);
                        transform-origin: left center;
                        z-index: 10;
                    }
                    .hero-journey {
                        position: relative;
                        height: 500vh;
                    }
                    .hero-sticky {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        z-index: 0;
                    }
                    .hero-text {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        z-index: 1;
                        will-change: opacity;
                    }
                    .hero-text h1 {
                        font-size: clamp(2.5rem, 8vw, 6rem);
                        margin: 0;
                    }
                    .services {
                        position: absolute;
                        inset: 0;
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 2rem;
                        padding: 12vh 10vw;
                        z-index: 2;
                    }
                    .service-card {
                        background: rgba(20, 20, 20, 0.7);
                        border: 1px solid rgba(126, 178, 255, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                        backdrop-filter: blur(10px);
                        will-change: opacity, transform;
                    }
                    .gather {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 3;
                        pointer-events: none;
                    }
                    .gather h2 {
                        font-size: clamp(2rem, 5vw, 4rem);
                        text-align: center;
                    }
                    .whiteout {
                        position: absolute;
                        inset: 0;
                        background: #fff;
                        z-index: 4;
                        pointer-events: none;
                    }
                    .parallax-section {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .parallax-layer {
                        position: absolute;
                        inset: -25% 0;
                        background: radial-gradient(circle at 30% 40%, rgba(126, 178, 255, 0.25), transparent 60%);
                        will-change: transform;
                    }
                    .parallax-content {
                        position: relative;
                        max-width: 720px;
                        padding: 2rem;
                        text-align: center;
                    }
                    .contact-section {
                        max-width: 640px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(126, 178, 255, 0.2);
                        border-radius: 8px;
                        color: #fff;
                        padding: 0.75rem;
                        font: inherit;
                    }
                    .field-error {
                        color: #ff6b6b;
                        margin: -0.5rem 0 0;
                        font-size: 0.9rem;
                    }
                    .success-message {
                        color: #7CFC9A;
                    }
                    .error-message {
                        color: #ff6b6b;
                    }
                    .hero-cta {
                        background: #7EB2FF;
                        color: #050505;
                        border: none;
                        border-radius: 999px;
                        padding: 0.9rem 2rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .hero-cta:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .footer-cta {
                        text-align: center;
                        padding: 3rem 1rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    @media (max-width: 768px) {
                        .services {
                            grid-template-columns: 1fr;
                            gap: 1rem;
                            padding: 10vh 6vw;
                        }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .service-card,
                        .parallax-layer {
                            transform: none !important;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
