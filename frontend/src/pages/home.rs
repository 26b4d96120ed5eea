use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::animation::reveal::{RevealAnimation, REVEAL_CSS};
use crate::components::animated::{AnimatedSection, ParallaxElement, StaggeredList, TypewriterText};
use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::scroll_progress::ScrollProgress;
use crate::config;

const SERVICES: [(&str, &str); 4] = [
    ("Individual Therapy", "One-on-one sessions for anxiety, stress and life transitions."),
    ("Trauma Recovery", "Evidence-based care for processing difficult experiences."),
    ("Burnout Support", "Rebuilding balance between achievement and well-being."),
    ("Telehealth", "Secure video sessions from wherever you feel safest."),
];

fn mailto_link() -> String {
    format!(
        "mailto:{}?subject={}",
        config::PRACTICE_EMAIL,
        urlencoding::encode("New client inquiry")
    )
}

fn tel_link() -> String {
    let digits: String = config::PRACTICE_PHONE
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[function_component(Home)]
pub fn home() -> Html {
    let year = Local::now().year();

    html! {
        <div class="home">
            <style>
                {REVEAL_CSS}
                {r#"
                .home { font-family: Georgia, serif; color: #2f3a36; }
                .section { padding: 6rem 1.5rem; max-width: 1100px; margin: 0 auto; }
                .hero { position: relative; min-height: 90vh; display: flex; align-items: center; overflow: hidden; }
                .hero-shape { position: absolute; border-radius: 40% 60% 55% 45%; opacity: 0.25; }
                .hero-shape.one { width: 12rem; height: 12rem; background: #9cc5b0; top: 10%; left: 5%; }
                .hero-shape.two { width: 16rem; height: 16rem; background: #e7c9a9; bottom: 5%; right: 8%; }
                .typewriter-caret { animation: blink 1s step-end infinite; }
                @keyframes blink { 50% { opacity: 0; } }
                .services { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                .service-card { background: #fff; border-radius: 1.5rem; padding: 1.5rem; box-shadow: 0 8px 24px rgba(47, 58, 54, 0.08); }
                .contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 3rem; }
                .contact-field { margin-bottom: 1.25rem; }
                .contact-field label { display: block; font-size: 0.9rem; margin-bottom: 0.4rem; }
                .contact-input { width: 100%; padding: 0.75rem 1rem; border: 1px solid #cfe3d8; border-radius: 1rem; }
                .contact-input.has-error { border-color: #e57373; }
                .contact-error { color: #c62828; font-style: italic; font-size: 0.85rem; margin-top: 0.4rem; }
                .contact-submit { width: 100%; padding: 1rem; border: none; border-radius: 1rem; background: #5f9c80; color: #fff; font-size: 1.05rem; cursor: pointer; }
                .contact-submit:disabled { opacity: 0.6; cursor: wait; }
                .contact-note { text-align: center; font-size: 0.85rem; font-style: italic; color: #6b7a74; }
                .contact-success { text-align: center; padding: 2rem; border-radius: 1.5rem; background: #eef7f1; }
                .scroll-progress-track { position: fixed; top: 0; left: 0; width: 100%; height: 4px; z-index: 50; background: rgba(156, 197, 176, 0.3); }
                .scroll-progress-bar { height: 100%; background: linear-gradient(90deg, #5f9c80, #e7c9a9); transition: width 150ms ease-out; }
                .back-to-top { position: fixed; bottom: 2rem; right: 2rem; z-index: 40; opacity: 0; transform: translateY(4rem); pointer-events: none; transition: all 500ms; }
                .back-to-top.shown { opacity: 1; transform: none; pointer-events: auto; }
                .back-to-top button { padding: 1rem; border: none; border-radius: 1rem; background: #5f9c80; color: #fff; cursor: pointer; }
                footer { text-align: center; padding: 2rem; color: #6b7a74; }
                "#}
            </style>

            <ScrollProgress />

            <section class="hero">
                <ParallaxElement speed={0.3} class="hero-shape one"><span /></ParallaxElement>
                <ParallaxElement speed={0.15} class="hero-shape two"><span /></ParallaxElement>
                <div class="section">
                    <AnimatedSection animation={RevealAnimation::FadeIn}>
                        <h1>{"A calm place to begin again"}</h1>
                    </AnimatedSection>
                    <p>
                        <TypewriterText text="Compassionate therapy for high-achieving adults." />
                    </p>
                </div>
            </section>

            <section class="section" id="about">
                <AnimatedSection animation={RevealAnimation::FadeInLeft}>
                    <h2>{"About"}</h2>
                    <p>{"Licensed clinical psychologist offering warm, evidence-based care."}</p>
                </AnimatedSection>
            </section>

            <section class="section" id="services">
                <AnimatedSection>
                    <h2>{"Services"}</h2>
                </AnimatedSection>
                <StaggeredList class="services" stagger_delay={150}>
                    { for SERVICES.iter().map(|(title, blurb)| html! {
                        <div class="service-card">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </StaggeredList>
            </section>

            <section class="section" id="office">
                <AnimatedSection animation={RevealAnimation::ScaleIn} delay={100}>
                    <h2>{"Our Office"}</h2>
                    <p>{"A quiet, light-filled space designed for comfort and privacy."}</p>
                </AnimatedSection>
            </section>

            <section class="section" id="contact">
                <AnimatedSection animation={RevealAnimation::SlideInUp}>
                    <h2>{"Begin Your Journey"}</h2>
                </AnimatedSection>
                <div class="contact-grid">
                    <AnimatedSection animation={RevealAnimation::FadeInLeft}>
                        <h3>{"Connect"}</h3>
                        <p><a href={tel_link()}>{config::PRACTICE_PHONE}</a></p>
                        <p><a href={mailto_link()}>{config::PRACTICE_EMAIL}</a></p>
                    </AnimatedSection>
                    <AnimatedSection animation={RevealAnimation::FadeInRight} delay={150}>
                        <ContactForm />
                    </AnimatedSection>
                </div>
            </section>

            <footer>{format!("© {} Sanctuary Therapy", year)}</footer>

            <BackToTop />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link(),
            "mailto:hello@sanctuarytherapy.com?subject=New%20client%20inquiry"
        );
    }

    #[test]
    fn tel_link_keeps_only_dialable_chars() {
        assert_eq!(tel_link(), "tel:5551234567");
    }
}
