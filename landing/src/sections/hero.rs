use leptos::prelude::*;

use crate::icons::IconArrowRight;

/// Full-viewport opening banner.
///
/// The entrance choreography (eyebrow, heading, call-to-action, each on
/// a fixed delay) is plain CSS animation keyed off mount; only the
/// scroll-indicator line loops forever.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img
                    src="https://picsum.photos/seed/vogue-hero/1920/1080"
                    alt="Malhas Irma"
                    referrerpolicy="no-referrer"
                />
                <div class="hero-shade"></div>
            </div>

            <div class="hero-content">
                <span class="hero-eyebrow">"Desde 1984"</span>
                <h2 class="hero-title">"Tradição encontra Tendência"</h2>
                <div class="hero-actions">
                    <a href="#collection" class="hero-cta">
                        <span>"Explorar a Coleção"</span>
                        <IconArrowRight class="hero-cta-arrow" />
                    </a>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <span class="hero-scroll-label">"Rolar"</span>
                <div class="scroll-line">
                    <div class="scroll-line-fill"></div>
                </div>
            </div>
        </section>
    }
}
